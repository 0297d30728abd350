//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod auth_group_repo;
pub mod member_repo;
pub mod menu_repo;

pub use auth_group_repo::AuthGroupRepo;
pub use member_repo::MemberRepo;
pub use menu_repo::MenuRepo;
