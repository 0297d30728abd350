//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus the create/update DTOs and derived views built from it.

pub mod auth_group;
pub mod member;
pub mod menu;
