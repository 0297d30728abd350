//! Menu-authorization services.
//!
//! Data flows from the permission resolver to the consumers of its id-set:
//!
//! ```text
//! resolve_permitted_ids ──> MenuIdSet ──┬─> tree::build_tree, build_active_tree
//!                                       ├─> pager::list_menus, list_menus_by_creation
//!                                       └─> catalog::list_shortcuts, route_map
//! ```
//!
//! Every function reads through a [`crate::store::MenuStore`]; nothing is
//! cached between calls and multi-step reads are not wrapped in a
//! transaction.

pub mod active;
pub mod admin;
pub mod catalog;
pub mod pager;
pub mod resolver;
pub mod tree;

#[cfg(test)]
pub(crate) mod fixtures;
