//! Domain logic for the back-office menu administration.
//!
//! This crate has no I/O. It holds the identifier types, the error taxonomy,
//! the permitted-id set, and the pure helpers (validation, pagination,
//! search normalisation, hierarchy checks) shared by the storage and HTTP
//! layers.

pub mod error;
pub mod hierarchy;
pub mod menu;
pub mod menu_ids;
pub mod pagination;
pub mod types;
