//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthMember`] -- Extracts the authenticated member from a JWT Bearer token.
//! - [`auth::MemberMenus`] -- Adds the menu ids the member's authorization group grants.

pub mod auth;
