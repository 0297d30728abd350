//! Bearer-token handling.
//!
//! Issuing tokens (login, refresh) belongs to the identity service; this
//! crate only validates them and can mint tokens for tests and tooling.

pub mod jwt;
