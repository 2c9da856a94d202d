//! # Vendra (Retailer Accounts & Credential Lifecycle)
//!
//! `vendra` is the account backend for a retailer storefront dashboard. It
//! owns the credential lifecycle: registration with a server-generated
//! password, password login with bearer-token issuance, authenticated profile
//! updates, and the two recovery paths (forgot-password reset, authenticated
//! password change).
//!
//! ## Credential model
//!
//! Passwords are generated server-side (128-bit hex tokens), delivered by
//! email, and stored only as bcrypt hashes. The plaintext exists for the
//! lifetime of a single request and is never persisted, logged, or echoed in
//! a response.
//!
//! ## Delivery-before-persistence
//!
//! Registration sends the account-details email **before** inserting the row:
//! an account whose credential was never delivered must not exist, because the
//! plaintext cannot be recovered afterwards. Password reset keeps the inverse
//! order (persist, then send); the asymmetry is deliberate-as-observed and
//! documented in `DESIGN.md` rather than silently changed.

pub mod api;
pub mod auth;
pub mod cli;
pub mod email;
pub mod flows;
pub mod retailer;
pub mod uploads;
