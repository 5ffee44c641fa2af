//! Typed response shapes for the Homestead backend, one module per domain.
//!
//! Fields are non-optional unless the backend can genuinely omit them; a
//! missing required field fails deserialization and surfaces as an
//! `InvalidResponse` error rather than a partially-filled struct.

pub mod auth;
pub mod document;
pub mod finance;
pub mod party;
pub mod property;
pub mod role;
pub mod sales;
