//! Endpoint groups, one module per backend domain. Each method is a thin
//! composition of path + query + body through [`crate::client::ApiClient`];
//! all transport, auth, and shape concerns live in the executor.

pub mod auth;
pub mod documents;
pub mod finance;
pub mod parties;
pub mod properties;
pub mod roles;
pub mod sales;
