//! Credential handling.
//!
//! Passwords are kept out of [`ConnectionConfig`](crate::adapters::ConnectionConfig)
//! and carried in [`Credentials`], which clears its memory on drop.

mod credentials;

pub use credentials::Credentials;
