//! Credential adapters

pub mod static_authenticator;

pub use static_authenticator::{StaticAccount, StaticAuthenticator};
