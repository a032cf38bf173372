//! Credential hashing and admin session tokens.

mod password;
mod token;

pub use password::{hash_password, reject_unknown_account, verify_password};
pub use token::{AdminClaims, TokenKeys};
