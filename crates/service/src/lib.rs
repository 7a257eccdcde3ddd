//! Service layer on top of `models`.
//! - `auth`: registration, login and session-user resolution
//! - `session`: server-side session store
//! - `reports`: the fixed reporting queries

pub mod errors;
pub mod auth;
pub mod session;
pub mod reports;
#[cfg(test)]
pub mod test_support;
