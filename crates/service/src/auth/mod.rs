//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login and session-user resolution live here, independent of the web framework.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
