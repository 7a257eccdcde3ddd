pub mod routes;
pub mod startup;
pub mod errors;
pub mod state;
pub mod extractors;
pub mod templates;

pub use startup::run;
