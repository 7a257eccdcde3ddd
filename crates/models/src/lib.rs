pub mod errors;
pub mod db;
pub mod user;
pub mod host;
pub mod guest;
pub mod accommodation;
pub mod booking;
pub mod discount;

#[cfg(test)]
mod tests;
