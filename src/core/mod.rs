//! Core translation engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod history;
pub mod languages;
pub mod models;

#[cfg(test)]
pub(crate) mod mock_endpoint;
