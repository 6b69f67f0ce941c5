pub mod config;
pub mod error;
pub mod quiz;
pub mod scoring;
pub mod server;
pub mod service;
pub mod store;
