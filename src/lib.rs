pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod sync;
pub mod utils;
