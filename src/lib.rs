pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod page;
pub mod services;
