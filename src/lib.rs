pub mod config;
pub mod message;
pub mod routes;
pub mod server;
pub mod services;
