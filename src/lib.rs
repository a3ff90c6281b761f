pub mod api;
pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod factory;
pub mod middleware;
pub mod router;
pub mod telemetry;
