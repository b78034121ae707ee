//! Operational tooling for the powerloom application: admin account seeding,
//! MongoDB connectivity probing, and the combined HTTP + websocket server.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod redact;
pub mod seed;
pub mod state;
pub mod ws;

pub use error::OpsError;
