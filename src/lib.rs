pub mod analytics;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod fooddata;
pub mod goals;
pub mod intake;
pub mod measurements;
pub mod nutrients;
pub mod profile;
pub mod state;
