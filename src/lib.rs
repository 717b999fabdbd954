pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod routing;
