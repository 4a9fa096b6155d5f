pub mod app;
pub mod components;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logging;
pub mod theme;
