//! DEV URN HTTP API library.
//!
//! This crate primarily ships a `devurn-api` binary, but we expose a small
//! library surface to enable integration testing and reuse.

pub mod api;
pub mod config;
pub mod state;
