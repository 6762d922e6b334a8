//! Recipe Book Core
//!
//! Layered architecture:
//! - domain: ingredient parsing, unit scaling and the state models
//! - ports: async seams for the recipe API and key-value storage
//! - source: HTTP implementation of the recipe API port
//! - controller: intent dispatch over the single application state

pub mod config;
pub mod controller;
pub mod domain;
pub mod ports;
pub mod source;

pub use config::CoreConfig;
pub use controller::{AppState, Controller, Intent, Notice, Region, RenderCommand, View};
pub use ports::{KeyValueStore, MemoryStore, RecipeSource};
pub use source::ForkifyClient;
