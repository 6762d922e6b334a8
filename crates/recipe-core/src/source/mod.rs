//! Recipe sources
//!
//! Implementations of the [`RecipeSource`](crate::ports::RecipeSource) port.

mod forkify;

pub use forkify::ForkifyClient;
