pub mod config;
pub mod core_types;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod runner;
pub mod scorer;
// cmd and reports belong to the binary (see main.rs).

pub use error::{KeyLoadError, KlResult};
