//! Configuration surface and error taxonomy for the retrieval engine

mod config;
mod error;

pub use config::{BlendWeights, RetrievalConfig};
pub use error::{Error, Result};
