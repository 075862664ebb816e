//! Schema types for vendor dependency descriptors
//!
//! This module defines the shape a descriptor must have before any artifact is fetched.
mod node;
mod vendordep;

pub use node::{Field, SchemaNode, value_kind};
pub use vendordep::VENDORDEP_SCHEMA;
