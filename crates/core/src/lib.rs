//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SessionId, TraceBlockId};
pub use value_object::ValueObject;
