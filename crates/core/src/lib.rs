//! `marketplace-core`: domain foundation building blocks.
//!
//! Identifiers, the domain error model and the entity/value-object markers
//! shared by every marketplace crate. No IO, no logging setup.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, ProductId, StoreId};
pub use value_object::ValueObject;
