use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult, Entity, ProductId};

/// An immutable sellable item: name + base price.
///
/// Products are minted by a store (see `Store::create_product`), which hands
/// out the [`ProductId`] every later lookup is keyed on. Equality is identity:
/// two products with the same name and price but different ids are different
/// products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    base_price: f64,
}

impl Product {
    /// Validate and build a product.
    ///
    /// The name must not be blank and the base price must be a finite number
    /// greater than zero.
    pub fn new(id: ProductId, name: impl Into<String>, base_price: f64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("product name cannot be empty"));
        }
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(DomainError::invalid_argument(format!(
                "base price must be greater than zero (got {base_price})"
            )));
        }
        Ok(Self {
            id,
            name,
            base_price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}
