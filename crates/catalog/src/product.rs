use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Upper bound accepted for a price, in whole currency units.
const MAX_PRICE_UNITS: f64 = 1_000_000_000_000.0;

/// Non-negative price held in the smallest currency unit (cents).
///
/// JSON form is a decimal number (`58.00`), matching how catalogs are
/// authored; conversion rounds to the nearest cent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl ValueObject for Price {}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build a price from a decimal amount, rejecting NaN, infinities and
    /// negative values.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if amount > MAX_PRICE_UNITS {
            return Err(DomainError::validation("price is out of range"));
        }
        Ok(Self {
            cents: (amount * 100.0).round() as u64,
        })
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    /// Decimal amount, used for threshold comparison.
    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

/// Always two decimal places, no currency symbol.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}

/// Unvalidated product record, as authored in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Catalog product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: Price,
    stock: u32,
    description: String,
    image: Option<String>,
}

impl Product {
    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewProduct> for Product {
    type Error = DomainError;

    fn try_from(raw: NewProduct) -> Result<Self, Self::Error> {
        let id = ProductId::new(raw.id)?;

        if raw.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product #{id}: name cannot be empty"
            )));
        }

        let price = Price::from_decimal(raw.price).map_err(|e| {
            DomainError::validation(format!("product #{id}: {}", e.user_message()))
        })?;

        // An empty image string is treated the same as a missing one.
        let image = raw.image.filter(|s| !s.trim().is_empty());

        Ok(Self {
            id,
            name: raw.name,
            category: raw.category,
            price,
            stock: raw.stock,
            description: raw.description,
            image,
        })
    }
}
