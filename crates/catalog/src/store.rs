//! Catalog store: the product collection plus the minimum-price threshold.

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, ValueObject};

use crate::catalog::Catalog;
use crate::product::{Price, Product};

/// Message shown when filter input is rejected.
pub const INVALID_MIN_PRICE: &str = "Please enter a valid minimum price.";

/// Inclusive lower bound on price. Always finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MinPrice(f64);

impl ValueObject for MinPrice {}

impl MinPrice {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(INVALID_MIN_PRICE));
        }
        // Normalize -0.0 so it displays as "0".
        Ok(Self(value + 0.0))
    }

    /// Parse raw text from the filter input box.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a plain
    /// number is rejected.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::validation(INVALID_MIN_PRICE))?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `price >= threshold`; a price exactly at the threshold is admitted.
    pub fn admits(self, price: Price) -> bool {
        price.as_decimal() >= self.0
    }
}

/// Shortest form, e.g. `90`, `90.5`.
impl core::fmt::Display for MinPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Immutable catalog plus the single mutable filter threshold.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    min_price: Option<MinPrice>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            min_price: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn min_price(&self) -> Option<MinPrice> {
        self.min_price
    }

    /// Replace the threshold. On error the previous threshold is kept.
    pub fn set_min_price(&mut self, value: f64) -> DomainResult<()> {
        let min = MinPrice::new(value)?;
        self.min_price = Some(min);
        Ok(())
    }

    pub fn clear_min_price(&mut self) {
        self.min_price = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        CatalogStore::new(Catalog::seed().unwrap())
    }

    #[test]
    fn new_store_has_no_filter() {
        let s = store();
        assert_eq!(s.min_price(), None);
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn set_min_price_replaces_threshold() {
        let mut s = store();
        s.set_min_price(90.0).unwrap();
        s.set_min_price(50.0).unwrap();
        assert_eq!(s.min_price().map(MinPrice::value), Some(50.0));
    }

    #[test]
    fn invalid_threshold_keeps_previous_state() {
        let mut s = store();
        s.set_min_price(90.0).unwrap();

        for bad in [-5.0, f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            let err = s.set_min_price(bad).unwrap_err();
            assert_eq!(err, DomainError::validation(INVALID_MIN_PRICE));
        }
        assert_eq!(s.min_price().map(MinPrice::value), Some(90.0));
    }

    #[test]
    fn clear_always_resets() {
        let mut s = store();
        s.clear_min_price();
        assert_eq!(s.min_price(), None);
        s.set_min_price(1.0).unwrap();
        s.clear_min_price();
        assert_eq!(s.min_price(), None);
    }

    #[test]
    fn parse_accepts_plain_numbers() {
        assert_eq!(MinPrice::parse("90").unwrap().value(), 90.0);
        assert_eq!(MinPrice::parse(" 12.5 ").unwrap().value(), 12.5);
        assert_eq!(MinPrice::parse("0").unwrap().value(), 0.0);
        assert_eq!(MinPrice::parse("-0").unwrap().to_string(), "0");
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "   ", "abc", "-5", "12abc", "NaN", "inf", "1e400"] {
            assert!(MinPrice::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let min = MinPrice::new(58.0).unwrap();
        assert!(min.admits(Price::from_cents(5800)));
        assert!(!min.admits(Price::from_cents(5799)));
    }

    #[test]
    fn threshold_displays_shortest_form() {
        assert_eq!(MinPrice::new(1000.0).unwrap().to_string(), "1000");
        assert_eq!(MinPrice::new(90.5).unwrap().to_string(), "90.5");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whatever the threshold text shows parses back to the same threshold.
            #[test]
            fn display_parses_back(value in 0.0f64..1.0e9) {
                let min = MinPrice::new(value).unwrap();
                prop_assert_eq!(MinPrice::parse(&min.to_string()).unwrap(), min);
            }

            /// Property: negative input never changes the stored threshold.
            #[test]
            fn negative_input_never_mutates(start in 0.0f64..1000.0, bad in -1.0e9f64..-1.0e-9) {
                let mut s = store();
                s.set_min_price(start).unwrap();
                prop_assert!(s.set_min_price(bad).is_err());
                prop_assert_eq!(s.min_price().map(MinPrice::value), Some(start));
            }
        }
    }
}
