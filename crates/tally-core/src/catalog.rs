//! # Product Catalog
//!
//! The products the page offers for sale. The widget never edits these
//! records; it looks them up by the name typed into the search box.

use std::collections::HashSet;

use crate::error::{CatalogError, ValidationError};
use crate::types::{ProductId, ProductRef};
use crate::validation::{validate_price, validate_product_name};

/// Read-only collection of product records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductRef>,
}

impl Catalog {
    /// Builds a catalog, rejecting the reserved id 0, duplicate ids,
    /// blank names and unusable prices.
    pub fn new(products: Vec<ProductRef>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if product.id.is_none() {
                return Err(ValidationError::MustBePositive {
                    field: "product id".to_string(),
                }
                .into());
            }
            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
            validate_product_name(&product.name)?;
            validate_price("price", product.price)?;
            validate_price("secondary price", product.secondary_price)?;
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<ProductRef> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// Finds the active product whose display name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&ProductRef> {
        self.products
            .iter()
            .find(|p| p.is_active && p.name == name)
    }

    pub fn get(&self, id: ProductId) -> Option<&ProductRef> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRef> {
        self.products.iter()
    }

    /// Products that can currently be selected.
    pub fn active(&self) -> impl Iterator<Item = &ProductRef> {
        self.products.iter().filter(|p| p.is_active)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {"id": 1, "name": "Rice 1kg", "price": 1.2, "secondaryPrice": 15600,
         "availableQuantity": 40, "retailPercent": 15, "wholesalePercent": 8},
        {"id": 2, "name": "Tea 500g", "price": 3.0, "secondaryPrice": 39000,
         "availableQuantity": 0, "isActive": false}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.active().count(), 1);
        assert_eq!(
            catalog.get(ProductId::new(1)).map(|p| p.name.as_str()),
            Some("Rice 1kg")
        );
    }

    #[test]
    fn test_find_by_name_is_exact_and_skips_inactive() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert!(catalog.find_by_name("Rice 1kg").is_some());
        assert!(catalog.find_by_name("Rice").is_none());
        assert!(catalog.find_by_name("rice 1kg").is_none());
        assert!(catalog.find_by_name("Tea 500g").is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1, "secondaryPrice": 1, "availableQuantity": 1},
            {"id": 1, "name": "B", "price": 1, "secondaryPrice": 1, "availableQuantity": 1}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_rejects_sentinel_id_and_bad_prices() {
        let zero_id = r#"[{"id": 0, "name": "A", "price": 1, "secondaryPrice": 1, "availableQuantity": 1}]"#;
        assert!(Catalog::from_json(zero_id).is_err());

        let negative = r#"[{"id": 4, "name": "A", "price": -1, "secondaryPrice": 1, "availableQuantity": 1}]"#;
        assert!(Catalog::from_json(negative).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
