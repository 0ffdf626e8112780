//! Catalog registry.
//!
//! A plain CRUD store over the product collection.

use tracing::{debug, info, instrument};

use vitrine_core::ProductId;

use crate::models::{NewProduct, Product, ProductDefaults, ProductUpdate};
use crate::seed::{self, SeedError};

/// In-memory product registry.
///
/// Performs no validation beyond what the types enforce; form checks belong
/// to the calling surface (see [`crate::forms`]).
#[derive(Debug, Default)]
pub struct CatalogRegistry {
    products: Vec<Product>,
    defaults: ProductDefaults,
}

impl CatalogRegistry {
    /// Create an empty registry with the given creation defaults.
    #[must_use]
    pub const fn new(defaults: ProductDefaults) -> Self {
        Self {
            products: Vec::new(),
            defaults,
        }
    }

    /// Create a registry from a seed collection.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::DuplicateId` if two seed products share an ID.
    pub fn from_seed(products: Vec<Product>, defaults: ProductDefaults) -> Result<Self, SeedError> {
        seed::ensure_unique_ids(&products)?;
        Ok(Self { products, defaults })
    }

    /// Defaults applied to omitted creation fields.
    #[must_use]
    pub const fn defaults(&self) -> &ProductDefaults {
        &self.defaults
    }

    /// Create a product with a fresh ID and append it.
    #[instrument(skip_all, fields(name = %new.name))]
    pub fn create_product(&mut self, new: NewProduct) -> Product {
        let product = Product {
            id: self.fresh_id(),
            name: new.name,
            price: new.price,
            description: new.description,
            image: new
                .image
                .unwrap_or_else(|| self.defaults.placeholder_image.clone()),
            category: new
                .category
                .unwrap_or_else(|| self.defaults.category.clone()),
            in_stock: new.in_stock,
        };

        info!(product_id = %product.id, "Product created");
        self.products.push(product.clone());
        product
    }

    /// Merge the supplied fields onto the product with this ID. Unknown IDs
    /// are ignored.
    #[instrument(skip(self, update))]
    pub fn update_product(&mut self, id: &ProductId, update: ProductUpdate) {
        match self.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.merge(update);
                debug!("Product updated");
            }
            None => debug!("Update ignored, product not found"),
        }
    }

    /// Remove the product with this ID. Unknown IDs are ignored, so deleting
    /// twice is the same as deleting once.
    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: &ProductId) {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);

        if self.products.len() < before {
            info!("Product deleted");
        } else {
            debug!("Delete ignored, product not found");
        }
    }

    /// Point lookup. Absence is a normal outcome.
    #[must_use]
    pub fn get_product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in insertion order.
    #[must_use]
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    fn fresh_id(&self) -> ProductId {
        loop {
            let id = ProductId::generate();
            if self.get_product_by_id(&id).is_none() {
                return id;
            }
        }
    }
}
