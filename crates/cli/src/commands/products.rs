//! Catalog commands.
//!
//! # Usage
//!
//! ```bash
//! vitrine products list
//! vitrine products show 3
//! ```
//!
//! Inside a `vitrine run` script, an admin session may also use
//! `products create`, `products update` and `products delete`.

use clap::{Args, Subcommand};
use tracing::info;

use vitrine_core::ProductId;
use vitrine_storefront::Store;
use vitrine_storefront::forms::ProductForm;
use vitrine_storefront::models::Product;

use super::{CommandError, require_admin};

/// Read-only catalog commands.
#[derive(Debug, Subcommand)]
pub enum ProductQuery {
    /// List all products
    List,
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
}

/// Catalog commands available in scripts.
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List all products
    List,
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
    /// Create a product (admin)
    Create(ProductFields),
    /// Update a product (admin)
    Update {
        /// Product ID
        id: String,
        #[command(flatten)]
        edits: ProductEdits,
    },
    /// Delete a product (admin)
    Delete {
        /// Product ID
        id: String,
    },
}

/// Fields for a new product.
#[derive(Debug, Args)]
pub struct ProductFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: String,
    #[arg(long)]
    description: String,
    #[arg(long, default_value = "")]
    image: String,
    #[arg(long, default_value = "")]
    category: String,
    /// Mark the product as unavailable
    #[arg(long)]
    out_of_stock: bool,
}

/// Fields to change on an existing product; omitted ones keep their value.
#[derive(Debug, Args)]
pub struct ProductEdits {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    image: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    in_stock: Option<bool>,
}

impl From<ProductFields> for ProductForm {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name,
            price: fields.price,
            description: fields.description,
            image: fields.image,
            category: fields.category,
            in_stock: !fields.out_of_stock,
        }
    }
}

impl ProductEdits {
    fn apply(self, form: &mut ProductForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(image) = self.image {
            form.image = image;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(in_stock) = self.in_stock {
            form.in_stock = in_stock;
        }
    }
}

/// Run a read-only catalog command.
pub fn query(store: &Store, query: ProductQuery) -> Result<(), CommandError> {
    match query {
        ProductQuery::List => {
            list(store);
            Ok(())
        }
        ProductQuery::Show { id } => show(store, &id),
    }
}

/// Run a catalog script command.
pub fn execute(store: &mut Store, command: ProductCommand) -> Result<(), CommandError> {
    match command {
        ProductCommand::List => {
            list(store);
            Ok(())
        }
        ProductCommand::Show { id } => show(store, &id),
        ProductCommand::Create(fields) => create(store, fields.into()).map(|_| ()),
        ProductCommand::Update { id, edits } => update(store, &id, edits),
        ProductCommand::Delete { id } => delete(store, &id),
    }
}

/// Log every product, one per line.
pub fn list(store: &Store) {
    let products = store.catalog().list_products();
    info!("{} product(s)", products.len());
    for product in products {
        info!("  {}", summary(product));
    }
}

/// Log the details of one product.
pub fn show(store: &Store, id: &str) -> Result<(), CommandError> {
    let product = store
        .catalog()
        .get_product_by_id(&ProductId::new(id))
        .ok_or_else(|| not_found(id))?;

    info!("{}", product.name);
    info!("  id:          {}", product.id);
    info!("  price:       {}", product.price);
    info!("  category:    {}", product.category);
    info!("  available:   {}", availability(product));
    info!("  image:       {}", product.image);
    info!("  description: {}", product.description);
    Ok(())
}

/// Validate a form and create the product.
pub fn create(store: &mut Store, form: ProductForm) -> Result<Product, CommandError> {
    require_admin(store)?;
    let new = form.validate()?;
    let product = store.catalog_mut().create_product(new);
    info!("Created {}", summary(&product));
    Ok(product)
}

/// Prefill a form from the product, apply the edits, validate and update.
pub fn update(store: &mut Store, id: &str, edits: ProductEdits) -> Result<(), CommandError> {
    require_admin(store)?;
    let id = ProductId::new(id);
    let existing = store
        .catalog()
        .get_product_by_id(&id)
        .ok_or_else(|| not_found(id.as_str()))?;

    let mut form = ProductForm::from_product(existing);
    edits.apply(&mut form);
    let update = form.into_update(store.catalog().defaults())?;

    store.catalog_mut().update_product(&id, update);
    if let Some(product) = store.catalog().get_product_by_id(&id) {
        info!("Updated {}", summary(product));
    }
    Ok(())
}

/// Delete a product. Unknown IDs are ignored.
pub fn delete(store: &mut Store, id: &str) -> Result<(), CommandError> {
    require_admin(store)?;
    store.catalog_mut().delete_product(&ProductId::new(id));
    info!("Deleted product {id}");
    Ok(())
}

fn summary(product: &Product) -> String {
    format!(
        "[{}] {} - {} ({}, {})",
        product.id,
        product.name,
        product.price,
        product.category,
        availability(product)
    )
}

const fn availability(product: &Product) -> &'static str {
    if product.in_stock {
        "in stock"
    } else {
        "out of stock"
    }
}

fn not_found(id: &str) -> CommandError {
    CommandError::NotFound {
        kind: "Product",
        id: id.to_owned(),
    }
}
