//! Form validation for the management surfaces.
//!
//! The registries accept any well-typed input. These helpers hold the checks
//! a calling surface runs on raw user input before it asks a registry to
//! create or update an entity.

use thiserror::Error;

use vitrine_core::{Credential, Price, PriceError, Role};

use crate::models::{
    Account, AccountUpdate, NewAccount, NewProduct, Product, ProductDefaults, ProductUpdate,
};

/// Errors produced while validating a form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left blank.
    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    /// The price is not a number.
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// The price parsed but is zero.
    #[error("price must be greater than zero")]
    NonPositivePrice,
}

/// Raw product form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            description: String::new(),
            image: String::new(),
            category: String::new(),
            in_stock: true,
        }
    }
}

impl ProductForm {
    /// Prefill a form from an existing product for editing.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.amount().to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            in_stock: product.in_stock,
        }
    }

    /// Validate for creation. Blank image and category are left to the
    /// registry defaults.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingField` when name, price or description is
    /// blank, and a price error when the price is not a positive number.
    pub fn validate(&self) -> Result<NewProduct, FormError> {
        let price = self.checked_price()?;

        Ok(NewProduct {
            name: self.name.clone(),
            price,
            description: self.description.clone(),
            image: non_blank(&self.image),
            category: non_blank(&self.category),
            in_stock: self.in_stock,
        })
    }

    /// Validate for editing. Every field is submitted; blank image and
    /// category are replaced with `defaults`.
    ///
    /// # Errors
    ///
    /// Same as [`ProductForm::validate`].
    pub fn into_update(&self, defaults: &ProductDefaults) -> Result<ProductUpdate, FormError> {
        let price = self.checked_price()?;

        Ok(ProductUpdate {
            name: Some(self.name.clone()),
            price: Some(price),
            description: Some(self.description.clone()),
            image: Some(
                non_blank(&self.image).unwrap_or_else(|| defaults.placeholder_image.clone()),
            ),
            category: Some(non_blank(&self.category).unwrap_or_else(|| defaults.category.clone())),
            in_stock: Some(self.in_stock),
        })
    }

    fn checked_price(&self) -> Result<Price, FormError> {
        require("name", &self.name)?;
        require("price", &self.price)?;
        require("description", &self.description)?;

        let price = Price::parse(&self.price)?;
        if !price.is_positive() {
            return Err(FormError::NonPositivePrice);
        }
        Ok(price)
    }
}

/// Raw account form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub secret: String,
    pub role: Role,
    pub active: bool,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            secret: String::new(),
            role: Role::User,
            active: true,
        }
    }
}

impl AccountForm {
    /// Prefill a form from an existing account for editing.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            secret: account.secret.expose().to_owned(),
            role: account.role,
            active: account.active,
        }
    }

    /// Validate for creation.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingField` when name, email or secret is blank.
    pub fn validate(&self) -> Result<NewAccount, FormError> {
        self.check_required()?;

        Ok(NewAccount {
            name: self.name.clone(),
            email: self.email.clone(),
            secret: Credential::new(self.secret.clone()),
            role: self.role,
            active: self.active,
        })
    }

    /// Validate for editing. Every field is submitted.
    ///
    /// # Errors
    ///
    /// Same as [`AccountForm::validate`].
    pub fn into_update(&self) -> Result<AccountUpdate, FormError> {
        let new = self.validate()?;

        Ok(AccountUpdate {
            name: Some(new.name),
            email: Some(new.email),
            secret: Some(new.secret),
            role: Some(new.role),
            active: Some(new.active),
        })
    }

    fn check_required(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("secret", &self.secret)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
