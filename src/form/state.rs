//! Raw product form and its create/edit mode.

use super::validation::{self, parse_price, parse_stock, FieldErrors};
use crate::types::{format_number, FormField, Product, ProductInput};
use serde::Serialize;

/// Form contents exactly as typed.
///
/// Numbers stay text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub description: String,
}

impl ProductForm {
    /// A form pre-filled from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: format_number(product.price),
            category: product.category.clone(),
            stock: format_number(product.stock),
            description: product.description.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
            FormField::Stock => &self.stock,
            FormField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Category => self.category = value,
            FormField::Stock => self.stock = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validation::validate(self)
    }

    /// Validate and build the store payload.
    ///
    /// Text is trimmed and a blank stock becomes zero.
    pub fn to_input(&self) -> Result<ProductInput, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(price), Some(stock)) = (parse_price(&self.price), parse_stock(&self.stock)) else {
            return Err(errors);
        };

        Ok(ProductInput {
            name: self.name.trim().to_string(),
            price,
            category: self.category.trim().to_string(),
            stock,
            description: self.description.trim().to_string(),
        })
    }
}

/// Whether the form creates a new product or edits an existing one.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "mode", content = "target", rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Create,
    /// Snapshot of the product taken when editing started.
    Edit(Product),
}

impl FormMode {
    pub fn edit_target(&self) -> Option<&Product> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(product) => Some(product),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn caption(&self) -> Option<String> {
        self.edit_target()
            .map(|product| format!("Currently editing: {}", product.name))
    }
}
