//! Product form: raw input, create/edit mode, and validation.

mod state;
mod validation;

pub use state::{FormMode, ProductForm};
pub use validation::{
    parse_number, parse_price, parse_stock, validate, FieldErrors, CATEGORY_REQUIRED,
    NAME_REQUIRED, PRICE_INVALID, PRICE_REQUIRED, STOCK_INVALID,
};
