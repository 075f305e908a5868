//! Main Catalog struct tying all components together.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::form::{FieldErrors, FormMode, ProductForm};
use crate::query::{QueryPage, QueryState};
use crate::search::SearchController;
use crate::stats::{CatalogStats, StockLevel};
use crate::store::ProductStore;
use crate::types::{CategoryFilter, FormField, Product, ProductId, Theme, ViewMode};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, warn};

/// Result of submitting the product form.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was stored.
    Rejected(FieldErrors),
    Created(Product),
    Updated(Product),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }
}

/// A product as listed, with its stock badge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductRow {
    pub product: Product,
    pub stock_level: StockLevel,
    pub stock_label: String,
}

/// Everything a presentation surface needs to render one frame.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogView {
    pub rows: Vec<ProductRow>,
    pub page: QueryPage,
    pub results_info: String,
    pub stats: CatalogStats,
    pub inventory_value_label: String,
    pub categories: Vec<String>,
    pub search_text: String,
    pub query: QueryState,
    pub view_mode: ViewMode,
    pub theme: Theme,
    pub form: ProductForm,
    pub form_errors: FieldErrors,
    pub form_title: &'static str,
    pub form_caption: Option<String>,
    pub edit_target: Option<Product>,
}

/// The catalog controller.
///
/// Owns the product store plus all transient UI state, receives user
/// intents, and recomputes derived values on demand. Derived values (the
/// current page, stats, categories) are never cached, so they always reflect
/// the latest mutation.
pub struct Catalog {
    config: CatalogConfig,
    store: ProductStore,
    query: QueryState,
    search: SearchController,
    form: ProductForm,
    form_errors: FieldErrors,
    mode: FormMode,
    view_mode: ViewMode,
    theme: Theme,
}

impl Catalog {
    /// Create a catalog seeded from the configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Caller guarantees `config.validate()` passes.
    fn from_valid_config(config: CatalogConfig) -> Self {
        let store = ProductStore::with_products(config.seed.clone());
        let search = SearchController::new(config.search_debounce);

        debug!(
            products = store.len(),
            page_size = config.page_size,
            "catalog initialized"
        );

        Self {
            config,
            store,
            query: QueryState::default(),
            search,
            form: ProductForm::default(),
            form_errors: FieldErrors::new(),
            mode: FormMode::Create,
            view_mode: ViewMode::default(),
            theme: Theme::default(),
        }
    }

    // --- Search & Query Intents ---

    /// Raw search box input. Takes effect after the debounce delay.
    pub fn on_search_text_change(&mut self, text: impl Into<String>, now: Instant) {
        self.search.on_input(text, now);
    }

    /// Advance the debounce timer. Returns true if a search query settled.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(query) = self.search.poll(now) else {
            return false;
        };

        debug!(search = %query, "search settled");
        self.query.set_search(query);
        true
    }

    /// When the pending search input settles, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    pub fn on_category_change(&mut self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        debug!(category = %category, "category changed");
        self.query.set_category(category);
    }

    /// Go to a page. Returns false (and changes nothing) when the page is
    /// out of range or already current.
    pub fn on_page_change(&mut self, page: u64) -> bool {
        if !self.page().accepts_page(page) {
            debug!(page, "ignoring page change");
            return false;
        }

        self.query.set_page(page);
        true
    }

    // --- Presentation Intents ---

    /// Returns false if the mode was already active.
    pub fn on_view_mode_change(&mut self, mode: ViewMode) -> bool {
        if mode == self.view_mode {
            return false;
        }
        self.view_mode = mode;
        true
    }

    pub fn on_toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // --- Form Intents ---

    /// Switch the form to create mode with empty fields.
    pub fn on_start_add(&mut self) {
        self.mode = FormMode::Create;
        self.reset_form();
    }

    /// Switch the form to edit mode, pre-filled from the product.
    pub fn on_start_edit(&mut self, id: ProductId) -> Result<()> {
        let product = self
            .store
            .get(id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))?;

        debug!(id = %id, "editing product");
        self.form = ProductForm::from_product(&product);
        self.form_errors = FieldErrors::new();
        self.mode = FormMode::Edit(product);
        Ok(())
    }

    pub fn on_form_field_change(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Field change addressed by input name. Unknown names are ignored.
    pub fn on_form_input(&mut self, name: &str, value: impl Into<String>) -> bool {
        match FormField::from_name(name) {
            Some(field) => {
                self.form.set_field(field, value);
                true
            }
            None => {
                warn!(name, "ignoring change to unknown form field");
                false
            }
        }
    }

    /// Validate the form and, if valid, create or update the product.
    ///
    /// Validation failures are returned as [`SubmitOutcome::Rejected`] and
    /// kept for display. An `Err` means the edit target vanished from the
    /// store or no product ids are left; the form is kept in both cases.
    pub fn on_form_submit(&mut self) -> Result<SubmitOutcome> {
        let input = match self.form.to_input() {
            Ok(input) => input,
            Err(errors) => {
                debug!(errors = errors.len(), "form rejected");
                self.form_errors = errors.clone();
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        let outcome = match &self.mode {
            FormMode::Edit(target) => {
                SubmitOutcome::Updated(self.store.update(target.id, input)?)
            }
            FormMode::Create => SubmitOutcome::Created(self.store.create(input)?),
        };

        self.mode = FormMode::Create;
        self.reset_form();

        let total_pages = self.page().total_pages;
        self.query.clamp_page(total_pages);

        Ok(outcome)
    }

    // --- Derived Views ---

    /// The current page of results.
    pub fn page(&self) -> QueryPage {
        self.query.run(self.store.products(), self.config.page_size)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(self.store.products(), self.config.low_stock_threshold)
    }

    /// Categories offered by the category selector.
    pub fn categories(&self) -> Vec<String> {
        self.store.categories()
    }

    pub fn stock_level(&self, product: &Product) -> StockLevel {
        StockLevel::of(product.stock, self.config.low_stock_threshold)
    }

    /// Build a complete render snapshot.
    pub fn snapshot(&self) -> CatalogView {
        let page = self.page();
        let stats = self.stats();

        let rows = page
            .items
            .iter()
            .map(|product| {
                let stock_level = self.stock_level(product);
                ProductRow {
                    product: product.clone(),
                    stock_level,
                    stock_label: stock_level.to_string(),
                }
            })
            .collect();

        CatalogView {
            rows,
            results_info: page.results_info(),
            page,
            inventory_value_label: stats.formatted_inventory_value(),
            stats,
            categories: self.categories(),
            search_text: self.search.raw_text().to_string(),
            query: self.query.clone(),
            view_mode: self.view_mode,
            theme: self.theme,
            form: self.form.clone(),
            form_errors: self.form_errors.clone(),
            form_title: self.mode.title(),
            form_caption: self.mode.caption(),
            edit_target: self.mode.edit_target().cloned(),
        }
    }

    // --- Accessors ---

    pub fn products(&self) -> &[Product] {
        self.store.products()
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn search_text(&self) -> &str {
        self.search.raw_text()
    }

    pub fn is_search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_errors(&self) -> &FieldErrors {
        &self.form_errors
    }

    pub fn form_mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn edit_target(&self) -> Option<&Product> {
        self.mode.edit_target()
    }

    pub fn form_title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn form_caption(&self) -> Option<String> {
        self.mode.caption()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    // --- Internal ---

    fn reset_form(&mut self) {
        self.form = ProductForm::default();
        self.form_errors = FieldErrors::new();
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_valid_config(CatalogConfig::default())
    }
}
