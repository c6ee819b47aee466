use crate::{Client, Result};

use larder_core::Backend;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tunables shared by the client, the recipe editor and the data table.
///
/// Deserializes from camelCase JSON; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Rows per page when a table paginates locally
    pub page_size: usize,

    /// Page size used when walking the inventory listing for ingredient options
    pub options_page_size: usize,

    /// Quantity committed when a quantity input loses focus while blank or
    /// invalid. `None` leaves the input blank.
    pub blank_quantity_default: Option<Decimal>,

    /// Maximum length of a recipe description, in characters
    pub description_max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: 10,
            options_page_size: 100,
            blank_quantity_default: Some(Decimal::ONE),
            description_max_len: 100,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json)?;

        if config.page_size == 0 || config.options_page_size == 0 {
            larder_core::bail!("page sizes must be at least 1");
        }

        Ok(config)
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn from_config(config: Config) -> Builder {
        Builder { config }
    }

    /// Set the page size of locally paginated tables
    pub fn page_size(&mut self, page_size: usize) -> &mut Self {
        self.config.page_size = page_size.max(1);
        self
    }

    /// Set the page size used to fetch ingredient options
    pub fn options_page_size(&mut self, page_size: usize) -> &mut Self {
        self.config.options_page_size = page_size.max(1);
        self
    }

    pub fn blank_quantity_default(&mut self, quantity: Option<Decimal>) -> &mut Self {
        self.config.blank_quantity_default = quantity;
        self
    }

    pub fn description_max_len(&mut self, max: usize) -> &mut Self {
        self.config.description_max_len = max;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn build(&self, backend: impl Backend) -> Client {
        Client::with_config(backend, self.config.clone())
    }
}
