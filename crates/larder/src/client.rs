use crate::{Builder, Config, Result};

use larder_core::{
    backend::operation::{
        CreateIngredientLink, CreateInventoryHeader, DeleteIngredientLink, FetchInventoryItem,
        FetchInventoryItems, UpdateIngredientLink, UpdateInventoryHeader,
    },
    backend::{Operation, Response},
    model::{
        IngredientLinkBody, IngredientLinkUpdate, IngredientOption, InventoryDetail,
        InventoryHeaderBody, InventoryId, ItemsPage, LinkId,
    },
    Backend,
};
use log::{debug, warn};
use std::sync::Arc;

/// Typed handle over a [`Backend`].
///
/// Cloning is cheap; all clones share the backend and configuration.
#[derive(Debug, Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
    config: Arc<Config>,
}

impl Client {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new(backend: impl Backend) -> Client {
        Client::with_config(backend, Config::default())
    }

    pub fn with_config(backend: impl Backend, config: Config) -> Client {
        Client {
            backend: Arc::new(backend),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one operation, logging it and tagging failures with its name
    pub async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        let name = op.name();
        debug!("exec {name}; op={op:?}");

        match self.backend.exec(op).await {
            Ok(response) => {
                debug!("exec {name} ok; response={}", response.name());
                Ok(response)
            }
            Err(err) => {
                warn!("exec {name} failed; err={err}");
                Err(err.context(larder_core::err!("{name}")))
            }
        }
    }

    pub async fn fetch_all_inventory_items(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<ItemsPage> {
        self.exec(FetchInventoryItems { page, page_size })
            .await?
            .into_items("FetchInventoryItems")
    }

    pub async fn fetch_inventory_item(&self, id: InventoryId) -> Result<InventoryDetail> {
        self.exec(FetchInventoryItem { id })
            .await?
            .into_item("FetchInventoryItem")
    }

    pub async fn create_inventory_header(&self, body: InventoryHeaderBody) -> Result<InventoryId> {
        self.exec(CreateInventoryHeader { body })
            .await?
            .into_created_inventory("CreateInventoryHeader")
    }

    pub async fn update_inventory_header(
        &self,
        id: InventoryId,
        body: InventoryHeaderBody,
    ) -> Result<()> {
        self.exec(UpdateInventoryHeader { id, body })
            .await?
            .into_done("UpdateInventoryHeader")
    }

    pub async fn create_ingredient_link(&self, body: IngredientLinkBody) -> Result<LinkId> {
        self.exec(CreateIngredientLink { body })
            .await?
            .into_created_link("CreateIngredientLink")
    }

    pub async fn update_ingredient_link(
        &self,
        id: LinkId,
        body: IngredientLinkUpdate,
    ) -> Result<()> {
        self.exec(UpdateIngredientLink { id, body })
            .await?
            .into_done("UpdateIngredientLink")
    }

    pub async fn delete_ingredient_link(&self, id: LinkId) -> Result<()> {
        self.exec(DeleteIngredientLink { id })
            .await?
            .into_done("DeleteIngredientLink")
    }

    /// Walks every page of the inventory listing and decodes each item into an
    /// [`IngredientOption`].
    ///
    /// `exclude` drops one item, typically the recipe being edited so it cannot
    /// list itself as an ingredient. Items that fail to decode are skipped.
    pub async fn fetch_ingredient_options(
        &self,
        exclude: Option<InventoryId>,
    ) -> Result<Vec<IngredientOption>> {
        let page_size = self.config.options_page_size;
        let mut options = vec![];
        let mut page = 1;

        loop {
            let items = self.fetch_all_inventory_items(page, page_size).await?;

            for item in items.items.iter().filter(|item| Some(item.id) != exclude) {
                match IngredientOption::try_from(item) {
                    Ok(option) => options.push(option),
                    Err(err) => warn!("skipping ingredient option; err={err}"),
                }
            }

            if !items.has_next() || items.items.is_empty() {
                break;
            }
            page += 1;
        }

        Ok(options)
    }
}
