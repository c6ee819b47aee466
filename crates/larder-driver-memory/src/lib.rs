//! In-memory stand-in for the inventory REST API.
//!
//! Ids are assigned sequentially starting at 1 and listing order is id order.
//! Read responses render costs as currency strings, the way the real API
//! does.

use larder_core::{
    async_trait,
    backend::{operation, Operation, Response},
    codec,
    model::{
        IngredientLink, IngredientSummary, InventoryDetail, InventoryHeaderBody, InventoryId,
        InventoryItem, InventoryKind, ItemsPage, LinkId, MeasurementUnit,
    },
    Backend, Error, Result,
};
use log::trace;
use rust_decimal::Decimal;

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    items: BTreeMap<InventoryId, StoredItem>,
    links: BTreeMap<LinkId, StoredLink>,
    next_item: i64,
    next_link: i64,
}

#[derive(Debug, Clone)]
struct StoredItem {
    name: String,
    description: String,
    kind: InventoryKind,
    measurement_unit: MeasurementUnit,
    cost: Decimal,
}

/// One composition row as the backend persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLink {
    pub inventory_id: InventoryId,
    pub ingredient_id: InventoryId,
    pub quantity: Decimal,
    pub cost: Decimal,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    /// Seeds an inventory item and returns its id.
    pub fn insert_item(
        &self,
        name: &str,
        kind: InventoryKind,
        measurement_unit: MeasurementUnit,
        cost: Decimal,
    ) -> InventoryId {
        self.lock().insert_item(StoredItem {
            name: name.to_string(),
            description: String::new(),
            kind,
            measurement_unit,
            cost,
        })
    }

    /// Seeds a composition row and returns its id.
    pub fn insert_link(&self, link: StoredLink) -> LinkId {
        self.lock().insert_link(link)
    }

    /// Composition rows of one inventory item, in id order.
    pub fn links_of(&self, inventory_id: InventoryId) -> Vec<(LinkId, StoredLink)> {
        self.lock()
            .links
            .iter()
            .filter(|(_, link)| link.inventory_id == inventory_id)
            .map(|(id, link)| (*id, link.clone()))
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    /// Current header of one inventory item, as the detail endpoint renders it.
    pub fn detail(&self, id: InventoryId) -> Result<InventoryDetail> {
        self.lock().detail(id)
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // Store updates are single assignments, so a poisoned store is still consistent
        self.store.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn exec(&self, op: Operation) -> Result<Response> {
        trace!("memory backend exec; op={}", op.name());
        let mut store = self.lock();

        match op {
            Operation::FetchInventoryItems(op) => store.items_page(op).map(Response::Items),
            Operation::FetchInventoryItem(op) => {
                store.detail(op.id).map(|detail| Response::Item(Box::new(detail)))
            }
            Operation::CreateInventoryHeader(op) => Ok(Response::CreatedInventory(
                store.insert_item(StoredItem::from(op.body)),
            )),
            Operation::UpdateInventoryHeader(op) => {
                let item = store
                    .items
                    .get_mut(&op.id)
                    .ok_or_else(|| Error::record_not_found(format!("inventory id={}", op.id)))?;
                *item = StoredItem::from(op.body);
                Ok(Response::Done)
            }
            Operation::CreateIngredientLink(op) => {
                let body = op.body;
                for id in [body.inventory_id, body.ingredient_id] {
                    if !store.items.contains_key(&id) {
                        return Err(Error::record_not_found(format!("inventory id={id}")));
                    }
                }

                Ok(Response::CreatedLink(store.insert_link(StoredLink {
                    inventory_id: body.inventory_id,
                    ingredient_id: body.ingredient_id,
                    quantity: body.quantity,
                    cost: body.cost,
                })))
            }
            Operation::UpdateIngredientLink(op) => {
                let link = store.links.get_mut(&op.id).ok_or_else(|| {
                    Error::record_not_found(format!("ingredient link id={}", op.id))
                })?;
                link.quantity = op.body.quantity;
                link.cost = op.body.cost;
                Ok(Response::Done)
            }
            Operation::DeleteIngredientLink(operation::DeleteIngredientLink { id }) => {
                store
                    .links
                    .remove(&id)
                    .ok_or_else(|| Error::record_not_found(format!("ingredient link id={id}")))?;
                Ok(Response::Done)
            }
        }
    }
}

impl Store {
    fn insert_item(&mut self, item: StoredItem) -> InventoryId {
        self.next_item += 1;
        let id = InventoryId(self.next_item);
        self.items.insert(id, item);
        id
    }

    fn insert_link(&mut self, link: StoredLink) -> LinkId {
        self.next_link += 1;
        let id = LinkId(self.next_link);
        self.links.insert(id, link);
        id
    }

    fn items_page(&self, op: operation::FetchInventoryItems) -> Result<ItemsPage> {
        if op.page == 0 || op.page_size == 0 {
            larder_core::bail!(
                "page and page size must be at least 1; page={}; page_size={}",
                op.page,
                op.page_size
            );
        }

        let items = self
            .items
            .iter()
            .skip((op.page - 1) * op.page_size)
            .take(op.page_size)
            .map(|(id, item)| InventoryItem {
                id: *id,
                name: item.name.clone(),
                description: item.description.clone(),
                kind: item.kind,
                measurement_unit: item.measurement_unit.to_string(),
                cost: codec::format_amount(item.cost),
                stock: Decimal::ZERO,
            })
            .collect();

        let total_items = self.items.len();
        Ok(ItemsPage {
            items,
            page: op.page,
            page_size: op.page_size,
            total_items,
            total_pages: Some(total_items.div_ceil(op.page_size)),
        })
    }

    fn detail(&self, id: InventoryId) -> Result<InventoryDetail> {
        let item = self
            .items
            .get(&id)
            .ok_or_else(|| Error::record_not_found(format!("inventory id={id}")))?;

        let ingredients = self
            .links
            .iter()
            .filter(|(_, link)| link.inventory_id == id)
            .map(|(link_id, link)| {
                let ingredient = self.items.get(&link.ingredient_id).ok_or_else(|| {
                    Error::record_not_found(format!("inventory id={}", link.ingredient_id))
                })?;

                Ok(IngredientLink {
                    id: *link_id,
                    quantity: link.quantity,
                    cost: codec::format_amount(link.cost),
                    ingredient: IngredientSummary {
                        id: link.ingredient_id,
                        name: ingredient.name.clone(),
                        cost: codec::format_amount(ingredient.cost),
                        measurement_unit: ingredient.measurement_unit.to_string(),
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(InventoryDetail {
            id,
            name: item.name.clone(),
            description: item.description.clone(),
            kind: item.kind,
            measurement_unit: item.measurement_unit.to_string(),
            cost: codec::format_amount(item.cost),
            ingredients,
        })
    }
}

impl From<InventoryHeaderBody> for StoredItem {
    fn from(body: InventoryHeaderBody) -> Self {
        StoredItem {
            name: body.name,
            description: body.description,
            kind: body.kind,
            measurement_unit: body.measurement_unit,
            cost: body.cost,
        }
    }
}
