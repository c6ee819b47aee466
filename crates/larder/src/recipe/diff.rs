use super::IngredientRow;

use indexmap::IndexSet;
use larder_core::model::{IngredientLinkBody, IngredientLinkUpdate, InventoryId, LinkId};
use rust_decimal::Decimal;

/// A selected ingredient row, reduced to what gets persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub ingredient: InventoryId,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub link_id: Option<LinkId>,
}

impl IngredientLine {
    /// Lines for every row with a selection, in row order.
    pub fn from_rows(rows: &[IngredientRow]) -> Vec<IngredientLine> {
        rows.iter()
            .filter_map(|row| {
                let selected = row.selected.as_ref()?;
                Some(IngredientLine {
                    ingredient: selected.id,
                    quantity: row.quantity.value(),
                    unit_cost: row.unit_cost,
                    link_id: row.link_id,
                })
            })
            .collect()
    }

    pub fn to_body(&self, inventory_id: InventoryId) -> IngredientLinkBody {
        IngredientLinkBody {
            quantity: self.quantity,
            cost: self.unit_cost,
            inventory_id,
            ingredient_id: self.ingredient,
        }
    }

    pub fn to_update(&self) -> IngredientLinkUpdate {
        IngredientLinkUpdate {
            quantity: self.quantity,
            cost: self.unit_cost,
        }
    }
}

/// Reconciliation plan between a persisted composition and the edited rows.
///
/// * `update`: lines whose link id belongs to the original composition
/// * `insert`: lines without a link id, or with one the original does not
///   know about
/// * `delete`: original link ids no current line refers to
///
/// Every original id lands in exactly one of `update` and `delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDiff {
    pub update: Vec<(LinkId, IngredientLine)>,
    pub insert: Vec<IngredientLine>,
    pub delete: Vec<LinkId>,
}

impl LinkDiff {
    pub fn compute(original: &[LinkId], current: &[IngredientLine]) -> LinkDiff {
        let original: IndexSet<LinkId> = original.iter().copied().collect();
        let mut kept = IndexSet::new();
        let mut diff = LinkDiff::default();

        for line in current {
            match line.link_id {
                // a link id appearing twice is updated once
                Some(id) if original.contains(&id) => {
                    if kept.insert(id) {
                        diff.update.push((id, line.clone()));
                    }
                }
                _ => diff.insert.push(line.clone()),
            }
        }

        diff.delete = original.difference(&kept).copied().collect();
        diff
    }

    /// Total number of backend calls the plan issues.
    pub fn len(&self) -> usize {
        self.update.len() + self.insert.len() + self.delete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
