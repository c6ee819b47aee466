use super::{InventoryId, InventoryItem, IngredientSummary, MeasurementUnit};
use crate::{codec, Error, Result};

use rust_decimal::Decimal;

/// A raw material or sub-product that can be picked as a recipe ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientOption {
    pub id: InventoryId,
    pub label: String,
    pub unit_cost: Decimal,
    pub measurement_unit: MeasurementUnit,
}

impl IngredientOption {
    fn decode(id: InventoryId, name: &str, cost: &str, unit: &str) -> Result<IngredientOption> {
        let measurement_unit: MeasurementUnit = unit.parse()?;
        let unit_cost = codec::parse(cost)
            .ok_or_else(|| Error::invalid_record("cost", format!("not an amount: `{cost}`")))?;

        if unit_cost.is_sign_negative() {
            return Err(Error::invalid_record(
                "cost",
                format!("negative amount: `{cost}`"),
            ));
        }

        Ok(IngredientOption {
            id,
            label: format!("[{measurement_unit}] {name}"),
            unit_cost,
            measurement_unit,
        })
    }
}

impl TryFrom<&InventoryItem> for IngredientOption {
    type Error = Error;

    fn try_from(item: &InventoryItem) -> Result<IngredientOption> {
        IngredientOption::decode(item.id, &item.name, &item.cost, &item.measurement_unit)
            .map_err(|err| err.context(crate::err!("inventory item id={}", item.id)))
    }
}

impl TryFrom<&IngredientSummary> for IngredientOption {
    type Error = Error;

    fn try_from(summary: &IngredientSummary) -> Result<IngredientOption> {
        IngredientOption::decode(
            summary.id,
            &summary.name,
            &summary.cost,
            &summary.measurement_unit,
        )
        .map_err(|err| err.context(crate::err!("ingredient id={}", summary.id)))
    }
}
