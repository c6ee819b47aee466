//! Field names and validation rules of the recipe form.

use super::IngredientLine;
use crate::{Config, Error, FieldErrors, Form};

use larder_core::model::{InventoryHeaderBody, InventoryKind, MeasurementUnit};
use rust_decimal::Decimal;

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const MEASUREMENT_UNIT: &str = "measurementUnit";
pub const INGREDIENTS: &str = "ingredients";
pub const AVERAGE_COST: &str = "averageCost";

/// A recipe form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeValues {
    pub name: String,
    pub description: String,
    pub measurement_unit: MeasurementUnit,
    pub ingredients: Vec<IngredientLine>,
    pub average_cost: Decimal,
}

impl RecipeValues {
    /// Header body for the create / update calls. Recipes are always
    /// processed items.
    pub fn header(&self) -> InventoryHeaderBody {
        InventoryHeaderBody {
            name: self.name.clone(),
            description: self.description.clone(),
            kind: InventoryKind::Processed,
            measurement_unit: self.measurement_unit,
            cost: self.average_cost,
        }
    }
}

/// Checks the whole form, collecting at most one error per field.
pub fn validate(form: &Form, config: &Config) -> Result<RecipeValues, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.text(NAME).trim();
    if name.is_empty() {
        errors.insert(NAME, Error::validation(NAME, "is required"));
    }

    let description = form.text(DESCRIPTION).trim();
    let description_len = description.chars().count();
    if description.is_empty() {
        errors.insert(DESCRIPTION, Error::validation(DESCRIPTION, "is required"));
    } else if description_len > config.description_max_len {
        errors.insert(
            DESCRIPTION,
            Error::validation_length(
                DESCRIPTION,
                description_len,
                None,
                Some(config.description_max_len),
            ),
        );
    }

    let measurement_unit = match form.text(MEASUREMENT_UNIT).parse::<MeasurementUnit>() {
        Ok(unit) => Some(unit),
        Err(_) => {
            errors.insert(
                MEASUREMENT_UNIT,
                Error::validation(MEASUREMENT_UNIT, "must be one of grams, liters, units"),
            );
            None
        }
    };

    let ingredients = IngredientLine::from_rows(form.ingredients(INGREDIENTS));
    if ingredients.is_empty() {
        errors.insert(
            INGREDIENTS,
            Error::validation(INGREDIENTS, "at least one ingredient is required"),
        );
    }

    let average_cost = form.decimal(AVERAGE_COST).unwrap_or(Decimal::ZERO);
    if average_cost.is_sign_negative() && !average_cost.is_zero() {
        errors.insert(
            AVERAGE_COST,
            Error::validation(AVERAGE_COST, "must not be negative"),
        );
    }

    match measurement_unit {
        Some(measurement_unit) if errors.is_empty() => Ok(RecipeValues {
            name: name.to_string(),
            description: description.to_string(),
            measurement_unit,
            ingredients,
            average_cost,
        }),
        _ => Err(errors),
    }
}
