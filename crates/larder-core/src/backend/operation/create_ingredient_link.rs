use super::*;
use crate::model::*;

/// Persist one composition row of a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIngredientLink {
    pub body: IngredientLinkBody,
}

impl From<CreateIngredientLink> for Operation {
    fn from(value: CreateIngredientLink) -> Self {
        Self::CreateIngredientLink(value)
    }
}
