use super::*;
use crate::model::*;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateIngredientLink {
    pub id: LinkId,
    pub body: IngredientLinkUpdate,
}

impl From<UpdateIngredientLink> for Operation {
    fn from(value: UpdateIngredientLink) -> Self {
        Self::UpdateIngredientLink(value)
    }
}
