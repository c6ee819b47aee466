use super::*;
use crate::model::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteIngredientLink {
    pub id: LinkId,
}

impl From<DeleteIngredientLink> for Operation {
    fn from(value: DeleteIngredientLink) -> Self {
        Self::DeleteIngredientLink(value)
    }
}
