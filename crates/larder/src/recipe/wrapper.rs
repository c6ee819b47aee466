use super::RecipeForm;
use crate::{Client, Error, Notice, Notifier};

use larder_core::model::{IngredientOption, InventoryId};
use log::warn;

/// State of something fetched before it can be shown.
#[derive(Debug)]
pub enum Loadable<T> {
    Loading,
    Failed(Error),
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Loadable::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Mounts a [`RecipeForm`] in create or edit mode.
///
/// In edit mode no form exists until the composition has been fetched; if the
/// fetch fails the wrapper stays [`Loadable::Failed`] and never exposes a
/// partially built form.
#[derive(Debug)]
pub struct RecipeFormWrapper {
    state: Loadable<RecipeForm>,
}

impl RecipeFormWrapper {
    pub fn new() -> RecipeFormWrapper {
        RecipeFormWrapper {
            state: Loadable::Loading,
        }
    }

    /// Builds the form: create mode for `None`, edit mode for an existing id.
    pub async fn mount(
        &mut self,
        client: &Client,
        id: Option<InventoryId>,
        options: Vec<IngredientOption>,
        notifier: &dyn Notifier,
    ) {
        self.state = Loadable::Loading;

        let Some(id) = id else {
            self.state = Loadable::Ready(RecipeForm::create(options, client.config()));
            return;
        };

        self.state = match RecipeForm::load(client, id, options).await {
            Ok(form) => Loadable::Ready(form),
            Err(err) => {
                warn!("failed to load recipe; id={id}; err={err}");
                notifier.notify(Notice::error("Could not load recipe for editing"));
                Loadable::Failed(err)
            }
        };
    }

    pub fn state(&self) -> &Loadable<RecipeForm> {
        &self.state
    }

    pub fn form(&self) -> Option<&RecipeForm> {
        self.state.ready()
    }

    pub fn form_mut(&mut self) -> Option<&mut RecipeForm> {
        self.state.ready_mut()
    }
}

impl Default for RecipeFormWrapper {
    fn default() -> Self {
        RecipeFormWrapper::new()
    }
}
