use super::{
    row_set, schema, IngredientEditor, IngredientLine, IngredientRow, LinkDiff, RecipeValues,
    RowId,
};
use crate::{Client, Config, Error, FieldErrors, FieldValue, Form, Notice, Notifier, Result};

use futures::future::{join_all, BoxFuture};
use larder_core::{
    codec,
    model::{IngredientOption, InventoryDetail, InventoryId, LinkId},
};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::fmt;

/// Whether the form creates a new recipe or edits a persisted one.
///
/// Chosen when the form is built and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit {
        id: InventoryId,

        /// Link ids of the composition as it was loaded
        original: Vec<LinkId>,
    },
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),

    /// A backend call was rejected. Calls that succeeded are not undone.
    Failed(Error),

    Completed(InventoryId),
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }
}

/// Recipe create / edit form.
///
/// Owns the [`Form`] and the [`IngredientEditor`] bound to its ingredients
/// field. After every ingredient edit the average cost field is recomputed,
/// keyed on the ingredients field revision only.
pub struct RecipeForm {
    mode: Mode,
    form: Form,
    editor: IngredientEditor,
    config: Config,

    /// Ingredients revision the average cost was last computed from
    observed_revision: u64,

    on_complete: Option<Box<dyn FnMut(InventoryId) + Send>>,
}

impl RecipeForm {
    pub fn create(options: Vec<IngredientOption>, config: &Config) -> RecipeForm {
        let form = Form::with_defaults([
            (schema::NAME, FieldValue::from("")),
            (schema::DESCRIPTION, FieldValue::from("")),
            (schema::MEASUREMENT_UNIT, FieldValue::from("")),
            (schema::INGREDIENTS, FieldValue::Ingredients(vec![])),
            (schema::AVERAGE_COST, FieldValue::Decimal(Decimal::ZERO)),
        ]);

        RecipeForm::build(Mode::Create, form, options, config)
    }

    /// Builds an edit form from a loaded composition.
    ///
    /// Each link becomes a row carrying the link id. Ingredients missing from
    /// `options` are decoded from the link itself and added to the options.
    pub fn edit(
        detail: &InventoryDetail,
        mut options: Vec<IngredientOption>,
        config: &Config,
    ) -> Result<RecipeForm> {
        let mut rows = Vec::with_capacity(detail.ingredients.len());

        for link in &detail.ingredients {
            let option = match options.iter().find(|option| option.id == link.ingredient.id) {
                Some(option) => option.clone(),
                None => {
                    let option = IngredientOption::try_from(&link.ingredient)
                        .map_err(|err| err.context(larder_core::err!("link id={}", link.id)))?;
                    options.push(option.clone());
                    option
                }
            };

            rows.push(IngredientRow::persisted(link.id, option, link.quantity));
        }

        let form = Form::with_defaults([
            (schema::NAME, FieldValue::from(detail.name.as_str())),
            (schema::DESCRIPTION, FieldValue::from(detail.description.as_str())),
            (schema::MEASUREMENT_UNIT, FieldValue::from(detail.measurement_unit.as_str())),
            (schema::INGREDIENTS, FieldValue::Ingredients(rows)),
            (schema::AVERAGE_COST, FieldValue::Decimal(codec::parse_or_zero(&detail.cost))),
        ]);

        let mode = Mode::Edit {
            id: detail.id,
            original: detail.ingredients.iter().map(|link| link.id).collect(),
        };

        Ok(RecipeForm::build(mode, form, options, config))
    }

    /// Fetches the composition of `id` and builds an edit form from it.
    pub async fn load(
        client: &Client,
        id: InventoryId,
        options: Vec<IngredientOption>,
    ) -> Result<RecipeForm> {
        let detail = client.fetch_inventory_item(id).await?;
        RecipeForm::edit(&detail, options, client.config())
    }

    fn build(
        mode: Mode,
        mut form: Form,
        options: Vec<IngredientOption>,
        config: &Config,
    ) -> RecipeForm {
        let rows = form.ingredients(schema::INGREDIENTS).to_vec();

        // the cost computed from the loaded rows is the field's starting value
        let cost = row_set::total_cost(&rows);
        form.set_default(schema::AVERAGE_COST, cost);
        let observed_revision = form.revision(schema::INGREDIENTS);

        RecipeForm {
            mode,
            editor: IngredientEditor::with_rows(schema::INGREDIENTS, options, rows, config),
            form,
            config: config.clone(),
            observed_revision,
            on_complete: None,
        }
    }

    /// Registers the callback invoked with the header id after a successful
    /// submit.
    pub fn on_complete(&mut self, f: impl FnMut(InventoryId) + Send + 'static) -> &mut Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn editor(&self) -> &IngredientEditor {
        &self.editor
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.set_value(schema::NAME, name);
    }

    pub fn set_description(&mut self, description: &str) {
        self.form.set_value(schema::DESCRIPTION, description);
    }

    pub fn set_measurement_unit(&mut self, unit: &str) {
        self.form.set_value(schema::MEASUREMENT_UNIT, unit);
    }

    pub fn add_row(&mut self) -> Option<RowId> {
        let row_id = self.editor.add_row(&mut self.form);
        self.sync_average_cost();
        row_id
    }

    pub fn remove_row(&mut self, row_id: RowId) -> bool {
        let changed = self.editor.remove_row(&mut self.form, row_id);
        self.sync_average_cost();
        changed
    }

    pub fn set_selection(&mut self, row_id: RowId, option: Option<InventoryId>) -> bool {
        let changed = self.editor.set_selection(&mut self.form, row_id, option);
        self.sync_average_cost();
        changed
    }

    pub fn set_quantity(&mut self, row_id: RowId, raw: &str) -> bool {
        let changed = self.editor.set_quantity(&mut self.form, row_id, raw);
        self.sync_average_cost();
        changed
    }

    pub fn on_quantity_blur(&mut self, row_id: RowId) -> bool {
        let changed = self.editor.on_quantity_blur(&mut self.form, row_id);
        self.sync_average_cost();
        changed
    }

    /// Restores the values the form was built with.
    pub fn reset(&mut self) {
        self.form.reset();
        self.editor.restore(&self.form);
        self.sync_average_cost();
    }

    /// Recomputes the average cost if the ingredients field changed since the
    /// last call. Returns whether it recomputed.
    pub fn sync_average_cost(&mut self) -> bool {
        let revision = self.form.revision(schema::INGREDIENTS);
        if revision == self.observed_revision {
            return false;
        }
        self.observed_revision = revision;

        let cost = row_set::total_cost(self.form.ingredients(schema::INGREDIENTS));
        self.form.set_derived(schema::AVERAGE_COST, cost);
        true
    }

    /// Unformatted average cost, as stored in the form.
    pub fn average_cost(&self) -> Decimal {
        self.form
            .decimal(schema::AVERAGE_COST)
            .unwrap_or(Decimal::ZERO)
    }

    /// Average cost as shown in its read-only field.
    pub fn average_cost_display(&self) -> String {
        codec::format_amount(self.average_cost())
    }

    /// Validates the form and persists it.
    ///
    /// Validation errors are stored on the form and nothing is sent. On a
    /// backend rejection an error notice is posted and the completion callback
    /// is not invoked, so the form can be corrected and submitted again.
    pub async fn submit(&mut self, client: &Client, notifier: &dyn Notifier) -> SubmitOutcome {
        self.sync_average_cost();

        let values = match schema::validate(&self.form, &self.config) {
            Ok(values) => values,
            Err(errors) => {
                debug!("recipe form invalid; fields={:?}", errors.fields().collect::<Vec<_>>());
                self.form.set_errors(&errors);
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.form.set_errors(&FieldErrors::new());

        let (result, success) = match &self.mode {
            Mode::Create => (create(client, &values).await, "Recipe created"),
            Mode::Edit { id, original } => (
                update(client, *id, original, &values).await,
                "Recipe updated",
            ),
        };

        match result {
            Ok(id) => {
                notifier.notify(Notice::success(success));
                if let Some(on_complete) = &mut self.on_complete {
                    on_complete(id);
                }
                SubmitOutcome::Completed(id)
            }
            Err(err) => {
                warn!("recipe submit failed; err={err}");
                notifier.notify(Notice::error(format!("Could not save recipe: {err}")));
                SubmitOutcome::Failed(err)
            }
        }
    }
}

impl fmt::Debug for RecipeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeForm")
            .field("mode", &self.mode)
            .field("form", &self.form)
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}

async fn create(client: &Client, values: &RecipeValues) -> Result<InventoryId> {
    let id = client.create_inventory_header(values.header()).await?;
    debug!(
        "creating recipe links; id={id}; links={}",
        values.ingredients.len()
    );

    let links = values
        .ingredients
        .iter()
        .map(|line| client.create_ingredient_link(line.to_body(id)));

    settle(join_all(links).await)?;
    Ok(id)
}

async fn update(
    client: &Client,
    id: InventoryId,
    original: &[LinkId],
    values: &RecipeValues,
) -> Result<InventoryId> {
    client.update_inventory_header(id, values.header()).await?;

    let diff = LinkDiff::compute(original, &values.ingredients);
    debug!(
        "reconciling recipe links; id={id}; update={}; insert={}; delete={}",
        diff.update.len(),
        diff.insert.len(),
        diff.delete.len()
    );

    let mut calls: Vec<BoxFuture<'_, Result<()>>> = Vec::with_capacity(diff.len());
    for (link_id, line) in &diff.update {
        calls.push(Box::pin(
            client.update_ingredient_link(*link_id, line.to_update()),
        ));
    }
    for line in &diff.insert {
        calls.push(Box::pin(insert(client, id, line)));
    }
    for link_id in &diff.delete {
        calls.push(Box::pin(client.delete_ingredient_link(*link_id)));
    }

    settle(join_all(calls).await)?;
    Ok(id)
}

async fn insert(client: &Client, id: InventoryId, line: &IngredientLine) -> Result<()> {
    client.create_ingredient_link(line.to_body(id)).await?;
    Ok(())
}

/// First error of a settled batch, if any.
fn settle<T>(results: Vec<Result<T>>) -> Result<()> {
    let failed = results.iter().filter(|result| result.is_err()).count();

    match results.into_iter().find_map(|result| result.err()) {
        Some(err) => {
            debug!("batch settled with failures; failed={failed}");
            Err(err)
        }
        None => Ok(()),
    }
}
