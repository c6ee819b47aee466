//! Named form fields shared by the components of one form.
//!
//! A [`Form`] is the single source of truth the recipe editor and the recipe
//! orchestrator synchronize through. Every write bumps the field's revision,
//! which is how observers detect that a value changed identity.

use crate::recipe::IngredientRow;
use crate::Error;

use indexmap::IndexMap;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Decimal(Decimal),
    Ingredients(Vec<IngredientRow>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<Vec<IngredientRow>> for FieldValue {
    fn from(value: Vec<IngredientRow>) -> Self {
        FieldValue::Ingredients(value)
    }
}

#[derive(Debug, Clone)]
struct Field {
    value: FieldValue,
    default: FieldValue,
    revision: u64,
    dirty: bool,
    error: Option<Error>,
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: IndexMap<String, Field>,

    /// Source of field revisions; never reused within one form
    next_revision: u64,
}

impl Form {
    pub fn new() -> Form {
        Form::default()
    }

    /// Creates a form whose fields start at (and reset to) the given values.
    pub fn with_defaults<I, K, V>(defaults: I) -> Form
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut form = Form::new();
        for (name, value) in defaults {
            let value = value.into();
            let revision = form.bump();
            form.fields.insert(
                name.into(),
                Field {
                    value: value.clone(),
                    default: value,
                    revision,
                    dirty: false,
                    error: None,
                },
            );
        }
        form
    }

    /// Writes a field, marking it dirty and bumping its revision.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) {
        let revision = self.bump();
        let value = value.into();

        match self.fields.get_mut(name) {
            Some(field) => {
                field.value = value;
                field.revision = revision;
                field.dirty = true;
            }
            None => {
                self.fields.insert(
                    name.to_string(),
                    Field {
                        value,
                        default: FieldValue::Empty,
                        revision,
                        dirty: true,
                        error: None,
                    },
                );
            }
        }
    }

    /// Writes a field and makes the value its new default, leaving it clean.
    pub fn set_default(&mut self, name: &str, value: impl Into<FieldValue>) {
        let revision = self.bump();
        let value = value.into();

        let field = self.fields.entry(name.to_string()).or_insert_with(|| Field {
            value: FieldValue::Empty,
            default: FieldValue::Empty,
            revision,
            dirty: false,
            error: None,
        });
        field.value = value.clone();
        field.default = value;
        field.revision = revision;
        field.dirty = false;
    }

    /// Writes a value computed from other fields. The field is dirty only
    /// while the value differs from its default.
    pub fn set_derived(&mut self, name: &str, value: impl Into<FieldValue>) {
        let revision = self.bump();
        let value = value.into();

        let field = self.fields.entry(name.to_string()).or_insert_with(|| Field {
            value: FieldValue::Empty,
            default: FieldValue::Empty,
            revision,
            dirty: false,
            error: None,
        });
        field.dirty = value != field.default;
        field.value = value;
        field.revision = revision;
    }

    pub fn value(&self, name: &str) -> &FieldValue {
        const EMPTY: &FieldValue = &FieldValue::Empty;
        self.fields.get(name).map_or(EMPTY, |field| &field.value)
    }

    /// Text of a field, or `""` when the field is unset or not text.
    pub fn text(&self, name: &str) -> &str {
        match self.value(name) {
            FieldValue::Text(text) => text,
            _ => "",
        }
    }

    pub fn decimal(&self, name: &str) -> Option<Decimal> {
        match self.value(name) {
            FieldValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    /// Ingredient rows of a field, or an empty slice.
    pub fn ingredients(&self, name: &str) -> &[IngredientRow] {
        match self.value(name) {
            FieldValue::Ingredients(rows) => rows,
            _ => &[],
        }
    }

    /// Revision of the field's current value; `0` for unknown fields.
    pub fn revision(&self, name: &str) -> u64 {
        self.fields.get(name).map_or(0, |field| field.revision)
    }

    pub fn is_dirty(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|field| field.dirty)
    }

    /// Replaces every field error with the given set.
    pub fn set_errors(&mut self, errors: &FieldErrors) {
        for (name, field) in self.fields.iter_mut() {
            field.error = errors.get(name).cloned();
        }
    }

    pub fn error(&self, name: &str) -> Option<&Error> {
        self.fields.get(name).and_then(|field| field.error.as_ref())
    }

    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|field| field.error.is_some())
    }

    /// Restores every field to its default value.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            self.next_revision += 1;
            field.value = field.default.clone();
            field.revision = self.next_revision;
            field.dirty = false;
            field.error = None;
        }
    }

    fn bump(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }
}

/// Validation errors keyed by field name, in schema order.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    errors: IndexMap<String, Error>,
}

impl FieldErrors {
    pub fn new() -> FieldErrors {
        FieldErrors::default()
    }

    /// Records an error for `field`; the first error per field wins.
    pub fn insert(&mut self, field: &str, error: Error) {
        self.errors.entry(field.to_string()).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<&Error> {
        self.errors.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.errors.iter().map(|(name, err)| (name.as_str(), err))
    }
}
