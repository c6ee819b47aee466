pub mod client;
pub use client::Client;

pub mod config;
pub use config::{Builder, Config};

pub mod form;
pub use form::{FieldErrors, FieldValue, Form};

pub mod notice;
pub use notice::{Notice, NoticeLevel, Notifier};

pub mod recipe;
pub use recipe::{IngredientEditor, RecipeForm, RecipeFormWrapper};

pub mod table;
pub use table::{Column, DataTable, Pagination};

pub use larder_core::{codec, model, Decimal, Error, Result};
