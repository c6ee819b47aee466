pub mod backend;
pub use backend::Backend;

pub mod codec;

mod error;
pub use error::Error;

pub mod model;

/// A Result type alias that uses Larder's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
pub use rust_decimal::Decimal;
