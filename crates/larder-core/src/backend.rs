mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// The REST API the dashboard talks to.
///
/// Every collaborator call is an [`Operation`]; implementations execute it and
/// answer with the matching [`Response`] variant. Rejections of any kind
/// (network failure, server-side validation, conflicts) are returned as
/// errors; the core never retries.
#[async_trait]
pub trait Backend: Debug + Send + Sync + 'static {
    /// Execute one collaborator call
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl<B: Backend + ?Sized> Backend for Box<B> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}

#[async_trait]
impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}
