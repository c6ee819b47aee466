use super::Error;

/// Error raised by a backend while executing a collaborator call.
#[derive(Debug)]
pub(super) struct BackendError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for BackendError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a backend error.
    ///
    /// This is the preferred way to convert transport-specific errors (HTTP
    /// client failures, rejected requests, timeouts) into larder errors.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Backend(BackendError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a backend error.
    pub fn is_backend(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Backend(_)))
    }
}
