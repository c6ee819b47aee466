use super::Error;

/// Error when a record entering the core from the backend is malformed.
#[derive(Debug)]
pub(super) struct InvalidRecordError {
    field: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidRecordError {}

impl core::fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid record: field `{}`: {}", self.field, self.reason)
    }
}

impl Error {
    /// Creates an invalid-record error for `field`.
    pub fn invalid_record(field: impl Into<Box<str>>, reason: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::InvalidRecord(InvalidRecordError {
            field: field.into(),
            reason: reason.into(),
        }))
    }

    /// Returns `true` if this error is an invalid-record error.
    pub fn is_invalid_record(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidRecord(_)))
    }
}
