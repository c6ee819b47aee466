use super::Error;

/// Error when a value fails validation constraints.
#[derive(Debug)]
pub(super) struct ValidationError {
    field: Box<str>,
    kind: ValidationErrorKind,
}

#[derive(Debug)]
enum ValidationErrorKind {
    /// String length constraint violation
    Length {
        value_len: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    /// Free-form rule violation
    Rule(Box<str>),
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: ", self.field)?;

        match &self.kind {
            ValidationErrorKind::Length {
                value_len,
                min,
                max,
            } => {
                let too_short = min.is_some_and(|m| *value_len < m);
                let too_long = max.is_some_and(|m| *value_len > m);

                match (too_short, too_long, min, max) {
                    (true, _, Some(min), _) => write!(
                        f,
                        "value length {} is too short (minimum: {})",
                        value_len, min
                    ),
                    (_, true, _, Some(max)) => write!(
                        f,
                        "value length {} is too long (maximum: {})",
                        value_len, max
                    ),
                    _ => f.write_str("length constraint violation"),
                }
            }
            ValidationErrorKind::Rule(message) => f.write_str(message),
        }
    }
}

impl Error {
    /// Creates a length validation error for `field`.
    pub fn validation_length(
        field: impl Into<Box<str>>,
        value_len: usize,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            field: field.into(),
            kind: ValidationErrorKind::Length {
                value_len,
                min,
                max,
            },
        }))
    }

    /// Creates a validation error for `field` with a rule description.
    pub fn validation(field: impl Into<Box<str>>, message: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            field: field.into(),
            kind: ValidationErrorKind::Rule(message.into()),
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Validation(_)))
    }
}
