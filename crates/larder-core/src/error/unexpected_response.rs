use super::Error;

/// Error when a backend answers an operation with the wrong response shape.
#[derive(Debug)]
pub(super) struct UnexpectedResponseError {
    operation: &'static str,
    response: &'static str,
}

impl std::error::Error for UnexpectedResponseError {}

impl core::fmt::Display for UnexpectedResponseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unexpected response to {}: got {}",
            self.operation, self.response
        )
    }
}

impl Error {
    pub fn unexpected_response(operation: &'static str, response: &'static str) -> Error {
        Error::from(super::ErrorKind::UnexpectedResponse(
            UnexpectedResponseError {
                operation,
                response,
            },
        ))
    }
}
