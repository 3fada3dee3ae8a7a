use thiserror::Error;

/// Errors raised on the invoke path. All variants are retryable; after the
/// last attempt the loop wraps the final error in `RetryExhausted` so the
/// caller can still see how many attempts were made.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("all {attempts} attempts failed: {source}")]
    RetryExhausted {
        attempts: usize,
        #[source]
        source: Box<InvokeError>,
    },
}

impl InvokeError {
    /// Static classifier reported as the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            InvokeError::Http(_) => "HttpError",
            InvokeError::Api { .. } => "ApiError",
            InvokeError::Json(_) => "JsonError",
            InvokeError::RetryExhausted { .. } => "RetryExhausted",
        }
    }

    /// Unwraps retry-exhaustion wrappers to the last underlying attempt's
    /// error. A wrapper with no inner layers reports itself, so callers
    /// always get something to show.
    pub fn terminal_cause(&self) -> &InvokeError {
        match self {
            InvokeError::RetryExhausted { source, .. } => source.terminal_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_cause_unwraps_nested_wrappers() {
        let inner = InvokeError::Api {
            status: 400,
            body: "empty prompt".into(),
        };
        let wrapped = InvokeError::RetryExhausted {
            attempts: 3,
            source: Box::new(InvokeError::RetryExhausted {
                attempts: 3,
                source: Box::new(inner),
            }),
        };

        let terminal = wrapped.terminal_cause();
        assert_eq!(terminal.kind(), "ApiError");
        assert!(terminal.to_string().contains("empty prompt"));
    }

    #[test]
    fn unwrapped_error_is_its_own_terminal_cause() {
        let err = InvokeError::Api {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.terminal_cause().kind(), "ApiError");
    }

    #[test]
    fn wrapper_display_includes_attempt_count_and_cause() {
        let err = InvokeError::RetryExhausted {
            attempts: 3,
            source: Box::new(InvokeError::Api {
                status: 503,
                body: "throttled".into(),
            }),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("3 attempts"));
        assert!(rendered.contains("throttled"));
    }
}
