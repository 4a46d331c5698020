//! Internal error helpers for mapping HTTP/reqwest errors to [`ClientError`].

use std::time::Duration;

use echo_types::ClientError;

/// Map a non-success HTTP status to a [`ClientError`].
///
/// The backend reports failures through FastAPI's standard error shape, so
/// the body is carried verbatim rather than interpreted here.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ClientError {
    ClientError::Status {
        status: status.as_u16(),
        body: body.to_string(),
    }
}

/// Map a [`reqwest::Error`] to a [`ClientError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(Duration::from_secs(30))
    } else {
        ClientError::Network(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_body_are_preserved() {
        let err = map_http_status(reqwest::StatusCode::NOT_FOUND, "task not found");
        assert!(matches!(
            err,
            ClientError::Status { status: 404, body } if body == "task not found"
        ));
    }

    #[test]
    fn status_5xx_errors_are_retryable() {
        let err = map_http_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        assert!(err.is_retryable());
    }

    #[test]
    fn status_503_errors_are_retryable() {
        let err = map_http_status(reqwest::StatusCode::SERVICE_UNAVAILABLE, "unavailable");
        assert!(err.is_retryable());
    }

    #[test]
    fn status_4xx_errors_are_not_retryable() {
        let err = map_http_status(reqwest::StatusCode::BAD_REQUEST, "bad body");
        assert!(!err.is_retryable());
    }

    #[test]
    fn empty_body_preserved_in_error() {
        let err = map_http_status(reqwest::StatusCode::BAD_REQUEST, "");
        assert!(matches!(err, ClientError::Status { body, .. } if body.is_empty()));
    }
}
