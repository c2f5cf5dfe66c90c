//! Response classification shared by every transport

use serde::de::{DeserializeOwned, IgnoredAny};

use super::{ApiError, ApiResult};
use crate::model::Envelope;

/// Turn a status code and raw body into an envelope.
///
/// A non-2xx response that still carries an envelope is a rejection with the
/// server's message; without one it is a bare HTTP error.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<Envelope<T>> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_slice::<Envelope<IgnoredAny>>(body) {
            Ok(envelope) => ApiError::Rejected {
                message: envelope.message,
            },
            Err(_) => ApiError::Http { status },
        });
    }

    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;

    #[test]
    fn test_rejected_envelope_keeps_message() {
        let err = decode_envelope::<IgnoredAny>(
            422,
            br#"{"status": false, "message": "The title field is required."}"#,
        )
        .unwrap_err();
        assert_eq!(err.server_message(), Some("The title field is required."));
    }

    #[test]
    fn test_non_envelope_error_is_http() {
        let err = decode_envelope::<IgnoredAny>(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 502 });
    }

    #[test]
    fn test_garbled_success_is_decode_error() {
        let err = decode_envelope::<IgnoredAny>(200, b"not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_status_false_on_200_is_passed_through() {
        let envelope =
            decode_envelope::<IgnoredAny>(200, br#"{"status": false, "message": "Nope"}"#).unwrap();
        assert_eq!(
            envelope.into_message(),
            Err(ApiError::Rejected {
                message: Some("Nope".to_string())
            })
        );
    }

    #[test]
    fn test_post_envelope_without_data() {
        let envelope = decode_envelope::<Post>(
            200,
            br#"{"status": false, "message": "Blog not found"}"#,
        )
        .unwrap();
        assert_eq!(
            envelope.into_data(),
            Err(ApiError::Rejected {
                message: Some("Blog not found".to_string())
            })
        );

        let envelope =
            decode_envelope::<Post>(200, br#"{"status": true, "data": null}"#).unwrap();
        assert_eq!(envelope.into_data(), Err(ApiError::MissingData));
    }
}
