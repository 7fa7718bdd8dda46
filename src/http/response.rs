//! Error responses.
//!
//! Every failure leaves as JSON `{"error": ...}`. Validation failures also
//! list the accepted field names and status vocabulary so a client can see
//! what the server understands.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

use crate::error::RsvpError;
use crate::rsvp::normalize::{AFFIRMATIVE, FIELD_ALIASES, NEGATIVE};

/// Wrapper that maps [`RsvpError`] onto HTTP.
#[derive(Debug)]
pub struct ApiError(pub RsvpError);

impl From<RsvpError> for ApiError {
    fn from(e: RsvpError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RsvpError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RsvpError::Forbidden => StatusCode::FORBIDDEN,
            RsvpError::NotFound(_) => StatusCode::NOT_FOUND,
            RsvpError::StorageIo(_) | RsvpError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Accepted input shapes, derived from the normalizer's alias table.
pub fn accepted_shapes() -> Value {
    let fields: Map<String, Value> = FIELD_ALIASES
        .iter()
        .map(|(field, keys)| (field.label().to_string(), json!(keys)))
        .collect();

    json!({
        "accepted_fields": fields,
        "status_values": {
            "attending": AFFIRMATIVE,
            "declining": NEGATIVE,
        },
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            RsvpError::InvalidInput(message) => {
                let mut body = accepted_shapes();
                body["error"] = json!(message);
                body
            }
            RsvpError::StorageIo(_) => json!({ "error": "failed to persist data" }),
            RsvpError::Serialization(e) => {
                tracing::error!(error = %e, "Store serialization failed");
                json!({ "error": "failed to persist data" })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let status = |e: RsvpError| ApiError(e).status();
        assert_eq!(status(RsvpError::InvalidInput("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status(RsvpError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status(RsvpError::NotFound("id".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status(std::io::Error::other("disk full").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_accepted_shapes_lists_aliases() {
        let shapes = accepted_shapes();
        assert_eq!(shapes["accepted_fields"]["name"], json!(["nume", "name"]));
        assert_eq!(shapes["accepted_fields"]["party_size"], json!(["persoane", "persons"]));
        assert!(shapes["status_values"]["attending"]
            .as_array()
            .unwrap()
            .contains(&json!("da")));
    }
}
