/// Contact form submission to the web3forms relay
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

// TODO: replace with the production web3forms access key before deploying
pub const ACCESS_KEY: &str = "00000000-0000-0000-0000-000000000000";

pub const GENERIC_SUCCESS: &str = "Form submitted successfully!";
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
pub const NETWORK_FAILURE: &str = "Something went wrong! Please try again.";

/// The flat payload posted to the relay, one field per form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The relay answers with JSON carrying at least a `message` field.
#[derive(Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    /// Non-200 response; carries the text to show the user.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response.
    #[error("{NETWORK_FAILURE}")]
    Network,
    #[error("could not encode form payload")]
    Encode,
}

/// The status policy, kept pure: 200 succeeds with the server's message
/// (or a generic one), anything else fails with the server's message
/// (or a generic one). No retry in either case.
pub fn classify(status: u16, server_message: Option<String>) -> Result<String, RelayError> {
    if status == 200 {
        Ok(server_message.unwrap_or_else(|| GENERIC_SUCCESS.to_string()))
    } else {
        Err(RelayError::Rejected(
            server_message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        ))
    }
}

/// POST the message as JSON and classify the outcome. One request at a
/// time is assumed; a resubmission racing an in-flight request is not
/// guarded against.
pub async fn submit(message: &ContactMessage) -> Result<String, RelayError> {
    let body = serde_json::to_string(message).map_err(|_| RelayError::Encode)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(RELAY_ENDPOINT, &opts).map_err(|_| RelayError::Network)?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| RelayError::Network)?;
    headers
        .set("Accept", "application/json")
        .map_err(|_| RelayError::Network)?;

    let window = web_sys::window().ok_or(RelayError::Network)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| RelayError::Network)?;
    let response: Response = response.dyn_into().map_err(|_| RelayError::Network)?;

    let reply: Option<RelayReply> = match response.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| serde_wasm_bindgen::from_value(value).ok()),
        Err(_) => None,
    };

    classify(response.status(), reply.and_then(|r| r.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_200_with_server_message() {
        assert_eq!(
            classify(200, Some("Thanks!".to_string())),
            Ok("Thanks!".to_string())
        );
    }

    #[test]
    fn test_200_without_server_message_uses_generic_text() {
        assert_eq!(classify(200, None), Ok(GENERIC_SUCCESS.to_string()));
    }

    #[test]
    fn test_non_200_surfaces_server_message_as_error() {
        let result = classify(422, Some("Missing access key".to_string()));
        assert_eq!(
            result,
            Err(RelayError::Rejected("Missing access key".to_string()))
        );
    }

    #[test]
    fn test_non_200_without_message_uses_generic_failure_text() {
        assert_eq!(
            classify(500, None),
            Err(RelayError::Rejected(GENERIC_FAILURE.to_string()))
        );
    }

    #[test]
    fn test_error_display_is_the_user_facing_text() {
        assert_eq!(
            RelayError::Rejected("nope".to_string()).to_string(),
            "nope"
        );
        assert_eq!(RelayError::Network.to_string(), NETWORK_FAILURE);
    }

    #[test]
    fn test_payload_serializes_flat() {
        let message = ContactMessage {
            access_key: "key".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"access_key\":\"key\""));
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }
}
