//! Transactional-mail adapter: one JSON POST per composed message.

use platform_host::{MailError, MailFuture, MailMessage, MailService};
use serde_json::{json, Value};

/// Endpoint used when the build does not override `PORTFOLIO_MAIL_ENDPOINT`.
pub const DEFAULT_MAIL_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

const SENDER_NAME: &str = "XP Portfolio Visitor";
const SENDER_EMAIL: &str = "affanlodhi2004@gmail.com";

/// Endpoint location and credentials, fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailEndpointConfig {
    /// POST target.
    pub endpoint: String,
    /// API key header value; `None` disables delivery.
    pub api_key: Option<String>,
}

impl MailEndpointConfig {
    /// Reads `PORTFOLIO_MAIL_ENDPOINT` and `PORTFOLIO_MAIL_API_KEY` captured at compile time.
    pub fn from_build_env() -> Self {
        Self {
            endpoint: option_env!("PORTFOLIO_MAIL_ENDPOINT")
                .unwrap_or(DEFAULT_MAIL_ENDPOINT)
                .to_string(),
            api_key: option_env!("PORTFOLIO_MAIL_API_KEY")
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        }
    }
}

/// JSON request body for `message`.
pub fn request_payload(message: &MailMessage) -> Value {
    json!({
        "sender": { "name": SENDER_NAME, "email": SENDER_EMAIL },
        "to": [{ "email": message.to }],
        "subject": message.wire_subject(),
        "htmlContent": message.html_body(),
    })
}

#[derive(Debug, Clone)]
/// Browser mail adapter backed by `fetch`.
pub struct WebMailService {
    config: MailEndpointConfig,
}

impl WebMailService {
    /// Creates an adapter for `config`.
    pub fn new(config: MailEndpointConfig) -> Self {
        Self { config }
    }
}

impl MailService for WebMailService {
    fn send<'a>(&'a self, message: &'a MailMessage) -> MailFuture<'a, Result<(), MailError>> {
        Box::pin(async move {
            #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
            let Some(api_key) = self.config.api_key.as_deref() else {
                return Err(MailError::NotConfigured);
            };
            #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
            let body = request_payload(message).to_string();

            #[cfg(target_arch = "wasm32")]
            {
                post_json(&self.config.endpoint, api_key, &body).await
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err(MailError::Transport(
                    "mail delivery requires a browser host".to_string(),
                ))
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_json(endpoint: &str, api_key: &str, body: &str) -> Result<(), MailError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let transport = |err: JsValue| MailError::Transport(format!("{err:?}"));

    let headers = web_sys::Headers::new().map_err(transport)?;
    headers.set("accept", "application/json").map_err(transport)?;
    headers.set("api-key", api_key).map_err(transport)?;
    headers
        .set("content-type", "application/json")
        .map_err(transport)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(endpoint, &init).map_err(transport)?;
    let window = web_sys::window()
        .ok_or_else(|| MailError::Transport("no window available".to_string()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if response.ok() {
        return Ok(());
    }

    let detail = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|text| text.as_string())
            .unwrap_or_else(|| response.status_text()),
        Err(_) => response.status_text(),
    };
    Err(MailError::Rejected {
        status: response.status(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn payload_carries_recipient_subject_and_html() {
        let message = MailMessage::new("visitor@example.com", "", "Hi\nthere");
        let payload = request_payload(&message);
        assert_eq!(payload["to"][0]["email"], "visitor@example.com");
        assert_eq!(payload["subject"], "No Subject");
        assert_eq!(payload["sender"]["name"], SENDER_NAME);
        assert!(payload["htmlContent"]
            .as_str()
            .expect("html")
            .contains("Hi<br/>there"));
    }

    #[test]
    fn missing_api_key_reports_not_configured() {
        let service = WebMailService::new(MailEndpointConfig {
            endpoint: DEFAULT_MAIL_ENDPOINT.to_string(),
            api_key: None,
        });
        let message = MailMessage::new("visitor@example.com", "Hi", "Body");
        assert_eq!(block_on(service.send(&message)), Err(MailError::NotConfigured));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn configured_service_needs_a_browser_transport() {
        let service = WebMailService::new(MailEndpointConfig {
            endpoint: DEFAULT_MAIL_ENDPOINT.to_string(),
            api_key: Some("key".to_string()),
        });
        let message = MailMessage::new("visitor@example.com", "Hi", "Body");
        assert!(matches!(
            block_on(service.send(&message)),
            Err(MailError::Transport(_))
        ));
    }
}
