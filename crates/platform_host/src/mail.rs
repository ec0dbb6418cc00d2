//! Outbound mail contracts used by the mail compose panel.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`MailService`].
pub type MailFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Subject used on the wire when the visitor leaves the subject blank.
pub const FALLBACK_SUBJECT: &str = "No Subject";

/// A composed message handed to the mail collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line as typed.
    pub subject: String,
    /// Plain-text body as typed.
    pub body: String,
}

impl MailMessage {
    /// Builds a message from the three compose fields.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Subject sent to the endpoint, falling back to [`FALLBACK_SUBJECT`] when blank.
    pub fn wire_subject(&self) -> &str {
        if self.subject.trim().is_empty() {
            FALLBACK_SUBJECT
        } else {
            &self.subject
        }
    }

    /// HTML rendering of the message with markup escaped and newlines turned into `<br/>`.
    pub fn html_body(&self) -> String {
        let body = escape_html(&self.body).replace('\n', "<br/>");
        format!(
            "<html><body><h3>Message sent via XP Portfolio</h3><p><strong>Subject:</strong> {}</p><hr /><p>{}</p></body></html>",
            escape_html(&self.subject),
            body
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Failure reported by a [`MailService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// No endpoint credentials were compiled into this build.
    #[error("mail delivery is not configured")]
    NotConfigured,
    /// The endpoint answered with a non-success status.
    #[error("mail endpoint rejected the message ({status}): {detail}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        detail: String,
    },
    /// The request never produced a response.
    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// Host service that delivers one composed message.
pub trait MailService {
    /// Sends `message`; the caller neither inspects nor retries the outcome beyond display.
    fn send<'a>(&'a self, message: &'a MailMessage) -> MailFuture<'a, Result<(), MailError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Mail service for targets without a configured endpoint; every send fails with
/// [`MailError::NotConfigured`].
pub struct UnconfiguredMailService;

impl MailService for UnconfiguredMailService {
    fn send<'a>(&'a self, _message: &'a MailMessage) -> MailFuture<'a, Result<(), MailError>> {
        Box::pin(async { Err(MailError::NotConfigured) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory mail service that records every message and optionally fails.
pub struct RecordingMailService {
    sent: Rc<RefCell<Vec<MailMessage>>>,
    failure: Option<MailError>,
}

impl RecordingMailService {
    /// Returns a recorder whose sends all fail with `error` (messages are still recorded).
    pub fn failing(error: MailError) -> Self {
        Self {
            sent: Rc::default(),
            failure: Some(error),
        }
    }

    /// Messages received so far, oldest first.
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.borrow().clone()
    }
}

impl MailService for RecordingMailService {
    fn send<'a>(&'a self, message: &'a MailMessage) -> MailFuture<'a, Result<(), MailError>> {
        Box::pin(async move {
            self.sent.borrow_mut().push(message.clone());
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_subject_falls_back_on_the_wire() {
        let message = MailMessage::new("me@example.com", "   ", "hi");
        assert_eq!(message.wire_subject(), FALLBACK_SUBJECT);

        let message = MailMessage::new("me@example.com", "Hello", "hi");
        assert_eq!(message.wire_subject(), "Hello");
    }

    #[test]
    fn html_body_escapes_markup_and_breaks_lines() {
        let message = MailMessage::new("me@example.com", "<b>", "line one\nline <two>");
        let html = message.html_body();
        assert!(html.contains("<strong>Subject:</strong> &lt;b&gt;"));
        assert!(html.contains("<p>line one<br/>line &lt;two&gt;</p>"));
    }

    #[test]
    fn recording_service_keeps_messages_and_reports_configured_failure() {
        let ok = RecordingMailService::default();
        let service: &dyn MailService = &ok;
        let message = MailMessage::new("me@example.com", "Hi", "Body");
        block_on(service.send(&message)).expect("send");
        assert_eq!(ok.sent(), vec![message.clone()]);

        let failing = RecordingMailService::failing(MailError::Transport("offline".to_string()));
        let service: &dyn MailService = &failing;
        assert_eq!(
            block_on(service.send(&message)),
            Err(MailError::Transport("offline".to_string()))
        );
        assert_eq!(failing.sent().len(), 1);
    }

    #[test]
    fn unconfigured_service_always_fails() {
        let service = UnconfiguredMailService;
        let message = MailMessage::new("me@example.com", "Hi", "Body");
        assert_eq!(block_on(service.send(&message)), Err(MailError::NotConfigured));
        assert_eq!(
            MailError::NotConfigured.to_string(),
            "mail delivery is not configured"
        );
    }
}
