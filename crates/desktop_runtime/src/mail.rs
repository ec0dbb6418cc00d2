//! Compose-form state machine for the mail panel.
//!
//! The form itself never talks to the network. Sending returns a [`MailEffect::Send`] intent that
//! the host turns into a [`platform_host::MailService`] call, and the result comes back as
//! [`MailAction::SendFinished`].

use platform_host::MailMessage;

use crate::content::PROFILE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeStatus {
    #[default]
    Closed,
    Editing,
    Sending,
    Sent,
}

/// Inline notice shown under the compose form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeNotice {
    Invalid(&'static str),
    Failed(String),
    Sent,
}

impl ComposeNotice {
    pub fn text(&self) -> String {
        match self {
            Self::Invalid(reason) => (*reason).to_string(),
            Self::Failed(detail) => format!("Failed to send email. Error: {detail}"),
            Self::Sent => "Message sent successfully!".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Sent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailCompose {
    pub status: ComposeStatus,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub notice: Option<ComposeNotice>,
}

impl Default for MailCompose {
    fn default() -> Self {
        Self {
            status: ComposeStatus::Closed,
            to: PROFILE.email.to_string(),
            subject: String::new(),
            body: String::new(),
            notice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailAction {
    OpenCompose,
    CloseCompose,
    SetTo(String),
    SetSubject(String),
    SetBody(String),
    Send,
    SendFinished(Result<(), String>),
    ResetAfterSend,
}

/// Work the compose form asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailEffect {
    Send(MailMessage),
    ScheduleReset,
}

impl MailCompose {
    pub fn is_open(&self) -> bool {
        self.status != ComposeStatus::Closed
    }

    /// Whether the send button accepts clicks.
    pub fn can_send(&self) -> bool {
        self.status == ComposeStatus::Editing
    }

    fn validate(&self) -> Result<(), &'static str> {
        if !self.to.contains('@') {
            return Err("Please enter a valid recipient address.");
        }
        if self.subject.trim().is_empty() {
            return Err("Please enter a subject.");
        }
        if self.body.trim().is_empty() {
            return Err("Please type a message.");
        }
        Ok(())
    }

    pub fn apply(&mut self, action: MailAction) -> Option<MailEffect> {
        match action {
            MailAction::OpenCompose => {
                if self.status == ComposeStatus::Closed {
                    self.status = ComposeStatus::Editing;
                    self.notice = None;
                }
                None
            }
            MailAction::CloseCompose => {
                // An in-flight send keeps the form up until it resolves.
                match self.status {
                    ComposeStatus::Editing => {
                        self.status = ComposeStatus::Closed;
                        self.notice = None;
                    }
                    ComposeStatus::Sent => self.reset_after_send(),
                    ComposeStatus::Closed | ComposeStatus::Sending => {}
                }
                None
            }
            MailAction::SetTo(value) => {
                if self.status == ComposeStatus::Editing {
                    self.to = value;
                }
                None
            }
            MailAction::SetSubject(value) => {
                if self.status == ComposeStatus::Editing {
                    self.subject = value;
                }
                None
            }
            MailAction::SetBody(value) => {
                if self.status == ComposeStatus::Editing {
                    self.body = value;
                }
                None
            }
            MailAction::Send => {
                if !self.can_send() {
                    return None;
                }
                if let Err(reason) = self.validate() {
                    self.notice = Some(ComposeNotice::Invalid(reason));
                    return None;
                }
                self.status = ComposeStatus::Sending;
                self.notice = None;
                Some(MailEffect::Send(MailMessage::new(
                    self.to.clone(),
                    self.subject.clone(),
                    self.body.clone(),
                )))
            }
            MailAction::SendFinished(result) => {
                if self.status != ComposeStatus::Sending {
                    return None;
                }
                match result {
                    Ok(()) => {
                        self.status = ComposeStatus::Sent;
                        self.notice = Some(ComposeNotice::Sent);
                        Some(MailEffect::ScheduleReset)
                    }
                    Err(detail) => {
                        self.status = ComposeStatus::Editing;
                        self.notice = Some(ComposeNotice::Failed(detail));
                        None
                    }
                }
            }
            MailAction::ResetAfterSend => {
                if self.status == ComposeStatus::Sent {
                    self.reset_after_send();
                }
                None
            }
        }
    }

    fn reset_after_send(&mut self) {
        self.status = ComposeStatus::Closed;
        self.subject.clear();
        self.body.clear();
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn editing(subject: &str, body: &str) -> MailCompose {
        let mut compose = MailCompose::default();
        compose.apply(MailAction::OpenCompose);
        compose.apply(MailAction::SetSubject(subject.to_string()));
        compose.apply(MailAction::SetBody(body.to_string()));
        compose
    }

    #[test]
    fn recipient_defaults_to_profile_address() {
        assert_eq!(MailCompose::default().to, "affanlodhi2004@gmail.com");
        assert!(!MailCompose::default().is_open());
    }

    #[test]
    fn send_emits_message_and_enters_sending() {
        let mut compose = editing("Hello", "Line one\nLine two");
        let effect = compose.apply(MailAction::Send);
        assert_eq!(
            effect,
            Some(MailEffect::Send(MailMessage::new(
                "affanlodhi2004@gmail.com",
                "Hello",
                "Line one\nLine two"
            )))
        );
        assert_eq!(compose.status, ComposeStatus::Sending);
        assert_eq!(compose.apply(MailAction::Send), None);
    }

    #[test]
    fn invalid_fields_keep_editing_with_notice() {
        let mut compose = editing("", "body");
        assert_eq!(compose.apply(MailAction::Send), None);
        assert_eq!(compose.status, ComposeStatus::Editing);
        assert_eq!(
            compose.notice,
            Some(ComposeNotice::Invalid("Please enter a subject."))
        );

        compose.apply(MailAction::SetSubject("Hi".to_string()));
        compose.apply(MailAction::SetTo("not-an-address".to_string()));
        assert_eq!(compose.apply(MailAction::Send), None);
        assert_eq!(
            compose.notice,
            Some(ComposeNotice::Invalid(
                "Please enter a valid recipient address."
            ))
        );
    }

    #[test]
    fn success_schedules_reset_that_keeps_recipient() {
        let mut compose = editing("Hello", "Body");
        compose.apply(MailAction::SetTo("visitor@example.com".to_string()));
        compose.apply(MailAction::Send);

        assert_eq!(
            compose.apply(MailAction::SendFinished(Ok(()))),
            Some(MailEffect::ScheduleReset)
        );
        assert_eq!(compose.status, ComposeStatus::Sent);
        assert_eq!(
            compose.notice.as_ref().map(ComposeNotice::text),
            Some("Message sent successfully!".to_string())
        );

        compose.apply(MailAction::ResetAfterSend);
        assert_eq!(compose.status, ComposeStatus::Closed);
        assert_eq!(compose.to, "visitor@example.com");
        assert!(compose.subject.is_empty());
        assert!(compose.body.is_empty());
        assert_eq!(compose.notice, None);
    }

    #[test]
    fn failure_returns_to_editing_with_fields_intact() {
        let mut compose = editing("Hello", "Body");
        compose.apply(MailAction::Send);
        assert_eq!(
            compose.apply(MailAction::SendFinished(Err("401".to_string()))),
            None
        );
        assert_eq!(compose.status, ComposeStatus::Editing);
        assert_eq!(compose.subject, "Hello");
        assert_eq!(
            compose.notice,
            Some(ComposeNotice::Failed("401".to_string()))
        );
    }

    #[test]
    fn stale_results_and_resets_are_ignored() {
        let mut compose = editing("Hello", "Body");
        let before = compose.clone();
        compose.apply(MailAction::SendFinished(Ok(())));
        compose.apply(MailAction::ResetAfterSend);
        assert_eq!(compose, before);
    }

    #[test]
    fn close_is_refused_while_sending() {
        let mut compose = editing("Hello", "Body");
        compose.apply(MailAction::Send);
        compose.apply(MailAction::CloseCompose);
        assert_eq!(compose.status, ComposeStatus::Sending);
    }
}
