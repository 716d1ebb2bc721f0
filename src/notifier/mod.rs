//! # Notifier
//!
//! Best-effort outbound email alert fired after a successful signup.
//!
//! The send is one-shot: no retry, no queue, no delivery guarantee. Failures
//! are logged at the dispatch site and never affect the HTTP response.

pub mod errors;

pub use errors::{NotifierError, NotifierResult};

use std::sync::Arc;

/// SMTP configuration for the outbound notifier
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// SMTP server host
    pub smtp_host: String,

    /// SMTP server port
    pub smtp_port: u16,

    /// SMTP username (empty for unauthenticated local servers)
    pub smtp_user: String,

    /// SMTP password (should come from secrets)
    pub smtp_password: String,

    /// From email address
    pub from_email: String,

    /// From name
    pub from_name: String,

    /// Address that receives signup alerts
    pub to_email: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_email: "noreply@earlybird.local".to_string(),
            from_name: "Earlybird".to_string(),
            to_email: "admin@earlybird.local".to_string(),
        }
    }
}

/// Notifier trait for abstraction
pub trait Notifier: Send + Sync {
    /// Send a one-shot alert for a newly captured email address
    fn notify(&self, email_added: &str) -> NotifierResult<()>;
}

/// Mock notifier for testing
#[derive(Debug, Default)]
pub struct MockNotifier {
    /// Notified addresses (for testing)
    pub sent: std::sync::RwLock<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of sent notifications
    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, email_added: &str) -> NotifierResult<()> {
        self.sent.write().unwrap().push(email_added.to_string());
        Ok(())
    }
}

/// SMTP notifier
pub struct SmtpNotifier {
    config: NotifierConfig,
}

impl SmtpNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    fn render_message(&self, email_added: &str) -> (String, String) {
        let subject = "New early adopter signup".to_string();
        let body = format!(
            "A new email was added to the early adopters list: {}",
            email_added
        );
        (subject, body)
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, email_added: &str) -> NotifierResult<()> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials, Message,
            SmtpTransport, Transport,
        };

        let (subject, body) = self.render_message(email_added);

        let email = Message::builder()
            .from(
                format!("{} <{}>", self.config.from_name, self.config.from_email)
                    .parse()
                    .map_err(|e| {
                        NotifierError::InvalidAddress(format!("Invalid from address: {}", e))
                    })?,
            )
            .to(self.config.to_email.parse().map_err(|e| {
                NotifierError::InvalidAddress(format!("Invalid to address: {}", e))
            })?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifierError::BuildFailed(e.to_string()))?;

        let mailer = if self.config.smtp_user.is_empty() {
            // No authentication (for local development SMTP servers)
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_user.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| NotifierError::SendFailed(format!("SMTP relay error: {}", e)))?
                .credentials(creds)
                .port(self.config.smtp_port)
                .build()
        };

        mailer
            .send(&email)
            .map_err(|e| NotifierError::SendFailed(e.to_string()))?;

        Ok(())
    }
}

/// Create a boxed notifier when SMTP is configured
pub fn create_notifier(config: Option<NotifierConfig>) -> Option<Arc<dyn Notifier>> {
    config.map(|cfg| Arc::new(SmtpNotifier::new(cfg)) as Arc<dyn Notifier>)
}
