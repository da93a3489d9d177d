//! Outbound Email (stub)
//!
//! Delivery is out of scope; messages are logged instead of sent so the
//! reset flow can be exercised end to end without an SMTP dependency.

/// An outbound email message
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// "Send" an email by logging it.
pub fn send_email(message: &EmailMessage) {
    tracing::info!(
        to = %message.to,
        subject = %message.subject,
        "Email send (stub)"
    );
}
