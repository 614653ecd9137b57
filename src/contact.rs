//! Simulated contact form.
//!
//! Nothing is sent anywhere: a complete submission is logged and
//! acknowledged, an incomplete one is rejected with the fields left intact.

use thiserror::Error;

/// Current contents of the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub message: String,
}

/// A submission that passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("email and message are required")]
    Incomplete,
}

impl ContactForm {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
        }
    }

    /// Both fields must be non-empty after trimming
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let email = self.email.trim();
        let message = self.message.trim();
        if email.is_empty() || message.is_empty() {
            return Err(ContactError::Incomplete);
        }
        Ok(ContactMessage {
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_form_is_trimmed() {
        let msg = ContactForm::new("  a@b.com ", "\thello\n").validate().unwrap();
        assert_eq!(msg.email, "a@b.com");
        assert_eq!(msg.message, "hello");
    }

    #[test]
    fn blank_fields_are_rejected() {
        for (email, message) in [("a@b.com", ""), ("", "hi"), ("   ", "hi"), ("a@b.com", " \n ")] {
            assert_eq!(
                ContactForm::new(email, message).validate(),
                Err(ContactError::Incomplete),
                "email={email:?} message={message:?}"
            );
        }
    }
}
