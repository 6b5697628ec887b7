//! Contact form fields, delivery payload and boundary validation.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// A named input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Raw, user-edited form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }
}

/// Why a form failed the pre-submit checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a subject.")]
    MissingSubject,
    #[error("Please enter a message.")]
    MissingMessage,
}

/// Validated, trimmed payload handed to the delivery collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Validate and trim the raw fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing check in form order.
    pub fn from_fields(fields: &ContactFields) -> Result<Self, ValidationError> {
        let name = fields.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = fields.email.trim();
        if !is_plausible_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        let subject = fields.subject.trim();
        if subject.is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        let message = fields.message.trim();
        if message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        })
    }
}

/// Syntactic plausibility only: one `@`, a local part, and a dotted domain.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && !domain.contains("..")
}
