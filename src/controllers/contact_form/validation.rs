use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Something non-space and non-`@`, an `@`, then a dotted domain of the same.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
    #[error("email address is malformed")]
    InvalidEmailFormat,
}

/// Contact form values as read at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }

    /// Check emptiness of every field first, then the email shape.
    ///
    /// Expects already trimmed values.
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmailFormat);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
