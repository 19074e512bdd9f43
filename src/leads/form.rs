use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const MAX_MESSAGE_CHARS: usize = 2000;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Contact form fields, posted as `{ name, email, phone, message }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

/// Inline messages keyed by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl LeadForm {
    pub fn new(name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    /// Check every field; all problems are reported at once
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(Field::Name, "Please enter your name");
        } else if name.chars().count() < 2 {
            errors.insert(Field::Name, "Name must be at least 2 characters");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, "Please enter your email address");
        } else if !EMAIL.is_match(email) {
            errors.insert(Field::Email, "Please enter a valid email address");
        }

        let phone = self.phone.trim();
        if !phone.is_empty() {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            let allowed = phone
                .chars()
                .all(|c| c.is_ascii_digit() || " ()+-.".contains(c));
            if !allowed || !(10..=15).contains(&digits) {
                errors.insert(Field::Phone, "Please enter a valid phone number");
            }
        }

        if self.message.trim().chars().count() > MAX_MESSAGE_CHARS {
            errors.insert(Field::Message, "Message must be 2000 characters or fewer");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy with surrounding whitespace removed, as sent to the endpoint
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
