//! Checkout form and field validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    FirstName,
    LastName,
    Email,
    Address,
    City,
    ZipCode,
    Country,
}

impl CheckoutField {
    /// Every field, in form order.
    pub const ALL: [CheckoutField; 7] = [
        CheckoutField::FirstName,
        CheckoutField::LastName,
        CheckoutField::Email,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::ZipCode,
        CheckoutField::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "firstName",
            CheckoutField::LastName => "lastName",
            CheckoutField::Email => "email",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::Country => "country",
        }
    }

    /// Human-readable label, used when prompting.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "First name",
            CheckoutField::LastName => "Last name",
            CheckoutField::Email => "Email",
            CheckoutField::Address => "Address",
            CheckoutField::City => "City",
            CheckoutField::ZipCode => "Postal code",
            CheckoutField::Country => "Country",
        }
    }

    /// Message shown when the field fails validation.
    pub fn error_message(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "First name is required",
            CheckoutField::LastName => "Last name is required",
            CheckoutField::Email => "Invalid email address",
            CheckoutField::Address => "Address is required",
            CheckoutField::City => "City is required",
            CheckoutField::ZipCode => "Postal code is required",
            CheckoutField::Country => "Country is required",
        }
    }

    /// Check a single value for this field.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let valid = match self {
            CheckoutField::Email => is_valid_email(value.trim()),
            _ => !value.trim().is_empty(),
        };
        if valid {
            Ok(())
        } else {
            Err(FieldError::new(*self))
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: CheckoutField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: CheckoutField) -> Self {
        Self {
            field,
            message: field.error_message().to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All the fields that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error, Serialize, Deserialize)]
#[error("{}", summary(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error for `field`, if it failed.
    pub fn get(&self, field: CheckoutField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = CheckoutField> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Customer details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

impl CheckoutForm {
    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FirstName => &self.first_name,
            CheckoutField::LastName => &self.last_name,
            CheckoutField::Email => &self.email,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::ZipCode => &self.zip_code,
            CheckoutField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: CheckoutField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CheckoutField::FirstName => self.first_name = value,
            CheckoutField::LastName => self.last_name = value,
            CheckoutField::Email => self.email = value,
            CheckoutField::Address => self.address = value,
            CheckoutField::City => self.city = value,
            CheckoutField::ZipCode => self.zip_code = value,
            CheckoutField::Country => self.country = value,
        }
    }

    /// Fields that are still blank.
    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        CheckoutField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Validate every field, collecting all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = CheckoutField::ALL
            .into_iter()
            .filter_map(|f| f.check(self.get(f)).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    /// A copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        let mut form = Self::default();
        for field in CheckoutField::ALL {
            form.set(field, self.get(field).trim());
        }
        form
    }
}

/// One `@`, a non-empty local part, and a dotted domain whose labels are
/// alphanumeric with inner hyphens. The last label is at least two letters.
/// No whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, _)) = labels.split_last().filter(|(_, rest)| !rest.is_empty()) else {
        return false;
    };
    tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && labels.iter().all(|label| is_domain_label(label))
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
