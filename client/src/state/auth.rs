//! Login and signup form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header's login/signup modals build their request bodies here so the
//! checks can run without a browser. Only institutional addresses may sign
//! up; login accepts any address and leaves the decision to the API.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::{LoginRequest, SignupRequest};

/// Address suffix required for new accounts.
pub const INSTITUTION_DOMAIN: &str = "@ashesi.edu.gh";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupError {
    MissingField,
    ForeignDomain,
    PasswordMismatch,
}

impl SignupError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingField => "Please fill in all fields",
            Self::ForeignDomain => "Only Ashesi email addresses are allowed",
            Self::PasswordMismatch => "Passwords do not match",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// `None` while either field is blank.
    pub fn request(&self) -> Option<LoginRequest> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return None;
        }
        Some(LoginRequest { email: email.to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Build the signup body.
    ///
    /// # Errors
    ///
    /// Returns the first failed check; nothing should be sent.
    pub fn validate(&self) -> Result<SignupRequest, SignupError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(SignupError::MissingField);
        }
        if !email.to_lowercase().ends_with(INSTITUTION_DOMAIN) {
            return Err(SignupError::ForeignDomain);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(SignupRequest {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }
}
