//! Contact form route handlers.
//!
//! Messages are logged and acknowledged. Nothing is sent anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sweet_treats_core::Email;
use tracing::instrument;

use crate::content::CONTACT_THANKS;

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Check the form, returning the parsed email on success.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<Email, &'static str> {
        if self.name.trim().is_empty() || self.message.trim().is_empty() {
            return Err("Name and message are required.");
        }
        Email::parse(self.email.trim()).map_err(|_| "Please enter a valid email address.")
    }
}

/// Contact form result fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/contact_result.html")]
pub struct ContactResultTemplate {
    pub success: bool,
    pub message: &'static str,
}

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip(form))]
pub async fn submit(Form(form): Form<ContactForm>) -> Response {
    match form.validate() {
        Ok(email) => {
            tracing::info!(
                name = form.name.trim(),
                email_domain = email.domain(),
                message_len = form.message.trim().len(),
                "Contact message received"
            );
            ContactResultTemplate {
                success: true,
                message: CONTACT_THANKS,
            }
            .into_response()
        }
        Err(message) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactResultTemplate {
                success: false,
                message,
            },
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let email = form("Amina", " amina@example.com ", "Do you bake wedding cakes?").validate();
        assert_eq!(email.map(|e| e.domain().to_string()), Ok("example.com".to_string()));
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(form("  ", "a@example.com", "hi").validate().is_err());
        assert!(form("Amina", "a@example.com", "\n").validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        assert_eq!(
            form("Amina", "not-an-email", "hi").validate(),
            Err("Please enter a valid email address.")
        );
    }
}
