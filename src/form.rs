//! Contact form state, validation, and the relay payload.
//!
//! Validation is pure so the submit-blocking rules can be tested off the
//! browser; the frontend component only wires events to these functions and
//! ships `RelayRequest` as JSON to the email relay.

use serde::Serialize;
use std::collections::BTreeMap;

/// Fixed recipient for every relayed message.
pub const TO_EMAIL: &str = "harshshandilya1605@gmail.com";

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const RELAY_SERVICE_ID: &str = match option_env!("EMAILJS_SERVICE_ID") {
    Some(id) => id,
    None => "service_portfolio",
};
pub const RELAY_TEMPLATE_ID: &str = match option_env!("EMAILJS_TEMPLATE_ID") {
    Some(id) => id,
    None => "template_contact",
};
pub const RELAY_PUBLIC_KEY: &str = match option_env!("EMAILJS_PUBLIC_KEY") {
    Some(key) => key,
    None => "",
};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum FormField {
    FromName,
    FromEmail,
    Subject,
    Message,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FromName => "from_name",
            Self::FromEmail => "from_email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

pub type FieldErrors = BTreeMap<FormField, &'static str>;

impl ContactMessage {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FromName => self.from_name = value,
            FormField::FromEmail => self.from_email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Field-scoped errors; submission is blocked while any remain.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.from_name.trim().is_empty() {
            errors.insert(FormField::FromName, "Name is required");
        }
        if self.from_email.trim().is_empty() {
            errors.insert(FormField::FromEmail, "Email is required");
        } else if !email_looks_valid(self.from_email.trim()) {
            errors.insert(FormField::FromEmail, "Email is invalid");
        }
        if self.subject.trim().is_empty() {
            errors.insert(FormField::Subject, "Subject is required");
        }
        if self.message.trim().is_empty() {
            errors.insert(FormField::Message, "Message is required");
        }

        errors
    }
}

/// Same shape the relay template expects: non-empty local part, `@`, and a
/// dot somewhere in the domain. Deliverability is the relay's problem.
pub fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: &'static str,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct RelayRequest {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub user_id: &'static str,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(message: &ContactMessage) -> Self {
        Self {
            service_id: RELAY_SERVICE_ID,
            template_id: RELAY_TEMPLATE_ID,
            user_id: RELAY_PUBLIC_KEY,
            template_params: TemplateParams {
                from_name: message.from_name.trim().to_string(),
                from_email: message.from_email.trim().to_string(),
                subject: message.subject.trim().to_string(),
                message: message.message.trim().to_string(),
                to_email: TO_EMAIL,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_yields_four_field_errors() {
        let mut form = ContactMessage::default();
        form.set(FormField::FromEmail, "jane.example.com".to_string());

        let errors = form.validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&FormField::FromName], "Name is required");
        assert_eq!(errors[&FormField::FromEmail], "Email is invalid");
        assert_eq!(errors[&FormField::Subject], "Subject is required");
        assert_eq!(errors[&FormField::Message], "Message is required");
    }

    #[test]
    fn corrected_form_passes_and_builds_the_relay_payload() {
        let form = ContactMessage {
            from_name: "Jane Doe".to_string(),
            from_email: "jane@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert!(form.validate().is_empty());

        let request = RelayRequest::new(&form);
        assert_eq!(request.template_params.from_name, "Jane Doe");
        assert_eq!(request.template_params.from_email, "jane@example.com");
        assert_eq!(request.template_params.subject, "Hi");
        assert_eq!(request.template_params.message, "Hello");
        assert_eq!(request.template_params.to_email, TO_EMAIL);

        let json = serde_json::to_value(&request).expect("payload serializes");
        assert_eq!(json["template_params"]["to_email"], TO_EMAIL);
        assert!(json["service_id"].is_string());
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let form = ContactMessage {
            from_name: "   ".to_string(),
            from_email: " ".to_string(),
            subject: "\t".to_string(),
            message: "\n".to_string(),
        };
        assert_eq!(form.validate().len(), 4);
    }

    #[test]
    fn email_shape_checks() {
        assert!(email_looks_valid("jane@example.com"));
        assert!(email_looks_valid("j.doe+tag@mail.example.org"));
        assert!(!email_looks_valid("janeexample.com"));
        assert!(!email_looks_valid("@example.com"));
        assert!(!email_looks_valid("jane@example"));
        assert!(!email_looks_valid("jane@.com"));
        assert!(!email_looks_valid("jane doe@example.com"));
    }
}
