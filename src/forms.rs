//! Typed form inputs and their validation.
//!
//! Validation never panics and never touches the database; it returns
//! field-level errors that the views feed back into the template.

use serde::Deserialize;

use crate::wg::WgSelection;

/// Raw WG checkbox submission. Browsers omit unchecked boxes entirely, so
/// each field arrives as `Some("on")` or not at all.
#[derive(Debug, Default, Deserialize)]
pub struct WgForm {
    #[serde(default)]
    pub places: Option<String>,
    #[serde(default)]
    pub people: Option<String>,
    #[serde(default)]
    pub procedures: Option<String>,
    #[serde(default)]
    pub participation: Option<String>,
}

impl WgForm {
    pub fn selection(&self) -> WgSelection {
        WgSelection {
            places: self.places.is_some(),
            people: self.people.is_some(),
            procedures: self.procedures.is_some(),
            participation: self.participation.is_some(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileEditForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub perm_address: String,
}

/// One optional message per form field; empty means the form is valid.
#[derive(Debug, Clone, Default)]
pub struct ProfileEditErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub perm_address: Option<String>,
}

impl ProfileEditErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.perm_address.is_none()
    }
}

impl ProfileEditForm {
    /// Trim every field and check it against its constraints. Name, phone and
    /// address fields may be left empty (the completeness checker nags about
    /// them instead); the email address is required.
    pub fn validate(mut self) -> Result<ProfileEditForm, (ProfileEditForm, ProfileEditErrors)> {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone_number = self.phone_number.trim().to_string();
        self.perm_address = self.perm_address.trim().to_string();

        let mut errors = ProfileEditErrors::default();

        if self.first_name.chars().count() > 150 {
            errors.first_name = Some("First name must be at most 150 characters.".to_string());
        }
        if self.last_name.chars().count() > 150 {
            errors.last_name = Some("Last name must be at most 150 characters.".to_string());
        }

        if self.email.is_empty() {
            errors.email = Some("Email address is required.".to_string());
        } else if !is_plausible_email(&self.email) {
            errors.email = Some("Enter a valid email address.".to_string());
        }

        if self.phone_number.chars().count() > 32 {
            errors.phone_number = Some("Phone number must be at most 32 characters.".to_string());
        }
        if self.perm_address.chars().count() > 256 {
            errors.perm_address =
                Some("Permanent address must be at most 256 characters.".to_string());
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err((self, errors))
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str) -> ProfileEditForm {
        ProfileEditForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            phone_number: "07000000000".to_string(),
            perm_address: "1 Cooperative Close".to_string(),
        }
    }

    #[test]
    fn unchecked_boxes_deserialize_to_false() {
        let wg: WgForm = serde_json::from_str(r#"{"places": "on", "procedures": "on"}"#).unwrap();
        let selection = wg.selection();
        assert!(selection.places && selection.procedures);
        assert!(!selection.people && !selection.participation);
    }

    #[test]
    fn valid_form_passes_and_is_trimmed() {
        let mut f = form("ada@example.coop");
        f.first_name = "  Ada ".to_string();
        let valid = f.validate().expect("form should validate");
        assert_eq!(valid.first_name, "Ada");
    }

    #[test]
    fn empty_names_are_allowed() {
        let mut f = form("ada@example.coop");
        f.first_name = String::new();
        f.last_name = String::new();
        assert!(f.validate().is_ok());
    }

    #[test]
    fn missing_email_is_rejected() {
        let f = form("");
        let (_, errors) = f.validate().unwrap_err();
        assert!(errors.email.is_some());
        assert!(errors.first_name.is_none());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["no-at-sign", "@nodomain", "user@", "user@nodot", "a b@example.coop"] {
            let (_, errors) = form(email).validate().unwrap_err();
            assert!(errors.email.is_some(), "{email} should be rejected");
        }
    }

    #[test]
    fn overlong_fields_are_rejected_per_field() {
        let mut f = form("ada@example.coop");
        f.phone_number = "9".repeat(33);
        f.perm_address = "x".repeat(257);
        let (_, errors) = f.validate().unwrap_err();
        assert!(errors.phone_number.is_some());
        assert!(errors.perm_address.is_some());
        assert!(errors.email.is_none());
    }
}
