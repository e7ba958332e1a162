//! Form Validation
//!
//! Pure client-side checks. A form with field errors never issues a network
//! call; the `general` slot is reserved for errors the server sends back.

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 2000;
pub const PASSWORD_MIN: usize = 8;

/// Per-field error slots plus a general slot for structured API errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub general: Option<String>,
}

impl FieldErrors {
    /// Field errors block submission; a stale `general` error does not
    pub fn has_field_errors(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.email.is_some()
            || self.password.is_some()
    }
}

pub fn validate_task_form(title: &str, description: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if title.trim().is_empty() {
        errors.title = Some("Title is required".to_string());
    } else if title.chars().count() > TITLE_MAX {
        errors.title = Some(format!("Title must be {} characters or less", TITLE_MAX));
    }

    if description.chars().count() > DESCRIPTION_MAX {
        errors.description = Some(format!(
            "Description must be {} characters or less",
            DESCRIPTION_MAX
        ));
    }

    errors
}

pub fn validate_auth_form(email: &str, password: &str, is_register: bool) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if email.is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.email = Some("Invalid email format".to_string());
    }

    if password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if is_register && password.chars().count() < PASSWORD_MIN {
        errors.password = Some(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN
        ));
    }

    errors
}

/// Simple `local@domain.tld` shape check; real validation happens server-side
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    let sane = |chunk: &str| !chunk.is_empty() && !chunk.chars().any(char::is_whitespace);
    match domain.rsplit_once('.') {
        Some((host, tld)) => sane(local) && sane(host) && sane(tld),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_rejected() {
        let errors = validate_task_form("", "");
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert!(errors.has_field_errors());
    }

    #[test]
    fn test_whitespace_title_is_rejected() {
        let errors = validate_task_form("   ", "");
        assert!(errors.title.is_some());
    }

    #[test]
    fn test_title_over_limit_is_rejected() {
        let title = "x".repeat(TITLE_MAX + 1);
        let errors = validate_task_form(&title, "");
        assert!(errors.title.is_some());

        let at_limit = "x".repeat(TITLE_MAX);
        assert!(!validate_task_form(&at_limit, "").has_field_errors());
    }

    #[test]
    fn test_description_over_limit_is_rejected() {
        let description = "d".repeat(DESCRIPTION_MAX + 1);
        let errors = validate_task_form("ok", &description);
        assert!(errors.description.is_some());
        assert!(errors.title.is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("name@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("name"));
        assert!(!is_valid_email("name@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("name@.com"));
        assert!(!is_valid_email("na me@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_password_rules_differ_by_mode() {
        // login accepts any non-empty password
        assert!(!validate_auth_form("a@b.co", "short", false).has_field_errors());
        // registration enforces the minimum length
        let errors = validate_auth_form("a@b.co", "short", true);
        assert!(errors.password.is_some());
        assert!(!validate_auth_form("a@b.co", "longenough", true).has_field_errors());
    }

    #[test]
    fn test_general_error_does_not_block() {
        let errors = FieldErrors {
            general: Some("server said no".to_string()),
            ..Default::default()
        };
        assert!(!errors.has_field_errors());
    }
}
