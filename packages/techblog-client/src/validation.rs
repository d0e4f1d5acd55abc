//! Form validation rules shared by the login and password forms.

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const MIN_LENGTH_MESSAGE: &str = "Password must be at least 8 characters long";
pub const LOWERCASE_MESSAGE: &str = "Password must contain a lowercase letter";
pub const UPPERCASE_MESSAGE: &str = "Password must contain an uppercase letter";
pub const DIGIT_MESSAGE: &str = "Password must contain a digit";
pub const RATING_MESSAGE: &str = "Rating must be between 0 and 5";

pub const PASSWORD_MIN_LENGTH: usize = 8;

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn contains_lowercase(value: &str) -> bool {
    value.chars().any(char::is_lowercase)
}

pub fn contains_uppercase(value: &str) -> bool {
    value.chars().any(char::is_uppercase)
}

pub fn contains_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// Password policy. Reports the first rule broken.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if !has_min_length(password, PASSWORD_MIN_LENGTH) {
        Err(MIN_LENGTH_MESSAGE)
    } else if !contains_lowercase(password) {
        Err(LOWERCASE_MESSAGE)
    } else if !contains_uppercase(password) {
        Err(UPPERCASE_MESSAGE)
    } else if !contains_digit(password) {
        Err(DIGIT_MESSAGE)
    } else {
        Ok(())
    }
}

pub fn validate_rating(rating: f64) -> Result<(), &'static str> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(RATING_MESSAGE)
    }
}

/// Per-field messages for the login form. Empty fields mean no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Username is required. An empty password is allowed (first login); a
/// non-empty one must satisfy the password policy.
pub fn validate_login(username: &str, password: &str) -> Result<(), LoginFormErrors> {
    let errors = LoginFormErrors {
        username: (!is_present(username)).then_some(REQUIRED_MESSAGE),
        password: if password.is_empty() {
            None
        } else {
            validate_password(password).err()
        },
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(validate_password("Ab1"), Err(MIN_LENGTH_MESSAGE));
        assert_eq!(validate_password("ABCDEFG1"), Err(LOWERCASE_MESSAGE));
        assert_eq!(validate_password("abcdefg1"), Err(UPPERCASE_MESSAGE));
        assert_eq!(validate_password("Abcdefgh"), Err(DIGIT_MESSAGE));
        assert_eq!(validate_password("Abcdefg1"), Ok(()));
    }

    #[test]
    fn test_login_allows_empty_password() {
        assert_eq!(validate_login("jan", ""), Ok(()));
    }

    #[test]
    fn test_login_reports_both_fields() {
        let errors = validate_login("  ", "short").unwrap_err();
        assert_eq!(errors.username, Some(REQUIRED_MESSAGE));
        assert_eq!(errors.password, Some(MIN_LENGTH_MESSAGE));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.7).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-0.5).is_err());
    }
}
