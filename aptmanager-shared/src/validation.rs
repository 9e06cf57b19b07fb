//! Validation logic for the login and registration forms.
//!
//! Each field check returns the first problem it finds. Form-level
//! `validate` collects one error per failing field so the page can annotate
//! every input at once.

use crate::models::UserProfile;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 6;

// Lengths are counted in UTF-16 code units, the way the browser measures a
// string, so a single emoji counts as two.
fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

// Local part may not start with a dot or contain ".."; those two rules are
// checked separately because `regex` has no lookahead.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Form inputs that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Full name (registration only).
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Password confirmation (registration only).
    ConfirmPassword,
}

/// Field-level validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Password field is empty.
    PasswordRequired,
    /// Email address is not well formed.
    InvalidEmail,
    /// Name is shorter than two characters.
    NameTooShort,
    /// Password is shorter than six characters.
    PasswordTooShort,
    /// Password confirmation doesn't match password.
    PasswordsDoNotMatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PasswordRequired => "Password is required",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::NameTooShort => "Name must be at least 2 characters",
            Self::PasswordTooShort => "Password must be at least 6 characters",
            Self::PasswordsDoNotMatch => "Passwords do not match",
        })
    }
}

/// Validates an email address.
///
/// # Errors
/// [`ValidationError::InvalidEmail`] when the address is empty or malformed.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let local = email.split('@').next().unwrap_or_default();
    if local.starts_with('.') || email.contains("..") || !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates the password entered at login. Any non-empty value passes.
///
/// # Errors
/// [`ValidationError::PasswordRequired`] when the password is empty.
pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// Validates the name entered at registration.
///
/// # Errors
/// [`ValidationError::NameTooShort`] under two characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if input_length(name) < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// Validates the password chosen at registration.
///
/// # Errors
/// [`ValidationError::PasswordTooShort`] under six characters.
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if input_length(password) < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
///
/// # Errors
/// [`ValidationError::PasswordsDoNotMatch`] when the two differ.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Errors collected over a whole form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(Field, ValidationError)>,
}

impl FormErrors {
    fn check(&mut self, field: Field, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.errors.push((field, error));
        }
    }

    fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// The error for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors
            .iter()
            .find(|(failed, _)| *failed == field)
            .map(|(_, error)| *error)
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Field, ValidationError)> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a FormErrors {
    type Item = &'a (Field, ValidationError);
    type IntoIter = std::slice::Iter<'a, (Field, ValidationError)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values submitted on the login page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address.
    pub email: String,
    /// Password; checked for presence only.
    pub password: String,
    /// "Remember me" checkbox. Has no effect on the session.
    pub remember_me: bool,
}

impl LoginForm {
    /// Validate every field.
    ///
    /// # Errors
    /// Returns the failing fields.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Password, validate_login_password(&self.password));
        errors.into_result()
    }

    /// Profile stored after a successful login.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile::from_email(self.email.clone())
    }
}

/// Values submitted on the registration page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Repeated password.
    pub confirm_password: String,
}

impl RegisterForm {
    /// Validate every field.
    ///
    /// The confirmation is only compared once all other fields pass.
    ///
    /// # Errors
    /// Returns the failing fields.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Name, validate_name(&self.name));
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Password, validate_new_password(&self.password));
        if errors.is_empty() {
            errors.check(
                Field::ConfirmPassword,
                validate_confirm_password(&self.confirm_password, &self.password),
            );
        }
        errors.into_result()
    }

    /// Profile stored after a successful registration.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile::new(self.name.clone(), self.email.clone())
    }
}
