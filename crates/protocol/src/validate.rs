//! Local form validation.
//!
//! Every form is validated here before a request is built. A form that
//! fails validation never reaches the network.

use crate::error::{Result, ValidationError};
use crate::task::{DueDate, NewTask};
use crate::user::{Credentials, Registration, UserId};

/// Minimum password length accepted at registration, in UTF-16 code units
/// (so a character outside the BMP, such as an emoji, counts twice).
pub const MIN_PASSWORD_LEN: usize = 4;

/// Validates the login form.
///
/// The e-mail is trimmed; the password is taken as typed.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if either field is empty.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::{ValidationError, validate};
///
/// assert!(validate::login(" a@b.com ", "1234").is_ok());
/// assert_eq!(validate::login("", "1234").unwrap_err(), ValidationError::MissingFields);
/// ```
pub fn login(email: &str, password: &str) -> Result<Credentials> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(Credentials::new(email, password))
}

/// Validates the registration form.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if any field is empty, or
/// [`ValidationError::PasswordTooShort`] if the password is shorter than
/// [`MIN_PASSWORD_LEN`] UTF-16 code units.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::{ValidationError, validate};
///
/// assert!(validate::registration("Ana", "a@b.com", "1234").is_ok());
/// assert_eq!(
///     validate::registration("Ana", "a@b.com", "123").unwrap_err(),
///     ValidationError::PasswordTooShort,
/// );
/// ```
pub fn registration(name: &str, email: &str, password: &str) -> Result<Registration> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(Registration {
        name: name.to_string(),
        credentials: Credentials::new(email, password),
    })
}

/// Validates the new-task form.
///
/// Date fields that do not start with a number are sent as `0`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingDescription`] if the description is
/// empty after trimming.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::{DueDate, validate};
///
/// let task = validate::new_task(1, " comprar leite ", "", "x", "2026").unwrap();
/// assert_eq!(task.description, "comprar leite");
/// assert_eq!(task.due, DueDate::new(0, 0, 2026));
/// ```
pub fn new_task(
    user_id: UserId,
    description: &str,
    day: &str,
    month: &str,
    year: &str,
) -> Result<NewTask> {
    let description = edited_description(description)?;
    Ok(NewTask {
        user_id,
        description,
        due: DueDate::new(
            parse_date_component(day),
            parse_date_component(month),
            parse_date_component(year),
        ),
    })
}

/// Validates a description typed in the edit modal.
///
/// # Errors
///
/// Returns [`ValidationError::MissingDescription`] if the description is
/// empty after trimming.
pub fn edited_description(description: &str) -> Result<String> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    Ok(description.to_string())
}

/// Parses the leading integer of a date field, or `0` if there is none.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit, so `"12abc"` is `12` and `"abc"` is `0`.
///
/// # Examples
///
/// ```
/// use tarefas_protocol::validate::parse_date_component;
///
/// assert_eq!(parse_date_component("07"), 7);
/// assert_eq!(parse_date_component(" 12abc"), 12);
/// assert_eq!(parse_date_component(""), 0);
/// ```
#[must_use]
pub fn parse_date_component(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i32>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}
