//! Client-side checks run before a sign-in or sign-up request is sent.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::NewUser;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email address already exists";

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns every missing-field message at once.
pub fn validate_sign_in(email_address: &str, password: &str) -> Result<(String, String), Vec<String>> {
    let email_address = email_address.trim();
    let mut errors = Vec::new();
    if email_address.is_empty() {
        errors.push("Email address is required".to_owned());
    }
    if password.is_empty() {
        errors.push("Password is required".to_owned());
    }
    if errors.is_empty() { Ok((email_address.to_owned(), password.to_owned())) } else { Err(errors) }
}

/// Trim names and email, require all four fields, and build the request body.
///
/// # Errors
///
/// Returns every missing-field message at once.
pub fn validate_sign_up(
    first_name: &str,
    last_name: &str,
    email_address: &str,
    password: &str,
) -> Result<NewUser, Vec<String>> {
    let (first_name, last_name, email_address) = (first_name.trim(), last_name.trim(), email_address.trim());
    let mut errors = Vec::new();
    if first_name.is_empty() {
        errors.push("First name is required".to_owned());
    }
    if last_name.is_empty() {
        errors.push("Last name is required".to_owned());
    }
    if email_address.is_empty() {
        errors.push("Email address is required".to_owned());
    }
    if password.is_empty() {
        errors.push("Password is required".to_owned());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewUser {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email_address: email_address.to_owned(),
        password: password.to_owned(),
    })
}

/// Replace duplicate-account messages from the API with a friendlier line.
pub fn humanize_sign_up_errors(messages: Vec<String>) -> Vec<String> {
    messages
        .into_iter()
        .map(|m| {
            if m.contains("already exists") || m.contains("unique") { DUPLICATE_EMAIL_MESSAGE.to_owned() } else { m }
        })
        .collect()
}
