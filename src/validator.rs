use crate::models::User;

/// The closed set of accepted `usage` values. Matching is exact and case-sensitive.
pub const ALLOWED_USAGES: [&str; 3] = ["Admin", "User", "Guest"];

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;
pub const USAGE_MAX_LEN: usize = 100;

/// validate_user
///
/// Pure shape check for a candidate record, run before every create. Returns
/// `Ok(())` or the full list of violated constraints, so a 400 response can name
/// everything that is wrong in one round trip rather than one rule at a time.
pub fn validate_user(user: &User) -> Result<(), Vec<String>> {
    let mut violations = validate_username(&user.username);
    violations.extend(validate_usage(&user.usage));

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// validate_username
///
/// Username rules: non-empty after trimming whitespace, between 3 and 50
/// characters. Uniqueness is not checked here; that is the store's job.
pub fn validate_username(username: &str) -> Vec<String> {
    let mut violations = Vec::new();
    let trimmed = username.trim();

    if trimmed.is_empty() {
        violations.push("username must not be empty".to_string());
    } else if trimmed.chars().count() < USERNAME_MIN_LEN {
        violations.push(format!(
            "username must be at least {} characters",
            USERNAME_MIN_LEN
        ));
    } else if trimmed.chars().count() > USERNAME_MAX_LEN {
        violations.push(format!(
            "username must not exceed {} characters",
            USERNAME_MAX_LEN
        ));
    }

    violations
}

/// validate_usage
///
/// Usage rules: non-empty after trimming, at most 100 characters, and an exact
/// (case-sensitive, untrimmed) match against the allowed set. Used on its own by
/// the update path, which only consults the `usage` field of the payload.
pub fn validate_usage(usage: &str) -> Vec<String> {
    let mut violations = Vec::new();

    if usage.trim().is_empty() {
        violations.push("usage must not be empty".to_string());
    } else if usage.chars().count() > USAGE_MAX_LEN {
        violations.push(format!("usage must not exceed {} characters", USAGE_MAX_LEN));
    } else if !ALLOWED_USAGES.contains(&usage) {
        violations.push(format!(
            "usage must be one of: {}",
            ALLOWED_USAGES.join(", ")
        ));
    }

    violations
}

/// is_valid
///
/// Boolean convenience over `validate_user`, preserving the original
/// accept/reject contract for callers that do not need the violation list.
pub fn is_valid(user: &User) -> bool {
    validate_user(user).is_ok()
}
