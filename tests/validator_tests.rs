use user_registry::{
    models::User,
    validator::{self, ALLOWED_USAGES},
};

fn user(username: &str, usage: &str) -> User {
    User {
        username: username.to_string(),
        usage: usage.to_string(),
    }
}

#[test]
fn accepts_well_formed_users() {
    for usage in ALLOWED_USAGES {
        assert!(validator::is_valid(&user("alice", usage)));
    }
    // Boundary lengths: exactly 3 and exactly 50 characters are accepted.
    assert!(validator::is_valid(&user("abc", "Admin")));
    assert!(validator::is_valid(&user(&"x".repeat(50), "Admin")));
}

#[test]
fn rejects_short_empty_or_overlong_usernames() {
    assert!(!validator::is_valid(&user("ab", "Admin")));
    assert!(!validator::is_valid(&user("", "Admin")));
    // Whitespace-only trims to empty.
    assert!(!validator::is_valid(&user("   ", "Admin")));
    assert!(!validator::is_valid(&user(&"x".repeat(51), "Admin")));
}

#[test]
fn rejects_usage_outside_the_allowed_set() {
    assert!(!validator::is_valid(&user("alice", "Superuser")));
    assert!(!validator::is_valid(&user("alice", "")));
    assert!(!validator::is_valid(&user("alice", &"y".repeat(101))));
}

#[test]
fn usage_match_is_case_sensitive_and_exact() {
    assert!(!validator::is_valid(&user("alice", "admin")));
    assert!(!validator::is_valid(&user("alice", "GUEST")));
    // Surrounding whitespace breaks the exact match even though the value
    // trims to an allowed one.
    assert!(!validator::is_valid(&user("alice", " Admin ")));
}

#[test]
fn validate_user_reports_every_violated_constraint() {
    let result = validator::validate_user(&user("ab", "Superuser"));

    let violations = result.expect_err("both fields are invalid");
    assert_eq!(violations.len(), 2);
    assert!(violations[0].contains("at least 3 characters"));
    assert!(violations[1].contains("usage must be one of"));
}

#[test]
fn validate_usage_stands_alone_for_the_update_path() {
    assert!(validator::validate_usage("Guest").is_empty());

    let violations = validator::validate_usage("visitor");
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("Admin, User, Guest"));
}
