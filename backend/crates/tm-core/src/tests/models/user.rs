use crate::User;

#[test]
fn test_user_new_normalizes_email_and_names() {
    let user = User::new(
        "  Ada@Example.COM ",
        "hash".to_string(),
        " Ada ".to_string(),
        "Lovelace".to_string(),
    );

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn test_user_serialization_omits_password_hash() {
    let user = User::new(
        "ada@example.com",
        "$argon2id$secret".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
    );

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "ada@example.com");
}
