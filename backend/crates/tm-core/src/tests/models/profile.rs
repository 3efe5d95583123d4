use crate::{Profile, Role};

use uuid::Uuid;

#[test]
fn test_profile_new_is_empty() {
    let user_id = Uuid::new_v4();
    let profile = Profile::new(user_id, "Ada Lovelace".to_string());

    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.display_name, "Ada Lovelace");
    assert!(profile.primary_role.is_none());
    assert!(profile.primary_languages.is_empty());
    assert_eq!(profile.skills().count(), 0);
}

#[test]
fn test_profile_has_skill_checks_both_lists() {
    let mut profile = Profile::new(Uuid::new_v4(), "Ada".to_string());
    profile.primary_languages = vec!["Rust".to_string()];
    profile.secondary_languages = vec!["Python".to_string()];

    assert!(profile.has_skill("rust"));
    assert!(profile.has_skill(" PYTHON "));
    assert!(!profile.has_skill("go"));
    assert!(!profile.has_skill("rus"));
}

#[test]
fn test_profile_has_role_checks_primary_and_secondary() {
    let mut profile = Profile::new(Uuid::new_v4(), "Ada".to_string());
    profile.primary_role = Some(Role::BackEnd);
    profile.secondary_role = Some(Role::DataScience);

    assert!(profile.has_role(Role::BackEnd));
    assert!(profile.has_role(Role::DataScience));
    assert!(!profile.has_role(Role::Business));
}

#[test]
fn test_normalize_languages_trims_and_dedups() {
    let languages = vec![
        " Rust ".to_string(),
        "rust".to_string(),
        "".to_string(),
        "   ".to_string(),
        "SQL".to_string(),
    ];

    assert_eq!(
        Profile::normalize_languages(languages),
        vec!["Rust".to_string(), "SQL".to_string()]
    );
}
