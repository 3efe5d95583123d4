use crate::{ExperienceLevel, Profile, ProfileFilter, Role};

use uuid::Uuid;

fn backend_rustacean() -> Profile {
    let mut profile = Profile::new(Uuid::new_v4(), "Ferris".to_string());
    profile.primary_role = Some(Role::BackEnd);
    profile.experience_level = Some(ExperienceLevel::Expert);
    profile.primary_languages = vec!["Rust".to_string()];
    profile
}

#[test]
fn test_empty_filter_matches_everything() {
    assert!(ProfileFilter::default().matches(&backend_rustacean()));
}

#[test]
fn test_filter_conditions_are_combined_with_and() {
    let profile = backend_rustacean();

    let filter = ProfileFilter {
        role: Some(Role::BackEnd),
        skill: Some("rust".to_string()),
        experience_level: Some(ExperienceLevel::Expert),
        exclude_user: None,
    };
    assert!(filter.matches(&profile));

    let filter = ProfileFilter {
        experience_level: Some(ExperienceLevel::Beginner),
        ..filter
    };
    assert!(!filter.matches(&profile));
}

#[test]
fn test_filter_excludes_user() {
    let profile = backend_rustacean();
    let filter = ProfileFilter {
        exclude_user: Some(profile.user_id),
        ..Default::default()
    };

    assert!(!filter.matches(&profile));
}

#[test]
fn test_filter_profile_without_level_does_not_match_level() {
    let mut profile = backend_rustacean();
    profile.experience_level = None;

    let filter = ProfileFilter {
        experience_level: Some(ExperienceLevel::Expert),
        ..Default::default()
    };
    assert!(!filter.matches(&profile));
}

#[test]
fn test_skill_key_normalizes_and_drops_blank() {
    let filter = ProfileFilter {
        skill: Some("  TypeScript ".to_string()),
        ..Default::default()
    };
    assert_eq!(filter.skill_key().as_deref(), Some("typescript"));

    let blank = ProfileFilter {
        skill: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(blank.skill_key(), None);
}

#[test]
fn test_filter_skill_folds_non_ascii_case() {
    let mut profile = backend_rustacean();
    profile.secondary_languages = vec!["Élixir".to_string()];

    for needle in ["élixir", "ÉLIXIR", " Élixir "] {
        let filter = ProfileFilter {
            skill: Some(needle.to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&profile), "{needle} should match");
    }
}

#[test]
fn test_filter_blank_skill_places_no_constraint() {
    let filter = ProfileFilter {
        skill: Some("   ".to_string()),
        ..Default::default()
    };

    assert!(filter.matches(&backend_rustacean()));
}
