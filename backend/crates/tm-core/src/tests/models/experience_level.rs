use crate::ExperienceLevel;

use std::str::FromStr;

#[test]
fn test_experience_level_as_str() {
    assert_eq!(ExperienceLevel::Beginner.as_str(), "beginner");
    assert_eq!(ExperienceLevel::Intermediate.as_str(), "intermediate");
    assert_eq!(ExperienceLevel::Expert.as_str(), "expert");
}

#[test]
fn test_experience_level_from_str_is_case_insensitive() {
    assert_eq!(
        ExperienceLevel::from_str("Beginner").unwrap(),
        ExperienceLevel::Beginner
    );
    assert_eq!(
        ExperienceLevel::from_str("  EXPERT ").unwrap(),
        ExperienceLevel::Expert
    );
    assert!(ExperienceLevel::from_str("guru").is_err());
}

#[test]
fn test_experience_level_serde() {
    let json = serde_json::to_string(&ExperienceLevel::Intermediate).unwrap();
    assert_eq!(json, "\"intermediate\"");
}
