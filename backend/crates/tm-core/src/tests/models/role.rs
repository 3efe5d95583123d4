use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::FrontEnd.as_str(), "front-end");
    assert_eq!(Role::BackEnd.as_str(), "back-end");
    assert_eq!(Role::DataScience.as_str(), "data-science");
    assert_eq!(Role::Business.as_str(), "business");
}

#[test]
fn test_role_from_str_accepts_loose_spellings() {
    assert_eq!(Role::from_str("front-end").unwrap(), Role::FrontEnd);
    assert_eq!(Role::from_str("Frontend").unwrap(), Role::FrontEnd);
    assert_eq!(Role::from_str("back_end").unwrap(), Role::BackEnd);
    assert_eq!(Role::from_str("Data Science").unwrap(), Role::DataScience);
    assert_eq!(Role::from_str("BUSINESS").unwrap(), Role::Business);
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let err = Role::from_str("designer").unwrap_err();
    assert!(matches!(err, CoreError::InvalidRole { ref value, .. } if value == "designer"));
    assert_eq!(err.field(), Some("role"));
}

#[test]
fn test_role_all_round_trips_through_as_str() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_serializes_kebab_case() {
    let json = serde_json::to_string(&Role::DataScience).unwrap();
    assert_eq!(json, "\"data-science\"");
}
