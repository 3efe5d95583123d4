use crate::TeamMatch;

use uuid::Uuid;

#[test]
fn test_team_match_orders_pair() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let (low, high) = if a < b { (a, b) } else { (b, a) };

    let forward = TeamMatch::new(a, b).unwrap();
    let backward = TeamMatch::new(b, a).unwrap();

    assert_eq!(forward.user_a, low);
    assert_eq!(forward.user_b, high);
    assert_eq!(backward.user_a, low);
    assert_eq!(backward.user_b, high);
}

#[test]
fn test_team_match_with_self_is_rejected() {
    let id = Uuid::new_v4();
    assert!(TeamMatch::new(id, id).is_err());
}

#[test]
fn test_team_match_other() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let m = TeamMatch::new(a, b).unwrap();

    assert!(m.involves(a));
    assert_eq!(m.other(a), Some(b));
    assert_eq!(m.other(b), Some(a));
    assert_eq!(m.other(Uuid::new_v4()), None);
}
