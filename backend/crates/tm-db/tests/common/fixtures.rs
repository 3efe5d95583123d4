use tm_core::{ExperienceLevel, Notification, Profile, Role, TeamMatch, User};

use uuid::Uuid;

/// A user whose email is derived from the first name
pub fn build_user(first_name: &str) -> User {
    User::new(
        &format!("{}.{}@example.com", first_name.to_lowercase(), Uuid::new_v4().simple()),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        first_name.to_string(),
        "Tester".to_string(),
    )
}

/// A profile with a role, a level and a couple of languages
pub fn build_profile(user: &User, role: Role, languages: &[&str]) -> Profile {
    let mut profile = Profile::new(user.id, user.display_name());
    profile.primary_role = Some(role);
    profile.experience_level = Some(ExperienceLevel::Intermediate);
    profile.primary_languages = languages.iter().map(|l| l.to_string()).collect();
    profile.goal = Some("win".to_string());
    profile
}

pub fn build_interest(sender: &User, recipient: &User) -> Notification {
    Notification::interest(
        sender.id,
        recipient.id,
        Notification::default_interest_message(&sender.display_name()),
    )
    .expect("sender and recipient differ")
}

/// The match row and both confirmations written when `sender` completes a pair
pub fn build_match_outcome(sender: &User, recipient: &User) -> (TeamMatch, Vec<Notification>) {
    let team_match = TeamMatch::new(sender.id, recipient.id).expect("distinct users");
    let confirmations = vec![
        Notification::match_confirmed(
            sender.id,
            recipient.id,
            Notification::default_match_message(&sender.display_name()),
        )
        .expect("distinct users"),
        Notification::match_confirmed(
            recipient.id,
            sender.id,
            Notification::default_match_message(&recipient.display_name()),
        )
        .expect("distinct users"),
    ];
    (team_match, confirmations)
}
