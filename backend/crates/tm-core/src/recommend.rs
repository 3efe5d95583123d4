//! Role-bucketed teammate recommendations.
//!
//! Every profile is turned into a set of binary features:
//! experience level, secondary role, goal and personality trait are one-hot
//! encoded, primary and secondary languages are multi-hot encoded under
//! separate prefixes. Candidates are grouped by their primary role and each
//! group is ordered by cosine similarity to the requester, least similar
//! first, so that people who complement the requester surface before people
//! who duplicate them.

use crate::{Profile, Role};

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_BUCKET_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub profile: Profile,
    /// Cosine similarity to the requester in [0, 1]
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleBucket {
    pub role: Role,
    pub recommendations: Vec<Recommendation>,
}

/// Binary feature set for a profile. Categorical values are lowercased so
/// "Win" and "win" land on the same feature.
pub fn features(profile: &Profile) -> BTreeSet<String> {
    let mut set = BTreeSet::new();

    if let Some(level) = profile.experience_level {
        set.insert(format!("experience:{}", level.as_str()));
    }
    if let Some(role) = profile.secondary_role {
        set.insert(format!("secondary_role:{}", role.as_str()));
    }
    if let Some(goal) = normalized(profile.goal.as_deref()) {
        set.insert(format!("goal:{}", goal));
    }
    if let Some(personality) = normalized(profile.personality_trait.as_deref()) {
        set.insert(format!("trait:{}", personality));
    }
    for language in &profile.primary_languages {
        if let Some(l) = normalized(Some(language)) {
            set.insert(format!("primary:{}", l));
        }
    }
    for language in &profile.secondary_languages {
        if let Some(l) = normalized(Some(language)) {
            set.insert(format!("secondary:{}", l));
        }
    }

    set
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Cosine similarity of two binary vectors given as their sets of set bits.
/// Zero vectors are treated as orthogonal to everything.
pub fn cosine_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot = a.intersection(b).count() as f64;
    dot / ((a.len() as f64).sqrt() * (b.len() as f64).sqrt())
}

/// Build one bucket per role in `Role::ALL` order.
///
/// The requester's own profile, anyone in `exclude`, and profiles without a
/// primary role are left out. Each bucket holds at most `limit` entries.
pub fn recommend(
    requester: &Profile,
    candidates: &[Profile],
    exclude: &HashSet<Uuid>,
    limit: usize,
) -> Vec<RoleBucket> {
    let requester_features = features(requester);

    let scored: Vec<(Role, Recommendation)> = candidates
        .iter()
        .filter(|p| p.user_id != requester.user_id && !exclude.contains(&p.user_id))
        .filter_map(|p| {
            let role = p.primary_role?;
            let similarity = cosine_similarity(&requester_features, &features(p));
            Some((
                role,
                Recommendation {
                    profile: p.clone(),
                    similarity,
                },
            ))
        })
        .collect();

    Role::ALL
        .iter()
        .map(|&role| {
            let mut recommendations: Vec<Recommendation> = scored
                .iter()
                .filter(|(r, _)| *r == role)
                .map(|(_, rec)| rec.clone())
                .collect();

            recommendations.sort_by(|a, b| {
                a.similarity
                    .total_cmp(&b.similarity)
                    .then_with(|| a.profile.display_name.cmp(&b.profile.display_name))
                    .then_with(|| a.profile.user_id.cmp(&b.profile.user_id))
            });
            recommendations.truncate(limit);

            RoleBucket {
                role,
                recommendations,
            }
        })
        .collect()
}
