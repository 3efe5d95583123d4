use crate::repositories::row;
use crate::{DbError, Result as DbErrorResult};

use tm_core::{Profile, ProfileFilter};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ProfileRow {
    id: String,
    user_id: String,
    display_name: String,
    experience_level: Option<String>,
    primary_role: Option<String>,
    secondary_role: Option<String>,
    primary_languages: String,
    secondary_languages: String,
    school: Option<String>,
    goal: Option<String>,
    pronouns: Option<String>,
    note: Option<String>,
    personality_trait: Option<String>,
    discord_link: Option<String>,
    image_link: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DbError;

    fn try_from(r: ProfileRow) -> DbErrorResult<Self> {
        Ok(Profile {
            id: row::uuid(&r.id)?,
            user_id: row::uuid(&r.user_id)?,
            display_name: r.display_name,
            experience_level: row::optional_enum(r.experience_level)?,
            primary_role: row::optional_enum(r.primary_role)?,
            secondary_role: row::optional_enum(r.secondary_role)?,
            primary_languages: row::languages(&r.primary_languages)?,
            secondary_languages: row::languages(&r.secondary_languages)?,
            school: r.school,
            goal: r.goal,
            pronouns: r.pronouns,
            note: r.note,
            personality_trait: r.personality_trait,
            discord_link: r.discord_link,
            image_link: r.image_link,
            created_at: row::timestamp(r.created_at)?,
            updated_at: row::timestamp(r.updated_at)?,
        })
    }
}

const SELECT_PROFILE: &str = r#"
    SELECT id, user_id, display_name, experience_level, primary_role, secondary_role,
           primary_languages, secondary_languages, school, goal, pronouns, note,
           personality_trait, discord_link, image_link, created_at, updated_at
    FROM profiles
"#;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a profile.
    ///
    /// A second profile for the same user yields `DbError::Conflict`; an
    /// unknown owner yields `DbError::NotFound`.
    pub async fn create(&self, profile: &Profile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                id, user_id, display_name, experience_level, primary_role, secondary_role,
                primary_languages, secondary_languages, school, goal, pronouns, note,
                personality_trait, discord_link, image_link, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.id.to_string())
        .bind(profile.user_id.to_string())
        .bind(&profile.display_name)
        .bind(profile.experience_level.map(|l| l.as_str()))
        .bind(profile.primary_role.map(|r| r.as_str()))
        .bind(profile.secondary_role.map(|r| r.as_str()))
        .bind(row::languages_json(&profile.primary_languages)?)
        .bind(row::languages_json(&profile.secondary_languages)?)
        .bind(&profile.school)
        .bind(&profile.goal)
        .bind(&profile.pronouns)
        .bind(&profile.note)
        .bind(&profile.personality_trait)
        .bind(&profile.discord_link)
        .bind(&profile.image_link)
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<Profile>> {
        let row: Option<ProfileRow> =
            sqlx::query_as(&format!("{} WHERE user_id = ?", SELECT_PROFILE))
                .bind(user_id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Profile::try_from).transpose()
    }

    /// Overwrite every editable field of the user's profile
    pub async fn update(&self, profile: &Profile) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET display_name = ?, experience_level = ?, primary_role = ?, secondary_role = ?,
                primary_languages = ?, secondary_languages = ?, school = ?, goal = ?,
                pronouns = ?, note = ?, personality_trait = ?, discord_link = ?,
                image_link = ?, updated_at = ?
            WHERE user_id = ?
            "#,
        )
        .bind(&profile.display_name)
        .bind(profile.experience_level.map(|l| l.as_str()))
        .bind(profile.primary_role.map(|r| r.as_str()))
        .bind(profile.secondary_role.map(|r| r.as_str()))
        .bind(row::languages_json(&profile.primary_languages)?)
        .bind(row::languages_json(&profile.secondary_languages)?)
        .bind(&profile.school)
        .bind(&profile.goal)
        .bind(&profile.pronouns)
        .bind(&profile.note)
        .bind(&profile.personality_trait)
        .bind(&profile.discord_link)
        .bind(&profile.image_link)
        .bind(profile.updated_at.timestamp())
        .bind(profile.user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("profile for user {}", profile.user_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Profiles matching every set filter field, ordered by display name then
    /// user id. An empty filter lists all profiles.
    ///
    /// Role, level and exclusion narrow the rows in SQL. The skill test runs on
    /// the decoded profiles through `ProfileFilter::matches`, since SQLite's
    /// `lower` folds ASCII only.
    pub async fn search(&self, filter: &ProfileFilter) -> DbErrorResult<Vec<Profile>> {
        let role = filter.role.map(|r| r.as_str());
        let level = filter.experience_level.map(|l| l.as_str());
        let exclude = filter.exclude_user.map(|id| id.to_string());

        let rows: Vec<ProfileRow> = sqlx::query_as(&format!(
            r#"{}
            WHERE (? IS NULL OR primary_role = ? OR secondary_role = ?)
              AND (? IS NULL OR experience_level = ?)
              AND (? IS NULL OR user_id <> ?)
            ORDER BY display_name ASC, user_id ASC
            "#,
            SELECT_PROFILE
        ))
        .bind(role)
        .bind(role)
        .bind(role)
        .bind(level)
        .bind(level)
        .bind(&exclude)
        .bind(&exclude)
        .fetch_all(&self.pool)
        .await?;

        let mut profiles = Vec::with_capacity(rows.len());
        for row in rows {
            let profile = Profile::try_from(row)?;
            if filter.matches(&profile) {
                profiles.push(profile);
            }
        }

        Ok(profiles)
    }
}
