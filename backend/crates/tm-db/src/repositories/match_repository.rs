use crate::repositories::row;
use crate::{DbError, Result as DbErrorResult};

use tm_core::TeamMatch;

use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

#[derive(FromRow)]
struct TeamMatchRow {
    user_a: String,
    user_b: String,
    created_at: i64,
}

impl TryFrom<TeamMatchRow> for TeamMatch {
    type Error = DbError;

    fn try_from(r: TeamMatchRow) -> DbErrorResult<Self> {
        Ok(TeamMatch {
            user_a: row::uuid(&r.user_a)?,
            user_b: row::uuid(&r.user_b)?,
            created_at: row::timestamp(r.created_at)?,
        })
    }
}

pub struct MatchRepository {
    pool: SqlitePool,
}

impl MatchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert inside the caller's transaction. The pair must already be
    /// canonical (`TeamMatch::new` guarantees it); a repeat yields
    /// `DbError::Conflict`.
    pub async fn insert(
        tx: &mut Transaction<'_, Sqlite>,
        team_match: &TeamMatch,
    ) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO team_matches (user_a, user_b, created_at) VALUES (?, ?, ?)")
            .bind(team_match.user_a.to_string())
            .bind(team_match.user_b.to_string())
            .bind(team_match.created_at.timestamp())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Every match the user is part of, oldest first
    pub async fn find_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<TeamMatch>> {
        let id = user_id.to_string();

        let rows: Vec<TeamMatchRow> = sqlx::query_as(
            r#"
            SELECT user_a, user_b, created_at
            FROM team_matches
            WHERE user_a = ? OR user_b = ?
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(&id)
        .bind(&id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TeamMatch::try_from).collect()
    }

    /// Order of the two ids does not matter
    pub async fn exists(&self, first: Uuid, second: Uuid) -> DbErrorResult<bool> {
        let (a, b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM team_matches WHERE user_a = ? AND user_b = ?")
                .bind(a.to_string())
                .bind(b.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }
}
