use crate::repositories::row;
use crate::{DbError, MatchRepository, Result as DbErrorResult};

use tm_core::{Notification, NotificationKind, TeamMatch};

use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

#[derive(FromRow)]
struct NotificationRow {
    id: String,
    sender_id: String,
    recipient_id: String,
    kind: String,
    message: String,
    is_read: bool,
    created_at: i64,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = DbError;

    fn try_from(r: NotificationRow) -> DbErrorResult<Self> {
        Ok(Notification {
            id: row::uuid(&r.id)?,
            sender_id: row::uuid(&r.sender_id)?,
            recipient_id: row::uuid(&r.recipient_id)?,
            kind: r
                .kind
                .parse::<NotificationKind>()
                .map_err(|e| DbError::corrupt(e.to_string()))?,
            message: r.message,
            is_read: r.is_read,
            created_at: row::timestamp(r.created_at)?,
        })
    }
}

const SELECT_NOTIFICATION: &str = r#"
    SELECT id, sender_id, recipient_id, kind, message, is_read, created_at
    FROM notifications
"#;

pub struct NotificationRepository {
    pool: SqlitePool,
}

impl NotificationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert inside the caller's transaction.
    ///
    /// A second interest from the same sender to the same recipient yields
    /// `DbError::Conflict`; an unknown user yields `DbError::NotFound`.
    pub async fn insert(
        tx: &mut Transaction<'_, Sqlite>,
        notification: &Notification,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                id, sender_id, recipient_id, kind, message, is_read, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(notification.id.to_string())
        .bind(notification.sender_id.to_string())
        .bind(notification.recipient_id.to_string())
        .bind(notification.kind.as_str())
        .bind(&notification.message)
        .bind(notification.is_read)
        .bind(notification.created_at.timestamp())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Store `interest` and, when the recipient already sent interest back,
    /// `team_match` with its `confirmations`. Returns whether a match was made.
    ///
    /// The insert runs before any read so the transaction takes the write lock
    /// up front. Two users expressing interest in each other at once are then
    /// serialised by the busy timeout, and exactly one of them sees the other's
    /// row. A repeated interest yields `DbError::Conflict`.
    pub async fn record_interest(
        &self,
        interest: &Notification,
        team_match: &TeamMatch,
        confirmations: &[Notification],
    ) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        Self::insert(&mut tx, interest).await?;

        let matched =
            Self::interest_exists(&mut tx, interest.recipient_id, interest.sender_id).await?;

        if matched {
            MatchRepository::insert(&mut tx, team_match).await?;
            for confirmation in confirmations {
                Self::insert(&mut tx, confirmation).await?;
            }
        }

        tx.commit().await?;

        Ok(matched)
    }

    /// Whether `sender` has already expressed interest in `recipient`
    pub async fn interest_exists(
        tx: &mut Transaction<'_, Sqlite>,
        sender: Uuid,
        recipient: Uuid,
    ) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT 1 FROM notifications
            WHERE sender_id = ? AND recipient_id = ? AND kind = 'interest'
            "#,
        )
        .bind(sender.to_string())
        .bind(recipient.to_string())
        .fetch_optional(&mut **tx)
        .await?;

        Ok(found.is_some())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Notification>> {
        let row: Option<NotificationRow> =
            sqlx::query_as(&format!("{} WHERE id = ?", SELECT_NOTIFICATION))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Notification::try_from).transpose()
    }

    /// Newest first. Insertion order breaks ties within the same second.
    pub async fn find_for_recipient(
        &self,
        recipient: Uuid,
        unread_only: bool,
    ) -> DbErrorResult<Vec<Notification>> {
        let rows: Vec<NotificationRow> = sqlx::query_as(&format!(
            r#"{}
            WHERE recipient_id = ? AND (? = 0 OR is_read = 0)
            ORDER BY created_at DESC, rowid DESC
            "#,
            SELECT_NOTIFICATION
        ))
        .bind(recipient.to_string())
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    /// Users that `sender` has sent interest to
    pub async fn interest_recipients(&self, sender: Uuid) -> DbErrorResult<Vec<Uuid>> {
        let ids: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT recipient_id FROM notifications
            WHERE sender_id = ? AND kind = 'interest'
            "#,
        )
        .bind(sender.to_string())
        .fetch_all(&self.pool)
        .await?;

        ids.iter().map(|id| row::uuid(id)).collect()
    }

    /// Idempotent. Returns false if the notification does not exist.
    pub async fn mark_read(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
