use super::IScheduledNotificationRepo;
use routinely_domain::{ScheduledNotification, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteScheduledNotificationRepo {
    pool: SqlitePool,
}

impl SqliteScheduledNotificationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ScheduledNotificationRaw {
    reminder_uid: String,
    habit_uid: String,
    fire_time: i64,
}

impl TryFrom<ScheduledNotificationRaw> for ScheduledNotification {
    type Error = anyhow::Error;

    fn try_from(raw: ScheduledNotificationRaw) -> anyhow::Result<Self> {
        Ok(Self {
            reminder_id: raw.reminder_uid.parse::<ID>()?,
            habit_id: raw.habit_uid.parse::<ID>()?,
            fire_time: raw.fire_time,
        })
    }
}

#[async_trait::async_trait]
impl IScheduledNotificationRepo for SqliteScheduledNotificationRepo {
    async fn put(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO scheduled_notifications
            (reminder_uid, habit_uid, fire_time)
            VALUES(?, ?, ?)
            ON CONFLICT(reminder_uid) DO UPDATE SET
                habit_uid = excluded.habit_uid,
                fire_time = excluded.fire_time
            "#,
        )
        .bind(notification.reminder_id.as_string())
        .bind(notification.habit_id.as_string())
        .bind(notification.fire_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<ScheduledNotification> {
        match sqlx::query_as::<_, ScheduledNotificationRaw>(
            "SELECT * FROM scheduled_notifications WHERE reminder_uid = ?",
        )
        .bind(reminder_id.as_string())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(Some(raw)) => raw.try_into().ok(),
            _ => None,
        }
    }

    async fn get_all(&self) -> anyhow::Result<Vec<ScheduledNotification>> {
        let rows = sqlx::query_as::<_, ScheduledNotificationRaw>(
            "SELECT * FROM scheduled_notifications ORDER BY fire_time",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<ScheduledNotification>> {
        let deleted = sqlx::query_as::<_, ScheduledNotificationRaw>(
            "DELETE FROM scheduled_notifications WHERE reminder_uid = ? RETURNING *",
        )
        .bind(reminder_id.as_string())
        .fetch_optional(&self.pool)
        .await?;
        deleted.map(TryInto::try_into).transpose()
    }
}
