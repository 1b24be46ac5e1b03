use super::IReminderRepo;
use routinely_domain::{Frequency, Reminder, TimeOfDay, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteReminderRepo {
    pool: SqlitePool,
}

impl SqliteReminderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: String,
    habit_uid: String,
    user_uid: String,
    frequency: String,
    time_of_day: String,
    enabled: bool,
    created: i64,
    updated: i64,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.reminder_uid.parse::<ID>()?,
            habit_id: raw.habit_uid.parse::<ID>()?,
            user_id: raw.user_uid.parse::<ID>()?,
            frequency: serde_json::from_str::<Frequency>(&raw.frequency)?,
            time_of_day: raw.time_of_day.parse::<TimeOfDay>()?,
            enabled: raw.enabled,
            created: raw.created,
            updated: raw.updated,
        })
    }
}

#[async_trait::async_trait]
impl IReminderRepo for SqliteReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, habit_uid, user_uid, frequency, time_of_day, enabled, created, updated)
            VALUES(?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(reminder.id.as_string())
        .bind(reminder.habit_id.as_string())
        .bind(reminder.user_id.as_string())
        .bind(serde_json::to_string(&reminder.frequency)?)
        .bind(reminder.time_of_day.to_string())
        .bind(reminder.enabled)
        .bind(reminder.created)
        .bind(reminder.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET frequency = ?, time_of_day = ?, enabled = ?, updated = ?
            WHERE reminder_uid = ?
            "#,
        )
        .bind(serde_json::to_string(&reminder.frequency)?)
        .bind(reminder.time_of_day.to_string())
        .bind(reminder.enabled)
        .bind(reminder.updated)
        .bind(reminder.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        match sqlx::query_as::<_, ReminderRaw>("SELECT * FROM reminders WHERE reminder_uid = ?")
            .bind(reminder_id.as_string())
            .fetch_optional(&self.pool)
            .await
        {
            Ok(Some(raw)) => raw.try_into().ok(),
            _ => None,
        }
    }

    async fn find_by_habit(&self, habit_id: &ID) -> Vec<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            "SELECT * FROM reminders WHERE habit_uid = ? ORDER BY created",
        )
        .bind(habit_id.as_string())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| raw.try_into().ok())
        .collect()
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        match sqlx::query_as::<_, ReminderRaw>(
            "DELETE FROM reminders WHERE reminder_uid = ? RETURNING *",
        )
        .bind(reminder_id.as_string())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(Some(raw)) => raw.try_into().ok(),
            _ => None,
        }
    }

    async fn delete_by_habit(&self, habit_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let deleted =
            sqlx::query_as::<_, ReminderRaw>("DELETE FROM reminders WHERE habit_uid = ? RETURNING *")
                .bind(habit_id.as_string())
                .fetch_all(&self.pool)
                .await?;
        deleted.into_iter().map(TryInto::try_into).collect()
    }
}
