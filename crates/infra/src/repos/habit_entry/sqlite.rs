use super::IHabitEntryRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::NaiveDate;
use routinely_domain::{HabitEntry, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteHabitEntryRepo {
    pool: SqlitePool,
}

impl SqliteHabitEntryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HabitEntryRaw {
    habit_uid: String,
    day: String,
    completed: bool,
}

impl TryFrom<HabitEntryRaw> for HabitEntry {
    type Error = anyhow::Error;

    fn try_from(raw: HabitEntryRaw) -> anyhow::Result<Self> {
        Ok(Self {
            habit_id: raw.habit_uid.parse::<ID>()?,
            day: raw.day.parse::<NaiveDate>()?,
            completed: raw.completed,
        })
    }
}

#[async_trait::async_trait]
impl IHabitEntryRepo for SqliteHabitEntryRepo {
    async fn upsert(&self, entry: &HabitEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO habit_entries
            (habit_uid, day, completed)
            VALUES(?, ?, ?)
            ON CONFLICT(habit_uid, day) DO UPDATE SET completed = excluded.completed
            "#,
        )
        .bind(entry.habit_id.as_string())
        .bind(entry.day.to_string())
        .bind(entry.completed)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_habit(&self, habit_id: &ID) -> Vec<HabitEntry> {
        sqlx::query_as::<_, HabitEntryRaw>(
            "SELECT * FROM habit_entries WHERE habit_uid = ? ORDER BY day",
        )
        .bind(habit_id.as_string())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| raw.try_into().ok())
        .collect()
    }

    async fn delete_by_habit(&self, habit_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query("DELETE FROM habit_entries WHERE habit_uid = ?")
            .bind(habit_id.as_string())
            .execute(&self.pool)
            .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
