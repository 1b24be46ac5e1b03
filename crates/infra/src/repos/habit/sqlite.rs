use super::IHabitRepo;
use routinely_domain::{Habit, HabitKind, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteHabitRepo {
    pool: SqlitePool,
}

impl SqliteHabitRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HabitRaw {
    habit_uid: String,
    user_uid: String,
    name: String,
    description: Option<String>,
    kind: String,
    created: i64,
    updated: i64,
}

fn kind_to_str(kind: HabitKind) -> &'static str {
    match kind {
        HabitKind::Good => "good",
        HabitKind::Bad => "bad",
    }
}

impl TryFrom<HabitRaw> for Habit {
    type Error = anyhow::Error;

    fn try_from(raw: HabitRaw) -> anyhow::Result<Self> {
        let kind = match raw.kind.as_str() {
            "good" => HabitKind::Good,
            "bad" => HabitKind::Bad,
            other => anyhow::bail!("Unknown habit kind: {}", other),
        };
        Ok(Self {
            id: raw.habit_uid.parse::<ID>()?,
            user_id: raw.user_uid.parse::<ID>()?,
            name: raw.name,
            description: raw.description,
            kind,
            created: raw.created,
            updated: raw.updated,
        })
    }
}

#[async_trait::async_trait]
impl IHabitRepo for SqliteHabitRepo {
    async fn insert(&self, habit: &Habit) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO habits
            (habit_uid, user_uid, name, description, kind, created, updated)
            VALUES(?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(habit.id.as_string())
        .bind(habit.user_id.as_string())
        .bind(&habit.name)
        .bind(&habit.description)
        .bind(kind_to_str(habit.kind))
        .bind(habit.created)
        .bind(habit.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, habit: &Habit) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE habits
            SET user_uid = ?, name = ?, description = ?, kind = ?, updated = ?
            WHERE habit_uid = ?
            "#,
        )
        .bind(habit.user_id.as_string())
        .bind(&habit.name)
        .bind(&habit.description)
        .bind(kind_to_str(habit.kind))
        .bind(habit.updated)
        .bind(habit.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, habit_id: &ID) -> Option<Habit> {
        match sqlx::query_as::<_, HabitRaw>("SELECT * FROM habits WHERE habit_uid = ?")
            .bind(habit_id.as_string())
            .fetch_optional(&self.pool)
            .await
        {
            Ok(Some(raw)) => raw.try_into().ok(),
            _ => None,
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Habit> {
        sqlx::query_as::<_, HabitRaw>("SELECT * FROM habits WHERE user_uid = ? ORDER BY created")
            .bind(user_id.as_string())
            .fetch_all(&self.pool)
            .await
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| raw.try_into().ok())
            .collect()
    }

    async fn delete(&self, habit_id: &ID) -> Option<Habit> {
        match sqlx::query_as::<_, HabitRaw>("DELETE FROM habits WHERE habit_uid = ? RETURNING *")
            .bind(habit_id.as_string())
            .fetch_optional(&self.pool)
            .await
        {
            Ok(Some(raw)) => raw.try_into().ok(),
            _ => None,
        }
    }
}
