use sqlx::SqlitePool;

use crate::models::ActivityRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY rowid ASC
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_ACTIVITY_BY_NAME: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?
"#;

pub async fn load_activity_by_name(
    pool: &SqlitePool,
    name: &str,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_ACTIVITY_BY_NAME)
        .bind(name)
        .fetch_optional(pool)
        .await
}

const SQL_COUNT_ACTIVITIES: &str = r#"
SELECT COUNT(*) FROM activities
"#;

pub async fn count_activities(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_ACTIVITIES)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
}

pub async fn insert_activity(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
