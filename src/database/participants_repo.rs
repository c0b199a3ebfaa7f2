use sqlx::SqlitePool;

use crate::models::ParticipantRow;

const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT
  email
FROM activity_participants
WHERE activity_name = ?
ORDER BY rowid ASC
"#;

pub async fn list_participants(pool: &SqlitePool, activity_name: &str) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_LIST_PARTICIPANTS)
        .bind(activity_name)
        .fetch_all(pool)
        .await
}

const SQL_LIST_ALL_PARTICIPANTS: &str = r#"
SELECT
  activity_name,
  email
FROM activity_participants
ORDER BY rowid ASC
"#;

pub async fn list_all_participants(pool: &SqlitePool) -> sqlx::Result<Vec<ParticipantRow>> {
    sqlx::query_as::<_, ParticipantRow>(SQL_LIST_ALL_PARTICIPANTS)
        .fetch_all(pool)
        .await
}

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO activity_participants (activity_name, email) VALUES (?, ?)
"#;

pub async fn insert_participant(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants WHERE activity_name = ? AND email = ?
"#;

pub async fn delete_participant(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
