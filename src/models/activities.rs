use serde::Serialize;

/// One extracurricular offering; `name` is the primary key.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
}

// Roster rows; rowid order is the visible signup order.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipantRow {
    pub activity_name: String,
    pub email: String,
}

/// JSON shape of one activity in the `GET /activities` map.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}
