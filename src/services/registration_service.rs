use sqlx::SqlitePool;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::database::{activities_repo, participants_repo};
use crate::models::ActivityDetails;

/// Why a signup or unregister request was rejected.
///
/// Everything except `Database` is a client-input error and maps to a
/// 404/400 response; none of them are retried.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student not registered for this activity")]
    NotRegistered,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// All activities with their current attributes, keyed by activity name.
pub async fn list_activities(
    pool: &SqlitePool,
) -> Result<BTreeMap<String, ActivityDetails>, RegistrationError> {
    let rows = activities_repo::list_activities(pool).await?;
    let roster = participants_repo::list_all_participants(pool).await?;

    let mut activities: BTreeMap<String, ActivityDetails> = rows
        .into_iter()
        .map(|row| {
            (
                row.name,
                ActivityDetails {
                    description: row.description,
                    schedule: row.schedule,
                    max_participants: row.max_participants,
                    participants: Vec::new(),
                },
            )
        })
        .collect();

    // Roster rows come back in rowid order, so each participant list keeps
    // its signup order.
    for entry in roster {
        if let Some(details) = activities.get_mut(&entry.activity_name) {
            details.participants.push(entry.email);
        }
    }

    Ok(activities)
}

/// Signs a student up for an activity.
///
/// Single read-validate-write transition: load the activity, check the
/// roster, then append. The validation window is not wrapped in a
/// transaction; the roster's primary key still rules out duplicates.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistrationError> {
    let Some(activity) = activities_repo::load_activity_by_name(pool, activity_name).await? else {
        return Err(RegistrationError::ActivityNotFound);
    };

    let participants = participants_repo::list_participants(pool, activity_name).await?;
    if participants.iter().any(|p| p == email) {
        return Err(RegistrationError::AlreadySignedUp);
    }
    if participants.len() as i64 >= activity.max_participants {
        return Err(RegistrationError::ActivityFull);
    }

    participants_repo::insert_participant(pool, activity_name, email).await?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes a student from an activity's roster.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistrationError> {
    if activities_repo::load_activity_by_name(pool, activity_name)
        .await?
        .is_none()
    {
        return Err(RegistrationError::ActivityNotFound);
    }

    let participants = participants_repo::list_participants(pool, activity_name).await?;
    if !participants.iter().any(|p| p == email) {
        return Err(RegistrationError::NotRegistered);
    }

    participants_repo::delete_participant(pool, activity_name, email).await?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
