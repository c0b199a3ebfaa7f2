//! One-time store initialization, invoked at process start.
//!
//! Creates the schema when absent and inserts the fixed activity list, but
//! only if the activities table is still empty.

use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activities_repo, participants_repo};

const SQL_CREATE_ACTIVITIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL CHECK (max_participants > 0)
)
"#;

// The (activity_name, email) primary key makes duplicate signups impossible
// at the store level; rowid keeps the visible signup order.
const SQL_CREATE_PARTICIPANTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS activity_participants (
  activity_name TEXT NOT NULL REFERENCES activities(name),
  email TEXT NOT NULL,
  PRIMARY KEY (activity_name, email)
)
"#;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: i64,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in local leagues",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["lucas@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Practice basketball skills and play friendly matches",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["liam@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore painting, drawing, and other visual arts",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["noah@mergington.edu", "isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Society",
        description: "Participate in theater productions and acting workshops",
        schedule: "Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["amelia@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging math problems and prepare for competitions",
        schedule: "Fridays, 2:00 PM - 3:30 PM",
        max_participants: 16,
        participants: &["charlotte@mergington.edu", "elijah@mergington.edu"],
    },
    SeedActivity {
        name: "Science Olympiad",
        description: "Engage in science experiments and academic competitions",
        schedule: "Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 25,
        participants: &["william@mergington.edu", "sophia@mergington.edu"],
    },
];

pub async fn initialize(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES_TABLE).execute(pool).await?;
    sqlx::query(SQL_CREATE_PARTICIPANTS_TABLE).execute(pool).await?;

    if activities_repo::count_activities(pool).await? > 0 {
        return Ok(());
    }

    for seed in SEED_ACTIVITIES {
        activities_repo::insert_activity(
            pool,
            activities_repo::NewActivity {
                name: seed.name,
                description: seed.description,
                schedule: seed.schedule,
                max_participants: seed.max_participants,
            },
        )
        .await?;

        for email in seed.participants {
            participants_repo::insert_participant(pool, seed.name, email).await?;
        }
    }

    info!("Seeded {} activities into the store", SEED_ACTIVITIES.len());
    Ok(())
}
