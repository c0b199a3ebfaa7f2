pub mod activities;

pub use activities::{ActivityDetails, ActivityRow, ParticipantRow};
