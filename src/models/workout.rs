use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Flat per-minute burn rate applied to every exercise type. Recorded on the
/// row at creation time and never recomputed, so historical entries keep the
/// value they were logged with.
pub const CALORIES_BURNED_PER_MINUTE: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub exercise_type: String,
    pub duration_minutes: i64,
    pub calories_burned: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewWorkoutRequest {
    pub date: NaiveDate,
    pub exercise_type: String,
    pub duration_minutes: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewWorkoutRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.exercise_type.trim().is_empty() {
            return Err("exercise_type must not be empty".to_string());
        }
        if self.duration_minutes < 0 {
            return Err("duration_minutes must not be negative".to_string());
        }
        Ok(())
    }

    pub fn calories_burned(&self) -> i64 {
        self.duration_minutes * CALORIES_BURNED_PER_MINUTE
    }
}
