use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A recurring habit. `streak` counts distinct calendar days on which the
/// habit was completed, incremented at most once per day; it is never
/// decremented when a day is missed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: i64,
    pub user_id: i64,
    pub habit_name: String,
    pub frequency: String,
    pub goal_description: Option<String>,
    pub streak: i64,
    pub last_completed: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewHabitRequest {
    pub habit_name: String,
    pub frequency: String,
    #[serde(default)]
    pub goal_description: Option<String>,
}

impl NewHabitRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.habit_name.trim().is_empty() {
            return Err("habit_name must not be empty".to_string());
        }
        if self.frequency.trim().is_empty() {
            return Err("frequency must not be empty".to_string());
        }
        Ok(())
    }
}
