use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Goal type whose rows feed the weight checkpoint list in the weekly report.
pub const WEIGHT_GOAL_TYPE: &str = "weight";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub goal_type: String,
    pub target_value: f64,
    pub target_date: NaiveDate,
    pub current_value: Option<f64>,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewGoalRequest {
    pub goal_type: String,
    pub target_value: f64,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub current_value: Option<f64>,
}

impl NewGoalRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.goal_type.trim().is_empty() {
            return Err("goal_type must not be empty".to_string());
        }
        Ok(())
    }
}

/// current_value and completed are the only mutable fields of a goal.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateGoalRequest {
    pub current_value: f64,
    #[serde(default)]
    pub completed: bool,
}
