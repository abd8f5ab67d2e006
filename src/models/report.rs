use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::goal::Goal;
use crate::models::habit::Habit;
use crate::models::meal::MealEntry;
use crate::models::workout::WorkoutEntry;

/// Per-day grouped sums over the workouts collection.
#[derive(Debug, Clone, FromRow)]
pub struct DailyActivitySum {
    pub date: NaiveDate,
    pub total_duration: i64,
    pub total_calories: i64,
}

/// Per-day grouped sum over the meals collection.
#[derive(Debug, Clone, FromRow)]
pub struct DailyCalorieSum {
    pub date: NaiveDate,
    pub total_calories: i64,
}

/// Weight progress checkpoint, one per weight-type goal. Sparse by nature,
/// so never zero-filled.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightCheckpoint {
    pub target_date: NaiveDate,
    pub target_value: f64,
    pub current_value: Option<f64>,
}

/// Aggregated totals for a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub total_calories_burned: i64,
    pub total_calories_consumed: i64,
}

impl DailySnapshot {
    /// Sum the calorie fields of the day's rows. An empty day yields zero
    /// totals rather than an error.
    pub fn from_entries(workouts: &[WorkoutEntry], meals: &[MealEntry]) -> Self {
        Self {
            total_calories_burned: workouts.iter().map(|w| w.calories_burned).sum(),
            total_calories_consumed: meals.iter().map(|m| m.calories).sum(),
        }
    }
}

/// Everything the landing view needs for one day, plus the user's goals and
/// habits.
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub date: NaiveDate,
    pub workouts: Vec<WorkoutEntry>,
    pub meals: Vec<MealEntry>,
    pub goals: Vec<Goal>,
    pub habits: Vec<Habit>,
    pub total_calories_burned: i64,
    pub total_calories_consumed: i64,
}

/// Dense, parallel, date-ascending series over the 7-day window. Days
/// without records carry explicit zeros.
#[derive(Debug, Clone)]
pub struct SevenDaySeries {
    pub dates: Vec<NaiveDate>,
    pub durations: Vec<i64>,
    pub burned: Vec<i64>,
    pub consumed: Vec<i64>,
}

/// Dense 7-day series plus weight checkpoints. All four series are parallel
/// and date-ascending; days without records carry explicit zeros.
#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyReportResponse {
    pub dates: Vec<NaiveDate>,
    pub durations: Vec<i64>,
    pub burned: Vec<i64>,
    pub consumed: Vec<i64>,
    pub weight_checkpoints: Vec<WeightCheckpoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutChartResponse {
    pub dates: Vec<NaiveDate>,
    pub durations: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalorieChartResponse {
    pub dates: Vec<NaiveDate>,
    pub burned: Vec<i64>,
    pub consumed: Vec<i64>,
}
