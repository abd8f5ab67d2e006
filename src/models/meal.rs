use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub meal_type: String,
    pub food_item: String,
    pub calories: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewMealRequest {
    pub date: NaiveDate,
    pub meal_type: String,
    pub food_item: String,
    pub calories: i64,
}

impl NewMealRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.food_item.trim().is_empty() {
            return Err("food_item must not be empty".to_string());
        }
        if self.calories < 0 {
            return Err("calories must not be negative".to_string());
        }
        Ok(())
    }
}
