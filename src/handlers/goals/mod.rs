pub mod add_goal;
pub mod delete_goal;
pub mod list_goals;
pub mod update_goal;
