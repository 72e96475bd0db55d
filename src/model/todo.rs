use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An item on a user's todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::todo::Model> for TodoDto {
    fn from(todo: entity::todo::Model) -> Self {
        Self {
            id: todo.id,
            user_id: todo.user_id,
            title: todo.title,
            completed: todo.completed,
            created_at: todo.created_at,
        }
    }
}
