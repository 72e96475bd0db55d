use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{data::TodoStore, model::db::TodoModel};

/// Read-only access to the todo table, which is managed by the todo module
pub struct TodoRepository {
    db: DatabaseConnection,
}

impl TodoRepository {
    /// Creates a new instance of [`TodoRepository`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the todo items owned by a user, oldest first
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<TodoModel>, DbErr> {
        entity::prelude::Todo::find()
            .filter(entity::todo::Column::UserId.eq(user_id))
            .order_by_asc(entity::todo::Column::Id)
            .all(&self.db)
            .await
    }
}

#[async_trait]
impl TodoStore for TodoRepository {
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<TodoModel>, DbErr> {
        self.get_by_user_id(user_id).await
    }
}
