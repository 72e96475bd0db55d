use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn todo<'a>(&'a self) -> TodoFixtures<'a> {
        TodoFixtures { setup: self }
    }
}

pub struct TodoFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TodoFixtures<'a> {
    /// Insert a todo item owned by `user_id`.
    pub async fn insert_todo(
        &self,
        user_id: i32,
        title: &str,
        completed: bool,
    ) -> Result<entity::todo::Model, TestError> {
        Ok(entity::prelude::Todo::insert(entity::todo::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            completed: ActiveValue::Set(completed),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
