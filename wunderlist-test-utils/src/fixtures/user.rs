use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{constant::TEST_HASH_COST, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user, storing a bcrypt hash of `password` the way registration does.
    pub async fn insert_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let password_hash = bcrypt::hash(password, TEST_HASH_COST)?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Fetch a user row directly, bypassing the application's stores.
    pub async fn find_user(&self, user_id: i32) -> Result<Option<entity::user::Model>, TestError> {
        Ok(entity::prelude::User::find_by_id(user_id)
            .one(&self.setup.db)
            .await?)
    }

    /// Count all user rows.
    pub async fn count_users(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::User::find().count(&self.setup.db).await?)
    }
}
