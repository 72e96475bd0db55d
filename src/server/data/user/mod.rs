use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{NewUserRecord, UserCriteria, UserRecordChanges, UserStore},
    model::db::UserModel,
};

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(&self.db)
            .await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    /// Creates a new user
    pub async fn create(&self, username: String, password_hash: String) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(&self.db).await
    }

    pub async fn update(
        &self,
        user_id: i32,
        username: String,
        password_hash: Option<String>,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match self.get_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.username = ActiveValue::Set(username);
        if let Some(password_hash) = password_hash {
            user_am.password = ActiveValue::Set(password_hash);
        }

        let user = user_am.update(&self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the returned number of rows affected.
    pub async fn delete(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        UserRepository::get_all(self).await
    }

    async fn find_by(&self, criteria: UserCriteria) -> Result<Option<UserModel>, DbErr> {
        match criteria {
            UserCriteria::Id(user_id) => self.get_by_id(user_id).await,
            UserCriteria::Username(username) => self.get_by_username(&username).await,
        }
    }

    async fn insert(&self, new_user: NewUserRecord) -> Result<UserModel, DbErr> {
        self.create(new_user.username, new_user.password_hash).await
    }

    async fn update_by_id(
        &self,
        user_id: i32,
        changes: UserRecordChanges,
    ) -> Result<Option<UserModel>, DbErr> {
        self.update(user_id, changes.username, changes.password_hash)
            .await
    }

    async fn delete_by_id(&self, user_id: i32) -> Result<u64, DbErr> {
        self.delete(user_id).await
    }
}
