//! Store doubles that fail, for exercising collaborator error paths.

use async_trait::async_trait;
use sea_orm::DbErr;
use tower_sessions::{
    session::{Id, Record},
    session_store, MemoryStore, SessionStore,
};
use wunderlist::server::{
    data::{NewUserRecord, TodoStore, UserCriteria, UserRecordChanges, UserStore},
    model::db::{TodoModel, UserModel},
};

/// Detail carried by every error the doubles return
pub const STORE_FAILURE: &str = "store unavailable";

fn failure() -> DbErr {
    DbErr::Custom(STORE_FAILURE.to_string())
}

pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        Err(failure())
    }

    async fn find_by(&self, _criteria: UserCriteria) -> Result<Option<UserModel>, DbErr> {
        Err(failure())
    }

    async fn insert(&self, _new_user: NewUserRecord) -> Result<UserModel, DbErr> {
        Err(failure())
    }

    async fn update_by_id(
        &self,
        _user_id: i32,
        _changes: UserRecordChanges,
    ) -> Result<Option<UserModel>, DbErr> {
        Err(failure())
    }

    async fn delete_by_id(&self, _user_id: i32) -> Result<u64, DbErr> {
        Err(failure())
    }
}

pub struct FailingTodoStore;

#[async_trait]
impl TodoStore for FailingTodoStore {
    async fn list_for_user(&self, _user_id: i32) -> Result<Vec<TodoModel>, DbErr> {
        Err(failure())
    }
}

/// Session store that fails every delete, and every load when built with
/// [`FailingSessionStore::failing_reads`]. Other calls go to an in-memory store.
#[derive(Debug, Clone, Default)]
pub struct FailingSessionStore {
    inner: MemoryStore,
    fail_reads: bool,
}

impl FailingSessionStore {
    /// Sessions can't be loaded or deleted
    pub fn failing_reads() -> Self {
        Self {
            inner: MemoryStore::default(),
            fail_reads: true,
        }
    }

    /// Sessions can be saved and loaded but not deleted
    pub fn failing_deletes() -> Self {
        Self::default()
    }
}

fn session_failure() -> session_store::Error {
    session_store::Error::Backend(STORE_FAILURE.to_string())
}

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        self.inner.create(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.inner.save(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        if self.fail_reads {
            return Err(session_failure());
        }

        self.inner.load(session_id).await
    }

    async fn delete(&self, _session_id: &Id) -> session_store::Result<()> {
        Err(session_failure())
    }
}
