use crate::models::User;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository Trait
///
/// Abstract contract for the user store. Handlers talk to this trait, never to a
/// concrete collection, so the in-memory implementation can be swapped for a mock
/// in handler tests (or a persistent backend later) without touching them.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn UserRepository>`) shareable across axum's task boundaries.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Appends the record. Returns false (and leaves the store untouched) if a
    /// record with the same username already exists.
    async fn add(&self, user: User) -> bool;

    /// Replaces the `usage` of the record with the given username, in place.
    /// Returns false if no such record exists. The username itself is never
    /// replaceable through this path.
    async fn update(&self, username: &str, usage: String) -> bool;

    /// Removes the record with the given username. Returns false if absent.
    async fn delete(&self, username: &str) -> bool;

    /// Looks up a single record by username.
    async fn get(&self, username: &str) -> Option<User>;

    /// Snapshot of all current records, in insertion order. A fresh call
    /// reflects the state at that moment; it is not a live view.
    async fn list(&self) -> Vec<User>;
}

/// RepositoryState
///
/// The concrete type used to share the store across the application state.
pub type RepositoryState = Arc<dyn UserRepository>;

/// InMemoryUserRepository
///
/// The process-lifetime store: an ordered Vec behind a single RwLock, so all
/// access is serialized behind one mutual-exclusion boundary. Lookups and
/// uniqueness checks are linear scans by username equality, which is fine at the
/// expected scale (no index structure).
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return false;
        }
        users.push(user);
        true
    }

    async fn update(&self, username: &str, usage: String) -> bool {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.username == username) {
            Some(existing) => {
                existing.usage = usage;
                true
            }
            None => false,
        }
    }

    async fn delete(&self, username: &str) -> bool {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.username == username) {
            Some(index) => {
                users.remove(index);
                true
            }
            None => false,
        }
    }

    async fn get(&self, username: &str) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.username == username).cloned()
    }

    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}
