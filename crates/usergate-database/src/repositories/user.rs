//! User repository trait and its in-memory implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use usergate_core::error::AppError;
use usergate_core::result::AppResult;
use usergate_core::traits::Repository;
use usergate_core::types::UserId;
use usergate_entity::user::{UpdateUser, User};

/// User-specific storage operations on top of the generic [`Repository`].
#[async_trait]
pub trait UserRepository: Repository<User, UserId> {
    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Apply a partial update and return the stored result.
    ///
    /// Fails with `NotFound` when no user has the given id and with
    /// `Conflict` when the patch moves the email onto another user's.
    async fn update(&self, id: &UserId, patch: UpdateUser) -> AppResult<User>;
}

/// In-memory user store backed by [`DashMap`].
///
/// A secondary index keyed by lower-cased email makes the uniqueness
/// check and the insert a single atomic step.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    /// Users keyed by id.
    users: DashMap<UserId, User>,
    /// Lower-cased email to owning user id.
    email_index: DashMap<String, UserId>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.to_ascii_lowercase()
}

#[async_trait]
impl Repository<User, UserId> for MemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        match self.email_index.entry(email_key(&user.email)) {
            Entry::Occupied(_) => Err(AppError::conflict("E-mail already registered")),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.users.insert(user.id, user.clone());
                debug!(user_id = %user.id, "User inserted");
                Ok(user)
            }
        }
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        match self.users.remove(id) {
            Some((_, user)) => {
                self.email_index.remove(&email_key(&user.email));
                debug!(user_id = %id, "User deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.email_index.get(&email_key(email)).map(|e| *e.value()) else {
            return Ok(None);
        };
        self.find_by_id(&id).await
    }

    async fn update(&self, id: &UserId, mut patch: UpdateUser) -> AppResult<User> {
        let current_email = self
            .users
            .get(id)
            .map(|entry| entry.value().email.clone())
            .ok_or_else(|| AppError::not_found("User not found"))?;

        // Reserve the new address before touching the record.
        let moved_email = match patch.email.take() {
            Some(new_email) if email_key(&new_email) != email_key(&current_email) => {
                match self.email_index.entry(email_key(&new_email)) {
                    Entry::Occupied(_) => {
                        return Err(AppError::conflict("E-mail already registered"));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(*id);
                    }
                }
                Some(new_email)
            }
            same => same,
        };
        let reindexed = moved_email
            .as_deref()
            .is_some_and(|e| email_key(e) != email_key(&current_email));
        patch.email = moved_email;

        let Some(mut entry) = self.users.get_mut(id) else {
            // Deleted concurrently; release the reservation.
            if let (true, Some(email)) = (reindexed, &patch.email) {
                self.email_index.remove(&email_key(email));
            }
            return Err(AppError::not_found("User not found"));
        };
        entry.apply(patch);
        let updated = entry.value().clone();
        drop(entry);

        if reindexed {
            self.email_index.remove(&email_key(&current_email));
        }

        debug!(user_id = %id, "User updated");
        Ok(updated)
    }
}
