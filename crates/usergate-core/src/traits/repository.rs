//! Generic repository trait for entity storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Each entity gets a strongly typed repository through the type
/// parameters. Entity-specific lookups (by email, partial updates) are
/// declared on extension traits next to the concrete implementations.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Return every stored entity, oldest first.
    async fn list_all(&self) -> AppResult<Vec<Entity>>;

    /// Insert a new entity and return it.
    async fn insert(&self, entity: Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: &Id) -> AppResult<bool>;
}
