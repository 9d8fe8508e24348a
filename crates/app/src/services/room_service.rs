//! Room service — use-cases for managing rooms.

use casa_domain::error::DomainError;
use casa_domain::id::RoomId;
use casa_domain::room::{Room, RoomDraft};

use crate::ports::RoomRepository;

/// Application service for room CRUD operations.
pub struct RoomService<R> {
    repo: R,
}

impl<R: RoomRepository> RoomService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a room and return it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotNullViolation`] or
    /// [`DomainError::IllegalData`] from the draft validation, or a
    /// classified storage error.
    #[tracing::instrument(skip(self, draft))]
    pub async fn add(&self, draft: RoomDraft) -> Result<Room, DomainError> {
        let name = draft.into_name()?;
        self.repo.add(name).await
    }

    /// Rename a room. `Ok(false)` means no room with that id exists.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotNullViolation`] or
    /// [`DomainError::IllegalData`] from the draft validation, or a
    /// classified storage error.
    #[tracing::instrument(skip(self, draft))]
    pub async fn edit(&self, id: RoomId, draft: RoomDraft) -> Result<bool, DomainError> {
        let name = draft.into_name()?;
        self.repo.rename(id, name).await
    }

    /// Delete a room. Fails with [`DomainError::IllegalData`] while any
    /// device still references it; devices are never silently detached.
    ///
    /// # Errors
    ///
    /// Returns a classified storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: RoomId) -> Result<bool, DomainError> {
        self.repo.delete(id).await
    }

    /// List all rooms.
    ///
    /// # Errors
    ///
    /// Returns a classified storage error.
    pub async fn list(&self) -> Result<Vec<Room>, DomainError> {
        self.repo.get_all().await
    }
}
