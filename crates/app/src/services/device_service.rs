//! Device service — the registration pipeline plus rename/delete/list
//! use-cases.

use casa_domain::device::{Device, DeviceDraft, DeviceKind, DevicePatch, LightDevice};
use casa_domain::error::DomainError;

use crate::ports::DeviceRepository;

/// Application service for device operations.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a device from a raw draft.
    ///
    /// Pipeline order: base validation, kind dispatch, subtype validation
    /// and materialization, then the atomic two-table insert. Persistence
    /// is never attempted once validation has failed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotNullViolation`] or
    /// [`DomainError::IllegalData`] from the validators,
    /// [`DomainError::IllegalData`] for an unsupported kind tag, or
    /// whatever classified error the repository reports.
    #[tracing::instrument(skip(self, draft), fields(device_id = draft.id.as_deref()))]
    pub async fn register(&self, draft: DeviceDraft) -> Result<(), DomainError> {
        draft.validate_base()?;

        match draft.kind() {
            Some(DeviceKind::Light) => {
                let light = draft.into_light()?;
                self.repo.add_light(light).await
            }
            Some(DeviceKind::Unsupported(kind)) => Err(DomainError::IllegalData(format!(
                "unsupported device kind: {kind}"
            ))),
            // validate_base already guarantees the tag is present.
            None => Err(DomainError::NotNullViolation),
        }
    }

    /// Rename a device. `Ok(false)` means the device does not exist, which
    /// the transport layer turns into a 404.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IllegalData`] on a blank id or name, or a
    /// classified storage error.
    #[tracing::instrument(skip(self, patch), fields(device_id = %patch.id))]
    pub async fn rename(&self, patch: DevicePatch) -> Result<bool, DomainError> {
        patch.validate()?;
        self.repo.rename(patch.id, patch.name).await
    }

    /// Delete a device by id, with the same found/not-found contract as
    /// [`Self::rename`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IllegalData`] on a blank id, or a classified
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: String) -> Result<bool, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::IllegalData(
                "empty strings are not valid values".to_string(),
            ));
        }
        self.repo.delete(id).await
    }

    /// List base devices, optionally filtered by service type.
    ///
    /// # Errors
    ///
    /// Returns a classified storage error.
    pub async fn list(&self, service_type: Option<String>) -> Result<Vec<Device>, DomainError> {
        self.repo.get_all(service_type).await
    }

    /// List full light shapes.
    ///
    /// # Errors
    ///
    /// Returns a classified storage error.
    pub async fn list_lights(&self) -> Result<Vec<LightDevice>, DomainError> {
        self.repo.get_lights().await
    }
}
