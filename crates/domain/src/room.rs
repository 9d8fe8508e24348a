//! Room — a physical grouping a device can be assigned to.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::RoomId;

/// A room, keyed by a storage-generated integer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

/// Raw room payload before validation; the name may be absent entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomDraft {
    pub name: Option<String>,
}

impl RoomDraft {
    /// Validate and extract the room name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotNullViolation`] when the name is absent and
    /// [`DomainError::IllegalData`] when it is blank after trimming.
    pub fn into_name(self) -> Result<String, DomainError> {
        let Some(name) = self.name else {
            return Err(DomainError::NotNullViolation);
        };
        if name.trim().is_empty() {
            return Err(DomainError::IllegalData(
                "room name may not be blank".to_string(),
            ));
        }
        Ok(name)
    }
}
