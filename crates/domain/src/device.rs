//! Device — the base shape of a registered IoT device, its subtypes, and
//! the validators that gate registration.
//!
//! Incoming registrations arrive as a [`DeviceDraft`] where every field is
//! optional, so that "absent" and "blank" stay distinguishable: an absent
//! required field is a [`DomainError::NotNullViolation`], a present-but-blank
//! one is [`DomainError::IllegalData`]. Validation runs in exactly that
//! order (completeness first, content second) and never touches storage.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::RoomId;

/// Dispatch target parsed from a draft's free-form kind tag.
///
/// Adding a subtype means adding a variant here plus its validator, rather
/// than scattering string comparisons across handlers. The tag itself stays
/// open-ended text in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceKind {
    /// A light, the only subtype currently modeled.
    Light,
    /// Any other tag; registration rejects these as illegal data.
    Unsupported(String),
}

impl DeviceKind {
    /// Parse a kind tag, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Unsupported(raw.to_string())
        }
    }
}

/// A validated base device, as listed from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub service_type: String,
    pub manufacturer: String,
    pub set_topic: String,
    pub get_topic: String,
    pub endpoint: String,
    pub room: Option<RoomId>,
}

/// A validated light device — the base fields plus the light extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightDevice {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub service_type: String,
    pub manufacturer: String,
    pub set_topic: String,
    pub get_topic: String,
    pub endpoint: String,
    pub room: Option<RoomId>,
    pub dimmable: bool,
    pub rgb: bool,
}

/// Raw registration payload before validation.
///
/// Carries the union of every subtype's fields; the registration pipeline
/// validates the base shape first, dispatches on the kind tag, then
/// materializes the subtype from the same draft.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub service_type: Option<String>,
    pub manufacturer: Option<String>,
    pub set_topic: Option<String>,
    pub get_topic: Option<String>,
    pub endpoint: Option<String>,
    pub room: Option<RoomId>,
    pub dimmable: Option<bool>,
    pub rgb: Option<bool>,
}

impl DeviceDraft {
    /// The string fields every device shape requires, in declaration order.
    fn required_strings(&self) -> [Option<&str>; 8] {
        [
            self.id.as_deref(),
            self.name.as_deref(),
            self.kind.as_deref(),
            self.service_type.as_deref(),
            self.manufacturer.as_deref(),
            self.set_topic.as_deref(),
            self.get_topic.as_deref(),
            self.endpoint.as_deref(),
        ]
    }

    /// Validate the base device shape.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotNullViolation`] if any required field is
    /// absent, then [`DomainError::IllegalData`] if any required string is
    /// blank after trimming. The completeness check is a bulk check and
    /// does not name the offending field.
    pub fn validate_base(&self) -> Result<(), DomainError> {
        let fields = self.required_strings();
        if fields.iter().any(Option::is_none) {
            return Err(DomainError::NotNullViolation);
        }
        if fields.iter().flatten().any(|value| value.trim().is_empty()) {
            return Err(DomainError::IllegalData(
                "required fields may not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate the light shape: the base fields plus both capability flags.
    ///
    /// Booleans are required only in the sense of being present; they have
    /// no emptiness concept. The room reference is never required.
    ///
    /// # Errors
    ///
    /// Same two-phase contract as [`Self::validate_base`].
    pub fn validate_light(&self) -> Result<(), DomainError> {
        let fields = self.required_strings();
        if fields.iter().any(Option::is_none) || self.dimmable.is_none() || self.rgb.is_none() {
            return Err(DomainError::NotNullViolation);
        }
        if fields.iter().flatten().any(|value| value.trim().is_empty()) {
            return Err(DomainError::IllegalData(
                "required fields may not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse the kind tag, if present.
    #[must_use]
    pub fn kind(&self) -> Option<DeviceKind> {
        self.kind.as_deref().map(DeviceKind::parse)
    }

    /// Validate as a light and materialize the full [`LightDevice`].
    ///
    /// # Errors
    ///
    /// Propagates whatever [`Self::validate_light`] reports.
    pub fn into_light(self) -> Result<LightDevice, DomainError> {
        self.validate_light()?;
        let Self {
            id: Some(id),
            name: Some(name),
            kind: Some(kind),
            service_type: Some(service_type),
            manufacturer: Some(manufacturer),
            set_topic: Some(set_topic),
            get_topic: Some(get_topic),
            endpoint: Some(endpoint),
            room,
            dimmable: Some(dimmable),
            rgb: Some(rgb),
        } = self
        else {
            return Err(DomainError::NotNullViolation);
        };

        Ok(LightDevice {
            id,
            name,
            kind,
            service_type,
            manufacturer,
            set_topic,
            get_topic,
            endpoint,
            room,
            dimmable,
            rgb,
        })
    }
}

/// Partial update payload — the only supported mutation is a rename.
#[derive(Debug, Clone, Deserialize)]
pub struct DevicePatch {
    pub id: String,
    pub name: String,
}

impl DevicePatch {
    /// Check that neither the target id nor the new name is blank.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IllegalData`] on a blank id or name.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() || self.name.trim().is_empty() {
            return Err(DomainError::IllegalData(
                "empty strings are not valid values".to_string(),
            ));
        }
        Ok(())
    }
}
