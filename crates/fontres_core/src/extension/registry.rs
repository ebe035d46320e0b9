//! In-process extension registry.
//!
//! Reference `ResourceManager` host used by the CLI and by embedders that do
//! not bring their own registry. It records declarations only.

use crate::extension::descriptor::{DescriptorValidationError, ExtensionType};
use crate::extension::manager::ResourceManager;
use crate::extension::resource_kind::ResourceKind;
use log::{error, info};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable id assigned to one accepted registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for RegistrationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Registered extension snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredExtension {
    pub registration_id: RegistrationId,
    pub extension: &'static ExtensionType,
}

/// Result of one registry registration.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Declaration registry keyed by extension id.
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    entries: BTreeMap<&'static str, RegisteredExtension>,
    kind_index: BTreeMap<ResourceKind, BTreeSet<&'static str>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one extension after descriptor validation.
    ///
    /// # Errors
    /// - `InvalidDescriptor` when the descriptor fails validation.
    /// - `DuplicateExtensionId` when the id is already registered.
    pub fn register(
        &mut self,
        extension: &'static ExtensionType,
    ) -> RegistryResult<RegistrationId> {
        if let Err(err) = extension.validate() {
            error!(
                "event=extension_register module=extension status=error error_code=invalid_descriptor extension_id={} error={}",
                extension.id, err
            );
            return Err(RegistryError::InvalidDescriptor(err));
        }
        if self.entries.contains_key(extension.id) {
            error!(
                "event=extension_register module=extension status=error error_code=duplicate_id extension_id={}",
                extension.id
            );
            return Err(RegistryError::DuplicateExtensionId(
                extension.id.to_string(),
            ));
        }

        for kind in extension.resource_kinds {
            self.kind_index
                .entry(*kind)
                .or_default()
                .insert(extension.id);
        }

        let registration_id = RegistrationId::generate();
        self.entries.insert(
            extension.id,
            RegisteredExtension {
                registration_id,
                extension,
            },
        );
        info!(
            "event=extension_register module=extension status=ok extension_id={} registration_id={}",
            extension.id, registration_id
        );
        Ok(registration_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, extension_id: &str) -> Option<&RegisteredExtension> {
        self.entries.get(extension_id.trim())
    }

    pub fn contains(&self, extension_id: &str) -> bool {
        self.get(extension_id).is_some()
    }

    /// Returns sorted extension ids.
    pub fn extension_ids(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Returns registrations handling `kind`, sorted by extension id.
    pub fn list_by_resource_kind(&self, kind: ResourceKind) -> Vec<&RegisteredExtension> {
        let Some(ids) = self.kind_index.get(&kind) else {
            return vec![];
        };
        ids.iter().filter_map(|id| self.entries.get(id)).collect()
    }

    /// Returns all registrations sorted by extension id.
    pub fn snapshot(&self) -> Vec<RegisteredExtension> {
        self.entries.values().cloned().collect()
    }
}

impl ResourceManager for ExtensionRegistry {
    type Registration = RegistryResult<RegistrationId>;

    fn register_extension(&mut self, extension: &'static ExtensionType) -> Self::Registration {
        self.register(extension)
    }
}

/// Registry registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidDescriptor(DescriptorValidationError),
    DuplicateExtensionId(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDescriptor(err) => write!(f, "invalid extension descriptor: {err}"),
            Self::DuplicateExtensionId(value) => {
                write!(f, "extension id already registered: {value}")
            }
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDescriptor(err) => Some(err),
            Self::DuplicateExtensionId(_) => None,
        }
    }
}
