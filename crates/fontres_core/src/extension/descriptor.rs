//! Extension type descriptors and declaration validation.
//!
//! # Responsibility
//! - Identify one pluggable extension implementation by stable id and name.
//! - Validate declaration-level invariants before a registry accepts it.
//!
//! # Invariants
//! - Descriptors are `'static`; resolving one can never fail at runtime.
//! - Validation is pure and never touches registry state.

use crate::extension::resource_kind::ResourceKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EXTENSION_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:[._-][a-z0-9]+)*$").expect("valid extension id regex")
});
static EXTENSION_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("valid extension name regex"));
static SEMVER_TRIPLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("valid semver regex"));

/// Static descriptor of one extension implementation.
///
/// This is the value handed to `ResourceManager::register_extension`; hosts
/// key their registries on `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionType {
    /// Stable extension identifier, e.g. `fonts.resource_manager`.
    pub id: &'static str,
    /// Implementation type name, e.g. `FontResourceExtension`.
    pub name: &'static str,
    /// Semantic version string (`major.minor.patch`).
    pub version: &'static str,
    /// Resource kinds the extension handles.
    pub resource_kinds: &'static [ResourceKind],
}

impl ExtensionType {
    /// Returns whether this descriptor declares `kind`.
    pub fn handles(&self, kind: ResourceKind) -> bool {
        self.resource_kinds.contains(&kind)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), DescriptorValidationError> {
        if self.id.trim().is_empty() {
            return Err(DescriptorValidationError::EmptyId);
        }
        if !EXTENSION_ID_RE.is_match(self.id) {
            return Err(DescriptorValidationError::InvalidId(self.id.to_string()));
        }

        if self.name.trim().is_empty() {
            return Err(DescriptorValidationError::EmptyName);
        }
        if !EXTENSION_NAME_RE.is_match(self.name) {
            return Err(DescriptorValidationError::InvalidName(
                self.name.to_string(),
            ));
        }

        if self.version.trim().is_empty() {
            return Err(DescriptorValidationError::EmptyVersion);
        }
        if !SEMVER_TRIPLET_RE.is_match(self.version) {
            return Err(DescriptorValidationError::InvalidVersion(
                self.version.to_string(),
            ));
        }

        if self.resource_kinds.is_empty() {
            return Err(DescriptorValidationError::MissingResourceKinds);
        }
        let mut dedup = BTreeSet::new();
        for kind in self.resource_kinds {
            if !dedup.insert(*kind) {
                return Err(DescriptorValidationError::DuplicateResourceKind(*kind));
            }
        }

        Ok(())
    }
}

/// Descriptor validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorValidationError {
    EmptyId,
    InvalidId(String),
    EmptyName,
    InvalidName(String),
    EmptyVersion,
    InvalidVersion(String),
    MissingResourceKinds,
    DuplicateResourceKind(ResourceKind),
}

impl Display for DescriptorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "extension id must not be empty"),
            Self::InvalidId(value) => write!(f, "extension id is invalid: {value}"),
            Self::EmptyName => write!(f, "extension name must not be empty"),
            Self::InvalidName(value) => write!(
                f,
                "extension name is invalid: {value} (expected UpperCamelCase)"
            ),
            Self::EmptyVersion => write!(f, "extension version must not be empty"),
            Self::InvalidVersion(value) => write!(
                f,
                "extension version is invalid: {value} (expected major.minor.patch)"
            ),
            Self::MissingResourceKinds => {
                write!(f, "extension must declare at least one resource kind")
            }
            Self::DuplicateResourceKind(kind) => {
                write!(f, "extension resource kind is duplicated: {kind}")
            }
        }
    }
}

impl Error for DescriptorValidationError {}
