//! Font resource extension wiring for host resource pipelines.
//! Hosts call `install_resource_manager` once at startup.

pub mod extension;
pub mod logging;

pub use extension::descriptor::{DescriptorValidationError, ExtensionType};
pub use extension::fonts::{font_resource_extension, FONT_RESOURCE_EXTENSION};
pub use extension::install::{install_extension, install_resource_manager};
pub use extension::manager::ResourceManager;
pub use extension::registry::{
    ExtensionRegistry, RegisteredExtension, RegistrationId, RegistryError, RegistryResult,
};
pub use extension::resource_kind::{
    parse_resource_kind, supported_resource_kind_strings, ResourceKind, ResourceKindError,
};
pub use logging::{default_log_level, init_logging, logging_status};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
