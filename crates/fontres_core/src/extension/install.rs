//! Startup hooks that register extensions with a host resource manager.
//!
//! # Invariants
//! - Each call delegates to `register_extension` exactly once.
//! - The host's return value is passed back untouched, errors included.
//! - No state is kept here.

use crate::extension::descriptor::ExtensionType;
use crate::extension::fonts::FONT_RESOURCE_EXTENSION;
use crate::extension::manager::ResourceManager;
use log::debug;

/// Registers the font resource extension with `resource_manager`.
///
/// Hosts call this once during startup so font references in their resource
/// pipeline are resolved into generated stylesheet resources.
pub fn install_resource_manager<M>(resource_manager: &mut M) -> M::Registration
where
    M: ResourceManager + ?Sized,
{
    install_extension(resource_manager, &FONT_RESOURCE_EXTENSION)
}

/// Registers `extension` with `resource_manager` and returns the host result.
pub fn install_extension<M>(
    resource_manager: &mut M,
    extension: &'static ExtensionType,
) -> M::Registration
where
    M: ResourceManager + ?Sized,
{
    debug!(
        "event=extension_install module=extension status=delegated extension_id={} extension_name={}",
        extension.id, extension.name
    );
    resource_manager.register_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::{install_extension, install_resource_manager};
    use crate::extension::descriptor::ExtensionType;
    use crate::extension::fonts::FONT_RESOURCE_EXTENSION;
    use crate::extension::manager::ResourceManager;
    use crate::extension::resource_kind::ResourceKind;

    static SCRIPT_EXTENSION: ExtensionType = ExtensionType {
        id: "scripts.bundle",
        name: "ScriptBundleExtension",
        version: "1.0.0",
        resource_kinds: &[ResourceKind::Script],
    };

    #[derive(Default)]
    struct NameEcho {
        calls: usize,
    }

    impl ResourceManager for NameEcho {
        type Registration = &'static str;

        fn register_extension(&mut self, extension: &'static ExtensionType) -> &'static str {
            self.calls += 1;
            extension.name
        }
    }

    #[test]
    fn installs_font_extension_by_default() {
        let mut manager = NameEcho::default();
        assert_eq!(
            install_resource_manager(&mut manager),
            FONT_RESOURCE_EXTENSION.name
        );
        assert_eq!(manager.calls, 1);
    }

    #[test]
    fn installs_injected_extension() {
        let mut manager = NameEcho::default();
        assert_eq!(
            install_extension(&mut manager, &SCRIPT_EXTENSION),
            "ScriptBundleExtension"
        );
        assert_eq!(manager.calls, 1);
    }

    #[test]
    fn accepts_trait_objects() {
        let mut manager = NameEcho::default();
        let dynamic: &mut dyn ResourceManager<Registration = &'static str> = &mut manager;
        assert_eq!(install_resource_manager(dynamic), "FontResourceExtension");
        assert_eq!(manager.calls, 1);
    }
}
