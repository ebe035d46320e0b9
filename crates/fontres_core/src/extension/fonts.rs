//! Font resource extension descriptor.

use crate::extension::descriptor::ExtensionType;
use crate::extension::resource_kind::ResourceKind;

/// Extension that swaps font references in a resource pipeline for the
/// stylesheet resources generated from them.
pub static FONT_RESOURCE_EXTENSION: ExtensionType = ExtensionType {
    id: "fonts.resource_manager",
    name: "FontResourceExtension",
    version: env!("CARGO_PKG_VERSION"),
    resource_kinds: &[ResourceKind::Font, ResourceKind::Css],
};

/// Returns the font resource extension descriptor.
pub fn font_resource_extension() -> &'static ExtensionType {
    &FONT_RESOURCE_EXTENSION
}

#[cfg(test)]
mod tests {
    use super::{font_resource_extension, FONT_RESOURCE_EXTENSION};
    use crate::extension::resource_kind::ResourceKind;

    #[test]
    fn font_extension_descriptor_is_valid() {
        font_resource_extension()
            .validate()
            .expect("font extension descriptor must validate");
    }

    #[test]
    fn font_extension_handles_fonts_and_css() {
        let extension = font_resource_extension();
        assert_eq!(extension.name, "FontResourceExtension");
        assert!(extension.handles(ResourceKind::Font));
        assert!(extension.handles(ResourceKind::Css));
        assert!(!extension.handles(ResourceKind::Script));
    }

    #[test]
    fn accessor_resolves_to_the_same_descriptor() {
        assert!(std::ptr::eq(
            font_resource_extension(),
            font_resource_extension()
        ));
        assert_eq!(*font_resource_extension(), FONT_RESOURCE_EXTENSION);
    }
}
