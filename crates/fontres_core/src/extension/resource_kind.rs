//! Resource kinds an extension can declare it handles.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Kind of resource flowing through a host resource pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Font,
    Css,
    Script,
}

impl ResourceKind {
    /// Stable string id used in declarations and CLI input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Font => RESOURCE_KIND_FONT,
            Self::Css => RESOURCE_KIND_CSS,
            Self::Script => RESOURCE_KIND_SCRIPT,
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Font => "Font references declared by templates and bundles.",
            Self::Css => "Stylesheet resources emitted into the css bundle.",
            Self::Script => "Script resources emitted into the script bundle.",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration string for font resources.
pub const RESOURCE_KIND_FONT: &str = "font";
/// Declaration string for stylesheet resources.
pub const RESOURCE_KIND_CSS: &str = "css";
/// Declaration string for script resources.
pub const RESOURCE_KIND_SCRIPT: &str = "script";

const SUPPORTED_RESOURCE_KIND_STRINGS: &[&str] =
    &[RESOURCE_KIND_FONT, RESOURCE_KIND_CSS, RESOURCE_KIND_SCRIPT];

/// Returns supported resource kind strings.
pub fn supported_resource_kind_strings() -> &'static [&'static str] {
    SUPPORTED_RESOURCE_KIND_STRINGS
}

/// Parses one resource kind from its string id.
pub fn parse_resource_kind(value: &str) -> Result<ResourceKind, ResourceKindError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ResourceKindError::EmptyResourceKind);
    }

    match normalized {
        RESOURCE_KIND_FONT => Ok(ResourceKind::Font),
        RESOURCE_KIND_CSS => Ok(ResourceKind::Css),
        RESOURCE_KIND_SCRIPT => Ok(ResourceKind::Script),
        other => Err(ResourceKindError::UnsupportedResourceKind(
            other.to_string(),
        )),
    }
}

/// Resource kind parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKindError {
    EmptyResourceKind,
    UnsupportedResourceKind(String),
}

impl Display for ResourceKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyResourceKind => write!(f, "resource kind must not be empty"),
            Self::UnsupportedResourceKind(value) => {
                write!(
                    f,
                    "resource kind is unsupported: {value} (expected {})",
                    SUPPORTED_RESOURCE_KIND_STRINGS.join("|")
                )
            }
        }
    }
}

impl Error for ResourceKindError {}

#[cfg(test)]
mod tests {
    use super::{
        parse_resource_kind, supported_resource_kind_strings, ResourceKind, ResourceKindError,
    };

    #[test]
    fn parses_all_supported_resource_kinds() {
        assert_eq!(
            parse_resource_kind("font").expect("font parse"),
            ResourceKind::Font
        );
        assert_eq!(
            parse_resource_kind(" css ").expect("css parse"),
            ResourceKind::Css
        );
        assert_eq!(
            parse_resource_kind("script").expect("script parse"),
            ResourceKind::Script
        );
    }

    #[test]
    fn rejects_blank_resource_kind() {
        let err = parse_resource_kind("  ").expect_err("blank kind must fail");
        assert_eq!(err, ResourceKindError::EmptyResourceKind);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let err = parse_resource_kind("Font").expect_err("capitalized kind must fail");
        assert_eq!(
            err,
            ResourceKindError::UnsupportedResourceKind("Font".to_string())
        );
        assert!(err.to_string().contains("font|css|script"));
    }

    #[test]
    fn string_ids_round_trip_through_parser() {
        for value in supported_resource_kind_strings() {
            let kind = parse_resource_kind(value).expect("supported kind parses");
            assert_eq!(kind.as_str(), *value);
            assert_eq!(kind.to_string(), *value);
        }
    }

    #[test]
    fn exposes_user_facing_descriptions() {
        assert!(ResourceKind::Font.description().contains("Font"));
        assert!(ResourceKind::Css.description().contains("css"));
        assert!(ResourceKind::Script.description().contains("script"));
    }
}
