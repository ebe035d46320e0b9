//! Resource manager registration seam.

use crate::extension::descriptor::ExtensionType;

/// Host-side registry that accepts pluggable extensions.
///
/// The host owns the registration record and decides what a registration
/// returns; fallible hosts use a `Result` as `Registration`.
pub trait ResourceManager {
    type Registration;

    fn register_extension(&mut self, extension: &'static ExtensionType) -> Self::Registration;
}

impl<M: ResourceManager + ?Sized> ResourceManager for &mut M {
    type Registration = M::Registration;

    fn register_extension(&mut self, extension: &'static ExtensionType) -> Self::Registration {
        (**self).register_extension(extension)
    }
}
