//! Extension registration contracts.
//!
//! This module defines static extension descriptors, the `ResourceManager`
//! seam hosts implement, the startup hooks that register extensions with a
//! host, and an in-process reference registry.

pub mod descriptor;
pub mod fonts;
pub mod install;
pub mod manager;
pub mod registry;
pub mod resource_kind;
