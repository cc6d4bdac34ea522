// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-keyed projection registry.
//!
//! This module provides [`ProjectionRegistry`] for turning a projection name
//! taken from configuration (for example `"Eckert6"`) into a live
//! [`Projection`].

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

use hashbrown::HashMap;

use crate::projection::Projection;
use crate::projections::{
    Albers, AzimuthalEqualArea, AzimuthalEquidistant, Eckert6, EqualEarth, Equirectangular,
    Gnomonic, Mercator, Miller, Mollweide, NaturalEarth1, Orthographic, Stereographic,
};

/// Constructs a fresh projection instance.
pub type ProjectionCtor = fn() -> Box<dyn Projection>;

/// Error returned by [`ProjectionRegistry::create`] for an unregistered name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownProjection {
    /// The name that was looked up.
    pub name: String,
}

impl fmt::Display for UnknownProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no projection registered under {:?}", self.name)
    }
}

impl core::error::Error for UnknownProjection {}

/// A table of projection constructors keyed by name.
///
/// The registry is an ordinary value owned by whoever performs name-based
/// instantiation; there is no process-wide instance. Populate it once during
/// startup, typically via [`ProjectionRegistry::with_builtins`], and treat it
/// as read-only afterwards.
///
/// # Example
///
/// ```rust
/// use understory_projection::ProjectionRegistry;
///
/// let registry = ProjectionRegistry::with_builtins();
///
/// let ctor = registry.resolve("Eckert6").expect("builtin");
/// let eckert = ctor();
/// let origin = eckert.project(0.0, 0.0);
/// assert_eq!((origin.x, origin.y), (0.0, 0.0));
///
/// assert!(registry.resolve("DoesNotExist").is_none());
/// ```
#[derive(Clone, Default)]
pub struct ProjectionRegistry {
    ctors: HashMap<String, ProjectionCtor>,
}

impl ProjectionRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every shipped projection.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Registers `ctor` under `name`.
    ///
    /// Registering a name twice replaces the earlier constructor, which is
    /// returned.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        ctor: ProjectionCtor,
    ) -> Option<ProjectionCtor> {
        let name = name.into();
        if self.ctors.contains_key(&name) {
            log::debug!("replacing projection constructor registered as {name:?}");
        }
        self.ctors.insert(name, ctor)
    }

    /// Looks up the constructor registered under `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ProjectionCtor> {
        self.ctors.get(name).copied()
    }

    /// Instantiates the projection registered under `name`.
    ///
    /// For callers that treat an unknown name as a configuration error rather
    /// than falling back to a default.
    pub fn create(&self, name: &str) -> Result<Box<dyn Projection>, UnknownProjection> {
        self.resolve(name)
            .map(|ctor| ctor())
            .ok_or_else(|| UnknownProjection {
                name: name.to_string(),
            })
    }

    /// Returns `true` if a constructor is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }

    /// Returns the number of registered names.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Iterates over the registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ctors.keys().map(String::as_str)
    }
}

impl fmt::Debug for ProjectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Registers every shipped projection under its [`Projection::name`].
///
/// This is the explicit bootstrap step a host calls once before resolving
/// names. Entries already present under the same names are replaced.
pub fn register_builtins(registry: &mut ProjectionRegistry) {
    let builtins: [ProjectionCtor; 13] = [
        || Box::new(Equirectangular),
        || Box::new(Mercator),
        || Box::new(Miller),
        || Box::new(Eckert6),
        || Box::new(Mollweide),
        || Box::new(EqualEarth),
        || Box::new(NaturalEarth1),
        || Box::new(Albers::default()),
        || Box::new(Orthographic),
        || Box::new(Stereographic),
        || Box::new(AzimuthalEqualArea),
        || Box::new(AzimuthalEquidistant),
        || Box::new(Gnomonic),
    ];
    for ctor in builtins {
        let name = ctor().name();
        registry.register(name, ctor);
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::{ProjectionRegistry, UnknownProjection};
    use crate::projection::Projection;
    use crate::projections::{Eckert6, Mercator};

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = ProjectionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("Eckert6").is_none());
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = ProjectionRegistry::with_builtins();
        assert!(registry.resolve("DoesNotExist").is_none());
        assert!(!registry.contains("DoesNotExist"));

        let err = registry.create("DoesNotExist").unwrap_err();
        assert_eq!(
            err,
            UnknownProjection {
                name: "DoesNotExist".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "no projection registered under \"DoesNotExist\""
        );
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = ProjectionRegistry::new();
        assert!(registry.register("Eckert6", || Box::new(Eckert6)).is_none());
        let previous = registry.register("Eckert6", || Box::new(Mercator));

        assert_eq!(previous.map(|ctor| ctor().name()), Some("Eckert6"));
        assert_eq!(registry.len(), 1);
        let ctor = registry.resolve("Eckert6").unwrap();
        assert_eq!(ctor().name(), "Mercator");
    }

    #[test]
    fn builtins_are_registered_under_their_names() {
        let registry = ProjectionRegistry::with_builtins();
        assert_eq!(registry.len(), 13);
        for name in registry.names() {
            let projection = registry.create(name).unwrap();
            assert_eq!(projection.name(), name);
        }

        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        assert!(names.binary_search(&"Eckert6").is_ok());
        assert!(names.binary_search(&"Albers").is_ok());
        assert!(names.binary_search(&"Orthographic").is_ok());
    }

    #[test]
    fn created_instances_are_independent() {
        let registry = ProjectionRegistry::with_builtins();
        let a: Box<dyn Projection> = registry.create("Eckert6").unwrap();
        let b: Box<dyn Projection> = registry.create("Eckert6").unwrap();
        assert_eq!(a.project(0.4, 0.3), b.project(0.4, 0.3));
    }
}
