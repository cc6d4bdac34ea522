// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Projection: headless geographic map projections.
//!
//! This crate maps between the sphere and the plane for map views. It
//! provides:
//! - The [`Projection`] contract: a stateless `project`/`unproject` pair in
//!   radians, with NaN results for points outside a projection's image.
//! - A family of concrete projections in [`projections`]: cylindrical,
//!   pseudocylindrical (including [`projections::Eckert6`]), conic, and
//!   azimuthal.
//! - [`Rotation`] and [`Rotated`] for re-centering the globe before projecting.
//! - [`MapFrame`] for degree-based conversion with scale and center offset.
//! - [`ProjectionRegistry`] for resolving projections by name.
//!
//! It does **not** render anything, clip geometry, or own map data. Callers
//! are expected to:
//! - Resolve a projection once per map view and reuse it for every point.
//! - Skip points whose projected or unprojected coordinates are not finite.
//! - Feed the resulting planar coordinates into their own viewport and
//!   rendering layers.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_projection::{GeoPoint, MapFrame, ProjectionRegistry};
//!
//! // Explicit bootstrap: register the shipped projections.
//! let registry = ProjectionRegistry::with_builtins();
//!
//! // Fall back to a default when configuration names something unknown.
//! let projection = registry
//!     .create("Eckert6")
//!     .or_else(|_| registry.create("Equirectangular"))
//!     .unwrap();
//!
//! // Radians in, unscaled plane out.
//! let p = projection.project(0.0, 0.0);
//! assert_eq!((p.x, p.y), (0.0, 0.0));
//!
//! // Degrees in, map coordinates out (y grows downwards).
//! let mut frame = MapFrame::new();
//! frame.set_scale(2.0);
//! let london = frame.convert(&projection, GeoPoint::new(-0.13, 51.5));
//! let back = frame.invert(&projection, london);
//! assert!((back.latitude - 51.5).abs() < 1e-6);
//! ```
//!
//! ## Numerical behavior
//!
//! Projections without a closed form use a capped Newton iteration
//! ([`solve::capped_newton`]). When the cap is reached first, the last
//! iterate is used without reporting anything beyond a `trace` log record,
//! so rendered output stays stable across releases.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod frame;
mod geo;
mod projection;
pub mod projections;
mod registry;
mod rotation;
pub mod solve;

pub use frame::MapFrame;
pub use geo::{DEGREES, GeoPoint, RADIANS, distance, intermediate_point, wrap_longitude};
pub use kurbo::Point;
pub use projection::{Projection, Rotated, projected_bounds};
pub use registry::{ProjectionCtor, ProjectionRegistry, UnknownProjection, register_builtins};
pub use rotation::Rotation;
