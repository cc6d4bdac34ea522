// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shipped projection family.
//!
//! All projections work on the unit sphere in radians with `y` growing
//! northwards. [`register_builtins`](crate::register_builtins) registers each
//! of them under its [`Projection::name`](crate::Projection::name).

mod azimuthal;
mod conic;
mod cylindrical;
mod eckert6;
mod pseudocylindrical;

pub use azimuthal::{AzimuthalEqualArea, AzimuthalEquidistant, Gnomonic, Orthographic, Stereographic};
pub use conic::Albers;
pub use cylindrical::{Equirectangular, Mercator, Miller};
pub use eckert6::Eckert6;
pub use pseudocylindrical::{EqualEarth, Mollweide, NaturalEarth1};
