// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use kurbo::Point;

use crate::geo::GeoPoint;
use crate::projection::Projection;

/// Plate carrée: longitude and latitude used directly as `x` and `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Equirectangular;

impl Projection for Equirectangular {
    fn name(&self) -> &'static str {
        "Equirectangular"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        Point::new(lambda, phi)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(x, y)
    }
}

/// Conformal cylindrical projection.
///
/// The poles map to infinity, so they are outside [`Projection::contains`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mercator;

impl Projection for Mercator {
    fn name(&self) -> &'static str {
        "Mercator"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        Point::new(lambda, libm::log(libm::tan((FRAC_PI_2 + phi) / 2.0)))
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(x, 2.0 * libm::atan(libm::exp(y)) - FRAC_PI_2)
    }

    fn contains(&self, _lambda: f64, phi: f64) -> bool {
        phi.abs() < FRAC_PI_2
    }
}

/// Miller cylindrical: Mercator with latitudes scaled by 4/5, so the poles stay finite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Miller;

impl Projection for Miller {
    fn name(&self) -> &'static str {
        "Miller"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        Point::new(lambda, 1.25 * libm::log(libm::tan(FRAC_PI_4 + 0.4 * phi)))
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(x, 2.5 * libm::atan(libm::exp(0.8 * y)) - 0.625 * PI)
    }
}
