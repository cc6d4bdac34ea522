// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic coordinates and great-circle helpers.

use core::f64::consts::{PI, TAU};

/// Multiply radians by this factor to get degrees.
pub const DEGREES: f64 = 180.0 / PI;

/// Multiply degrees by this factor to get radians.
pub const RADIANS: f64 = PI / 180.0;

/// A location on the sphere.
///
/// The unit of both components is fixed by the call site: [`crate::Projection`]
/// works in radians, while [`crate::MapFrame`] accepts and returns degrees.
/// Use [`GeoPoint::from_degrees`] and [`GeoPoint::to_degrees`] to cross
/// between the two.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    /// Longitude (east positive).
    pub longitude: f64,
    /// Latitude (north positive).
    pub latitude: f64,
}

impl GeoPoint {
    /// Creates a point from longitude and latitude in the caller's unit.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Creates a point in radians from longitude and latitude in degrees.
    #[must_use]
    pub fn from_degrees(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude * RADIANS, latitude * RADIANS)
    }

    /// Interprets `self` as radians and returns the same point in degrees.
    #[must_use]
    pub fn to_degrees(self) -> Self {
        Self::new(self.longitude * DEGREES, self.latitude * DEGREES)
    }

    /// Interprets `self` as degrees and returns the same point in radians.
    #[must_use]
    pub fn to_radians(self) -> Self {
        Self::new(self.longitude * RADIANS, self.latitude * RADIANS)
    }

    /// Returns `true` if both components are finite.
    ///
    /// Projections report points outside their image as NaN, so this is the
    /// check renderers use to skip them.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Interprets `self` as degrees and brings it into the canonical range.
    ///
    /// Longitude is wrapped into `[-180, 180]` and latitude is clamped into
    /// `[-90, 90]`. Values already in range are returned unchanged.
    #[must_use]
    pub fn normalized_degrees(self) -> Self {
        let longitude = if (-180.0..=180.0).contains(&self.longitude) {
            self.longitude
        } else {
            let wrapped = libm::fmod(self.longitude + 180.0, 360.0);
            let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
            wrapped - 180.0
        };
        Self::new(longitude, self.latitude.clamp(-90.0, 90.0))
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

/// Wraps a longitude in radians into `[-π, π]`.
///
/// Values already in range are returned unchanged.
#[must_use]
pub fn wrap_longitude(lambda: f64) -> f64 {
    if (-PI..=PI).contains(&lambda) {
        return lambda;
    }
    let wrapped = libm::fmod(lambda + PI, TAU);
    let wrapped = if wrapped < 0.0 { wrapped + TAU } else { wrapped };
    wrapped - PI
}

/// Great-circle angular distance between two points in radians.
///
/// Uses the haversine formulation, which stays accurate for nearby points.
#[must_use]
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let half_dphi = libm::sin((b.latitude - a.latitude) * 0.5);
    let half_dlambda = libm::sin((b.longitude - a.longitude) * 0.5);
    let h = half_dphi * half_dphi
        + libm::cos(a.latitude) * libm::cos(b.latitude) * half_dlambda * half_dlambda;
    let h = h.clamp(0.0, 1.0);
    2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h))
}

/// Point at fraction `t` along the great circle from `a` to `b` (radians).
///
/// `t = 0` yields `a` and `t = 1` yields `b`. Coincident inputs return `a`.
/// Antipodal inputs have no unique great circle and yield NaN components.
#[must_use]
pub fn intermediate_point(a: GeoPoint, b: GeoPoint, t: f64) -> GeoPoint {
    let d = distance(a, b);
    if d == 0.0 {
        return a;
    }
    let sin_d = libm::sin(d);
    let ka = libm::sin((1.0 - t) * d) / sin_d;
    let kb = libm::sin(t * d) / sin_d;

    let (cos_phi_a, cos_phi_b) = (libm::cos(a.latitude), libm::cos(b.latitude));
    let x = ka * cos_phi_a * libm::cos(a.longitude) + kb * cos_phi_b * libm::cos(b.longitude);
    let y = ka * cos_phi_a * libm::sin(a.longitude) + kb * cos_phi_b * libm::sin(b.longitude);
    let z = ka * libm::sin(a.latitude) + kb * libm::sin(b.latitude);

    GeoPoint::new(libm::atan2(y, x), libm::atan2(z, libm::sqrt(x * x + y * y)))
}
