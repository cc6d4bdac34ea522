// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Azimuthal projections centered on `(0, 0)`.
//!
//! Every azimuthal projection maps a point at angular distance `c` from the
//! center to radius `r(c)` along its true bearing. Forward and inverse share
//! the two helpers below; each projection only supplies the radial scale, the
//! inverse radial function, and the clip angle beyond which it does not
//! invert.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::Point;

use crate::geo::{GeoPoint, RADIANS};
use crate::projection::Projection;

/// Projects with a radial scale `k(cos c)`.
fn azimuthal_project(lambda: f64, phi: f64, scale: impl FnOnce(f64) -> f64) -> Point {
    let cos_lambda = libm::cos(lambda);
    let cos_phi = libm::cos(phi);
    let k = scale(cos_lambda * cos_phi);
    Point::new(k * cos_phi * libm::sin(lambda), k * libm::sin(phi))
}

/// Unprojects with `c = angle(r)`.
fn azimuthal_unproject(x: f64, y: f64, angle: impl FnOnce(f64) -> f64) -> GeoPoint {
    let z = libm::sqrt(x * x + y * y);
    let c = angle(z);
    let sin_c = libm::sin(c);
    let cos_c = libm::cos(c);
    let sin_phi = if z == 0.0 { 0.0 } else { y * sin_c / z };
    GeoPoint::new(libm::atan2(x * sin_c, z * cos_c), libm::asin(sin_phi))
}

fn within_clip_angle(lambda: f64, phi: f64, clip_angle: f64) -> bool {
    libm::cos(lambda) * libm::cos(phi) >= libm::cos(clip_angle)
}

/// Orthographic: the globe as seen from infinitely far away.
///
/// Only the near hemisphere inverts; points outside the unit disc unproject
/// to NaN. The limb itself is excluded from [`Projection::contains`] because
/// rounding can put it a hair outside the disc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Orthographic;

impl Orthographic {
    /// Angular radius of the invertible region.
    pub const CLIP_ANGLE: f64 = FRAC_PI_2 - 1e-6;
}

impl Projection for Orthographic {
    fn name(&self) -> &'static str {
        "Orthographic"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        azimuthal_project(lambda, phi, |_| 1.0)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        azimuthal_unproject(x, y, libm::asin)
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        within_clip_angle(lambda, phi, Self::CLIP_ANGLE)
    }
}

/// Conformal azimuthal projection from the antipode of the center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stereographic;

impl Stereographic {
    /// Angular radius of the invertible region (142°).
    pub const CLIP_ANGLE: f64 = 142.0 * RADIANS;
}

impl Projection for Stereographic {
    fn name(&self) -> &'static str {
        "Stereographic"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        azimuthal_project(lambda, phi, |cos_c| 1.0 / (1.0 + cos_c))
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        azimuthal_unproject(x, y, |z| 2.0 * libm::atan(z))
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        within_clip_angle(lambda, phi, Self::CLIP_ANGLE)
    }
}

/// Lambert azimuthal equal-area projection.
///
/// The whole sphere fits in a disc of radius 2; the antipode of the center
/// is singular.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AzimuthalEqualArea;

impl AzimuthalEqualArea {
    /// Angular radius of the invertible region (just short of the antipode).
    pub const CLIP_ANGLE: f64 = PI - 1e-3 * RADIANS;
}

impl Projection for AzimuthalEqualArea {
    fn name(&self) -> &'static str {
        "AzimuthalEqualArea"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        azimuthal_project(lambda, phi, |cos_c| libm::sqrt(2.0 / (1.0 + cos_c)))
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        azimuthal_unproject(x, y, |z| 2.0 * libm::asin(z / 2.0))
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        within_clip_angle(lambda, phi, Self::CLIP_ANGLE)
    }
}

/// Azimuthal equidistant: distances from the center are preserved.
///
/// Points beyond radius `π` unproject to NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AzimuthalEquidistant;

impl AzimuthalEquidistant {
    /// Angular radius of the invertible region (just short of the antipode).
    pub const CLIP_ANGLE: f64 = PI - 1e-3 * RADIANS;
}

impl Projection for AzimuthalEquidistant {
    fn name(&self) -> &'static str {
        "AzimuthalEquidistant"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        azimuthal_project(lambda, phi, |cos_c| {
            let c = libm::acos(cos_c.clamp(-1.0, 1.0));
            // c / sin c tends to 1 at the center.
            if c == 0.0 { 1.0 } else { c / libm::sin(c) }
        })
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        azimuthal_unproject(x, y, |z| if z > PI { f64::NAN } else { z })
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        within_clip_angle(lambda, phi, Self::CLIP_ANGLE)
    }
}

/// Gnomonic: great circles map to straight lines.
///
/// Diverges at 90° from the center, so only a 60° cap is considered
/// invertible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gnomonic;

impl Gnomonic {
    /// Angular radius of the invertible region (60°).
    pub const CLIP_ANGLE: f64 = 60.0 * RADIANS;
}

impl Projection for Gnomonic {
    fn name(&self) -> &'static str {
        "Gnomonic"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        azimuthal_project(lambda, phi, |cos_c| 1.0 / cos_c)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        azimuthal_unproject(x, y, libm::atan)
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        within_clip_angle(lambda, phi, Self::CLIP_ANGLE)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::{AzimuthalEqualArea, AzimuthalEquidistant, Gnomonic, Orthographic, Stereographic};
    use crate::projection::Projection;

    #[test]
    fn center_maps_to_origin_for_every_azimuthal() {
        let all: [&dyn Projection; 5] = [
            &Orthographic,
            &Stereographic,
            &AzimuthalEqualArea,
            &AzimuthalEquidistant,
            &Gnomonic,
        ];
        for projection in all {
            let p = projection.project(0.0, 0.0);
            assert!(p.x.abs() < 1e-15 && p.y.abs() < 1e-15, "{}", projection.name());
            let g = projection.unproject(0.0, 0.0);
            assert!(
                g.longitude.abs() < 1e-15 && g.latitude.abs() < 1e-15,
                "{}",
                projection.name()
            );
        }
    }

    #[test]
    fn radial_distances_match_their_definitions() {
        // A point 90° east of the center.
        let ortho = Orthographic.project(FRAC_PI_2, 0.0);
        assert!((ortho.x - 1.0).abs() < 1e-12);
        let stereo = Stereographic.project(FRAC_PI_2, 0.0);
        assert!((stereo.x - 1.0).abs() < 1e-12);
        let equal_area = AzimuthalEqualArea.project(FRAC_PI_2, 0.0);
        assert!((equal_area.x - libm::sqrt(2.0)).abs() < 1e-12);
        let equidistant = AzimuthalEquidistant.project(FRAC_PI_2, 0.0);
        assert!((equidistant.x - FRAC_PI_2).abs() < 1e-12);
        let gnomonic = Gnomonic.project(PI / 4.0, 0.0);
        assert!((gnomonic.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthographic_far_side_is_outside_and_disc_exterior_is_nan() {
        assert!(Orthographic.contains(FRAC_PI_2 - 0.01, 0.3));
        assert!(!Orthographic.contains(PI * 0.75, 0.0));
        let g = Orthographic.unproject(1.5, 0.0);
        assert!(g.longitude.is_nan() && g.latitude.is_nan());
    }

    #[test]
    fn equidistant_beyond_pi_is_nan() {
        let g = AzimuthalEquidistant.unproject(PI + 0.1, 0.0);
        assert!(g.longitude.is_nan() && g.latitude.is_nan());
    }

    #[test]
    fn clip_angles_exclude_the_singularities() {
        assert!(!Stereographic.contains(PI, 0.0));
        assert!(!AzimuthalEqualArea.contains(PI, 0.0));
        assert!(!AzimuthalEquidistant.contains(PI, 0.0));
        assert!(!Gnomonic.contains(FRAC_PI_2, 0.0));
        assert!(Gnomonic.contains(PI / 4.0, PI / 8.0));
    }
}
