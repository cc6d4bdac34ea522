// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The projection contract and helpers built on top of it.

use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::geo::GeoPoint;
use crate::rotation::Rotation;

/// A two-way mapping between the unit sphere and the plane.
///
/// Both directions work in radians: `project` takes longitude `lambda` in
/// `[-π, π]` and latitude `phi` in `[-π/2, π/2]`, and `unproject` returns the
/// same. Planar output is unscaled with `y` growing northwards; scaling,
/// centering and the screen's downward `y` are applied by [`crate::MapFrame`].
///
/// Implementations are stateless apart from fixed parameters chosen at
/// construction, so a single instance may be shared across threads and
/// called per point at high frequency.
///
/// # Failure policy
///
/// Neither direction reports errors. Inputs outside a projection's image
/// produce NaN components, and iterative solves that hit their iteration cap
/// return their last iterate. Callers filter with [`GeoPoint::is_finite`] or
/// [`Point::is_finite`].
pub trait Projection: Debug + Send + Sync {
    /// The identifier this projection is registered under.
    fn name(&self) -> &'static str;

    /// Maps a geographic coordinate (radians) to the plane.
    fn project(&self, lambda: f64, phi: f64) -> Point;

    /// Maps a planar coordinate back to the sphere (radians).
    fn unproject(&self, x: f64, y: f64) -> GeoPoint;

    /// Returns `true` if `unproject` inverts `project` at this coordinate.
    ///
    /// The default accepts the whole sphere. Projections with a limited
    /// invertible region (a clip angle, singular poles) narrow this.
    fn contains(&self, lambda: f64, phi: f64) -> bool {
        let _ = (lambda, phi);
        true
    }

    /// [`Projection::project`] taking a [`GeoPoint`] in radians.
    fn project_geo(&self, geo: GeoPoint) -> Point {
        self.project(geo.longitude, geo.latitude)
    }

    /// [`Projection::unproject`] taking a [`Point`].
    fn unproject_point(&self, point: Point) -> GeoPoint {
        self.unproject(point.x, point.y)
    }
}

impl<P: Projection + ?Sized> Projection for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        (**self).project(lambda, phi)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        (**self).unproject(x, y)
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        (**self).contains(lambda, phi)
    }
}

impl<P: Projection + ?Sized> Projection for alloc::boxed::Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        (**self).project(lambda, phi)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        (**self).unproject(x, y)
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        (**self).contains(lambda, phi)
    }
}

/// Bounding rectangle of the projected `points` (radians).
///
/// Points whose projection is not finite are skipped. Returns `None` if no
/// finite point remains.
pub fn projected_bounds<P, I>(projection: &P, points: I) -> Option<Rect>
where
    P: Projection + ?Sized,
    I: IntoIterator<Item = GeoPoint>,
{
    points
        .into_iter()
        .map(|geo| projection.project_geo(geo))
        .filter(|p| p.is_finite())
        .fold(None, |bounds: Option<Rect>, p| {
            Some(match bounds {
                Some(rect) => rect.union_pt(p),
                None => Rect::from_points(p, p),
            })
        })
}

/// A projection viewed through a spherical [`Rotation`].
///
/// Geographic input is rotated before it reaches the inner projection, and
/// `unproject` undoes the rotation afterwards. This is how a map re-centers
/// on a meridian other than Greenwich or tilts an azimuthal view.
#[derive(Clone, Copy, Debug)]
pub struct Rotated<P> {
    inner: P,
    rotation: Rotation,
}

impl<P: Projection> Rotated<P> {
    /// Wraps `inner` so that every input is rotated by `rotation` first.
    #[must_use]
    pub fn new(inner: P, rotation: Rotation) -> Self {
        Self { inner, rotation }
    }

    /// Returns the wrapped projection.
    #[must_use]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Returns the rotation applied before projecting.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl<P: Projection> Projection for Rotated<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        let rotated = self.rotation.rotate(GeoPoint::new(lambda, phi));
        self.inner.project(rotated.longitude, rotated.latitude)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        self.rotation.invert(self.inner.unproject(x, y))
    }

    fn contains(&self, lambda: f64, phi: f64) -> bool {
        let rotated = self.rotation.rotate(GeoPoint::new(lambda, phi));
        self.inner.contains(rotated.longitude, rotated.latitude)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use kurbo::{Point, Rect};

    use super::{Projection, Rotated, projected_bounds};
    use crate::geo::GeoPoint;
    use crate::projections::{Equirectangular, Orthographic};
    use crate::rotation::Rotation;

    #[test]
    fn bounds_of_equirectangular_points() {
        let points = [
            GeoPoint::new(-1.0, 0.5),
            GeoPoint::new(2.0, -0.25),
            GeoPoint::new(0.0, 1.0),
        ];
        let bounds = projected_bounds(&Equirectangular, points).unwrap();
        assert_eq!(bounds, Rect::new(-1.0, -0.25, 2.0, 1.0));
    }

    #[test]
    fn bounds_skip_non_finite_and_empty_is_none() {
        let points = [GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(0.5, 0.5)];
        let bounds = projected_bounds(&Equirectangular, points).unwrap();
        assert_eq!(bounds, Rect::new(0.5, 0.5, 0.5, 0.5));

        assert!(projected_bounds(&Equirectangular, core::iter::empty()).is_none());
        assert!(projected_bounds(&Equirectangular, [GeoPoint::new(f64::NAN, 0.0)]).is_none());
    }

    #[test]
    fn rotated_recenters_on_a_meridian() {
        // Rotating by -π/2 puts longitude π/2 at the center of the view.
        let rotated = Rotated::new(Orthographic, Rotation::new(-FRAC_PI_2, 0.0, 0.0));
        let center = rotated.project(FRAC_PI_2, 0.0);
        assert!(center.x.abs() < 1e-12 && center.y.abs() < 1e-12);

        // Greenwich now sits on the western limb.
        assert!(rotated.contains(0.1, 0.0));
        assert!(!rotated.contains(-0.1, 0.0));

        let back = rotated.unproject(center.x, center.y);
        assert!((back.longitude - FRAC_PI_2).abs() < 1e-12);
        assert!(back.latitude.abs() < 1e-12);
    }

    #[test]
    fn boxed_and_borrowed_projections_delegate() {
        let boxed: alloc::boxed::Box<dyn Projection> = alloc::boxed::Box::new(Equirectangular);
        assert_eq!(boxed.name(), "Equirectangular");
        assert_eq!(boxed.project(PI, 0.5), Point::new(PI, 0.5));
        let by_ref = &boxed;
        assert_eq!(by_ref.unproject_point(Point::new(0.25, 0.5)), GeoPoint::new(0.25, 0.5));
    }
}
