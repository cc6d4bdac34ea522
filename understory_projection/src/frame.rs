// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::geo::{DEGREES, GeoPoint, RADIANS};
use crate::projection::Projection;
use crate::rotation::Rotation;

/// Per-map placement of a projection: scale, center offset, and rotation.
///
/// `MapFrame` is the degree-based surface a map view talks to. It does not
/// own a projection; the projection is passed to each call so one frame can
/// be reused when the user switches projections.
///
/// [`MapFrame::convert`]:
/// 1. Normalizes the input (longitude wrapped, latitude clamped).
/// 2. Applies the [`Rotation`].
/// 3. Projects in radians and converts the result to degrees.
/// 4. Subtracts [`MapFrame::center`] and flips `y` so it grows downwards.
/// 5. Multiplies by [`MapFrame::scale`].
///
/// [`MapFrame::invert`] runs the same steps backwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapFrame {
    scale: f64,
    center: Point,
    rotation: Rotation,
}

impl Default for MapFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl MapFrame {
    /// Creates a frame with unit scale, no center offset, and no rotation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            center: Point::ZERO,
            rotation: Rotation::IDENTITY,
        }
    }

    /// Returns the uniform scale applied to projected coordinates.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the uniform scale.
    ///
    /// Non-finite or non-positive values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
    }

    /// Returns the center offset, in projected degrees with `y` pointing down.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Sets the center offset, in projected degrees with `y` pointing down.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Returns the rotation applied before projecting.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Sets the rotation applied before projecting.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Converts a geographic point in degrees to map coordinates.
    #[must_use]
    pub fn convert<P: Projection + ?Sized>(&self, projection: &P, geo: GeoPoint) -> Point {
        let geo = self.rotation.rotate(geo.normalized_degrees().to_radians());
        let projected = projection.project(geo.longitude, geo.latitude);
        Point::new(
            (projected.x * DEGREES - self.center.x) * self.scale,
            (-projected.y * DEGREES - self.center.y) * self.scale,
        )
    }

    /// Converts map coordinates back to a geographic point in degrees.
    ///
    /// Points outside the projection's image come back with NaN components.
    #[must_use]
    pub fn invert<P: Projection + ?Sized>(&self, projection: &P, point: Point) -> GeoPoint {
        let x = (point.x / self.scale + self.center.x) * RADIANS;
        let y = (-point.y / self.scale - self.center.y) * RADIANS;
        self.rotation.invert(projection.unproject(x, y)).to_degrees()
    }

    /// Bounding rectangle, in map coordinates, of geographic points in degrees.
    ///
    /// Non-finite results are skipped; returns `None` if none remain.
    pub fn bounds<P, I>(&self, projection: &P, points: I) -> Option<Rect>
    where
        P: Projection + ?Sized,
        I: IntoIterator<Item = GeoPoint>,
    {
        points
            .into_iter()
            .map(|geo| self.convert(projection, geo))
            .filter(|p| p.is_finite())
            .fold(None, |bounds: Option<Rect>, p| {
                Some(match bounds {
                    Some(rect) => rect.union_pt(p),
                    None => Rect::from_points(p, p),
                })
            })
    }
}
