// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Axis-aligned bounding boxes in geographic or Mercator space.

use crate::projection::{GeoPoint, MercatorPoint};

/// Rectangle given by its minimum and maximum corners.
///
/// Constructed through `from_corners`, so `min <= max` holds on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<P> {
    min: P,
    max: P,
}

impl<P: Copy> BoundingBox<P> {
    /// Corner with the smallest coordinate on both axes.
    #[must_use]
    pub fn min(&self) -> P {
        self.min
    }

    /// Corner with the largest coordinate on both axes.
    #[must_use]
    pub fn max(&self) -> P {
        self.max
    }
}

impl BoundingBox<GeoPoint> {
    /// Build a box from any two opposite corners.
    #[must_use]
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            min: GeoPoint::new(a.lat.min(b.lat), a.lon.min(b.lon)),
            max: GeoPoint::new(a.lat.max(b.lat), a.lon.max(b.lon)),
        }
    }

    #[must_use]
    pub fn southwest(&self) -> GeoPoint {
        self.min
    }

    #[must_use]
    pub fn northeast(&self) -> GeoPoint {
        self.max
    }

    /// North-west corner.
    #[must_use]
    pub fn upper_left(&self) -> GeoPoint {
        GeoPoint::new(self.max.lat, self.min.lon)
    }

    /// South-east corner.
    #[must_use]
    pub fn lower_right(&self) -> GeoPoint {
        GeoPoint::new(self.min.lat, self.max.lon)
    }

    /// Extent in degrees as (longitude span, latitude span).
    #[must_use]
    pub fn dimensions(&self) -> (f64, f64) {
        (self.max.lon - self.min.lon, self.max.lat - self.min.lat)
    }
}

impl BoundingBox<MercatorPoint> {
    /// Build a box from any two opposite corners.
    #[must_use]
    pub fn from_corners(a: MercatorPoint, b: MercatorPoint) -> Self {
        Self {
            min: MercatorPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: MercatorPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[must_use]
    pub fn upper_left(&self) -> MercatorPoint {
        MercatorPoint::new(self.min.x, self.max.y)
    }

    #[must_use]
    pub fn lower_right(&self) -> MercatorPoint {
        MercatorPoint::new(self.max.x, self.min.y)
    }

    /// Extent in meters as (width, height).
    #[must_use]
    pub fn dimensions(&self) -> (f64, f64) {
        (self.max.x - self.min.x, self.max.y - self.min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_box_normalizes_corners() {
        let bbox = BoundingBox::<GeoPoint>::from_corners(
            GeoPoint::new(37.768476, -122.424002),
            GeoPoint::new(37.763251, -122.417865),
        );
        assert_eq!(bbox.southwest(), GeoPoint::new(37.763251, -122.424002));
        assert_eq!(bbox.northeast(), GeoPoint::new(37.768476, -122.417865));
        assert_eq!(bbox.upper_left(), GeoPoint::new(37.768476, -122.424002));
        assert_eq!(bbox.lower_right(), GeoPoint::new(37.763251, -122.417865));
    }

    #[test]
    fn test_mercator_box_normalizes_corners() {
        let bbox = BoundingBox::<MercatorPoint>::from_corners(
            MercatorPoint::new(-13_627_494.0, 4_546_770.0),
            MercatorPoint::new(-13_628_177.0, 4_546_034.0),
        );
        assert_eq!(bbox.min(), MercatorPoint::new(-13_628_177.0, 4_546_034.0));
        assert_eq!(bbox.upper_left(), MercatorPoint::new(-13_628_177.0, 4_546_770.0));
        assert_eq!(bbox.lower_right(), MercatorPoint::new(-13_627_494.0, 4_546_034.0));
        assert_eq!(bbox.dimensions(), (683.0, 736.0));
    }
}
