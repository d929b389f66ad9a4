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

//! Spherical Mercator projection.
//!
//! Forward and inverse projection between geographic degrees and Mercator meters
//! on a sphere. No false easting/northing and no datum shift are applied, which
//! matches the common "web mercator" tiling grid.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// WGS84 equatorial radius used as the sphere radius (meters).
pub const WGS84_SPHERE_RADIUS: f64 = 6_378_137.0;

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees (-85..85 considered valid).
    pub lat: f64,
    /// Longitude in degrees (-180..180 considered valid).
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Projected position in spherical Mercator meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl MercatorPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Spherical Mercator projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Sphere radius in meters.
    pub radius: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self::wgs84_sphere()
    }
}

impl Projection {
    /// Sphere with the WGS84 semi-major axis as radius.
    #[must_use]
    pub fn wgs84_sphere() -> Self {
        Self {
            radius: WGS84_SPHERE_RADIUS,
        }
    }

    /// Project latitude, longitude (degrees) to Mercator x, y (meters).
    #[must_use]
    pub fn project(&self, point: GeoPoint) -> MercatorPoint {
        let x = self.radius * point.lon.to_radians();
        let y = self.radius * (FRAC_PI_4 + point.lat.to_radians() / 2.0).tan().ln();
        MercatorPoint::new(x, y)
    }

    /// Unproject Mercator x, y (meters) to latitude, longitude (degrees).
    #[must_use]
    pub fn unproject(&self, point: MercatorPoint) -> GeoPoint {
        let lon = (point.x / self.radius).to_degrees();
        let lat = (2.0 * (point.y / self.radius).exp().atan() - FRAC_PI_2).to_degrees();
        GeoPoint::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_san_francisco() {
        let merc = Projection::default().project(GeoPoint::new(37.764897, -122.419453));
        assert!((merc.x - (-13_627_671.17)).abs() < 0.01);
        assert!((merc.y - 4_546_266.67).abs() < 0.01);
    }

    #[test]
    fn test_unproject_san_francisco() {
        let geo = Projection::default().unproject(MercatorPoint::new(-13_627_671.0, 4_546_266.0));
        assert!((geo.lat - 37.764_892_21).abs() < 1e-8);
        assert!((geo.lon - (-122.419_451_46)).abs() < 1e-8);
    }

    #[test]
    fn test_origin_maps_to_origin() {
        let merc = Projection::default().project(GeoPoint::new(0.0, 0.0));
        assert!(merc.x.abs() < 1e-9);
        assert!(merc.y.abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let projection = Projection::default();
        for &(lat, lon) in &[
            (37.764897, -122.419453),
            (-33.8688, 151.2093),
            (84.9, 179.9),
            (-84.9, -179.9),
            (51.4779, -0.0015),
        ] {
            let back = projection.unproject(projection.project(GeoPoint::new(lat, lon)));
            assert!((back.lat - lat).abs() < 1e-6, "lat {lat} -> {}", back.lat);
            assert!((back.lon - lon).abs() < 1e-6, "lon {lon} -> {}", back.lon);
        }
    }

    #[test]
    fn test_custom_radius_scales_linearly() {
        let unit = Projection { radius: 1.0 };
        let merc = unit.project(GeoPoint::new(0.0, 180.0));
        assert!((merc.x - std::f64::consts::PI).abs() < 1e-12);
    }
}
