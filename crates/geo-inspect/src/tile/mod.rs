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

//! Slippy-map tile addressing.
//!
//! Tiles follow the standard power-of-two pyramid: zoom `z` has `2^z` columns
//! and `2^z` rows, column 0 at the antimeridian and row 0 at the north edge.

use std::f64::consts::PI;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use log::{debug, warn};

use crate::bbox::BoundingBox;
use crate::projection::GeoPoint;
use crate::InspectError;

/// Deepest zoom level accepted; keeps `2^zoom` inside `u32`.
pub const MAX_ZOOM: u8 = 30;

/// Web Mercator tile-space conversions.
#[derive(Debug)]
pub struct WebMercator;

impl WebMercator {
    /// Convert latitude to fractional tile row at `zoom`.
    #[must_use]
    pub fn lat_to_y(lat: f64, zoom: u8) -> f64 {
        let lat_rad = lat.to_radians();
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;
        y * tiles_per_side(zoom)
    }

    /// Convert longitude to fractional tile column at `zoom`.
    #[must_use]
    pub fn lon_to_x(lon: f64, zoom: u8) -> f64 {
        ((lon + 180.0) / 360.0) * tiles_per_side(zoom)
    }

    /// Convert a tile row edge back to latitude.
    #[must_use]
    pub fn tile_to_lat(y: f64, zoom: u8) -> f64 {
        let n = tiles_per_side(zoom);
        let lat_rad = (PI * (1.0 - 2.0 * y / n)).sinh().atan();
        lat_rad.to_degrees()
    }

    /// Convert a tile column edge back to longitude.
    #[must_use]
    pub fn tile_to_lon(x: f64, zoom: u8) -> f64 {
        x / tiles_per_side(zoom) * 360.0 - 180.0
    }
}

fn tiles_per_side(zoom: u8) -> f64 {
    f64::from(1_u32 << zoom)
}

/// Address of one tile in the pyramid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub zoom: u8,
    pub column: u32,
    pub row: u32,
}

impl TileCoord {
    /// Create a tile address, checking zoom and that column/row lie in `[0, 2^zoom)`.
    pub fn new(zoom: u8, column: u32, row: u32) -> Result<Self, InspectError> {
        if zoom > MAX_ZOOM {
            return Err(InspectError::InvalidZoom(zoom.to_string()));
        }
        let side = 1_u64 << zoom;
        if u64::from(column) >= side || u64::from(row) >= side {
            return Err(InspectError::TileOutOfRange {
                zoom: u64::from(zoom),
                column: u64::from(column),
                row: u64::from(row),
            });
        }
        Ok(Self { zoom, column, row })
    }

    /// Tile containing `location` at `zoom`.
    ///
    /// Locations on the far east or south edge of the world (longitude 180,
    /// latitudes past the Mercator limit) are clamped to the last tile.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "values are clamped into [0, 2^zoom) before the cast"
    )]
    pub fn from_location(location: GeoPoint, zoom: u8) -> Self {
        let zoom = zoom.min(MAX_ZOOM);
        let last = tiles_per_side(zoom) - 1.0;

        let x = WebMercator::lon_to_x(location.lon, zoom).floor();
        let y = WebMercator::lat_to_y(location.lat, zoom).floor();
        let (column, row) = (x.clamp(0.0, last), y.clamp(0.0, last));
        if !(0.0..=last).contains(&x) || !(0.0..=last).contains(&y) {
            warn!(
                "Location {:.8} {:.8} falls outside the zoom {} grid, clamped to {}/{}",
                location.lat, location.lon, zoom, column, row
            );
        }

        Self {
            zoom,
            column: column as u32,
            row: row as u32,
        }
    }

    /// Geographic extent of this tile.
    ///
    /// Southwest comes from the top-left corner of the tile below, northeast
    /// from the top-left corner of the tile to the right.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox<GeoPoint> {
        let west = WebMercator::tile_to_lon(f64::from(self.column), self.zoom);
        let east = WebMercator::tile_to_lon(f64::from(self.column) + 1.0, self.zoom);
        let north = WebMercator::tile_to_lat(f64::from(self.row), self.zoom);
        let south = WebMercator::tile_to_lat(f64::from(self.row) + 1.0, self.zoom);

        BoundingBox::<GeoPoint>::from_corners(
            GeoPoint::new(south, west),
            GeoPoint::new(north, east),
        )
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.column, self.row)
    }
}

impl FromStr for TileCoord {
    type Err = InspectError;

    /// Parse `zoom/column/row`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_tile = || InspectError::NotNumeric {
            expected: "A tile is expected as zoom/column/row.",
            tokens: vec![s.to_string()],
        };

        let parts: Vec<&str> = s.split('/').collect();
        let [zoom, column, row] = parts.as_slice() else {
            return Err(not_tile());
        };
        if ![zoom, column, row]
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(not_tile());
        }

        let zoom: u8 = zoom.parse().map_err(|e| {
            debug!("Tile zoom '{zoom}' rejected: {e}");
            InspectError::InvalidZoom((*zoom).to_string())
        })?;
        let out_of_range = |e: ParseIntError| {
            debug!("Tile index in '{s}' rejected: {e}");
            InspectError::TileOutOfRange {
                zoom: u64::from(zoom),
                column: column.parse().unwrap_or(u64::MAX),
                row: row.parse().unwrap_or(u64::MAX),
            }
        };
        let column: u32 = column.parse().map_err(out_of_range)?;
        let row: u32 = row.parse().map_err(out_of_range)?;

        Self::new(zoom, column, row)
    }
}
