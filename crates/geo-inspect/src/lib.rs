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

//! Coordinate inspection for map sanity checks.
//!
//! Converts between latitude/longitude, spherical Mercator meters and
//! slippy-map tile addresses, and builds a preview URL for the result:
//!
//! - **Input layer**: classifies positional tokens as a tile, a point or a box,
//!   and guesses lat/lon versus Mercator by range
//! - **Projection layer**: closed-form spherical Mercator on the WGS84 sphere
//! - **Tile layer**: tile addressing and tile extents
//! - **Preview layer**: static-map URLs for points and boxes
//!
//! # Quick Start
//!
//! ```
//! use geo_inspect::Inspector;
//!
//! let report = Inspector::default()
//!     .inspect_args(&["37.764897", "-122.419453", "14"])
//!     .unwrap();
//! assert_eq!(report.status[1], "tile:     14/2620/6333");
//! assert!(report.url.is_some());
//! ```

pub mod bbox;
pub mod input;
pub mod inspect;
pub mod preview;
pub mod projection;
pub mod tile;

use thiserror::Error;

pub use bbox::BoundingBox;
pub use input::{classify, is_latlon, Input};
pub use inspect::{Inspector, Report, DEFAULT_POINT_ZOOM};
pub use preview::{PreviewConfig, DEFAULT_PREVIEW_URL};
pub use projection::{GeoPoint, MercatorPoint, Projection, WGS84_SPHERE_RADIUS};
pub use tile::{TileCoord, WebMercator, MAX_ZOOM};

/// Errors that stop an inspection.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{expected} {tokens:?}")]
    NotNumeric {
        expected: &'static str,
        tokens: Vec<String>,
    },

    #[error("looks like you're mixing mercator and lat, lon")]
    MixedSystems,

    #[error("invalid zoom level '{0}': expected a whole number from 0 to {max}", max = MAX_ZOOM)]
    InvalidZoom(String),

    #[error("tile {zoom}/{column}/{row} is outside the 2^{zoom} grid")]
    TileOutOfRange { zoom: u64, column: u64, row: u64 },
}
