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

//! Map-preview URL construction.
//!
//! The preview service renders a static map from query parameters: a centered
//! point with a marker, or a buffered bounding box with its outline drawn.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::bbox::BoundingBox;
use crate::projection::GeoPoint;

/// Default preview service.
pub const DEFAULT_PREVIEW_URL: &str = "http://pafciu17.dev.openstreetmap.org/";

/// Fraction of the box size added on every side of a box preview.
const BOX_BUFFER_DIVISOR: f64 = 8.0;

/// Preview service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Base URL of the preview service, query string is appended after `?`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rendered image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Rendered image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_base_url() -> String {
    DEFAULT_PREVIEW_URL.to_string()
}

fn default_width() -> u32 {
    512
}

fn default_height() -> u32 {
    384
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl PreviewConfig {
    /// URL centered on `point` at `zoom`, with a marker on the point.
    #[must_use]
    pub fn point_map_url(&self, point: GeoPoint, zoom: u8) -> String {
        let query = self
            .serializer()
            .append_pair("zoom", &zoom.to_string())
            .append_pair("lat", &point.lat.to_string())
            .append_pair("lon", &point.lon.to_string())
            .append_pair("points", &format!("{:.6},{:.6}", point.lon, point.lat))
            .finish();

        self.with_query(&query)
    }

    /// URL showing `bbox` outlined, padded by an eighth of its size on each side.
    #[must_use]
    pub fn box_map_url(&self, bbox: &BoundingBox<GeoPoint>) -> String {
        let sw = bbox.southwest();
        let ne = bbox.northeast();
        let (width, height) = bbox.dimensions();
        let buflon = width / BOX_BUFFER_DIVISOR;
        let buflat = height / BOX_BUFFER_DIVISOR;

        let extent = format!(
            "{:.6},{:.6},{:.6},{:.6}",
            sw.lon - buflon,
            ne.lat + buflat,
            ne.lon + buflon,
            sw.lat - buflat
        );
        let outline = format!(
            "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},color:0:0:0",
            sw.lon, sw.lat, sw.lon, ne.lat, ne.lon, ne.lat, ne.lon, sw.lat
        );

        let query = self
            .serializer()
            .append_pair("bbox", &extent)
            .append_pair("polygons", &outline)
            .finish();

        self.with_query(&query)
    }

    fn serializer(&self) -> form_urlencoded::Serializer<'static, String> {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("module", "map")
            .append_pair("width", &self.width.to_string())
            .append_pair("height", &self.height.to_string());
        serializer
    }

    fn with_query(&self, query: &str) -> String {
        format!("{}?{}", self.base_url, query)
    }
}
