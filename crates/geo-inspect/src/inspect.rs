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

//! Turning classified input into diagnostics and a preview URL.

use log::debug;

use crate::bbox::BoundingBox;
use crate::input::{classify, Input};
use crate::preview::PreviewConfig;
use crate::projection::{GeoPoint, MercatorPoint, Projection};
use crate::tile::TileCoord;
use crate::InspectError;

/// Zoom used for point input when none is given.
pub const DEFAULT_POINT_ZOOM: u8 = 8;

/// Output of one inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Human-readable diagnostic lines, in order.
    pub status: Vec<String>,
    /// Preview URL; `None` when the input was not understood.
    pub url: Option<String>,
}

/// Runs conversions with explicit projection and preview settings.
#[derive(Debug, Clone)]
pub struct Inspector {
    projection: Projection,
    preview: PreviewConfig,
    default_zoom: u8,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(Projection::default(), PreviewConfig::default(), DEFAULT_POINT_ZOOM)
    }
}

impl Inspector {
    #[must_use]
    pub fn new(projection: Projection, preview: PreviewConfig, default_zoom: u8) -> Self {
        Self {
            projection,
            preview,
            default_zoom,
        }
    }

    /// Classify raw positional tokens and inspect them.
    pub fn inspect_args<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Report, InspectError> {
        let input = classify(tokens)?;
        Ok(self.inspect(&input))
    }

    #[must_use]
    pub fn inspect(&self, input: &Input) -> Report {
        match input {
            Input::Tile(tile) => self.tile_box(*tile),
            Input::GeoPoint { point, zoom } => {
                self.latlon_point(*point, zoom.unwrap_or(self.default_zoom))
            }
            Input::MercatorPoint { point, zoom } => {
                self.merc_point(*point, zoom.unwrap_or(self.default_zoom))
            }
            Input::GeoBox(bbox) => self.latlon_box(bbox),
            Input::MercatorBox(bbox) => self.merc_box(bbox),
            Input::Unrecognized(tokens) => Report {
                status: vec![format!(
                    "Sorry I'm not sure what to do with this input. {tokens:?}"
                )],
                url: None,
            },
        }
    }

    fn latlon_point(&self, point: GeoPoint, zoom: u8) -> Report {
        let merc = self.projection.project(point);
        let tile = TileCoord::from_location(point, zoom);

        Report {
            status: vec![
                format!("mercator: {:.2} {:.2}", merc.x, merc.y),
                format!("tile:     {tile}"),
            ],
            url: Some(self.preview.point_map_url(point, zoom)),
        }
    }

    fn merc_point(&self, point: MercatorPoint, zoom: u8) -> Report {
        let location = self.projection.unproject(point);
        let tile = TileCoord::from_location(location, zoom);

        Report {
            status: vec![
                format!("lat, lon: {:.8} {:.8}", location.lat, location.lon),
                format!("tile: {tile}"),
            ],
            url: Some(self.preview.point_map_url(location, zoom)),
        }
    }

    fn latlon_box(&self, bbox: &BoundingBox<GeoPoint>) -> Report {
        let upper_left = self.projection.project(bbox.upper_left());
        let lower_right = self.projection.project(bbox.lower_right());
        self.box_report(bbox, upper_left, lower_right)
    }

    fn merc_box(&self, bbox: &BoundingBox<MercatorPoint>) -> Report {
        let southwest = self.projection.unproject(bbox.min());
        let northeast = self.projection.unproject(bbox.max());
        let geo = BoundingBox::<GeoPoint>::from_corners(southwest, northeast);
        self.box_report(&geo, bbox.upper_left(), bbox.lower_right())
    }

    fn tile_box(&self, tile: TileCoord) -> Report {
        let bbox = tile.bounds();
        debug!("Tile {tile} spans {bbox:?}");
        self.latlon_box(&bbox)
    }

    fn box_report(
        &self,
        bbox: &BoundingBox<GeoPoint>,
        upper_left: MercatorPoint,
        lower_right: MercatorPoint,
    ) -> Report {
        let sw = bbox.southwest();
        let ne = bbox.northeast();

        let status = [
            ("southwest:   ", sw.lat, sw.lon, 8_usize),
            ("northeast:   ", ne.lat, ne.lon, 8),
            ("upper-left:  ", upper_left.x, upper_left.y, 2),
            ("lower-right: ", lower_right.x, lower_right.y, 2),
        ]
        .into_iter()
        .map(|(label, a, b, precision)| format!("{label}{a:.precision$} {b:.precision$}"))
        .collect();

        Report {
            status,
            url: Some(self.preview.box_map_url(bbox)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[&str]) -> Report {
        Inspector::default().inspect_args(tokens).unwrap()
    }

    #[test]
    fn test_tile_box_report() {
        let report = run(&["15/5241/12666"]);
        assert_eq!(report.status.len(), 4);
        assert!(report.status[0].starts_with("southwest:   37.7620"));
        assert!(report.status[1].starts_with("northeast:   37.7707"));
        assert!(report.status[2].starts_with("upper-left:  -13627804."));
        assert!(report.status[3].starts_with("lower-right: -13626581."));
        assert!(report.url.unwrap().contains("&bbox="));
    }

    #[test]
    fn test_latlon_point_report() {
        let report = run(&["37.764897", "-122.419453"]);
        assert_eq!(
            report.status,
            vec!["mercator: -13627671.17 4546266.67", "tile:     8/40/98"]
        );
        assert!(report.url.unwrap().contains("zoom=8&lat=37.764897&lon=-122.419453"));
    }

    #[test]
    fn test_latlon_point_explicit_zoom() {
        let report = run(&["37.764897", "-122.419453", "14"]);
        assert_eq!(report.status[1], "tile:     14/2620/6333");
        assert!(report.url.unwrap().contains("zoom=14"));
    }

    #[test]
    fn test_mercator_point_report() {
        let report = run(&["-13627671", "4546266"]);
        assert_eq!(
            report.status,
            vec!["lat, lon: 37.76489221 -122.41945146", "tile: 8/40/98"]
        );

        let report = run(&["-13627671", "4546266", "12"]);
        assert_eq!(report.status[1], "tile: 12/655/1583");
    }

    #[test]
    fn test_latlon_box_report() {
        let report = run(&["37.763251", "-122.424002", "37.768476", "-122.417865"]);
        assert_eq!(report.status[0], "southwest:   37.76325100 -122.42400200");
        assert_eq!(report.status[1], "northeast:   37.76847600 -122.41786500");
        assert!(report.status[2].starts_with("upper-left:  -13628177."));
        assert!(report.status[3].starts_with("lower-right: -13627494."));
    }

    #[test]
    fn test_mercator_box_report() {
        let report = run(&["-13628177", "4546770", "-13627494", "4546034"]);
        assert_eq!(report.status[0], "southwest:   37.76324465 -122.42399694");
        assert_eq!(report.status[1], "northeast:   37.76847126 -122.41786144");
        assert_eq!(report.status[2], "upper-left:  -13628177.00 4546770.00");
        assert_eq!(report.status[3], "lower-right: -13627494.00 4546034.00");
        assert!(report.url.is_some());
    }

    #[test]
    fn test_mixed_box_is_error() {
        let result = Inspector::default().inspect_args(&["37.76", "-122.42", "-13627494", "4546034"]);
        assert!(matches!(result, Err(InspectError::MixedSystems)));
    }

    #[test]
    fn test_unrecognized_has_no_url() {
        let report = run(&["what", "is", "this", "input", "?"]);
        assert!(report.url.is_none());
        assert!(report.status[0].starts_with("Sorry I'm not sure what to do with this input."));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let tokens = ["37.764897", "-122.419453", "14"];
        assert_eq!(run(&tokens), run(&tokens));
    }

    #[test]
    fn test_configured_default_zoom() {
        let inspector = Inspector::new(Projection::default(), PreviewConfig::default(), 12);
        let report = inspector.inspect_args(&["-13627671", "4546266"]).unwrap();
        assert_eq!(report.status[1], "tile: 12/655/1583");
    }
}
