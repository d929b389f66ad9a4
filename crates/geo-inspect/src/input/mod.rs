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

//! Command-line input classification.
//!
//! Decides from the raw positional tokens which conversion runs, and whether
//! numeric pairs look like latitude/longitude or Mercator meters.

use log::debug;

use crate::bbox::BoundingBox;
use crate::projection::{GeoPoint, MercatorPoint};
use crate::tile::{TileCoord, MAX_ZOOM};
use crate::InspectError;

/// What the positional arguments asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A single `zoom/column/row` token.
    Tile(TileCoord),
    /// A latitude, longitude pair with optional zoom.
    GeoPoint { point: GeoPoint, zoom: Option<u8> },
    /// A Mercator x, y pair with optional zoom.
    MercatorPoint { point: MercatorPoint, zoom: Option<u8> },
    /// Two latitude, longitude corners.
    GeoBox(BoundingBox<GeoPoint>),
    /// Two Mercator corners.
    MercatorBox(BoundingBox<MercatorPoint>),
    /// Arity the tool has no interpretation for.
    Unrecognized(Vec<String>),
}

/// True if the pair seems like a latitude, longitude.
///
/// Range-based guess: a Mercator pair close to the origin also passes, so the
/// two systems overlap within a few hundred meters of (0, 0).
#[must_use]
pub fn is_latlon(this: f64, that: f64) -> bool {
    (-85.0..=85.0).contains(&this) && (-180.0..=180.0).contains(&that)
}

/// Classify positional tokens.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Result<Input, InspectError> {
    let tokens: Vec<&str> = tokens.iter().map(AsRef::<str>::as_ref).collect();

    match tokens.as_slice() {
        [token] if is_tile_token(token) => {
            let tile: TileCoord = token.parse()?;
            debug!("Tile input {tile}");
            Ok(Input::Tile(tile))
        }
        [_, _] | [_, _, _] => {
            let values = parse_numbers(
                &tokens,
                "Two or three values are expected to be numeric: a point and optional zoom.",
            )?;
            let zoom = match (values.get(2), tokens.get(2)) {
                (Some(&value), Some(token)) => Some(parse_zoom(value, token)?),
                _ => None,
            };

            let (a, b) = (values[0], values[1]);
            if is_latlon(a, b) {
                debug!("Point {a} {b} looks like lat, lon");
                Ok(Input::GeoPoint {
                    point: GeoPoint::new(a, b),
                    zoom,
                })
            } else {
                debug!("Point {a} {b} looks like mercator");
                Ok(Input::MercatorPoint {
                    point: MercatorPoint::new(a, b),
                    zoom,
                })
            }
        }
        [_, _, _, _] => {
            let v = parse_numbers(&tokens, "Four values are expected to be numeric: two points.")?;

            match (is_latlon(v[0], v[1]), is_latlon(v[2], v[3])) {
                (true, true) => {
                    debug!("Box corners look like lat, lon");
                    Ok(Input::GeoBox(BoundingBox::<GeoPoint>::from_corners(
                        GeoPoint::new(v[0], v[1]),
                        GeoPoint::new(v[2], v[3]),
                    )))
                }
                (false, false) => {
                    debug!("Box corners look like mercator");
                    Ok(Input::MercatorBox(BoundingBox::<MercatorPoint>::from_corners(
                        MercatorPoint::new(v[0], v[1]),
                        MercatorPoint::new(v[2], v[3]),
                    )))
                }
                _ => Err(InspectError::MixedSystems),
            }
        }
        _ => Ok(Input::Unrecognized(
            tokens.iter().map(ToString::to_string).collect(),
        )),
    }
}

/// `digits/digits/digits`
fn is_tile_token(token: &str) -> bool {
    let parts: Vec<&str> = token.split('/').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_numbers(tokens: &[&str], expected: &'static str) -> Result<Vec<f64>, InspectError> {
    tokens
        .iter()
        .map(|t| t.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| InspectError::NotNumeric {
            expected,
            tokens: tokens.iter().map(ToString::to_string).collect(),
        })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "checked to be a whole number within 0..=MAX_ZOOM"
)]
fn parse_zoom(value: f64, token: &str) -> Result<u8, InspectError> {
    if value.fract().abs() < f64::EPSILON && (0.0..=f64::from(MAX_ZOOM)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(InspectError::InvalidZoom(token.to_string()))
    }
}
