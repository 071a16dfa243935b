use crate::core::constants::{LAT_FIELD_DEGREES, LON_FIELD_DEGREES, MAX_PRECISION};
use crate::core::grid::{locator_to_point, point_to_locator};
use crate::util::coord::Coordinate;
use crate::util::error::MaidenheadError;
use geo_types::{LineString, Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single square in the Maidenhead grid.
///
/// Each `GridSquare` pairs a canonical-case locator with the southwest
/// corner of the region it denotes and the precision (number of
/// two-character fields) it was built at.
///
/// # Example
///
/// ```
/// use maidenhead_rs::GridSquare;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// // Create from WGS84 coordinates (lon, lat)
/// let square = GridSquare::from_wgs84(&(13.4, 52.5), 3)?;
/// assert_eq!(square.id, "JO62qm");
///
/// // Convert to a polygon for GIS operations
/// let polygon = square.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSquare {
    /// Canonical-case locator string for this square
    pub id: String,
    /// Southwest corner in WGS84 degrees (x = lon, y = lat)
    pub southwest: Point<f64>,
    /// Number of fields (1-4); each field is two locator characters
    pub precision: u8,
}

impl GridSquare {
    /// Create a GridSquare from a locator string.
    ///
    /// Case and surrounding whitespace are ignored; the stored `id` always
    /// carries the canonical case pattern.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::GridSquare;
    ///
    /// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
    /// let square = GridSquare::from_locator("jo62QM")?;
    /// assert_eq!(square.id, "JO62qm");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_locator(locator: &str) -> Result<Self, MaidenheadError> {
        let southwest = locator_to_point(locator)?;
        let precision = (locator.trim().chars().count() / 2) as u8;
        let id = point_to_locator(&southwest, precision)?;

        Ok(Self {
            id,
            southwest,
            precision,
        })
    }

    /// Create a GridSquare from a WGS84 coordinate.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::GridSquare;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
    /// // From tuple
    /// let square = GridSquare::from_wgs84(&(-2.248, 53.481), 3)?;
    /// // From Point
    /// let square = GridSquare::from_wgs84(&Point::new(-2.248, 53.481), 3)?;
    /// assert_eq!(square.id, "IO83vl");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, precision: u8) -> Result<Self, MaidenheadError> {
        let id = point_to_locator(coord, precision)?;
        let southwest = locator_to_point(&id)?;

        Ok(Self {
            id,
            southwest,
            precision,
        })
    }

    /// Create GridSquares along a LineString in WGS84 coordinates.
    ///
    /// Samples points along the line and returns all unique squares that
    /// intersect it, in order of first contact.
    pub fn from_line_string(line: &LineString, precision: u8) -> Result<Vec<Self>, MaidenheadError> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(MaidenheadError::InvalidPrecision(precision));
        }

        // The latitude span is the smaller side of the square on both axes
        let step_size = LAT_FIELD_DEGREES[precision as usize - 1] * 0.5;

        let mut seen: HashSet<String> = HashSet::new();
        let mut squares: Vec<GridSquare> = Vec::new();

        for window in line.0.windows(2) {
            let start = &window[0];
            let end = &window[1];

            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let segment_length = (dx * dx + dy * dy).sqrt();
            let steps = (segment_length / step_size).ceil() as usize;

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                let x = start.x + t * dx;
                let y = start.y + t * dy;

                let square = GridSquare::from_wgs84(&(x, y), precision)?;
                if seen.insert(square.id.clone()) {
                    squares.push(square);
                }
            }
        }

        Ok(squares)
    }

    /// Returns the longitude of the southwest corner in degrees.
    pub fn lon(&self) -> f64 {
        self.southwest.x()
    }

    /// Returns the latitude of the southwest corner in degrees.
    pub fn lat(&self) -> f64 {
        self.southwest.y()
    }

    /// Longitude span of this square in degrees.
    pub fn lon_span(&self) -> f64 {
        LON_FIELD_DEGREES[self.precision as usize - 1]
    }

    /// Latitude span of this square in degrees.
    pub fn lat_span(&self) -> f64 {
        LAT_FIELD_DEGREES[self.precision as usize - 1]
    }

    /// Returns the center of this square.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            self.lon() + self.lon_span() / 2.0,
            self.lat() + self.lat_span() / 2.0,
        )
    }

    /// True if the coordinate lies inside this square.
    ///
    /// Squares are half-open: the southern and western edges belong to the
    /// square, the northern and eastern edges to its neighbours.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let (lon, lat) = (coord.x(), coord.y());
        lon >= self.lon()
            && lon < self.lon() + self.lon_span()
            && lat >= self.lat()
            && lat < self.lat() + self.lat_span()
    }

    /// Converts this square to an axis-aligned rectangle.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lon(), y: self.lat() },
            coord! { x: self.lon() + self.lon_span(), y: self.lat() + self.lat_span() },
        )
    }

    /// Converts this square to a polygon.
    ///
    /// Returns a `geo_types::Polygon` tracing the square boundary, suitable
    /// for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Builds a Google static map URL centered on this square's southwest
    /// corner.
    pub fn google_map_url(&self) -> String {
        format!(
            "http://maps.googleapis.com/maps/api/staticmap?center={},{}&zoom=10&size=320x240&sensor=false",
            self.lat(),
            self.lon()
        )
    }

    /// Builds a no.nonsense.ee QTH map URL for this square.
    pub fn qth_map_url(&self) -> String {
        format!("http://no.nonsense.ee/qthmap/?qth={}", self.id)
    }
}
