use crate::api::square::GridSquare;
use crate::core::constants::{
    DEFAULT_PRECISION, LAT_FIELD_DEGREES, LON_FIELD_DEGREES, MAX_PRECISION, WORLD_EXTENTS,
};
use crate::core::grid::{cells_per_axis, point_to_locator};
use geo_types::{Point, Polygon, Rect};

/// A collection of Maidenhead grid squares covering a lon/lat extent.
///
/// # Example
///
/// ```
/// use maidenhead_rs::LocatorGrid;
/// use geo_types::point;
///
/// let grid = LocatorGrid::builder()
///     .precision(2)
///     .extent(5.0, 47.0, 15.0, 55.0)
///     .build();
///
/// let pt = point! { x: 13.4, y: 52.5 };
/// if let Some(square) = grid.get_square_at(&pt) {
///     println!("{}", square.id);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LocatorGrid {
    squares: Vec<GridSquare>,
    precision: u8,
}

impl LocatorGrid {
    pub fn builder() -> LocatorGridBuilder {
        LocatorGridBuilder::new()
    }

    pub fn from_extent(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
        precision: u8,
    ) -> Self {
        let squares = generate_squares_for_extent(min_lon, min_lat, max_lon, max_lat, precision);
        Self { squares, precision }
    }

    pub fn from_rect(rect: &Rect<f64>, precision: u8) -> Self {
        Self::from_extent(
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
            precision,
        )
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn squares(&self) -> &[GridSquare] {
        &self.squares
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridSquare> {
        self.squares.iter()
    }

    pub fn get_square_at(&self, point: &Point<f64>) -> Option<&GridSquare> {
        let id = point_to_locator(point, self.precision).ok()?;
        self.squares.iter().find(|square| square.id == id)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.squares.iter().map(|square| square.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GridSquare>
    where
        F: Fn(&GridSquare) -> bool,
    {
        self.squares.iter().filter(|square| predicate(square)).collect()
    }
}

#[derive(Debug, Default)]
pub struct LocatorGridBuilder {
    precision: Option<u8>,
    min_lon: Option<f64>,
    min_lat: Option<f64>,
    max_lon: Option<f64>,
    max_lat: Option<f64>,
}

impl LocatorGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn extent(mut self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        self.min_lon = Some(min_lon);
        self.min_lat = Some(min_lat);
        self.max_lon = Some(max_lon);
        self.max_lat = Some(max_lat);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lon = Some(rect.min().x);
        self.min_lat = Some(rect.min().y);
        self.max_lon = Some(rect.max().x);
        self.max_lat = Some(rect.max().y);
        self
    }

    /// Builds the grid.
    ///
    /// # Panics
    ///
    /// Panics if the extent is not set. Precision defaults to
    /// [`DEFAULT_PRECISION`].
    pub fn build(self) -> LocatorGrid {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        let min_lon = self.min_lon.expect("extent must be set");
        let min_lat = self.min_lat.expect("extent must be set");
        let max_lon = self.max_lon.expect("extent must be set");
        let max_lat = self.max_lat.expect("extent must be set");

        LocatorGrid::from_extent(min_lon, min_lat, max_lon, max_lat, precision)
    }
}

fn generate_squares_for_extent(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    precision: u8,
) -> Vec<GridSquare> {
    if precision == 0 || precision > MAX_PRECISION {
        return Vec::new();
    }
    if min_lon > max_lon || min_lat > max_lat {
        return Vec::new();
    }

    let lon_span = LON_FIELD_DEGREES[precision as usize - 1];
    let lat_span = LAT_FIELD_DEGREES[precision as usize - 1];
    let last_index = cells_per_axis(precision) - 1;

    // Walk the integer cell lattice so float drift cannot skip or repeat a
    // square along the extent edges.
    let clamp = |index: f64| (index.floor() as i64).clamp(0, last_index);
    let min_col = clamp((min_lon - WORLD_EXTENTS[0]) / lon_span);
    let max_col = clamp((max_lon - WORLD_EXTENTS[0]) / lon_span);
    let min_row = clamp((min_lat - WORLD_EXTENTS[1]) / lat_span);
    let max_row = clamp((max_lat - WORLD_EXTENTS[1]) / lat_span);

    let mut squares = Vec::new();

    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let center = (
                WORLD_EXTENTS[0] + (col as f64 + 0.5) * lon_span,
                WORLD_EXTENTS[1] + (row as f64 + 0.5) * lat_span,
            );

            match GridSquare::from_wgs84(&center, precision) {
                Ok(square) => squares.push(square),
                Err(_) => continue,
            }
        }
    }

    squares
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, point};

    #[test]
    fn test_grid_from_extent() {
        // 3 columns of 20 degrees by 2 rows of 10 degrees
        let grid = LocatorGrid::from_extent(0.0, 0.0, 40.0, 10.0, 1);

        assert_eq!(grid.len(), 6);
        assert_eq!(grid.precision(), 1);
        for square in grid.iter() {
            assert_eq!(square.precision, 1);
        }
    }

    #[test]
    fn test_grid_from_rect() {
        let rect = Rect::new(coord! { x: 5.0, y: 47.0 }, coord! { x: 15.0, y: 55.0 });
        let grid = LocatorGrid::from_rect(&rect, 2);

        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_builder() {
        let grid = LocatorGrid::builder()
            .precision(2)
            .extent(5.0, 47.0, 15.0, 55.0)
            .build();

        assert!(!grid.is_empty());
        assert_eq!(grid.precision(), 2);
    }

    #[test]
    fn test_grid_builder_default_precision() {
        let grid = LocatorGrid::builder().extent(13.0, 52.0, 13.5, 52.5).build();

        assert_eq!(grid.precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn test_grid_builder_with_rect() {
        let rect = Rect::new(coord! { x: 5.0, y: 47.0 }, coord! { x: 15.0, y: 55.0 });
        let grid = LocatorGrid::builder().precision(2).rect(&rect).build();

        assert!(!grid.is_empty());
    }

    #[test]
    fn test_get_square_at() {
        let grid = LocatorGrid::from_extent(5.0, 47.0, 15.0, 55.0, 2);
        let pt = point! { x: 13.4, y: 52.5 };

        let square = grid.get_square_at(&pt);
        assert_eq!(square.map(|s| s.id.as_str()), Some("JO62"));
    }

    #[test]
    fn test_get_square_at_outside_extent() {
        let grid = LocatorGrid::from_extent(5.0, 47.0, 15.0, 55.0, 2);
        let pt = point! { x: 100.0, y: -40.0 };

        assert!(grid.get_square_at(&pt).is_none());
    }

    #[test]
    fn test_grid_covers_whole_world_at_field_precision() {
        let grid = LocatorGrid::from_extent(-180.0, -90.0, 180.0, 90.0, 1);

        // 18 x 18 fields, the eastern and northern bounds add no extra row
        assert_eq!(grid.len(), 324);
    }

    #[test]
    fn test_grid_invalid_precision_is_empty() {
        assert!(LocatorGrid::from_extent(0.0, 0.0, 1.0, 1.0, 0).is_empty());
        assert!(LocatorGrid::from_extent(0.0, 0.0, 1.0, 1.0, 9).is_empty());
    }

    #[test]
    fn test_grid_inverted_extent_is_empty() {
        assert!(LocatorGrid::from_extent(10.0, 0.0, 0.0, 1.0, 2).is_empty());
    }

    #[test]
    fn test_filter_squares() {
        let grid = LocatorGrid::from_extent(0.0, 0.0, 40.0, 10.0, 1);

        let eastern = grid.filter(|square| square.lon() >= 20.0);
        assert!(!eastern.is_empty());
        assert!(eastern.len() < grid.len());
    }

    #[test]
    fn test_to_polygons() {
        let grid = LocatorGrid::from_extent(0.0, 0.0, 40.0, 10.0, 1);
        let polygons = grid.to_polygons();

        assert_eq!(polygons.len(), grid.len());
    }
}
