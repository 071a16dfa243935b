//! # maidenhead-rs
//!
//! Conversion between WGS84 coordinates and Maidenhead grid locators, the
//! compact alphanumeric squares amateur radio operators exchange to identify
//! a region of the Earth's surface.
//!
//! There are currently three main entry points.
//!
//! ### 1. `GridSquare` - Single Square Operations
//!
//! ```
//! use maidenhead_rs::GridSquare;
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let square = GridSquare::from_wgs84(&(13.4, 52.5), 3)?;
//! assert_eq!(square.id, "JO62qm");
//! let polygon = square.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `LocatorGrid` - Collections of Squares
//!
//! ```
//! use maidenhead_rs::LocatorGrid;
//! use geo_types::point;
//!
//! let grid = LocatorGrid::builder()
//!     .precision(2)
//!     .extent(5.0, 47.0, 15.0, 55.0)
//!     .build();
//!
//! let pt = point! { x: 13.4, y: 52.5 };
//! if let Some(square) = grid.get_square_at(&pt) {
//!     println!("{}", square.id);
//! }
//! ```
//!
//! ### 3. `CsvToLocator` - CSV File Conversion
//!
//! Convert CSV files with coordinate columns (or WKT/GeoJSON geometry) to
//! locator-annotated CSVs:
//!
//! ```no_run
//! use maidenhead_rs::{CsvToLocator, CsvLocatorConfig, GeometryFormat};
//!
//! let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 3)
//!     .with_square_geometry(GeometryFormat::Wkt);
//!
//! // Using trait method
//! "stations.csv".to_locator_csv("output.csv", &config).unwrap();
//! ```
//!
//! The bare codec is also exported for callers that only need strings and
//! numbers:
//!
//! ```
//! use maidenhead_rs::{locator_to_point, point_to_locator};
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let sw = locator_to_point("IO83vl")?;
//! assert_eq!(point_to_locator(&sw, 3)?, "IO83vl");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    CoordinateSource, CsvLocatorConfig, CsvToLocator, GeometryFormat, GridSquare, LocatorGrid,
    LocatorGridBuilder, csv_to_locator_csv, google_map_url, qth_map_url,
};
pub use core::{
    DEFAULT_PRECISION, LAT_FIELD_DEGREES, LON_FIELD_DEGREES, MAX_PRECISION, WORLD_EXTENTS,
    locator_to_point, point_to_locator,
};
pub use util::{Coordinate, MaidenheadError};

pub use geo_types;
