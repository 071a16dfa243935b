pub mod grid;
pub mod locator_csv;
pub mod map_url;
pub mod square;

pub use grid::{LocatorGrid, LocatorGridBuilder};
pub use locator_csv::{
    CoordinateSource, CsvLocatorConfig, CsvToLocator, GeometryFormat, csv_to_locator_csv,
};
pub use map_url::{google_map_url, qth_map_url};
pub use square::GridSquare;
