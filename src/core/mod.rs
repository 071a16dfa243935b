pub mod constants;
pub mod grid;

pub use constants::{
    DEFAULT_PRECISION, LAT_FIELD_DEGREES, LON_FIELD_DEGREES, MAX_PRECISION, WORLD_EXTENTS,
};
pub use grid::{locator_to_point, point_to_locator};
