use geo_types::Point;

/// Accepts either coordinate tuples or `geo_types::Point` wherever a WGS84
/// coordinate is expected. `x` is longitude, `y` is latitude, both in
/// decimal degrees.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
