use crate::core::constants::{
    CORNER_EPSILON, FIELD_UNIT_SCALE, FIELDS, FieldChars, FieldSpec, LAT_FIELD_DEGREES,
    LAT_UNITS_PER_DEGREE, LON_FIELD_DEGREES, LON_UNITS_PER_DEGREE, MAX_PRECISION, WORLD_EXTENTS,
};
use crate::util::coord::Coordinate;
use crate::util::error::MaidenheadError;
use geo_types::Point;

/// Converts a Maidenhead locator to the southwest corner of its grid square.
///
/// Accepts 2 to 8 characters, case-insensitive, surrounding whitespace
/// ignored. A shorter locator denotes a coarser square; the corner returned
/// is always the minimum-longitude, minimum-latitude corner of the square.
/// The point has x = longitude and y = latitude in decimal degrees.
///
/// # Example
///
/// ```
/// use maidenhead_rs::locator_to_point;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let sw = locator_to_point("JO62qm")?;
/// assert!((sw.y() - 52.5).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
pub fn locator_to_point(locator: &str) -> Result<Point<f64>, MaidenheadError> {
    let normalized = locator.trim().to_ascii_uppercase();
    let chars: Vec<char> = normalized.chars().collect();

    let n = chars.len();
    if !(2..=8).contains(&n) || n % 2 != 0 {
        return Err(MaidenheadError::InvalidLocatorLength(n));
    }

    let mut lon = WORLD_EXTENTS[0];
    let mut lat = WORLD_EXTENTS[1];

    for (field, spec) in FIELDS.iter().enumerate() {
        let pos = field * 2;
        if pos + 2 > n {
            break;
        }
        lon += field_index(chars[pos], pos, spec)? * LON_FIELD_DEGREES[field];
        lat += field_index(chars[pos + 1], pos + 1, spec)? * LAT_FIELD_DEGREES[field];
    }

    Ok(Point::new(lon, lat))
}

/// Converts a WGS84 coordinate to a Maidenhead locator of `2 * precision`
/// characters.
///
/// `precision` counts fields (character pairs) and must be between 1 and
/// [`MAX_PRECISION`]. Longitude must lie in [-180, 180] and latitude in
/// [-90, 90], both bounds inclusive.
///
/// # Example
///
/// ```
/// use maidenhead_rs::point_to_locator;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let locator = point_to_locator(&(13.4, 52.5), 3)?;
/// assert_eq!(locator, "JO62qm");
/// # Ok(())
/// # }
/// ```
pub fn point_to_locator<C: Coordinate>(
    coord: &C,
    precision: u8,
) -> Result<String, MaidenheadError> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(MaidenheadError::InvalidPrecision(precision));
    }

    let (lon, lat) = (coord.x(), coord.y());
    if !(WORLD_EXTENTS[0]..=WORLD_EXTENTS[2]).contains(&lon)
        || !(WORLD_EXTENTS[1]..=WORLD_EXTENTS[3]).contains(&lat)
    {
        return Err(MaidenheadError::InvalidCoordinate { lon, lat });
    }

    let mut lon_units = to_units(lon - WORLD_EXTENTS[0], LON_UNITS_PER_DEGREE);
    let mut lat_units = to_units(lat - WORLD_EXTENTS[1], LAT_UNITS_PER_DEGREE);

    let mut locator = String::with_capacity(precision as usize * 2);
    for (field, spec) in FIELDS.iter().take(precision as usize).enumerate() {
        let scale = FIELD_UNIT_SCALE[field];
        locator.push(field_char(lon_units / scale, spec));
        locator.push(field_char(lat_units / scale, spec));
        lon_units %= scale;
        lat_units %= scale;
    }

    Ok(locator)
}

/// Number of grid squares along each axis at the given precision.
///
/// Both axes subdivide identically: 18 fields, then 10, 24, and 10 further
/// subdivisions per field.
pub(crate) fn cells_per_axis(precision: u8) -> i64 {
    FIELDS
        .iter()
        .take(precision as usize)
        .map(|spec| spec.radix)
        .product()
}

/// Whole finest-field units east or north of the world origin.
fn to_units(degrees: f64, units_per_degree: f64) -> i64 {
    (degrees * units_per_degree + CORNER_EPSILON).floor() as i64
}

fn field_index(ch: char, position: usize, spec: &FieldSpec) -> Result<f64, MaidenheadError> {
    match spec.chars {
        FieldChars::Digit => ch
            .to_digit(10)
            .map(f64::from)
            .ok_or(MaidenheadError::InvalidLocatorChar { position, ch }),
        // Letter positions take the raw offset from 'A'; validation is
        // shape-only.
        FieldChars::Upper | FieldChars::Lower => Ok(f64::from(ch as i32 - 'A' as i32)),
    }
}

fn field_char(index: i64, spec: &FieldSpec) -> char {
    // index may equal the radix when a coordinate sits exactly on the
    // eastern or northern world bound
    debug_assert!(index >= 0 && index <= spec.radix);
    match spec.chars {
        FieldChars::Upper => char::from(b'A' + index as u8),
        FieldChars::Digit => char::from(b'0' + index as u8),
        FieldChars::Lower => char::from(b'a' + index as u8),
    }
}
