/// Default encoding precision: three fields, a six-character locator.
pub const DEFAULT_PRECISION: u8 = 3;

/// Maximum precision: four fields, an eight-character locator.
/// Maidenhead is undefined beyond eight characters.
pub const MAX_PRECISION: u8 = 4;

/// World extents [min_lon, min_lat, max_lon, max_lat]
pub const WORLD_EXTENTS: [f64; 4] = [-180.0, -90.0, 180.0, 90.0];

/// Longitude degrees spanned by one unit of each field
pub const LON_FIELD_DEGREES: [f64; 4] = [20.0, 2.0, 5.0 / 60.0, 5.0 / 600.0];

/// Latitude degrees spanned by one unit of each field
pub const LAT_FIELD_DEGREES: [f64; 4] = [10.0, 1.0, 2.5 / 60.0, 2.5 / 600.0];

/// Each field's unit expressed in units of the finest field. The ratios are
/// identical on both axes.
pub(crate) const FIELD_UNIT_SCALE: [i64; 4] = [2400, 240, 10, 1];

/// Finest-field units per degree of longitude (one unit is 5/600 of a degree)
pub(crate) const LON_UNITS_PER_DEGREE: f64 = 120.0;

/// Finest-field units per degree of latitude (one unit is 2.5/600 of a degree)
pub(crate) const LAT_UNITS_PER_DEGREE: f64 = 240.0;

/// Bias in finest-field units applied before flooring in the encoder, so a
/// cell corner carrying float rounding error still lands in its own cell.
/// Roughly 1e-8 degrees, far below field-4 resolution.
pub(crate) const CORNER_EPSILON: f64 = 1e-6;

/// Character style of one field's character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldChars {
    /// Uppercase letter offset from 'A'
    Upper,
    /// Decimal digit
    Digit,
    /// Lowercase letter offset from 'a' (the sub-square convention)
    Lower,
}

/// Radix and character style of one locator field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub radix: i64,
    pub chars: FieldChars,
}

/// The four locator fields in order: field (18 letters), square (10 digits),
/// sub-square (24 letters, lowercase), extended square (10 digits).
pub(crate) const FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        radix: 18,
        chars: FieldChars::Upper,
    },
    FieldSpec {
        radix: 10,
        chars: FieldChars::Digit,
    },
    FieldSpec {
        radix: 24,
        chars: FieldChars::Lower,
    },
    FieldSpec {
        radix: 10,
        chars: FieldChars::Digit,
    },
];
