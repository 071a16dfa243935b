/// Error type for maidenhead-rs operations.
#[derive(Debug, PartialEq)]
pub enum MaidenheadError {
    /// The locator length is not an even number between 2 and 8.
    InvalidLocatorLength(usize),
    /// A digit position in the locator holds a non-digit character.
    InvalidLocatorChar { position: usize, ch: char },
    /// The precision is outside the valid range (1-4 fields).
    InvalidPrecision(u8),
    /// A coordinate is outside the WGS84 longitude/latitude domain.
    InvalidCoordinate { lon: f64, lat: f64 },
    /// File I/O or serialization error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for MaidenheadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaidenheadError::InvalidLocatorLength(n) => {
                write!(f, "Locator requires 2-8 characters, even count, got {}", n)
            }
            MaidenheadError::InvalidLocatorChar { position, ch } => {
                write!(f, "Invalid locator character '{}' at position {}", ch, position)
            }
            MaidenheadError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            MaidenheadError::InvalidCoordinate { lon, lat } => {
                write!(f, "Coordinate out of range: lon {}, lat {}", lon, lat)
            }
            MaidenheadError::IoError(msg) => write!(f, "IO error: {}", msg),
            MaidenheadError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            MaidenheadError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for MaidenheadError {}
