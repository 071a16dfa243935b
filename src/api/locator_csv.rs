use crate::api::square::GridSquare;
use crate::util::error::MaidenheadError;
use geo::Centroid;
use geo_types::Geometry;
use geojson::GeoJson;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use wkt::Wkt;

/// For the type of location source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Output format for grid square geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude coordinate columns
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

/// Configuration for CSV to locator conversion.
#[derive(Debug, Clone)]
pub struct CsvLocatorConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub precision: u8,
    pub include_square_geometry: Option<GeometryFormat>,
}

impl CsvLocatorConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::CsvLocatorConfig;
    ///
    /// let config = CsvLocatorConfig::new("geometry", 3);
    /// ```
    pub fn new(geometry_column: impl Into<String>, precision: u8) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            precision,
            include_square_geometry: None,
        }
    }

    /// Create config for a CSV with separate lon/lat coordinate columns.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::CsvLocatorConfig;
    ///
    /// let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 3);
    /// ```
    pub fn from_coords(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
        precision: u8,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            precision,
            include_square_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include grid square polygon geometry in output.
    pub fn with_square_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_square_geometry = Some(format);
        self
    }
}

pub trait CsvToLocator {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvLocatorConfig,
    ) -> Result<(), MaidenheadError>;
}

impl<P: AsRef<Path>> CsvToLocator for P {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvLocatorConfig,
    ) -> Result<(), MaidenheadError> {
        csv_to_locator_csv(self, output_path, config)
    }
}

fn parse_geometry(s: &str) -> Result<Geometry<f64>, MaidenheadError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, MaidenheadError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| MaidenheadError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => Geometry::try_from(geom)
            .map_err(|e| MaidenheadError::GeometryParseError(e.to_string())),
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| {
                MaidenheadError::GeometryParseError("Feature has no geometry".to_string())
            })
            .and_then(|g| {
                Geometry::try_from(g)
                    .map_err(|e| MaidenheadError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(MaidenheadError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, MaidenheadError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| MaidenheadError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        MaidenheadError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

fn geometry_to_squares(
    geom: Geometry<f64>,
    precision: u8,
) -> Result<Vec<GridSquare>, MaidenheadError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![GridSquare::from_wgs84(&pt, precision)?]),
        Geometry::LineString(line) => GridSquare::from_line_string(&line, precision),
        Geometry::MultiLineString(mls) => {
            let mut all_squares = Vec::new();
            for line in mls.0 {
                all_squares.extend(GridSquare::from_line_string(&line, precision)?);
            }
            Ok(all_squares)
        }
        Geometry::Polygon(poly) => {
            if let Some(centroid) = poly.centroid() {
                Ok(vec![GridSquare::from_wgs84(&centroid, precision)?])
            } else {
                Ok(vec![])
            }
        }
        Geometry::MultiPolygon(mp) => {
            let mut squares = Vec::new();
            for poly in mp.0 {
                if let Some(centroid) = poly.centroid() {
                    squares.push(GridSquare::from_wgs84(&centroid, precision)?);
                }
            }
            Ok(squares)
        }
        Geometry::MultiPoint(mp) => {
            let mut squares = Vec::new();
            for pt in mp.0 {
                squares.push(GridSquare::from_wgs84(&pt, precision)?);
            }
            Ok(squares)
        }
        Geometry::GeometryCollection(gc) => {
            let mut all_squares = Vec::new();
            for g in gc.0 {
                all_squares.extend(geometry_to_squares(g, precision)?);
            }
            Ok(all_squares)
        }
        _ => Err(MaidenheadError::GeometryParseError(
            "Unsupported geometry type".to_string(),
        )),
    }
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file
/// with Maidenhead locators.
///
/// Streams output to minimize memory usage for large files.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use maidenhead_rs::{csv_to_locator_csv, CsvLocatorConfig, GeometryFormat};
///
/// let config = CsvLocatorConfig::new("Geo Shape", 3)
///     .exclude(vec!["Geo Point".into()])
///     .with_square_geometry(GeometryFormat::Wkt);
///
/// csv_to_locator_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use maidenhead_rs::{csv_to_locator_csv, CsvLocatorConfig};
///
/// let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 3);
///
/// csv_to_locator_csv("stations.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_locator_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvLocatorConfig,
) -> Result<(), MaidenheadError> {
    let file = File::open(csv_path).map_err(|e| MaidenheadError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| MaidenheadError::CsvError(e.to_string()))?
        .clone();

    // Determine which columns to exclude based on source type
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = headers.iter().position(|h| h == col).ok_or_else(|| {
                MaidenheadError::CsvError(format!("Geometry column '{}' not found", col))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(idx);
            (SourceIndices::Geometry(idx), exclude)
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = headers.iter().position(|h| h == lon_column).ok_or_else(|| {
                MaidenheadError::CsvError(format!("Longitude column '{}' not found", lon_column))
            })?;
            let lat_idx = headers.iter().position(|h| h == lat_column).ok_or_else(|| {
                MaidenheadError::CsvError(format!("Latitude column '{}' not found", lat_column))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(lon_idx);
            exclude.insert(lat_idx);
            (SourceIndices::Coordinates { lon_idx, lat_idx }, exclude)
        }
    };

    // Add user-specified exclusions
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file =
        File::create(output_path).map_err(|e| MaidenheadError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    // Write header row
    let mut header_row: Vec<&str> = vec!["locator"];
    if config.include_square_geometry.is_some() {
        header_row.push("square_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| MaidenheadError::CsvError(e.to_string()))?;

    // Process rows
    for result in reader.records() {
        let record = result.map_err(|e| MaidenheadError::CsvError(e.to_string()))?;

        let squares = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    MaidenheadError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                geometry_to_squares(geom, config.precision)?
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon_str = record
                    .get(*lon_idx)
                    .ok_or_else(|| {
                        MaidenheadError::CsvError(format!(
                            "Missing longitude column at index {}",
                            lon_idx
                        ))
                    })?
                    .trim();
                let lat_str = record
                    .get(*lat_idx)
                    .ok_or_else(|| {
                        MaidenheadError::CsvError(format!(
                            "Missing latitude column at index {}",
                            lat_idx
                        ))
                    })?
                    .trim();

                let lon: f64 = lon_str.parse().map_err(|_| {
                    MaidenheadError::CsvError(format!("Invalid longitude: '{}'", lon_str))
                })?;
                let lat: f64 = lat_str.parse().map_err(|_| {
                    MaidenheadError::CsvError(format!("Invalid latitude: '{}'", lat_str))
                })?;

                vec![GridSquare::from_wgs84(&(lon, lat), config.precision)?]
            }
        };

        for square in squares {
            let mut row: Vec<String> = vec![square.id.clone()];

            if let Some(format) = config.include_square_geometry {
                let polygon = square.to_polygon();
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| MaidenheadError::CsvError(e.to_string()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| MaidenheadError::IoError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::Reader::from_path(path).expect("open output");
        let mut rows = vec![
            reader
                .headers()
                .expect("headers")
                .iter()
                .map(String::from)
                .collect::<Vec<_>>(),
        ];
        for record in reader.records() {
            rows.push(record.expect("record").iter().map(String::from).collect());
        }
        rows
    }

    #[test]
    fn test_coordinate_columns() -> Result<(), MaidenheadError> {
        let input = write_csv(
            "Callsign,Longitude,Latitude\n\
             DL1ABC,13.4,52.5\n\
             G4XYZ,-2.2479699500757597,53.48082746395233\n",
        );
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 3);
        csv_to_locator_csv(input.path(), output.path(), &config)?;

        let rows = read_rows(output.path());
        assert_eq!(rows[0], vec!["locator", "Callsign"]);
        assert_eq!(rows[1], vec!["JO62qm", "DL1ABC"]);
        assert_eq!(rows[2], vec!["IO83vl", "G4XYZ"]);
        Ok(())
    }

    #[test]
    fn test_geometry_column_wkt_point() -> Result<(), MaidenheadError> {
        let input = write_csv("name,geometry\nBerlin,POINT(13.4 52.5)\n");
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::new("geometry", 3);
        csv_to_locator_csv(input.path(), output.path(), &config)?;

        let rows = read_rows(output.path());
        assert_eq!(rows[1], vec!["JO62qm", "Berlin"]);
        Ok(())
    }

    #[test]
    fn test_geometry_column_geojson_point() -> Result<(), MaidenheadError> {
        let input = write_csv(
            "name,geometry\nBerlin,\"{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[13.4,52.5]}\"\n",
        );
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::new("geometry", 2);
        csv_to_locator_csv(input.path(), output.path(), &config)?;

        let rows = read_rows(output.path());
        assert_eq!(rows[1], vec!["JO62", "Berlin"]);
        Ok(())
    }

    #[test]
    fn test_line_string_emits_one_row_per_square() -> Result<(), MaidenheadError> {
        let input = write_csv("name,geometry\npath,\"LINESTRING(0.1 0.5, 4.1 0.5)\"\n");
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::new("geometry", 2);
        csv_to_locator_csv(input.path(), output.path(), &config)?;

        let rows = read_rows(output.path());
        let locators: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
        assert_eq!(locators, vec!["JJ00", "JJ10", "JJ20"]);
        Ok(())
    }

    #[test]
    fn test_with_square_geometry_wkt() -> Result<(), MaidenheadError> {
        let input = write_csv("name,Longitude,Latitude\nBerlin,13.4,52.5\n");
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 2)
            .with_square_geometry(GeometryFormat::Wkt);
        csv_to_locator_csv(input.path(), output.path(), &config)?;

        let rows = read_rows(output.path());
        assert_eq!(rows[0], vec!["locator", "square_geometry", "name"]);
        assert!(rows[1][1].starts_with("POLYGON"));
        Ok(())
    }

    #[test]
    fn test_exclude_columns() -> Result<(), MaidenheadError> {
        let input = write_csv("name,notes,Longitude,Latitude\nBerlin,ignore,13.4,52.5\n");
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 1)
            .exclude(vec!["notes".into()]);
        csv_to_locator_csv(input.path(), output.path(), &config)?;

        let rows = read_rows(output.path());
        assert_eq!(rows[0], vec!["locator", "name"]);
        assert_eq!(rows[1], vec!["JO", "Berlin"]);
        Ok(())
    }

    #[test]
    fn test_missing_column_errors() {
        let input = write_csv("a,b\n1,2\n");
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 3);
        let result = csv_to_locator_csv(input.path(), output.path(), &config);
        assert!(matches!(result, Err(MaidenheadError::CsvError(_))));
    }

    #[test]
    fn test_invalid_coordinate_value_errors() {
        let input = write_csv("Longitude,Latitude\nnot-a-number,52.5\n");
        let output = NamedTempFile::new().expect("create temp file");

        let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 3);
        let result = csv_to_locator_csv(input.path(), output.path(), &config);
        assert!(matches!(result, Err(MaidenheadError::CsvError(_))));
    }
}
