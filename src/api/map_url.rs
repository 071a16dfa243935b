use crate::core::grid::{locator_to_point, point_to_locator};
use crate::util::coord::Coordinate;
use crate::util::error::MaidenheadError;

/// Builds a Google static map URL centered on the southwest corner of the
/// given locator's square.
///
/// # Example
///
/// ```
/// use maidenhead_rs::google_map_url;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let url = google_map_url("JO62")?;
/// assert!(url.contains("center=52,12"));
/// # Ok(())
/// # }
/// ```
pub fn google_map_url(locator: &str) -> Result<String, MaidenheadError> {
    let sw = locator_to_point(locator)?;

    Ok(format!(
        "http://maps.googleapis.com/maps/api/staticmap?center={},{}&zoom=10&size=320x240&sensor=false",
        sw.y(),
        sw.x()
    ))
}

/// Builds a no.nonsense.ee QTH map URL for the square containing the given
/// coordinate.
///
/// # Example
///
/// ```
/// use maidenhead_rs::qth_map_url;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let url = qth_map_url(&(13.4, 52.5), 3)?;
/// assert_eq!(url, "http://no.nonsense.ee/qthmap/?qth=JO62qm");
/// # Ok(())
/// # }
/// ```
pub fn qth_map_url<C: Coordinate>(coord: &C, precision: u8) -> Result<String, MaidenheadError> {
    let locator = point_to_locator(coord, precision)?;

    Ok(format!("http://no.nonsense.ee/qthmap/?qth={}", locator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_map_url() -> Result<(), MaidenheadError> {
        assert_eq!(
            google_map_url("AA00AA00")?,
            "http://maps.googleapis.com/maps/api/staticmap?center=-90,-180&zoom=10&size=320x240&sensor=false"
        );
        Ok(())
    }

    #[test]
    fn test_google_map_url_rejects_bad_locator() {
        assert!(matches!(
            google_map_url("ABC"),
            Err(MaidenheadError::InvalidLocatorLength(3))
        ));
    }

    #[test]
    fn test_qth_map_url() -> Result<(), MaidenheadError> {
        assert_eq!(
            qth_map_url(&(-2.2479699500757597, 53.48082746395233), 3)?,
            "http://no.nonsense.ee/qthmap/?qth=IO83vl"
        );
        Ok(())
    }

    #[test]
    fn test_qth_map_url_rejects_bad_precision() {
        assert!(matches!(
            qth_map_url(&(0.0, 0.0), 0),
            Err(MaidenheadError::InvalidPrecision(0))
        ));
    }
}
