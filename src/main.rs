use maidenhead_rs::{GridSquare, MaidenheadError};

fn main() -> Result<(), MaidenheadError> {
    let lon = -2.2479699500757597;
    let lat = 53.48082746395233;

    let square = GridSquare::from_wgs84(&(lon, lat), 3)?;

    println!("Locator: {}", square.id);
    println!("Southwest: ({}, {})", square.lon(), square.lat());
    println!("Center: ({}, {})", square.center().x(), square.center().y());
    println!("Map: {}", square.google_map_url());

    let polygon = square.to_polygon();
    println!("Polygon: {:?}", polygon);

    Ok(())
}
