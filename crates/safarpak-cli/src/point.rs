use safarpak_lib::GeoPoint;

/// Parse a `LAT,LON` pair in decimal degrees, as passed to `--from-point`.
pub fn parse_point(value: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{value}'"))?;
    Ok(GeoPoint::new(parse_latitude(lat)?, parse_longitude(lon)?))
}

/// Parse a latitude in decimal degrees within ±90.
pub fn parse_latitude(value: &str) -> Result<f64, String> {
    parse_degrees(value, "latitude", 90.0)
}

/// Parse a longitude in decimal degrees within ±180.
pub fn parse_longitude(value: &str) -> Result<f64, String> {
    parse_degrees(value, "longitude", 180.0)
}

fn parse_degrees(raw: &str, field: &str, bound: f64) -> Result<f64, String> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid {field} '{}'", raw.trim()))?;
    if !parsed.is_finite() || parsed.abs() > bound {
        return Err(format!("{field} {parsed} is out of range (±{bound})"));
    }
    Ok(parsed)
}
