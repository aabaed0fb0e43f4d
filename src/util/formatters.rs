//! Shared formatting utilities.

/// Format a WGS84 position as `43.85630° N, 18.41310° E`.
pub fn format_coordinate(lon: f64, lat: f64) -> String {
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lon < 0.0 { 'W' } else { 'E' };
    format!("{:.5}° {}, {:.5}° {}", lat.abs(), ns, lon.abs(), ew)
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_show_hemisphere() {
        assert_eq!(format_coordinate(18.4131, 43.8563), "43.85630° N, 18.41310° E");
        assert_eq!(format_coordinate(-0.5, -1.25), "1.25000° S, 0.50000° W");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
