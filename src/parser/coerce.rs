use chrono::NaiveDateTime;

const DT_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a datetime string in the fixed `YYYY-MM-DD HH:MM:SS` shape.
/// Returns None for empty or unparseable strings.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, DT_FMT).ok()
}

/// Parse a minutes field ("120", "37.5") into a non-negative f64.
/// Empty, non-numeric, non-finite and negative values all return None.
pub fn parse_minutos(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}
