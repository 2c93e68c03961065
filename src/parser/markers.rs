use std::sync::LazyLock;

use regex::Regex;

static PRESSURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"P,\s*BAR\s+(\d+\.\d+)").unwrap());
static OF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"O/F=\s*(\d+\.\d+)").unwrap());
static ISP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Isp, M/SEC\s+([\d.\s]+)").unwrap());

/// One recognized marker on a CEA output line.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// Chamber pressure in bar, from the first column of a `P, BAR` row.
    Pressure(f64),
    /// Oxidizer/fuel mass ratio from an `O/F=` case header.
    OfRatio(f64),
    /// All values of an `Isp, M/SEC` row, left to right (m/s).
    IspRow(Vec<f64>),
}

/// Test a line against the three marker patterns.
///
/// A line may in principle match more than one pattern; markers come back in
/// pattern order (pressure, O/F, Isp) so a pressure event on a line consumes
/// the previously parked O/F before a new one from the same line is parked.
pub fn markers_in_line(line: &str) -> Vec<Marker> {
    let mut markers = Vec::new();

    if let Some(caps) = PRESSURE_RE.captures(line) {
        if let Ok(pressure) = caps[1].parse::<f64>() {
            markers.push(Marker::Pressure(pressure));
        }
    }

    if let Some(caps) = OF_RE.captures(line) {
        if let Ok(ratio) = caps[1].parse::<f64>() {
            markers.push(Marker::OfRatio(ratio));
        }
    }

    if let Some(caps) = ISP_RE.captures(line) {
        let values: Vec<f64> = caps[1]
            .split_whitespace()
            .filter_map(|tok| tok.parse::<f64>().ok())
            .collect();
        markers.push(Marker::IspRow(values));
    }

    markers
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_row_takes_first_column() {
        let markers = markers_in_line(" P, BAR            10.000   5.6977  0.10654");
        assert_eq!(markers, vec![Marker::Pressure(10.0)]);
    }

    #[test]
    fn of_case_header() {
        let markers =
            markers_in_line(" O/F=    2.50000  %FUEL= 28.571429  R,EQ.RATIO= 1.358693");
        assert_eq!(markers, vec![Marker::OfRatio(2.5)]);
    }

    #[test]
    fn isp_row_all_values() {
        let markers = markers_in_line(" Isp, M/SEC                 1112.1   2895.6");
        assert_eq!(markers, vec![Marker::IspRow(vec![1112.1, 2895.6])]);
    }

    #[test]
    fn isp_row_single_value() {
        let markers = markers_in_line("Isp, M/SEC  1500.0");
        assert_eq!(markers, vec![Marker::IspRow(vec![1500.0])]);
    }

    #[test]
    fn similar_rows_do_not_match() {
        // Same units column, different quantity
        assert!(markers_in_line(" Ivac, M/SEC                2159.8   2928.1").is_empty());
        assert!(markers_in_line(" CSTAR, M/SEC               1750.8   1750.8").is_empty());
        assert!(markers_in_line(" SON VEL,M/SEC     1193.3   1155.4    852.1").is_empty());
        // Lowercase problem-section echo of the same tokens
        assert!(markers_in_line("   p,bar=10,").is_empty());
        assert!(markers_in_line("   o/f= 2.0, 2.5, 3.0").is_empty());
    }

    #[test]
    fn plain_lines_ignored() {
        assert!(markers_in_line("").is_empty());
        assert!(markers_in_line(" T, K             3279.44  3115.45  1666.08").is_empty());
        assert!(markers_in_line(" PERFORMANCE PARAMETERS").is_empty());
    }

    #[test]
    fn pressure_requires_decimal_point() {
        // The pattern matches full floats only, as in the source tool's output
        assert!(markers_in_line(" P, BAR 10").is_empty());
    }
}
