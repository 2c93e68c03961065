use serde::Serialize;

use crate::parser::PressureGroup;

/// Best O/F ratio found for one pressure level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestRatio {
    pub pressure: f64,
    pub of_ratio: f64,
    /// Larger of the winning record's throat/nozzle Isp values (m/s).
    pub isp: f64,
}

/// Pick, per pressure, the O/F ratio yielding the highest Isp.
///
/// Only groups whose O/F and Isp sequences line up record-for-record are
/// considered; the rest are skipped without comment, as are groups with no
/// records at all. Ties keep the first-encountered ratio.
pub fn best_ratios(groups: &[PressureGroup]) -> Vec<BestRatio> {
    let mut results = Vec::new();

    for group in groups.iter().filter(|g| g.is_balanced()) {
        let mut best_isp = f64::NEG_INFINITY;
        let mut best_of = None;

        for (&of, &(first, last)) in group.of_ratios.iter().zip(&group.isp_pairs) {
            let max_isp = first.max(last);
            if max_isp > best_isp {
                best_isp = max_isp;
                best_of = Some(of);
            }
        }

        if let Some(of_ratio) = best_of {
            results.push(BestRatio {
                pressure: group.pressure,
                of_ratio,
                isp: best_isp,
            });
        }
    }

    results
}

// ── Tests ──
