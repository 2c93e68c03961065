use serde::Serialize;

use super::markers::{markers_in_line, Marker};

/// Records collected for one chamber pressure, in encounter order.
///
/// The two sequences are filled by independent markers and are not guaranteed
/// to end up the same length; consumers check `is_balanced` before zipping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureGroup {
    pub pressure: f64,
    pub of_ratios: Vec<f64>,
    pub isp_pairs: Vec<(f64, f64)>,
}

impl PressureGroup {
    fn new(pressure: f64) -> Self {
        Self {
            pressure,
            of_ratios: Vec::new(),
            isp_pairs: Vec::new(),
        }
    }

    /// O/F and Isp sequences line up record-for-record.
    pub fn is_balanced(&self) -> bool {
        self.of_ratios.len() == self.isp_pairs.len()
    }
}

/// Scan state carried across the lines of one document.
#[derive(Debug, Default)]
struct ScanState {
    /// Pressure most recently observed; group key for subsequent captures.
    current_pressure: Option<f64>,
    /// Single-slot holder for an O/F ratio read before the pressure line
    /// that claims it. Overwritten, not queued.
    pending_of: Option<f64>,
}

/// Single-pass scan: document text → per-pressure groups, first-seen order.
///
/// Pure function of the line sequence; the scan state lives on this call's
/// stack, so concurrent extraction of distinct documents is safe.
pub fn extract(text: &str) -> Vec<PressureGroup> {
    let mut groups: Vec<PressureGroup> = Vec::new();
    let mut state = ScanState::default();

    for line in text.lines() {
        for marker in markers_in_line(line) {
            apply_marker(marker, &mut state, &mut groups);
        }
    }

    groups
}

fn apply_marker(marker: Marker, state: &mut ScanState, groups: &mut Vec<PressureGroup>) {
    match marker {
        Marker::Pressure(pressure) => {
            state.current_pressure = Some(pressure);
            let idx = match groups.iter().position(|g| g.pressure == pressure) {
                Some(idx) => idx,
                None => {
                    groups.push(PressureGroup::new(pressure));
                    groups.len() - 1
                }
            };
            // The document lists O/F ahead of the pressure block that
            // reports it: claim the parked value for this group.
            if let Some(of) = state.pending_of.take() {
                groups[idx].of_ratios.push(of);
            }
        }
        Marker::OfRatio(ratio) => {
            state.pending_of = Some(ratio);
        }
        Marker::IspRow(values) => {
            let Some(pressure) = state.current_pressure else {
                // Isp row before any pressure marker: dropped
                return;
            };
            if let (Some(&first), Some(&last)) = (values.first(), values.last()) {
                if let Some(group) = groups.iter_mut().find(|g| g.pressure == pressure) {
                    group.isp_pairs.push((first, last));
                }
            }
        }
    }
}

// ── Tests ──
