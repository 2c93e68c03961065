use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::parser::PressureGroup;
use crate::prompt::IspChoice;

const CHART_SIZE: (u32, u32) = (1280, 760);

/// Draw the Isp-vs-O/F chart: a dashed throat series and/or a solid nozzle
/// series per pressure level, depending on `choice`.
///
/// Groups whose O/F and Isp sequences diverge in length are left out, the
/// same way the optimizer skips them.
pub fn render(groups: &[PressureGroup], choice: IspChoice, path: &Path) -> Result<()> {
    let eligible: Vec<&PressureGroup> = groups
        .iter()
        .filter(|g| g.is_balanced() && !g.of_ratios.is_empty())
        .collect();

    let (x_min, x_max) = axis_range(
        eligible
            .iter()
            .flat_map(|g| g.of_ratios.iter().copied()),
    );
    let (y_min, y_max) = axis_range(eligible.iter().flat_map(|g| {
        g.isp_pairs.iter().flat_map(|&(first, last)| {
            let first = choice.uses_first().then_some(first);
            let last = choice.uses_last().then_some(last);
            first.into_iter().chain(last)
        })
    }));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!(
        "Specific Impulse vs O/F Ratio ({} Isp Values)",
        choice.capitalized()
    );
    let mut chart = ChartBuilder::on(&root)
        .margin(25)
        .caption(title, ("sans-serif", 28))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("O/F Ratio")
        .y_desc("Specific Impulse (m/s)")
        .draw()?;

    for (i, group) in eligible.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();

        if choice.uses_first() {
            let points: Vec<(f64, f64)> = group
                .of_ratios
                .iter()
                .copied()
                .zip(group.isp_pairs.iter().map(|&(first, _)| first))
                .collect();
            chart
                .draw_series(DashedLineSeries::new(points, 8, 4, color.stroke_width(2)))?
                .label(format!("{} bar - Throat Isp", group.pressure))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2))
                });
        }

        if choice.uses_last() {
            let points: Vec<(f64, f64)> = group
                .of_ratios
                .iter()
                .copied()
                .zip(group.isp_pairs.iter().map(|&(_, last)| last))
                .collect();
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(format!("{} bar - Nozzle Isp", group.pressure))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2))
                });
        }
    }

    if !eligible.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Padded min/max over the plotted values; a safe default when there is
/// nothing to plot (the chart is still produced, just empty).
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max(0.5);
    (min - pad, max + pad)
}

// ── Tests ──
