use super::summary::Summary;
use crate::Probability;
use anyhow::Context;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// render the density curve: probability mass filled down to the axis, a
/// dashed vertical through the mean, and the y-axis capped at 1.2x the
/// tallest mass.
pub fn density(summary: &Summary, path: &Path) -> anyhow::Result<()> {
    let pmf = summary.pmf();
    let peak = pmf.iter().map(|&(_, mass)| mass).fold(0., Probability::max);
    let top = peak * 1.2;
    let x_lo = pmf.first().map(|&(length, _)| length).unwrap_or(0) as Probability;
    let x_hi = pmf.last().map(|&(length, _)| length).unwrap_or(0) as Probability;
    let x_hi = x_hi.max(x_lo + 1.);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0. ..top)?;
    chart
        .configure_mesh()
        .x_desc("Expected game length")
        .y_desc("Probability")
        .draw()?;
    chart.draw_series(
        AreaSeries::new(
            pmf.iter().map(|&(length, mass)| (length as Probability, mass)),
            0.,
            BLUE.mix(0.8),
        )
        .border_style(BLUE.stroke_width(2)),
    )?;
    chart.draw_series(DashedLineSeries::new(
        [(summary.mean(), 0.), (summary.mean(), top)],
        8,
        4,
        RED.stroke_width(2),
    ))?;
    root.present()
        .with_context(|| format!("writing density plot to {}", path.display()))?;
    Ok(())
}
