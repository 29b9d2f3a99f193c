use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local};
use plotters::prelude::*;

use catdb_core::models::WeightRecord;

/// Default output name: `cat_weight_YYYYMMDD_HHMM.png` from the local clock.
pub(crate) fn default_graph_file() -> PathBuf {
    PathBuf::from(format!(
        "cat_weight_{}.png",
        Local::now().format("%Y%m%d_%H%M")
    ))
}

/// Group records by calendar year as (day-of-year, weight) points, so the
/// same season lines up across years on one x axis.
fn group_by_year(records: &[WeightRecord]) -> BTreeMap<i32, Vec<(u32, f64)>> {
    let mut years: BTreeMap<i32, Vec<(u32, f64)>> = BTreeMap::new();
    for record in records {
        years
            .entry(record.date.year())
            .or_default()
            .push((record.date.ordinal(), record.weight_kg));
    }
    years
}

/// Plot one line+point series per year and write the chart as a PNG.
pub(crate) fn render_weight_chart(records: &[WeightRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        bail!("No records to graph");
    }

    let years = group_by_year(records);

    let (mut min_w, mut max_w) = (f64::INFINITY, f64::NEG_INFINITY);
    for record in records {
        min_w = min_w.min(record.weight_kg);
        max_w = max_w.max(record.weight_kg);
    }
    let pad = ((max_w - min_w) * 0.1).max(0.25);

    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cat Weight Trends by Year", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(1u32..367u32, (min_w - pad)..(max_w + pad))?;

    chart
        .configure_mesh()
        .x_desc("Day of Year")
        .y_desc("Weight (kg)")
        .draw()?;

    for (idx, (year, points)) in years.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(year.to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart.draw_series(
            points
                .iter()
                .map(|&(day, weight)| Circle::new((day, weight), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()
        .with_context(|| format!("Failed to write graph to {}", path.display()))?;
    Ok(())
}
