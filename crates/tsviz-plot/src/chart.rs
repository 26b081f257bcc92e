//! Per-group line-plot rendering.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use tracing::debug;
use tsviz_core::error::{Result, VizError};
use tsviz_core::models::Dataset;
use tsviz_data::grouping::{group_label, partition, sorted_by_time, Group};

/// Image dimensions in pixels.
const PLOT_SIZE: (u32, u32) = (1024, 768);

/// Render one line plot per group of `dataset` into `out_dir`.
///
/// The directory is created if absent. Existing images with the same name
/// are overwritten. Returns the paths written, one per group; an empty
/// dataset produces no images.
pub fn render_all(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|source| VizError::OutputWrite {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let groups = partition(dataset);
    let mut written = Vec::with_capacity(groups.len());

    for group in &groups {
        let label = group_label(&group.key);
        let path = out_dir.join(format!("{label}.png"));
        render_group(dataset, group, &label, &path)?;
        debug!("Rendered {} ({} rows)", path.display(), group.indices.len());
        written.push(path);
    }

    Ok(written)
}

/// Draw one group as a value-over-time line plot titled with its label.
///
/// The bitmap backend is scoped to this call and flushed via `present`
/// before returning.
fn render_group(dataset: &Dataset, group: &Group, label: &str, path: &Path) -> Result<()> {
    let order = sorted_by_time(dataset, &group.indices);
    let points: Vec<(DateTime<Utc>, f64)> = order
        .iter()
        .map(|&i| (dataset.rows[i].time, dataset.rows[i].value))
        .collect();

    let Some(&(first_time, first_value)) = points.first() else {
        return Ok(());
    };

    let (t_range, v_range) = padded_ranges(&points, first_time, first_value);

    let render_err = |message: String| VizError::Render {
        path: path.to_path_buf(),
        message,
    };

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(label, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t_range, v_range)
        .map_err(|e| render_err(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("time")
        .y_desc("value")
        .draw()
        .map_err(|e| render_err(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(|e| render_err(e.to_string()))?;

    root.present().map_err(|e| render_err(e.to_string()))
}

/// Compute axis ranges covering every point, padded so single-point and
/// constant-value groups still have a drawable extent.
fn padded_ranges(
    points: &[(DateTime<Utc>, f64)],
    first_time: DateTime<Utc>,
    first_value: f64,
) -> (
    std::ops::Range<DateTime<Utc>>,
    std::ops::Range<f64>,
) {
    let mut t_min = first_time;
    let mut t_max = first_time;
    let mut v_min = first_value;
    let mut v_max = first_value;
    for &(t, v) in points {
        if t < t_min {
            t_min = t;
        }
        if t > t_max {
            t_max = t;
        }
        if v < v_min {
            v_min = v;
        }
        if v > v_max {
            v_max = v;
        }
    }

    if t_min == t_max {
        t_min -= Duration::seconds(1);
        t_max += Duration::seconds(1);
    }

    let span = v_max - v_min;
    let pad = if span == 0.0 { 1.0 } else { span * 0.05 };

    (t_min..t_max, (v_min - pad)..(v_max + pad))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
