//! Box-plot rendering.
//!
//! Draws one vertical box per category, in [`Category::ALL`] order, with
//! the category's palette color, and saves the figure as SVG. The x axis
//! always lists all four categories; a category without days gets an
//! empty slot instead of a box.
//!
//! Box geometry follows the Tukey convention: the box spans the first to
//! third quartile, each whisker ends at the most extreme score within
//! 1.5 IQR of the box, and scores beyond that are drawn as outliers.

use std::fmt;
use std::path::Path;

use plotters::prelude::*;
use tracing::{info, warn};
use volatility_core::config::{ChartConfig, PaletteConfig};
use volatility_core::summary::CategoryStats;
use volatility_types::{Category, DayTable};

use crate::error::ReportError;

/// Lowest and highest value on the score axis, padded around `[0, 5]`.
const SCORE_AXIS: core::ops::Range<f64> = -0.5..5.5;

/// Category slots sit at `0, 1, 2, 3` on this axis.
const CATEGORY_AXIS: core::ops::Range<f64> = -0.5..3.5;

/// Whisker reach as a multiple of the interquartile range.
const WHISKER_REACH: f64 = 1.5;

const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;

/// Dashes per horizontal grid line, and the share of each period inked.
const GRID_DASHES: u32 = 40;
const GRID_INK: f64 = 0.6;

fn chart_error(err: &impl fmt::Display) -> ReportError {
    ReportError::Chart {
        message: err.to_string(),
    }
}

/// Parse a `#RRGGBB` color.
pub fn parse_hex_color(hex: &str) -> Result<RGBColor, ReportError> {
    let invalid = || ReportError::InvalidColor(hex.to_owned());
    let digits = hex
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6)
        .ok_or_else(invalid)?;
    let channel = |from: usize| {
        digits
            .get(from..from.saturating_add(2))
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(invalid)
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Resolve the palette into one color per category, in display order.
pub fn resolve_palette(palette: &PaletteConfig) -> Result<Vec<(Category, RGBColor)>, ReportError> {
    Category::ALL
        .into_iter()
        .map(|category| Ok((category, parse_hex_color(palette.color_for(category))?)))
        .collect()
}

/// What the chart draws for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    /// The category drawn.
    pub category: Category,
    /// Center of the box on the category axis.
    pub position: f64,
    /// Bottom of the box.
    pub q1: f64,
    /// Median line.
    pub median: f64,
    /// Top of the box.
    pub q3: f64,
    /// Lowest score within the lower fence.
    pub whisker_low: f64,
    /// Highest score within the upper fence.
    pub whisker_high: f64,
    /// Scores beyond either fence, ascending.
    pub outliers: Vec<f64>,
}

impl BoxGeometry {
    /// Compute the box for one category's scores; `None` when empty.
    pub fn from_scores(category: Category, position: f64, scores: &[f64]) -> Option<Self> {
        let stats = CategoryStats::from_scores(category, scores);
        let (q1, median, q3) = (stats.q1?, stats.median?, stats.q3?);

        let iqr = q3 - q1;
        let low_fence = iqr.mul_add(-WHISKER_REACH, q1);
        let high_fence = iqr.mul_add(WHISKER_REACH, q3);
        let inside = |v: &f64| (low_fence..=high_fence).contains(v);

        let whisker_low = scores
            .iter()
            .copied()
            .filter(inside)
            .fold(q1, f64::min);
        let whisker_high = scores
            .iter()
            .copied()
            .filter(inside)
            .fold(q3, f64::max);

        let mut outliers: Vec<f64> = scores.iter().copied().filter(|v| !inside(v)).collect();
        outliers.sort_by(f64::total_cmp);

        Some(Self {
            category,
            position,
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// Scores of one category, in table order.
fn category_scores(table: &DayTable, category: Category) -> Vec<f64> {
    table
        .iter()
        .filter(|record| record.category == category)
        .map(|record| f64::from(record.utility_score))
        .collect()
}

/// Compute the box of every non-empty category, in display order.
///
/// Each box keeps its category's slot on the axis, so an empty category
/// leaves a gap rather than shifting the others.
pub fn box_geometry(table: &DayTable) -> Vec<BoxGeometry> {
    Category::ALL
        .into_iter()
        .zip(0_u32..)
        .filter_map(|(category, slot)| {
            let scores = category_scores(table, category);
            let geometry = BoxGeometry::from_scores(category, f64::from(slot), &scores);
            if geometry.is_none() {
                warn!(category = %category, "No days in category, box skipped");
            }
            geometry
        })
        .collect()
}

/// Category label under an integer slot, empty elsewhere.
fn slot_label(position: f64) -> String {
    Category::ALL
        .into_iter()
        .zip(0_u32..)
        .find(|(_, slot)| (f64::from(*slot) - position).abs() < 1e-6)
        .map(|(category, _)| category.as_str().to_owned())
        .unwrap_or_default()
}

/// Dashed horizontal line at `y` across the whole category axis.
fn dashed_line(y: f64) -> Vec<[(f64, f64); 2]> {
    let period = (CATEGORY_AXIS.end - CATEGORY_AXIS.start) / f64::from(GRID_DASHES);
    (0..GRID_DASHES)
        .map(|step| f64::from(step).mul_add(period, CATEGORY_AXIS.start))
        .map(|x| [(x, y), (period.mul_add(GRID_INK, x), y)])
        .collect()
}

/// Render the per-category box plot of utility scores to `path` as SVG.
pub fn render_box_plot(
    table: &DayTable,
    config: &ChartConfig,
    path: &Path,
) -> Result<(), ReportError> {
    let colors = resolve_palette(&config.palette)?;
    let boxes = box_geometry(table);

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_error(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &config.title,
            ("sans-serif", 24).into_font().style(FontStyle::Bold),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(CATEGORY_AXIS, SCORE_AXIS)
        .map_err(|e| chart_error(&e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .x_labels(Category::ALL.len())
        .y_labels(7)
        .x_label_formatter(&|x| slot_label(*x))
        .draw()
        .map_err(|e| chart_error(&e))?;

    let grid_style = BLACK.mix(0.4).stroke_width(1);
    chart
        .draw_series(
            (0_u8..=5)
                .flat_map(|score| dashed_line(f64::from(score)))
                .map(|dash| PathElement::new(dash, grid_style)),
        )
        .map_err(|e| chart_error(&e))?;

    let outline = BLACK.stroke_width(1);
    for geometry in &boxes {
        let fill = colors
            .iter()
            .find(|(category, _)| *category == geometry.category)
            .map_or(WHITE, |(_, color)| *color);
        let x = geometry.position;
        let (left, right) = (x - BOX_HALF_WIDTH, x + BOX_HALF_WIDTH);
        let (cap_left, cap_right) = (x - CAP_HALF_WIDTH, x + CAP_HALF_WIDTH);

        chart
            .draw_series([
                Rectangle::new([(left, geometry.q1), (right, geometry.q3)], fill.filled()),
                Rectangle::new([(left, geometry.q1), (right, geometry.q3)], outline),
            ])
            .map_err(|e| chart_error(&e))?;

        chart
            .draw_series(
                [
                    vec![(x, geometry.q1), (x, geometry.whisker_low)],
                    vec![(x, geometry.q3), (x, geometry.whisker_high)],
                    vec![(cap_left, geometry.whisker_low), (cap_right, geometry.whisker_low)],
                    vec![(cap_left, geometry.whisker_high), (cap_right, geometry.whisker_high)],
                    vec![(left, geometry.median), (right, geometry.median)],
                ]
                .into_iter()
                .map(|points| PathElement::new(points, outline)),
            )
            .map_err(|e| chart_error(&e))?;

        chart
            .draw_series(
                geometry
                    .outliers
                    .iter()
                    .map(|y| Circle::new((x, *y), 4, outline)),
            )
            .map_err(|e| chart_error(&e))?;
    }

    root.present().map_err(|e| chart_error(&e))?;
    info!(path = %path.display(), boxes = boxes.len(), "Box plot rendered");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_colors() {
        assert_eq!(parse_hex_color("#A8D0E6").unwrap().rgb(), (0xA8, 0xD0, 0xE6));
        assert_eq!(parse_hex_color("#24305e").unwrap().rgb(), (0x24, 0x30, 0x5E));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["A8D0E6", "#A8D0E", "#A8D0E6FF", "#GGGGGG", "", "#"] {
            assert!(
                matches!(parse_hex_color(bad), Err(ReportError::InvalidColor(_))),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn default_palette_resolves_in_display_order() {
        let colors = resolve_palette(&PaletteConfig::default()).unwrap();
        let order: Vec<Category> = colors.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(colors.get(1).unwrap().1.rgb(), (0x37, 0x47, 0x85));
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn whiskers_stop_at_the_data() {
        let geometry =
            BoxGeometry::from_scores(Category::Stable, 0.0, &[1.0, 2.0, 3.0, 1.0, 3.0, 2.0])
                .unwrap();
        assert!(close(geometry.whisker_low, 1.0));
        assert!(close(geometry.whisker_high, 3.0));
        assert!(geometry.outliers.is_empty());
    }

    #[test]
    fn scores_past_the_fence_are_outliers() {
        // sorted 0 1 1 1 2 2 4: q1 1, q3 2, fences -0.5 and 3.5
        let geometry =
            BoxGeometry::from_scores(Category::LowPerf, 2.0, &[1.0, 1.0, 1.0, 2.0, 2.0, 0.0, 4.0])
                .unwrap();
        assert!(close(geometry.q1, 1.0));
        assert!(close(geometry.median, 1.0));
        assert!(close(geometry.q3, 2.0));
        assert!(close(geometry.whisker_low, 0.0));
        assert!(close(geometry.whisker_high, 2.0));
        assert_eq!(geometry.outliers.len(), 1);
        assert!(close(geometry.outliers.first().copied().unwrap(), 4.0));
    }

    #[test]
    fn single_score_collapses_to_a_line() {
        let geometry = BoxGeometry::from_scores(Category::Peak, 1.0, &[4.0]).unwrap();
        for value in [
            geometry.q1,
            geometry.median,
            geometry.q3,
            geometry.whisker_low,
            geometry.whisker_high,
        ] {
            assert!(close(value, 4.0));
        }
        assert!(geometry.outliers.is_empty());
    }

    #[test]
    fn empty_scores_have_no_box() {
        assert!(BoxGeometry::from_scores(Category::Crisis, 3.0, &[]).is_none());
    }

    #[test]
    fn slot_labels_follow_display_order() {
        assert_eq!(slot_label(0.0), "Stable");
        assert_eq!(slot_label(2.0), "Low_Perf");
        assert_eq!(slot_label(3.0), "Crisis");
        assert_eq!(slot_label(0.5), "");
    }

    #[test]
    fn grid_dashes_stay_on_the_axis() {
        let dashes = dashed_line(2.0);
        assert_eq!(dashes.len(), 40);
        for [(x0, y0), (x1, y1)] in dashes {
            assert!(CATEGORY_AXIS.start <= x0 && x0 < x1 && x1 <= CATEGORY_AXIS.end);
            assert!(close(y0, 2.0) && close(y1, 2.0));
        }
    }
}
