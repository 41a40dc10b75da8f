// src/plot_framework.rs

use ndarray::Array2;
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, LabelAreaPosition, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, EmptyElement, PathElement, Polygon, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::f64::consts::PI;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLORBAR_STEPS, COLORBAR_WIDTH_PX, DASH_SEGMENTS, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND,
    MARKER_SIZE, SCATTER_POINT_SIZE,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// X extent of the data, widened by half a unit when all points share one x.
pub fn calculate_x_range(min_val: f64, max_val: f64) -> (f64, f64) {
    if (max_val - min_val).abs() < 1e-9 {
        (min_val - 0.5, max_val + 0.5)
    } else {
        (min_val.min(max_val), max_val.max(min_val))
    }
}

/// Min/max of x and y over all points, or `None` when there are no finite points.
pub fn series_bounds<'a, I>(points: I) -> Option<((f64, f64), (f64, f64))>
where
    I: IntoIterator<Item = &'a (f64, f64)>,
{
    let mut bounds: Option<((f64, f64), (f64, f64))> = None;
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => ((x, x), (y, y)),
            Some(((x_min, x_max), (y_min, y_max))) => {
                ((x_min.min(x), x_max.max(x)), (y_min.min(y), y_max.max(y)))
            }
        });
    }
    bounds
}

fn trim_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats `value` with `significant` significant digits in the style of C's `%g`:
/// scientific notation for very small or large exponents, trailing zeros removed.
///
/// `format_general(0.01, 4)` is `"0.01"`, `format_general(1e-5, 4)` is `"1e-05"`.
pub fn format_general(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let precision = significant.max(1);

    // Round first so the exponent reflects carries such as 9.99995 -> 1.000e1.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Y tick label: k/M notation for large values, one decimal for small fractional values.
pub fn format_y_tick(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// File-system friendly version of a metric name, e.g. `Accuracy (%)` -> `Accuracy_pct`.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '%' => stem.push_str("pct"),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '.' => stem.push(c),
            _ => {
                if !stem.ends_with('_') {
                    stem.push('_');
                }
            }
        }
    }
    let trimmed = stem.trim_matches('_');
    if trimmed.is_empty() {
        "metric".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{plot_type} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    for (i, line) in lines.iter().enumerate() {
        let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
        area.draw(&Text::new(
            line.to_string(),
            (center_x, center_y + i as i32 * estimated_line_height),
            text_style,
        ))?;
    }
    Ok(())
}

/// Marker glyphs cycled across rank chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    TriangleUp,
    Diamond,
    TriangleDown,
    Star,
    Plus,
    Cross,
    Hexagon,
    Octagon,
}

pub const MARKER_CYCLE: [MarkerShape; 10] = [
    MarkerShape::Circle,
    MarkerShape::Square,
    MarkerShape::TriangleUp,
    MarkerShape::Diamond,
    MarkerShape::TriangleDown,
    MarkerShape::Star,
    MarkerShape::Plus,
    MarkerShape::Cross,
    MarkerShape::Hexagon,
    MarkerShape::Octagon,
];

fn regular_polygon(sides: usize, radius: f64, rotation: f64, center: (i32, i32)) -> Vec<(i32, i32)> {
    (0..sides)
        .map(|i| {
            let angle = rotation + 2.0 * PI * i as f64 / sides as f64;
            (
                center.0 + (radius * angle.cos()).round() as i32,
                center.1 - (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

impl MarkerShape {
    pub fn for_index(index: usize) -> Self {
        MARKER_CYCLE[index % MARKER_CYCLE.len()]
    }

    /// Outline of the glyph in pixel offsets around `center`.
    pub fn vertices(self, size: i32, center: (i32, i32)) -> Vec<(i32, i32)> {
        let r = size as f64;
        let (cx, cy) = center;
        match self {
            MarkerShape::Circle => regular_polygon(16, r, 0.0, center),
            MarkerShape::Square => vec![
                (cx - size, cy - size),
                (cx + size, cy - size),
                (cx + size, cy + size),
                (cx - size, cy + size),
            ],
            MarkerShape::TriangleUp => regular_polygon(3, r * 1.2, PI / 2.0, center),
            MarkerShape::TriangleDown => regular_polygon(3, r * 1.2, -PI / 2.0, center),
            MarkerShape::Diamond => regular_polygon(4, r * 1.2, PI / 2.0, center),
            MarkerShape::Hexagon => regular_polygon(6, r, PI / 2.0, center),
            MarkerShape::Octagon => regular_polygon(8, r, PI / 8.0, center),
            MarkerShape::Star => (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { r * 1.3 } else { r * 0.55 };
                    let angle = PI / 2.0 + PI * i as f64 / 5.0;
                    (
                        cx + (radius * angle.cos()).round() as i32,
                        cy - (radius * angle.sin()).round() as i32,
                    )
                })
                .collect(),
            MarkerShape::Plus | MarkerShape::Cross => {
                let w = (size / 3).max(1) as f64;
                let outline = [
                    (-w, -r),
                    (w, -r),
                    (w, -w),
                    (r, -w),
                    (r, w),
                    (w, w),
                    (w, r),
                    (-w, r),
                    (-w, w),
                    (-r, w),
                    (-r, -w),
                    (-w, -w),
                ];
                let rotation: f64 = if self == MarkerShape::Cross { PI / 4.0 } else { 0.0 };
                let (sin, cos) = rotation.sin_cos();
                outline
                    .iter()
                    .map(|&(x, y)| {
                        (
                            cx + (x * cos - y * sin).round() as i32,
                            cy + (x * sin + y * cos).round() as i32,
                        )
                    })
                    .collect()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub marker: Option<MarkerShape>,
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    /// Draw larger y values lower on the chart.
    pub invert_y: bool,
}

/// Draws a single line chart with grid, axis labels and legend.
fn draw_line_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    // Inverted charts plot -y so the axis runs top-down; tick labels undo the sign.
    let y_sign = if plot_config.invert_y { -1.0 } else { 1.0 };
    let y_range = if plot_config.invert_y {
        -plot_config.y_range.end..-plot_config.y_range.start
    } else {
        plot_config.y_range.clone()
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), y_range)?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_tick(*y * y_sign))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let points: Vec<(f64, f64)> = s.data.iter().map(|&(x, y)| (x, y * y_sign)).collect();

        let line = chart.draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(s.stroke_width),
        ))?;

        match (s.marker, s.label.is_empty()) {
            (Some(shape), false) => {
                line.label(&s.label).legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(
                            vec![(0, 0), (20, 0)],
                            color.stroke_width(LINE_WIDTH_LEGEND),
                        )
                        + Polygon::new(shape.vertices(MARKER_SIZE, (10, 0)), color.filled())
                });
                legend_series_count += 1;
            }
            (None, false) => {
                line.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
                legend_series_count += 1;
            }
            (_, true) => {}
        }

        if let Some(shape) = s.marker {
            chart.draw_series(points.iter().map(|&p| {
                EmptyElement::at(p) + Polygon::new(shape.vertices(MARKER_SIZE, (0, 0)), color.filled())
            }))?;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Renders one line chart into a PNG, or a placeholder message when there is nothing to draw.
pub fn draw_line_chart(
    output_path: &Path,
    size: (u32, u32),
    plot_config: &PlotConfig,
) -> Result<bool, Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;

    let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;

    let drawn = if has_data && valid_ranges {
        draw_line_chart_with_config(&root_area, plot_config)?;
        true
    } else {
        let reason = if !has_data {
            "No data points"
        } else {
            "Invalid ranges"
        };
        draw_unavailable_message(&root_area, &plot_config.title, reason)?;
        false
    };

    root_area.present()?;
    Ok(drawn)
}

#[derive(Clone)]
pub struct ScatterLayer {
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
}

/// Dashed horizontal reference line.
#[derive(Clone)]
pub struct ReferenceLine {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub color: RGBColor,
    pub label: String,
}

#[derive(Clone)]
pub struct ScatterPanel {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub layers: Vec<ScatterLayer>,
    pub reference_lines: Vec<ReferenceLine>,
    pub x_label: String,
    pub y_label: String,
}

fn draw_scatter_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &ScatterPanel,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(panel.x_range.clone(), panel.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for layer in &panel.layers {
        let color = layer.color;
        chart.draw_series(
            layer
                .points
                .iter()
                .map(|&p| Circle::new(p, SCATTER_POINT_SIZE, color.filled())),
        )?;
    }

    let mut legend_count = 0;
    for line in &panel.reference_lines {
        let color = line.color;
        // Dashes: alternate drawn and skipped segments.
        let segment = (line.x_end - line.x_start) / (DASH_SEGMENTS as f64 * 2.0);
        let dashes: Vec<Vec<(f64, f64)>> = (0..DASH_SEGMENTS)
            .map(|i| {
                let start = line.x_start + (i as f64 * 2.0) * segment;
                vec![(start, line.y), (start + segment, line.y)]
            })
            .collect();
        let drawn = chart.draw_series(
            dashes
                .into_iter()
                .map(|d| PathElement::new(d, color.stroke_width(LINE_WIDTH_LEGEND))),
        )?;
        if !line.label.is_empty() {
            drawn.label(&line.label).legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(0, 0), (7, 0)], color.stroke_width(LINE_WIDTH_LEGEND))
                    + PathElement::new(vec![(13, 0), (20, 0)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_count += 1;
        }
    }

    if legend_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

/// Creates a stacked image with one scatter panel per row.
pub fn draw_stacked_scatter_plot(
    output_path: &Path,
    size: (u32, u32),
    main_title: &str,
    panels: &[ScatterPanel],
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        main_title,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((panels.len().max(1), 1));

    for (area, panel) in sub_plot_areas.iter().zip(panels) {
        let has_data = panel.layers.iter().any(|l| !l.points.is_empty());
        let valid_ranges =
            panel.x_range.end > panel.x_range.start && panel.y_range.end > panel.y_range.start;
        if has_data && valid_ranges {
            draw_scatter_panel(area, panel)?;
        } else {
            let reason = if !has_data {
                "No spikes"
            } else {
                "Invalid ranges"
            };
            draw_unavailable_message(area, &panel.title, reason)?;
        }
    }

    root_area.present()?;
    Ok(())
}

/// Maps a value onto the viridis colormap over `[min_value, max_value]`.
pub fn map_value_to_color(value: f64, min_value: f64, max_value: f64) -> RGBColor {
    // Infinite values saturate at the ends of the scale.
    if value.is_nan() || !min_value.is_finite() || !max_value.is_finite() {
        return RGBColor(0, 0, 0); // Black for invalid values
    }

    // Ensure span is non-zero to avoid division by zero
    let span = (max_value - min_value).abs().max(1e-9);
    let t = ((value.clamp(min_value.min(max_value), max_value.max(min_value)) - min_value) / span)
        .clamp(0.0, 1.0);

    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Color scale bounds safe to hand to a chart builder.
/// Non-finite bounds fall back to `[0, 1]`; a flat range is widened by half a unit.
pub fn color_scale_bounds(min_value: f64, max_value: f64) -> (f64, f64) {
    if !min_value.is_finite() || !max_value.is_finite() {
        return (0.0, 1.0);
    }
    if max_value > min_value {
        (min_value, max_value)
    } else {
        (min_value - 0.5, min_value + 0.5)
    }
}

pub struct MatrixHeatmapConfig<'m> {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub values: &'m Array2<f64>,
    pub min_value: f64,
    pub max_value: f64,
}

/// Draws a matrix as an image (row 0 at the top, one cell per entry) beside a color bar.
pub fn draw_matrix_heatmap(
    output_path: &Path,
    size: (u32, u32),
    config: &MatrixHeatmapConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;

    let (n_rows, n_cols) = config.values.dim();
    if n_rows == 0 || n_cols == 0 {
        draw_unavailable_message(&root_area, &config.title, "Empty matrix")?;
        root_area.present()?;
        return Ok(());
    }

    let (low, high) = color_scale_bounds(config.min_value, config.max_value);
    let (matrix_area, colorbar_area) =
        root_area.split_horizontally(size.0.saturating_sub(COLORBAR_WIDTH_PX) as i32);

    // Cell (r, c) is centred on (c, n_rows - 1 - r).
    let top_row = (n_rows - 1) as f64;
    let mut chart = ChartBuilder::on(&matrix_area)
        .caption(&config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(n_cols as f64 - 0.5), -0.5..(n_rows as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", top_row - y))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    chart.draw_series(config.values.indexed_iter().map(|((r, c), &value)| {
        let x = c as f64;
        let y = top_row - r as f64;
        Rectangle::new(
            [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
            map_value_to_color(value, low, high).filled(),
        )
    }))?;

    let step = (high - low) / COLORBAR_STEPS as f64;
    let mut colorbar = ChartBuilder::on(&colorbar_area)
        .margin_top(45)
        .margin_bottom(60)
        .margin_right(10)
        .set_label_area_size(LabelAreaPosition::Right, 70)
        .build_cartesian_2d(0.0..1.0, low..high)?;

    colorbar
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_label_formatter(&|v| format_general(*v, 3))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    colorbar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let y0 = low + i as f64 * step;
        Rectangle::new(
            [(0.0, y0), (1.0, y0 + step)],
            map_value_to_color(y0 + step * 0.5, low, high).filled(),
        )
    }))?;

    root_area.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads() {
        assert_eq!(calculate_range(5.0, 5.0), (4.5, 5.5));
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!((lo + 1.5).abs() < 1e-12 && (hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_series_bounds_skips_non_finite() {
        let points = [(1.0, 2.0), (f64::NAN, 100.0), (3.0, -1.0)];
        assert_eq!(series_bounds(&points), Some(((1.0, 3.0), (-1.0, 2.0))));
        assert_eq!(series_bounds(&Vec::<(f64, f64)>::new()), None);
    }

    #[test]
    fn test_format_general_matches_percent_g() {
        assert_eq!(format_general(0.01, 4), "0.01");
        assert_eq!(format_general(0.1, 4), "0.1");
        assert_eq!(format_general(1.0, 4), "1");
        assert_eq!(format_general(0.000125, 4), "0.000125");
        assert_eq!(format_general(0.00001, 4), "1e-05");
        assert_eq!(format_general(123456.0, 4), "1.235e+05");
        assert_eq!(format_general(0.123456, 4), "0.1235");
        assert_eq!(format_general(9.99995, 4), "10");
        assert_eq!(format_general(-2.5, 4), "-2.5");
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("Accuracy (%)"), "Accuracy_pct");
        assert_eq!(sanitize_file_stem("Hidden layer 1 spike counts"), "Hidden_layer_1_spike_counts");
        assert_eq!(sanitize_file_stem("///"), "metric");
    }

    #[test]
    fn test_marker_cycle_wraps() {
        assert_eq!(MarkerShape::for_index(0), MarkerShape::Circle);
        assert_eq!(MarkerShape::for_index(10), MarkerShape::Circle);
        assert_eq!(MarkerShape::for_index(13), MarkerShape::Diamond);
        for shape in MARKER_CYCLE {
            assert!(shape.vertices(MARKER_SIZE, (0, 0)).len() >= 3);
        }
    }

    #[test]
    fn test_map_value_to_color_endpoints() {
        let low = map_value_to_color(0.0, 0.0, 1.0);
        let high = map_value_to_color(1.0, 0.0, 1.0);
        let viridis_low = colorous::VIRIDIS.eval_continuous(0.0);
        let viridis_high = colorous::VIRIDIS.eval_continuous(1.0);
        assert_eq!((low.0, low.1, low.2), (viridis_low.r, viridis_low.g, viridis_low.b));
        assert_eq!((high.0, high.1, high.2), (viridis_high.r, viridis_high.g, viridis_high.b));
        let nan = map_value_to_color(f64::NAN, 0.0, 1.0);
        assert_eq!((nan.0, nan.1, nan.2), (0, 0, 0));
        let inf = map_value_to_color(f64::INFINITY, 0.0, 1.0);
        assert_eq!((inf.0, inf.1, inf.2), (high.0, high.1, high.2));
    }

    #[test]
    fn test_color_scale_bounds_never_non_finite() {
        assert_eq!(color_scale_bounds(-1.0, 2.0), (-1.0, 2.0));
        assert_eq!(color_scale_bounds(3.0, 3.0), (2.5, 3.5));
        assert_eq!(color_scale_bounds(f64::NAN, f64::NAN), (0.0, 1.0));
        assert_eq!(color_scale_bounds(0.0, f64::INFINITY), (0.0, 1.0));
        assert_eq!(color_scale_bounds(f64::NEG_INFINITY, 1.0), (0.0, 1.0));
    }
}

// src/plot_framework.rs
