//! Line chart rendering.
//!
//! A chart is drawn once into an SVG document and owned by a
//! [`ChartInstance`]. Instances are never mutated; a new price series
//! produces a new instance and the previous one is destroyed.

use std::fmt::Write;

use api::number_format;
use api::vs_currency::VsCurrency;
use dioxus_logger::tracing::debug;
use itertools::Itertools;
use itertools::MinMaxResult;

use crate::view_model::ChartData;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const AXIS_GUTTER: f64 = 72.0;
const PADDING: f64 = 8.0;
const Y_TICKS: usize = 5;

const LINE_COLOR: &str = "lime";
const LINE_WIDTH: f64 = 2.0;
const TICK_COLOR: &str = "#ccc";
const HOVER_RADIUS: f64 = 4.0;

/// A rendered chart. Exactly one is live at a time.
#[derive(Clone, PartialEq, Debug)]
pub struct ChartInstance {
    generation: u64,
    data: ChartData,
    svg: String,
}

impl ChartInstance {
    pub fn new(generation: u64, data: ChartData, currency: VsCurrency) -> Self {
        let svg = render_svg(&data, currency);
        Self {
            generation,
            data,
            svg,
        }
    }

    /// Increases with every instance created by a dashboard; used as the
    /// component key so a replacement remounts the chart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Releases the instance.
    pub fn destroy(self) {
        debug!(
            "destroying chart #{} ({} points)",
            self.generation,
            self.data.len()
        );
    }
}

/// Vertical value range covered by the plot area.
fn value_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = match values.iter().copied().filter(|v| v.is_finite()).minmax() {
        MinMaxResult::NoElements => (0.0, 1.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    if hi > lo {
        (lo, hi)
    } else {
        // flat series: give it some headroom so the line sits mid-plot
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.01 };
        (lo - pad, hi + pad)
    }
}

/// Maps sample `i` of `n` and its value onto plot coordinates.
fn project(i: usize, n: usize, value: f64, (lo, hi): (f64, f64)) -> (f64, f64) {
    let plot_width = WIDTH - AXIS_GUTTER - PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let x = if n > 1 {
        AXIS_GUTTER + plot_width * i as f64 / (n - 1) as f64
    } else {
        AXIS_GUTTER + plot_width / 2.0
    };
    let y = PADDING + plot_height * (hi - value) / (hi - lo);
    (x, y)
}

/// Renders `data` as an SVG line chart: no legend, no x axis, y tick
/// labels in a muted color. Each sample gets a transparent hover target
/// whose tooltip shows its label and price.
pub fn render_svg(data: &ChartData, currency: VsCurrency) -> String {
    let range = value_range(&data.values);
    let n = data.values.len();
    let mut svg = String::new();

    // writing into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" role="img" aria-label="Price in {}">"#,
        currency.ticker()
    );

    let (lo, hi) = range;
    for t in 0..Y_TICKS {
        let value = hi - (hi - lo) * t as f64 / (Y_TICKS - 1) as f64;
        let (_, y) = project(0, 1, value, range);
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" fill="{TICK_COLOR}" font-size="11" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            AXIS_GUTTER - 6.0,
            y,
            number_format::locale(value)
        );
    }

    if n > 0 {
        let points = data
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let (x, y) = project(i, n, *v, range);
                format!("{x:.1},{y:.1}")
            })
            .join(" ");
        let _ = write!(
            svg,
            r#"<polyline fill="none" stroke="{LINE_COLOR}" stroke-width="{LINE_WIDTH}" points="{points}"/>"#
        );

        svg.push_str(r#"<g fill="transparent">"#);
        for (i, (label, value)) in data.labels.iter().zip(&data.values).enumerate() {
            let (x, y) = project(i, n, *value, range);
            let _ = write!(
                svg,
                r#"<circle cx="{x:.1}" cy="{y:.1}" r="{HOVER_RADIUS}"><title>{}: {}</title></circle>"#,
                escape_text(label),
                number_format::locale(*value)
            );
        }
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(values: &[f64]) -> ChartData {
        ChartData {
            labels: values.iter().map(|v| v.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    fn polyline_points(svg: &str) -> Vec<(f64, f64)> {
        let start = svg.find(r#"points=""#).unwrap() + r#"points=""#.len();
        let end = start + svg[start..].find('"').unwrap();
        svg[start..end]
            .split(' ')
            .map(|pair| {
                let (x, y) = pair.split_once(',').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn one_vertex_per_value() {
        let svg = render_svg(&data(&[3.0, 1.0, 2.0, 5.0]), VsCurrency::Usd);
        let points = polyline_points(&svg);
        assert_eq!(points.len(), 4);

        // highest value sits at the top, lowest at the bottom
        assert_eq!(points[3].1, PADDING);
        assert_eq!(points[1].1, HEIGHT - PADDING);
        // x increases left to right across the plot
        assert_eq!(points[0].0, AXIS_GUTTER);
        assert_eq!(points[3].0, WIDTH - PADDING);
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn styled_like_a_sparkline() {
        let svg = render_svg(&data(&[1.0, 2.0]), VsCurrency::Usd);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"stroke="lime""#));
        assert!(svg.contains(r#"stroke-width="2""#));
        assert!(svg.contains(r##"fill="#ccc""##));
        assert!(svg.contains("Price in USD"));
        assert_eq!(svg.matches("<text").count(), Y_TICKS);
    }

    #[test]
    fn empty_series_has_no_line() {
        let svg = render_svg(&ChartData::default(), VsCurrency::Usd);
        assert!(!svg.contains("<polyline"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn every_label_is_shown_on_hover() {
        let data = ChartData {
            labels: vec!["11/14/2023".to_string(), "11/15/2023".to_string()],
            values: vec![36_500.25, 37_100.0],
        };
        let svg = render_svg(&data, VsCurrency::Usd);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("<title>11/14/2023: 36,500.25</title>"));
        assert!(svg.contains("<title>11/15/2023: 37,100</title>"));
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_text("a<b & c>"), "a&lt;b &amp; c&gt;");
    }

    #[test]
    fn flat_series_is_centered() {
        let svg = render_svg(&data(&[100.0, 100.0, 100.0]), VsCurrency::Usd);
        let points = polyline_points(&svg);
        let mid = HEIGHT / 2.0;
        assert!(points.iter().all(|(_, y)| (y - mid).abs() < 0.1));
    }

    #[test]
    fn single_point_is_drawn() {
        let svg = render_svg(&data(&[42.0]), VsCurrency::Usd);
        assert_eq!(polyline_points(&svg).len(), 1);
    }

    #[test]
    fn instance_keeps_its_data() {
        let chart = ChartInstance::new(3, data(&[1.0, 2.0]), VsCurrency::Eur);
        assert_eq!(chart.generation(), 3);
        assert_eq!(chart.data().len(), 2);
        assert!(chart.svg().contains("Price in EUR"));
        chart.destroy();
    }
}
