//! SVG chart rendering: close price, both averages, and trade markers.

use crate::domain::analysis::AnalysisRow;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 400.0;
const PADDING: f64 = 50.0;

struct Scale {
    min_price: f64,
    scale_x: f64,
    scale_y: f64,
}

impl Scale {
    fn fit(rows: &[AnalysisRow]) -> Scale {
        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for row in rows {
            for value in [Some(row.close), row.short_ma, row.long_ma].into_iter().flatten() {
                min_price = min_price.min(value);
                max_price = max_price.max(value);
            }
        }

        let range = max_price - min_price;
        let scale_y = if range > 0.0 {
            (HEIGHT - 2.0 * PADDING) / range
        } else {
            1.0
        };
        let scale_x = if rows.len() > 1 {
            (WIDTH - 2.0 * PADDING) / (rows.len() - 1) as f64
        } else {
            0.0
        };

        Scale {
            min_price,
            scale_x,
            scale_y,
        }
    }

    fn x(&self, index: usize) -> f64 {
        PADDING + index as f64 * self.scale_x
    }

    fn y(&self, price: f64) -> f64 {
        HEIGHT - PADDING - (price - self.min_price) * self.scale_y
    }
}

fn polyline(points: &[(f64, f64)], color: &str) -> String {
    let coords: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect();
    format!(
        r#"  <polyline fill="none" stroke="{}" stroke-width="1.5" points="{}"/>"#,
        color,
        coords.join(" ")
    )
}

fn triangle_up(x: f64, y: f64, color: &str) -> String {
    format!(
        r#"  <polygon fill="{color}" points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}"/>"#,
        x,
        y - 6.0,
        x - 5.0,
        y + 4.0,
        x + 5.0,
        y + 4.0,
    )
}

fn triangle_down(x: f64, y: f64, color: &str) -> String {
    format!(
        r#"  <polygon fill="{color}" points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}"/>"#,
        x,
        y + 6.0,
        x - 5.0,
        y - 4.0,
        x + 5.0,
        y - 4.0,
    )
}

/// Render the annotated series as an overlay chart: close price and both
/// averages as lines, entries as green up-triangles, exits as red
/// down-triangles. Averages only appear once their window is warm.
pub fn render_chart(rows: &[AnalysisRow]) -> String {
    if rows.is_empty() {
        return "No chart data available.".to_string();
    }

    let scale = Scale::fit(rows);

    let close_points: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (scale.x(i), scale.y(row.close)))
        .collect();
    let short_points: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| row.short_ma.map(|v| (scale.x(i), scale.y(v))))
        .collect();
    let long_points: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| row.long_ma.map(|v| (scale.x(i), scale.y(v))))
        .collect();

    let mut elements = Vec::new();
    elements.push(format!(
        r#"  <rect width="{WIDTH:.0}" height="{HEIGHT:.0}" fill="white"/>"#
    ));
    // axes
    elements.push(format!(
        r#"  <line x1="{p:.0}" y1="{p:.0}" x2="{p:.0}" y2="{b:.0}" stroke="black"/>"#,
        p = PADDING,
        b = HEIGHT - PADDING,
    ));
    elements.push(format!(
        r#"  <line x1="{p:.0}" y1="{b:.0}" x2="{r:.0}" y2="{b:.0}" stroke="black"/>"#,
        p = PADDING,
        b = HEIGHT - PADDING,
        r = WIDTH - PADDING,
    ));

    elements.push(polyline(&close_points, "#555555"));
    if !short_points.is_empty() {
        elements.push(polyline(&short_points, "#1f77b4"));
    }
    if !long_points.is_empty() {
        elements.push(polyline(&long_points, "#ff7f0e"));
    }

    for (i, row) in rows.iter().enumerate() {
        if row.is_buy() {
            elements.push(triangle_up(scale.x(i), scale.y(row.close), "green"));
        } else if row.is_sell() {
            elements.push(triangle_down(scale.x(i), scale.y(row.close), "red"));
        }
    }

    // date range label
    elements.push(format!(
        r#"  <text x="{x:.0}" y="{y:.0}" font-size="12" fill="black">{start} to {end}</text>"#,
        x = PADDING,
        y = HEIGHT - PADDING / 2.0,
        start = rows[0].date,
        end = rows[rows.len() - 1].date,
    ));

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH:.0}\" height=\"{HEIGHT:.0}\" viewBox=\"0 0 {WIDTH:.0} {HEIGHT:.0}\">\n{}\n</svg>\n",
        elements.join("\n")
    )
}
