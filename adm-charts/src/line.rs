//! Line chart layout on a fixed 300x200 viewBox.
//!
//! Points space evenly across a 280-unit plot width; y is inverted so
//! larger values plot higher. The filled area under the path only exists
//! with two or more points -- a one-point area is degenerate.

use adm_model::ChartDatum;

use crate::{max_sanitized, sanitized};

/// ViewBox width of the line chart coordinate system.
pub const VIEW_WIDTH: f64 = 300.0;
/// ViewBox height of the line chart coordinate system.
pub const VIEW_HEIGHT: f64 = 200.0;
/// Horizontal span actually used by data points.
pub const PLOT_WIDTH: f64 = 280.0;
/// Left inset of the first data point.
pub const PLOT_LEFT: f64 = 10.0;
/// Vertical span actually used by data points.
pub const PLOT_HEIGHT: f64 = 180.0;

/// Fixed horizontal grid rows, as viewBox y coordinates (0/25/50/75/100%
/// of the height). Drawn regardless of data.
pub const GRID_ROWS: [f64; 5] = [0.0, 50.0, 100.0, 150.0, 200.0];

/// Stroke and point color for the data line.
pub const LINE_COLOR: &str = "#3b82f6";

/// One positioned data point in viewBox coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Computed line chart layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub points: Vec<LinePoint>,
    /// SVG path for the continuous data line (`M .. L ..`).
    pub line_path: String,
    /// SVG path for the filled area under the line, closed back to the
    /// baseline. `None` with fewer than two points.
    pub area_path: Option<String>,
}

/// Lay out line chart points. `None` when the sequence is empty or carries
/// no positive value.
pub fn line_layout(data: &[ChartDatum]) -> Option<LineLayout> {
    if data.is_empty() {
        return None;
    }
    let max = max_sanitized(data);
    if max <= 0.0 {
        return None;
    }

    let points: Vec<LinePoint> = data
        .iter()
        .enumerate()
        .map(|(index, datum)| {
            let x = if data.len() == 1 {
                VIEW_WIDTH / 2.0
            } else {
                index as f64 / (data.len() - 1) as f64 * PLOT_WIDTH + PLOT_LEFT
            };
            let y = VIEW_HEIGHT - sanitized(datum.value) / max * PLOT_HEIGHT;
            LinePoint { x, y }
        })
        .collect();

    let line_path = points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let op = if index == 0 { 'M' } else { 'L' };
            format!("{op} {} {}", p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let area_path = (points.len() >= 2).then(|| {
        format!(
            "{line_path} L {} {VIEW_HEIGHT} L {PLOT_LEFT} {VIEW_HEIGHT} Z",
            PLOT_LEFT + PLOT_WIDTH
        )
    });

    Some(LineLayout {
        points,
        line_path,
        area_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_non_positive_data_has_no_layout() {
        assert!(line_layout(&[]).is_none());
        let flat = vec![ChartDatum::new("a", 0.0), ChartDatum::new("b", 0.0)];
        assert!(line_layout(&flat).is_none());
    }

    #[test]
    fn single_point_is_centered_with_no_area() {
        let data = vec![ChartDatum::new("only", 10.0)];
        let layout = line_layout(&data).unwrap();
        assert_eq!(layout.points.len(), 1);
        assert_eq!(layout.points[0].x, 150.0);
        // The single point holds the max, so it sits at the top of the plot.
        assert_eq!(layout.points[0].y, VIEW_HEIGHT - PLOT_HEIGHT);
        assert!(layout.area_path.is_none());
        assert_eq!(layout.line_path, "M 150 20");
    }

    #[test]
    fn points_space_evenly_and_y_inverts() {
        let data = vec![
            ChartDatum::new("a", 0.0),
            ChartDatum::new("b", 50.0),
            ChartDatum::new("c", 100.0),
        ];
        let layout = line_layout(&data).unwrap();
        assert_eq!(layout.points[0].x, PLOT_LEFT);
        assert_eq!(layout.points[1].x, PLOT_LEFT + PLOT_WIDTH / 2.0);
        assert_eq!(layout.points[2].x, PLOT_LEFT + PLOT_WIDTH);
        // Larger values plot higher (smaller y).
        assert_eq!(layout.points[0].y, VIEW_HEIGHT);
        assert_eq!(layout.points[1].y, VIEW_HEIGHT - PLOT_HEIGHT / 2.0);
        assert_eq!(layout.points[2].y, VIEW_HEIGHT - PLOT_HEIGHT);
        assert!(layout.points[2].y < layout.points[1].y);
    }

    #[test]
    fn area_closes_back_to_the_baseline() {
        let data = vec![ChartDatum::new("a", 1.0), ChartDatum::new("b", 2.0)];
        let layout = line_layout(&data).unwrap();
        let area = layout.area_path.unwrap();
        assert!(area.starts_with(&layout.line_path));
        assert!(area.ends_with("L 290 200 L 10 200 Z"));
    }

    #[test]
    fn non_finite_values_sit_on_the_baseline() {
        let data = vec![
            ChartDatum::new("a", 90.0),
            ChartDatum::new("b", f64::INFINITY),
        ];
        let layout = line_layout(&data).unwrap();
        assert_eq!(layout.points[1].y, VIEW_HEIGHT);
    }

    #[test]
    fn grid_rows_are_fixed() {
        assert_eq!(GRID_ROWS, [0.0, 50.0, 100.0, 150.0, 200.0]);
    }
}
