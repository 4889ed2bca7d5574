//! Pie/donut slice geometry on a fixed 200x200 viewBox.
//!
//! Slices are laid out consecutively from angle 0; each start angle is the
//! running sum of all prior slice angles, so slice order is stable and
//! follows input order.

use adm_model::ChartDatum;

use crate::sanitized;

/// Center of the pie in viewBox coordinates.
pub const PIE_CENTER: f64 = 100.0;
/// Slice radius.
pub const PIE_RADIUS: f64 = 80.0;

/// One pie slice with its resolved arc path.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    /// Resolved CSS color (explicit datum color or index-derived).
    pub color: String,
    /// Start angle in degrees; the running sum of prior slice angles.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
    /// SVG path: move to center, line to rim, arc to end, close.
    pub path: String,
}

/// Computed pie layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    /// Sum of sanitized values; shown in the chart center.
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

/// Lay out pie slices. `None` when the sequence is empty or the sanitized
/// total is not positive.
pub fn pie_layout(data: &[ChartDatum]) -> Option<PieLayout> {
    if data.is_empty() {
        return None;
    }
    let total: f64 = data.iter().map(|d| sanitized(d.value)).sum();
    if total <= 0.0 {
        return None;
    }

    let mut start_angle = 0.0;
    let slices = data
        .iter()
        .enumerate()
        .map(|(index, datum)| {
            let angle = sanitized(datum.value) / total * 360.0;
            let end_angle = start_angle + angle;
            let slice = PieSlice {
                label: datum.label.clone(),
                color: slice_color(index, datum),
                start_angle,
                end_angle,
                path: arc_path(start_angle, end_angle),
            };
            start_angle = end_angle;
            slice
        })
        .collect();

    Some(PieLayout { total, slices })
}

/// Resolved color for a datum: its explicit color, or a deterministic one
/// derived from its index.
pub fn slice_color(index: usize, datum: &ChartDatum) -> String {
    datum
        .color
        .clone()
        .unwrap_or_else(|| default_slice_color(index))
}

/// Deterministic per-index fallback color.
pub fn default_slice_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", index * 60)
}

fn rim_point(angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (
        PIE_CENTER + PIE_RADIUS * rad.cos(),
        PIE_CENTER + PIE_RADIUS * rad.sin(),
    )
}

fn arc_path(start_deg: f64, end_deg: f64) -> String {
    let (x1, y1) = rim_point(start_deg);
    let (x2, y2) = rim_point(end_deg);
    // SVG needs the large-arc flag once a slice passes the half circle.
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    format!(
        "M {PIE_CENTER} {PIE_CENTER} L {x1} {y1} A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {x2} {y2} Z"
    )
}
