//! Bar chart layout: equal-width columns scaled against the maximum value.

use adm_model::{format_value_compact, ChartDatum};

use crate::{max_sanitized, sanitized};

/// Default fill for columns without an explicit color.
pub const DEFAULT_BAR_COLOR: &str = "#3b82f6";

/// Minimum rendered bar height in pixels so zero/near-zero values stay
/// visible.
pub const MIN_BAR_HEIGHT_PX: u32 = 4;

/// Axis labels rotate once the series grows past this many columns.
pub const ROTATE_LABELS_ABOVE: usize = 10;

/// One positioned bar column.
#[derive(Debug, Clone, PartialEq)]
pub struct BarColumn {
    pub label: String,
    /// Display label for the raw value (k-abbreviated at >= 1000).
    pub value_label: String,
    /// Column height as a percentage of the chart area, in `0..=100`.
    pub height_pct: f64,
    /// Resolved CSS color.
    pub color: String,
}

/// Computed bar chart layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub columns: Vec<BarColumn>,
    /// Whether axis labels should rotate to avoid overlap.
    pub rotate_labels: bool,
}

/// Lay out bar columns. `None` when the sequence is empty or carries no
/// positive value.
pub fn bar_layout(data: &[ChartDatum]) -> Option<BarLayout> {
    if data.is_empty() {
        return None;
    }
    let max = max_sanitized(data);
    if max <= 0.0 {
        return None;
    }

    let columns = data
        .iter()
        .map(|datum| BarColumn {
            label: datum.label.clone(),
            value_label: format_value_compact(datum.value),
            height_pct: (sanitized(datum.value) / max * 100.0).max(0.0),
            color: datum
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_BAR_COLOR.to_string()),
        })
        .collect();

    Some(BarLayout {
        columns,
        rotate_labels: data.len() > ROTATE_LABELS_ABOVE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_has_no_layout() {
        assert!(bar_layout(&[]).is_none());
    }

    #[test]
    fn non_positive_data_has_no_layout() {
        let data = vec![ChartDatum::new("a", 0.0), ChartDatum::new("b", -4.0)];
        assert!(bar_layout(&data).is_none());
        let data = vec![ChartDatum::new("a", f64::NAN)];
        assert!(bar_layout(&data).is_none());
    }

    #[test]
    fn heights_are_proportional_to_max() {
        let data = vec![
            ChartDatum::new("Mon", 1500.0),
            ChartDatum::new("Tue", 500.0),
        ];
        let layout = bar_layout(&data).unwrap();
        assert_eq!(layout.columns[0].height_pct, 100.0);
        assert!((layout.columns[1].height_pct - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(layout.columns[0].value_label, "1.5k");
        assert_eq!(layout.columns[1].value_label, "500");
    }

    #[test]
    fn heights_are_monotonic_in_value() {
        let data: Vec<ChartDatum> = [3.0, 17.0, 17.0, 42.0, 0.5]
            .iter()
            .enumerate()
            .map(|(i, v)| ChartDatum::new(format!("d{i}"), *v))
            .collect();
        let layout = bar_layout(&data).unwrap();
        for a in 0..data.len() {
            for b in 0..data.len() {
                if data[a].value >= data[b].value {
                    assert!(layout.columns[a].height_pct >= layout.columns[b].height_pct);
                }
            }
        }
    }

    #[test]
    fn non_finite_values_collapse_to_zero_height_but_keep_raw_label() {
        let data = vec![
            ChartDatum::new("good", 10.0),
            ChartDatum::new("bad", f64::NAN),
        ];
        let layout = bar_layout(&data).unwrap();
        assert_eq!(layout.columns[1].height_pct, 0.0);
        assert_eq!(layout.columns[1].value_label, "NaN");
    }

    #[test]
    fn negative_values_clamp_to_zero_height() {
        let data = vec![ChartDatum::new("up", 8.0), ChartDatum::new("down", -2.0)];
        let layout = bar_layout(&data).unwrap();
        assert_eq!(layout.columns[1].height_pct, 0.0);
    }

    #[test]
    fn labels_rotate_past_ten_columns() {
        let small: Vec<ChartDatum> = (0..10)
            .map(|i| ChartDatum::new(format!("d{i}"), 1.0 + i as f64))
            .collect();
        assert!(!bar_layout(&small).unwrap().rotate_labels);

        let large: Vec<ChartDatum> = (0..11)
            .map(|i| ChartDatum::new(format!("d{i}"), 1.0 + i as f64))
            .collect();
        assert!(bar_layout(&large).unwrap().rotate_labels);
    }

    #[test]
    fn explicit_colors_win_over_default() {
        let data = vec![
            ChartDatum::with_color("a", 1.0, "#00ff00"),
            ChartDatum::new("b", 2.0),
        ];
        let layout = bar_layout(&data).unwrap();
        assert_eq!(layout.columns[0].color, "#00ff00");
        assert_eq!(layout.columns[1].color, DEFAULT_BAR_COLOR);
    }
}
