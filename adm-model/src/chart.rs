//! Chart input types and defensive normalization.
//!
//! Chart data often arrives from the backend as loosely-shaped JSON.
//! `parse_chart_data` folds anything that is not a well-formed array of
//! labeled values into something the chart widget can always render:
//! non-arrays become empty, junk entries are dropped, and bad numeric
//! values survive as NaN so the displayed label still reflects them while
//! layout treats them as zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One labeled numeric value to be charted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    /// Display label shown under bars and in pie legends.
    pub label: String,
    /// Raw value. May be non-finite after defensive parsing; layout code
    /// treats non-finite values as zero.
    pub value: f64,
    /// Optional explicit CSS color for this datum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: Some(color.into()),
        }
    }
}

/// The four chart rendering branches. Pie and donut share rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Donut,
}

impl ChartKind {
    /// Parse a kind string leniently. Unknown values fall back to the bar
    /// rendering rather than failing.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "bar" => Self::Bar,
            "line" => Self::Line,
            "pie" => Self::Pie,
            "donut" => Self::Donut,
            _ => Self::Bar,
        }
    }

    /// True for the two kinds that share the radial rendering and legend.
    pub fn is_radial(self) -> bool {
        matches!(self, Self::Pie | Self::Donut)
    }
}

/// Normalize an untrusted JSON value into chart data.
///
/// Anything that is not an array yields an empty sequence. Entries that are
/// not objects, or that carry no string label, are dropped. A missing or
/// non-numeric `value` becomes NaN so the datum still occupies a slot.
pub fn parse_chart_data(raw: &Value) -> Vec<ChartDatum> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let label = obj.get("label")?.as_str()?;
            if label.is_empty() {
                return None;
            }
            let value = obj.get("value").and_then(Value::as_f64).unwrap_or(f64::NAN);
            let color = obj.get("color").and_then(Value::as_str).map(String::from);
            Some(ChartDatum {
                label: label.to_string(),
                value,
                color,
            })
        })
        .collect()
}

/// Format a value for display without abbreviation: whole numbers lose the
/// trailing `.0`, everything else prints as-is.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Format a value for tight spots (bar column labels): values at or above
/// 1000 are abbreviated with a `k` suffix at one decimal.
pub fn format_value_compact(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_rejects_non_arrays() {
        assert!(parse_chart_data(&Value::Null).is_empty());
        assert!(parse_chart_data(&json!({"label": "Mon", "value": 1})).is_empty());
        assert!(parse_chart_data(&json!("not data")).is_empty());
    }

    #[test]
    fn parse_drops_junk_entries() {
        let raw = json!([
            {"label": "Mon", "value": 120},
            null,
            42,
            {"value": 7},
            {"label": "", "value": 3},
            {"label": "Tue", "value": 80},
        ]);
        let data = parse_chart_data(&raw);
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].label, "Mon");
        assert_eq!(data[1].label, "Tue");
    }

    #[test]
    fn parse_keeps_entries_with_bad_values_as_nan() {
        let raw = json!([{"label": "Mon", "value": "oops"}, {"label": "Tue"}]);
        let data = parse_chart_data(&raw);
        assert_eq!(data.len(), 2);
        assert!(data[0].value.is_nan());
        assert!(data[1].value.is_nan());
    }

    #[test]
    fn parse_reads_explicit_colors() {
        let raw = json!([{"label": "Mon", "value": 5, "color": "#ff0000"}]);
        let data = parse_chart_data(&raw);
        assert_eq!(data[0].color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn kind_parse_falls_back_to_bar() {
        assert_eq!(ChartKind::parse("bar"), ChartKind::Bar);
        assert_eq!(ChartKind::parse("line"), ChartKind::Line);
        assert_eq!(ChartKind::parse("pie"), ChartKind::Pie);
        assert_eq!(ChartKind::parse("donut"), ChartKind::Donut);
        assert_eq!(ChartKind::parse("sparkline"), ChartKind::Bar);
        assert_eq!(ChartKind::parse(""), ChartKind::Bar);
    }

    #[test]
    fn radial_kinds_share_legend() {
        assert!(ChartKind::Pie.is_radial());
        assert!(ChartKind::Donut.is_radial());
        assert!(!ChartKind::Bar.is_radial());
        assert!(!ChartKind::Line.is_radial());
    }

    #[test]
    fn compact_formatting_abbreviates_thousands() {
        assert_eq!(format_value_compact(1500.0), "1.5k");
        assert_eq!(format_value_compact(1000.0), "1.0k");
        assert_eq!(format_value_compact(999.0), "999");
        assert_eq!(format_value_compact(500.0), "500");
        assert_eq!(format_value_compact(12.5), "12.5");
    }

    #[test]
    fn plain_formatting_keeps_whole_numbers_clean() {
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(1500.0), "1500");
        assert_eq!(format_value(0.25), "0.25");
    }
}
