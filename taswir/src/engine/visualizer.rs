//! Chart datasets selected by chart type.

use crate::core::{ChartData, ChartPoint, ChartType, DataFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slice colors for pie charts.
pub const PALETTE: &[&str] = &["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82ca9d"];

const BAR: &[(&str, u32)] = &[
    ("Jan", 400),
    ("Feb", 300),
    ("Mar", 600),
    ("Apr", 800),
    ("May", 500),
    ("Jun", 900),
];

const LINE: &[(&str, u32)] = &[
    ("Jan", 400),
    ("Feb", 300),
    ("Mar", 600),
    ("Apr", 800),
    ("May", 500),
    ("Jun", 900),
    ("Jul", 1000),
    ("Aug", 1200),
    ("Sep", 900),
];

const PIE: &[(&str, u32)] = &[
    ("Group A", 400),
    ("Group B", 300),
    ("Group C", 300),
    ("Group D", 200),
];

/// Data visualizer form. The pasted data is accepted but not parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizeRequest {
    /// Raw data as pasted.
    #[serde(default)]
    pub data: String,
    /// Chart type.
    #[serde(default)]
    pub chart_type: ChartType,
    /// Declared data format.
    #[serde(default)]
    pub data_format: DataFormat,
}

impl VisualizeRequest {
    /// Creates a request for a chart type.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Self::default()
        }
    }
}

/// The canned dataset for a chart type.
#[must_use]
pub fn dataset(chart_type: ChartType) -> &'static [(&'static str, u32)] {
    match chart_type {
        ChartType::Bar => BAR,
        ChartType::Line => LINE,
        ChartType::Pie => PIE,
    }
}

/// Example input shown in the data field for a format.
#[must_use]
pub fn data_placeholder(format: DataFormat) -> String {
    match format {
        DataFormat::Csv => {
            "name,value\nJan,400\nFeb,300\nMar,600\nApr,800\nMay,500\nJun,900".to_string()
        }
        DataFormat::Json => {
            let sample: Vec<_> = BAR[..3]
                .iter()
                .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
                .collect();
            serde_json::to_string_pretty(&sample).unwrap_or_default()
        }
    }
}

/// Builds the chart for the selected type.
#[must_use]
pub fn visualize(request: &VisualizeRequest) -> ChartData {
    let points = dataset(request.chart_type)
        .iter()
        .map(|(name, value)| ChartPoint {
            name: (*name).to_string(),
            value: *value,
        })
        .collect();

    let palette = if request.chart_type == ChartType::Pie {
        PALETTE.iter().map(|c| (*c).to_string()).collect()
    } else {
        Vec::new()
    };

    debug!(chart_type = %request.chart_type, data_len = request.data.len(), "Chart dataset selected");

    ChartData {
        chart_type: request.chart_type,
        data_format: request.data_format,
        points,
        palette,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(visualize(&VisualizeRequest::new(ChartType::Bar)).points.len(), 6);
        assert_eq!(visualize(&VisualizeRequest::new(ChartType::Line)).points.len(), 9);
        assert_eq!(visualize(&VisualizeRequest::new(ChartType::Pie)).points.len(), 4);
    }

    #[test]
    fn test_data_is_ignored() {
        let mut request = VisualizeRequest::new(ChartType::Line);
        request.data = "name,value\nX,1".to_string();
        let chart = visualize(&request);
        assert_eq!(chart.points[7].name, "Aug");
        assert_eq!(chart.points[7].value, 1200);
    }

    #[test]
    fn test_palette_only_for_pie() {
        assert!(visualize(&VisualizeRequest::new(ChartType::Bar)).palette.is_empty());
        let pie = visualize(&VisualizeRequest::new(ChartType::Pie));
        assert_eq!(pie.palette.len(), 6);
        assert_eq!(pie.total(), 1200);
    }

    #[test]
    fn test_json_placeholder() {
        let text = data_placeholder(DataFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[2]["name"], "Mar");
        assert!(data_placeholder(DataFormat::Csv).starts_with("name,value\n"));
    }

    #[test]
    fn test_request_defaults() {
        let request: VisualizeRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.chart_type, ChartType::Bar);
        assert_eq!(request.data_format, DataFormat::Csv);
    }
}
