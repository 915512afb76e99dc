use crate::options::SelectOption;
use crate::time_grain;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// Aggregations offered when the metric definition doesn't list its own.
pub const DEFAULT_AGGREGATION_TYPES: [&str; 6] =
    ["None", "Average", "Minimum", "Maximum", "Total", "Count"];

#[derive(Error, Debug)]
pub enum Error {
    #[error("error unmarshaling metric metadata response")]
    Unmarshal(#[from] serde_json::Error),
}

// Wire shape of the metric definitions body. Unlike the list responses,
// the record array sits directly under `value`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricMetadataResponse {
    #[serde(default)]
    pub value: Vec<MetricMetadataEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMetadataEntry {
    pub name: LocalizedValue,
    #[serde(default)]
    pub primary_aggregation_type: String,
    pub supported_aggregation_types: Option<Vec<String>>,
    pub metric_availabilities: Option<Vec<MetricAvailability>>,
    pub dimensions: Option<Vec<LocalizedValue>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedValue {
    pub value: String,
    pub localized_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAvailability {
    pub time_grain: Option<String>,
    pub retention: Option<String>,
}

impl MetricMetadataResponse {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

// Aggregation, time-grain and dimension choices for a single metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricMetadata {
    pub primary_agg_type: String,
    pub supported_agg_types: Vec<String>,
    pub supported_time_grains: Vec<SelectOption>,
    pub dimensions: Vec<SelectOption>,
}

impl Default for MetricMetadata {
    fn default() -> Self {
        Self {
            primary_agg_type: String::new(),
            supported_agg_types: default_aggregation_types(),
            supported_time_grains: vec![],
            dimensions: vec![],
        }
    }
}

fn default_aggregation_types() -> Vec<String> {
    DEFAULT_AGGREGATION_TYPES
        .iter()
        .map(|agg| agg.to_string())
        .collect()
}

// Looks up `metric_name` among the metric definitions and reshapes its
// metadata for the pickers. No match falls back to the defaults rather
// than failing, since the metric list and its metadata are fetched
// independently and can disagree for a moment.
pub fn parse_metadata(
    result: Option<&MetricMetadataResponse>,
    metric_name: &str,
) -> MetricMetadata {
    let entry = result.and_then(|result| {
        result
            .value
            .iter()
            .find(|entry| entry.name.value == metric_name)
    });
    let entry = match entry {
        Some(entry) => entry,
        None => return MetricMetadata::default(),
    };

    // The Auto sentinel always leads so the UI can default to it.
    let mut supported_time_grains = vec![SelectOption {
        label: Some("Auto".to_string()),
        value: Some("auto".to_string()),
    }];
    supported_time_grains.extend(parse_time_grains(
        entry.metric_availabilities.as_deref().unwrap_or_default(),
    ));

    MetricMetadata {
        primary_agg_type: entry.primary_aggregation_type.clone(),
        supported_agg_types: entry
            .supported_aggregation_types
            .clone()
            .unwrap_or_else(default_aggregation_types),
        supported_time_grains,
        dimensions: parse_dimensions(entry.dimensions.as_deref().unwrap_or_default()),
    }
}

// One option per availability that names a time grain. Availabilities
// without one describe retention only and are skipped.
pub fn parse_time_grains(availabilities: &[MetricAvailability]) -> Vec<SelectOption> {
    let mut time_grains = Vec::new();
    for availability in availabilities {
        match availability.time_grain.as_deref() {
            Some(grain) if !grain.is_empty() => time_grains.push(SelectOption {
                label: Some(time_grain::label_from_iso8601_duration(grain)),
                value: Some(grain.to_string()),
            }),
            _ => {}
        }
    }
    time_grains
}

pub fn parse_dimensions(dimensions: &[LocalizedValue]) -> Vec<SelectOption> {
    dimensions
        .iter()
        .map(|dimension| {
            let label = match dimension.localized_value.as_deref() {
                Some(localized) if !localized.is_empty() => localized.to_string(),
                _ => dimension.value.clone(),
            };
            SelectOption {
                label: Some(label),
                value: Some(dimension.value.clone()),
            }
        })
        .collect()
}
