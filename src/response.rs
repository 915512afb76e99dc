use crate::options::{SelectOption, TextValue};
use log::debug;
use serde_json::Value;
use std::collections::HashSet;

const SUBSCRIPTION_ID_FIELD: &str = "subscriptionId";
const DISPLAY_NAME_FIELD: &str = "displayName";

// List responses arrive wrapped as `{ data: { value: [...] } }`. An absent
// response, or a present one without the record array, scans as empty.
fn records(result: Option<&Value>) -> &[Value] {
    match result {
        Some(result) => match result.pointer("/data/value").and_then(Value::as_array) {
            Some(records) => records,
            None => {
                debug!("list response is missing the data.value array");
                &[]
            }
        },
        None => &[],
    }
}

// Dot-separated field access into a record, e.g. "name.localizedValue".
// A missing step resolves to None, matching how the API omits optional
// fields entirely rather than sending null placeholders.
fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for key in path.split('.') {
        match current.get(key) {
            Some(next) => current = next,
            None => return None,
        }
    }
    Some(current)
}

// Strings pass through verbatim, other present scalars through their JSON
// rendering. Null and absent both resolve to None.
fn text_of(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

// Scans the record array for `value_field`/`text_field` pairs, keeping the
// first record seen for each distinct value. Text falls back to the value
// itself when the text path is absent on that record.
pub fn parse_response_values(
    result: Option<&Value>,
    text_field: &str,
    value_field: &str,
) -> Vec<TextValue> {
    let mut seen = HashSet::new();
    let mut list = Vec::new();
    for record in records(result) {
        let value = text_of(lookup(record, value_field));
        if !seen.insert(value.clone()) {
            continue;
        }
        let text = text_of(lookup(record, text_field)).or_else(|| value.clone());
        list.push(TextValue { text, value });
    }
    list
}

// Pure filter on the record's `type` field. No dedup: two resources with
// the same name but a matching type both appear.
pub fn parse_resource_names(result: Option<&Value>, metric_definition: &str) -> Vec<TextValue> {
    let mut list = Vec::new();
    for record in records(result) {
        if record.get("type").and_then(Value::as_str) != Some(metric_definition) {
            continue;
        }
        let name = text_of(record.get("name"));
        list.push(TextValue {
            text: name.clone(),
            value: name,
        });
    }
    list
}

pub fn parse_subscriptions(result: Option<&Value>) -> Vec<TextValue> {
    let mut seen = HashSet::new();
    let mut list = Vec::new();
    for record in records(result) {
        let value = text_of(record.get(SUBSCRIPTION_ID_FIELD));
        if !seen.insert(value.clone()) {
            continue;
        }
        list.push(TextValue {
            text: text_of(record.get(DISPLAY_NAME_FIELD)),
            value,
        });
    }
    list
}

// Same dedup scan as parse_subscriptions, but labeled
// "<displayName> - <subscriptionId>" for select components.
pub fn parse_subscriptions_for_select(result: Option<&Value>) -> Vec<SelectOption> {
    let mut seen = HashSet::new();
    let mut list = Vec::new();
    for record in records(result) {
        let value = text_of(record.get(SUBSCRIPTION_ID_FIELD));
        if !seen.insert(value.clone()) {
            continue;
        }
        let display_name = text_of(record.get(DISPLAY_NAME_FIELD));
        let label = format!(
            "{} - {}",
            display_name.as_deref().unwrap_or_default(),
            value.as_deref().unwrap_or_default(),
        );
        list.push(SelectOption {
            label: Some(label),
            value,
        });
    }
    list
}

// Workspaces key on the customer id nested under `properties`, while the
// label comes from the top-level resource name.
pub fn parse_workspaces_for_select(result: Option<&Value>) -> Vec<SelectOption> {
    let mut seen = HashSet::new();
    let mut list = Vec::new();
    for record in records(result) {
        let value = text_of(lookup(record, "properties.customerId"));
        if !seen.insert(value.clone()) {
            continue;
        }
        list.push(SelectOption {
            label: text_of(record.get("name")),
            value,
        });
    }
    list
}
