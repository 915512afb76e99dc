use serde::Serialize;

// Entry for the legacy text/value dropdowns. Fields mirror what the
// source record carried: a field the API omitted stays None instead of
// being rejected or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextValue {
    pub text: Option<String>,
    pub value: Option<String>,
}

// Entry for select components and for time-grain/dimension metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: Option<String>,
    pub value: Option<String>,
}
