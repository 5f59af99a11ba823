use serde::Deserialize;

/// One node of the hierarchy document, exactly as it appears in the JSON.
/// Nothing is validated here; see `tree::build_tree`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawNode {
    pub name: String,
    /// Color group of a leaf. Group nodes leave it out.
    #[serde(default)]
    pub category: Option<String>,
    /// Intrinsic weight of a leaf. Group nodes leave it out.
    #[serde(default)]
    pub value: Option<RawValue>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Convenience constructor for a group node.
    pub fn group(name: impl Into<String>, children: Vec<RawNode>) -> Self {
        Self {
            name: name.into(),
            category: None,
            value: None,
            children,
        }
    }

    /// Convenience constructor for a leaf node.
    pub fn leaf(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
            value: Some(RawValue::Number(value)),
            children: Vec::new(),
        }
    }
}

/// The published movie dataset stores revenue as strings ("760505847"),
/// hand-written files tend to use plain numbers. Both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Numeric reading of the value. `None` if a string doesn't parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// The value as it was written, for error messages.
    pub fn raw(&self) -> String {
        match self {
            RawValue::Number(n) => n.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}
