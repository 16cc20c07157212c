use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Company metadata fields surfaced on the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Sector,
    Beta,
    ForwardPe,
    PriceToBook,
    MarketCap,
    ProfitMargins,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        Self::Sector,
        Self::Beta,
        Self::ForwardPe,
        Self::PriceToBook,
        Self::MarketCap,
        Self::ProfitMargins,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sector => "sector",
            Self::Beta => "beta",
            Self::ForwardPe => "forward_pe",
            Self::PriceToBook => "price_to_book",
            Self::MarketCap => "market_cap",
            Self::ProfitMargins => "profit_margins",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sector => "Sector",
            Self::Beta => "Company Beta",
            Self::ForwardPe => "P/E Ratio (forward)",
            Self::PriceToBook => "P/B Ratio",
            Self::MarketCap => "Market Cap",
            Self::ProfitMargins => "Profit Margins",
        }
    }
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a reported metadata field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(value) => Some(value),
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Per-company metadata snapshot.
///
/// Lookup is explicitly present/absent: a field the provider did not report
/// is `None`, never a placeholder string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: Symbol,
    #[serde(default)]
    fields: BTreeMap<ProfileField, FieldValue>,
}

impl CompanyProfile {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            fields: BTreeMap::new(),
        }
    }

    pub fn from_fields(symbol: Symbol, fields: BTreeMap<ProfileField, FieldValue>) -> Self {
        Self { symbol, fields }
    }

    pub fn with_text(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.fields.insert(field, FieldValue::Text(value.into()));
        self
    }

    pub fn with_number(mut self, field: ProfileField, value: f64) -> Self {
        self.fields.insert(field, FieldValue::Number(value));
        self
    }

    /// Explicit lookup; `None` means the provider did not report the field.
    pub fn field(&self, field: ProfileField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (ProfileField, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
