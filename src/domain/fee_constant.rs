use crate::error::FeeTableError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The value held by a catalogue entry.
///
/// Decimals serialize as strings so their exact scale survives JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Decimal(Decimal),
    Integer(u32),
    Text(&'static str),
}

impl ConstantValue {
    /// Short name of the value kind, as used in exports and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConstantValue::Decimal(_) => "decimal",
            ConstantValue::Integer(_) => "integer",
            ConstantValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Decimal(value) => write!(f, "{}", value),
            ConstantValue::Integer(value) => write!(f, "{}", value),
            ConstantValue::Text(value) => f.write_str(value),
        }
    }
}

/// What a constant is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticRole {
    FeeRate,
    FixedFee,
    FeeCap,
    TransactionLimit,
    PaginationLimit,
    MetadataKey,
}

impl SemanticRole {
    pub const ALL: [SemanticRole; 6] = [
        SemanticRole::FeeRate,
        SemanticRole::FixedFee,
        SemanticRole::FeeCap,
        SemanticRole::TransactionLimit,
        SemanticRole::PaginationLimit,
        SemanticRole::MetadataKey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticRole::FeeRate => "fee-rate",
            SemanticRole::FixedFee => "fixed-fee",
            SemanticRole::FeeCap => "fee-cap",
            SemanticRole::TransactionLimit => "transaction-limit",
            SemanticRole::PaginationLimit => "pagination-limit",
            SemanticRole::MetadataKey => "metadata-key",
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticRole {
    type Err = FeeTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| FeeTableError::UnknownRole(s.to_string()))
    }
}

/// Unit a value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// US dollars.
    Usd,
    /// Dimensionless fraction, `0.029` is 2.9%.
    Ratio,
    Count,
    /// Opaque string key.
    Key,
}

/// A named, typed, immutable entry of the fee table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeConstant {
    /// Canonical, unique name (e.g. `DefaultCardFeePercentage`).
    pub name: &'static str,
    pub value: ConstantValue,
    pub role: SemanticRole,
    pub unit: Unit,
    pub description: &'static str,
}

impl FeeConstant {
    pub const fn decimal(
        name: &'static str,
        value: Decimal,
        role: SemanticRole,
        unit: Unit,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            value: ConstantValue::Decimal(value),
            role,
            unit,
            description,
        }
    }

    pub const fn integer(
        name: &'static str,
        value: u32,
        role: SemanticRole,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            value: ConstantValue::Integer(value),
            role,
            unit: Unit::Count,
            description,
        }
    }

    pub const fn text(
        name: &'static str,
        value: &'static str,
        role: SemanticRole,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            value: ConstantValue::Text(value),
            role,
            unit: Unit::Key,
            description,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self.value {
            ConstantValue::Decimal(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u32> {
        match self.value {
            ConstantValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&'static str> {
        match self.value {
            ConstantValue::Text(value) => Some(value),
            _ => None,
        }
    }
}
