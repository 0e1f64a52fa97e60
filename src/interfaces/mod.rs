//! Output adapters that render the fee table for humans and other tools.

pub mod csv;
pub mod json;

use crate::domain::fee_constant::{ConstantValue, FeeConstant, SemanticRole, Unit};
use serde::Serialize;

/// Flat, serializable view of a [`FeeConstant`] shared by every export format.
#[derive(Debug, Serialize)]
pub struct TableRow<'a> {
    pub name: &'a str,
    pub value: ConstantValue,
    pub kind: &'static str,
    pub role: SemanticRole,
    pub unit: Unit,
    pub description: &'a str,
}

impl<'a> From<&'a FeeConstant> for TableRow<'a> {
    fn from(constant: &'a FeeConstant) -> Self {
        Self {
            name: constant.name,
            value: constant.value,
            kind: constant.value.kind(),
            role: constant.role,
            unit: constant.unit,
            description: constant.description,
        }
    }
}
