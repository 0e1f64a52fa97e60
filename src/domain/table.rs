//! The enumerable fee table.
//!
//! `FEE_TABLE` is built from the `pub const` items in [`super::constants`], so the
//! catalogue and the constants cannot drift apart. Lookups are read-only and
//! safe to call from any thread.

use super::constants::*;
use super::fee_constant::{FeeConstant, SemanticRole, Unit};
use crate::error::{FeeTableError, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Every constant, in declaration order.
pub static FEE_TABLE: [FeeConstant; 12] = [
    FeeConstant::decimal(
        "DefaultCardFeePercentage",
        DEFAULT_CARD_FEE_PERCENTAGE,
        SemanticRole::FeeRate,
        Unit::Ratio,
        "Per-transaction card fee rate",
    ),
    FeeConstant::decimal(
        "DefaultCardFixedFee",
        DEFAULT_CARD_FIXED_FEE,
        SemanticRole::FixedFee,
        Unit::Usd,
        "Fixed per-transaction card fee",
    ),
    FeeConstant::decimal(
        "AchFeePercentage",
        ACH_FEE_PERCENTAGE,
        SemanticRole::FeeRate,
        Unit::Ratio,
        "Per-transaction ACH debit fee rate",
    ),
    FeeConstant::decimal(
        "AchMaxFee",
        ACH_MAX_FEE,
        SemanticRole::FeeCap,
        Unit::Usd,
        "Cap on a single ACH fee",
    ),
    FeeConstant::text(
        "MetadataKeyUserId",
        METADATA_KEY_USER_ID,
        SemanticRole::MetadataKey,
        "Canonical metadata key for user association",
    ),
    FeeConstant::integer(
        "MaxListPageSize",
        MAX_LIST_PAGE_SIZE,
        SemanticRole::PaginationLimit,
        "Max items per page in list operations",
    ),
    FeeConstant::decimal(
        "CurrencyConversionFeePercentage",
        CURRENCY_CONVERSION_FEE_PERCENTAGE,
        SemanticRole::FeeRate,
        Unit::Ratio,
        "Extra fee rate for currency conversion",
    ),
    FeeConstant::decimal(
        "CardMinAmount",
        CARD_MIN_AMOUNT,
        SemanticRole::TransactionLimit,
        Unit::Usd,
        "Minimum allowed card charge",
    ),
    FeeConstant::decimal(
        "CardMaxAmount",
        CARD_MAX_AMOUNT,
        SemanticRole::TransactionLimit,
        Unit::Usd,
        "Maximum allowed card charge",
    ),
    FeeConstant::decimal(
        "AchMaximumDebitAmount",
        ACH_MAXIMUM_DEBIT_AMOUNT,
        SemanticRole::TransactionLimit,
        Unit::Usd,
        "Network ceiling for same-day ACH debit",
    ),
    FeeConstant::decimal(
        "AchSoftPerTransactionLimit",
        ACH_SOFT_PER_TRANSACTION_LIMIT,
        SemanticRole::TransactionLimit,
        Unit::Usd,
        "Typical risk-based per-debit limit for new accounts",
    ),
    FeeConstant::decimal(
        "AchSoftWeeklyLimit",
        ACH_SOFT_WEEKLY_LIMIT,
        SemanticRole::TransactionLimit,
        Unit::Usd,
        "Typical weekly aggregate limit for new ACH users",
    ),
];

/// Returns the full table in declaration order.
pub fn all() -> &'static [FeeConstant] {
    &FEE_TABLE
}

pub fn names() -> impl Iterator<Item = &'static str> {
    FEE_TABLE.iter().map(|constant| constant.name)
}

/// Looks up a constant by its exact, case-sensitive name.
pub fn get(name: &str) -> Result<&'static FeeConstant> {
    FEE_TABLE
        .iter()
        .find(|constant| constant.name == name)
        .ok_or_else(|| {
            debug!(name, "constant lookup missed");
            FeeTableError::UnknownConstant(name.to_string())
        })
}

pub fn decimal(name: &str) -> Result<Decimal> {
    let constant = get(name)?;
    constant
        .as_decimal()
        .ok_or_else(|| type_mismatch(constant, "decimal"))
}

pub fn integer(name: &str) -> Result<u32> {
    let constant = get(name)?;
    constant
        .as_integer()
        .ok_or_else(|| type_mismatch(constant, "integer"))
}

pub fn text(name: &str) -> Result<&'static str> {
    let constant = get(name)?;
    constant
        .as_text()
        .ok_or_else(|| type_mismatch(constant, "text"))
}

/// Constants with the given role, in declaration order.
pub fn by_role(role: SemanticRole) -> impl Iterator<Item = &'static FeeConstant> {
    FEE_TABLE
        .iter()
        .filter(move |constant| constant.role == role)
}

fn type_mismatch(constant: &FeeConstant, expected: &'static str) -> FeeTableError {
    FeeTableError::TypeMismatch {
        name: constant.name.to_string(),
        expected,
        actual: constant.value.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fee_constant::ConstantValue;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let unique: HashSet<&str> = names().collect();
        assert_eq!(unique.len(), FEE_TABLE.len());
    }

    #[test]
    fn test_lookup_matches_literals() {
        assert_eq!(decimal("DefaultCardFeePercentage").unwrap(), dec!(0.029));
        assert_eq!(decimal("DefaultCardFixedFee").unwrap(), dec!(0.30));
        assert_eq!(decimal("AchFeePercentage").unwrap(), dec!(0.008));
        assert_eq!(decimal("AchMaxFee").unwrap(), dec!(5.00));
        assert_eq!(text("MetadataKeyUserId").unwrap(), "userId");
        assert_eq!(integer("MaxListPageSize").unwrap(), 100);
        assert_eq!(
            decimal("CurrencyConversionFeePercentage").unwrap(),
            dec!(0.015)
        );
        assert_eq!(decimal("CardMinAmount").unwrap(), dec!(0.50));
        assert_eq!(decimal("CardMaxAmount").unwrap(), dec!(999999.99));
        assert_eq!(decimal("AchMaximumDebitAmount").unwrap(), dec!(1000000.00));
        assert_eq!(decimal("AchSoftPerTransactionLimit").unwrap(), dec!(6000.00));
        assert_eq!(decimal("AchSoftWeeklyLimit").unwrap(), dec!(10000.00));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(get("AchMaxFee").is_ok());
        assert!(matches!(
            get("achmaxfee"),
            Err(FeeTableError::UnknownConstant(name)) if name == "achmaxfee"
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let result = integer("AchMaxFee");
        assert!(matches!(
            result,
            Err(FeeTableError::TypeMismatch { ref name, expected: "integer", actual: "decimal" })
                if name == "AchMaxFee"
        ));
        assert!(matches!(
            decimal("MetadataKeyUserId"),
            Err(FeeTableError::TypeMismatch { actual: "text", .. })
        ));
    }

    #[test]
    fn test_by_role_keeps_order() {
        let rates: Vec<&str> = by_role(SemanticRole::FeeRate).map(|c| c.name).collect();
        assert_eq!(
            rates,
            vec![
                "DefaultCardFeePercentage",
                "AchFeePercentage",
                "CurrencyConversionFeePercentage"
            ]
        );
        assert_eq!(by_role(SemanticRole::TransactionLimit).count(), 5);
        assert_eq!(by_role(SemanticRole::FeeCap).count(), 1);
    }

    #[test]
    fn test_every_role_is_used() {
        for role in SemanticRole::ALL {
            assert!(by_role(role).next().is_some(), "no constant for {}", role);
        }
    }

    #[test]
    fn test_units_follow_value_kind() {
        for constant in all() {
            match constant.value {
                ConstantValue::Decimal(_) => {
                    assert!(matches!(constant.unit, Unit::Usd | Unit::Ratio))
                }
                ConstantValue::Integer(_) => assert_eq!(constant.unit, Unit::Count),
                ConstantValue::Text(_) => assert_eq!(constant.unit, Unit::Key),
            }
        }
    }
}
