//! Stripe pricing, fee and API usage constants.
//!
//! Monetary values are USD. Percentages are stored as fractions, so `0.029`
//! reads as 2.9%. Every decimal keeps the scale it is written with.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default percentage fee charged per card transaction (2.9%).
pub const DEFAULT_CARD_FEE_PERCENTAGE: Decimal = dec!(0.029);

/// Fixed fee charged per card transaction on top of the percentage fee ($0.30).
pub const DEFAULT_CARD_FIXED_FEE: Decimal = dec!(0.30);

/// Percentage fee charged for ACH Direct Debit transactions (0.8%).
pub const ACH_FEE_PERCENTAGE: Decimal = dec!(0.008);

/// Maximum fee charged for a single ACH Direct Debit transaction ($5.00).
pub const ACH_MAX_FEE: Decimal = dec!(5.00);

/// Metadata key used to associate a Stripe object with a user ID.
pub const METADATA_KEY_USER_ID: &str = "userId";

/// Maximum number of items a single page of most list calls may return.
pub const MAX_LIST_PAGE_SIZE: u32 = 100;

/// Additional percentage fee charged for currency conversion (1.5%).
pub const CURRENCY_CONVERSION_FEE_PERCENTAGE: Decimal = dec!(0.015);

/// Minimum charge accepted for card payments.
pub const CARD_MIN_AMOUNT: Decimal = dec!(0.50);

/// Maximum charge accepted for card payments.
///
/// The amount field on a PaymentIntent or Charge holds at most 8 digits, so
/// the highest legal USD value is 999 999.99.
pub const CARD_MAX_AMOUNT: Decimal = dec!(999999.99);

/// Network ceiling for an individual same-day ACH Direct Debit.
///
/// Stripe may apply lower risk limits per account.
pub const ACH_MAXIMUM_DEBIT_AMOUNT: Decimal = dec!(1000000.00);

/// Typical per-debit ACH limit for brand-new U.S. accounts.
///
/// Not enforced by the API layer. Risk checks reject larger debits until the
/// account limit is raised.
pub const ACH_SOFT_PER_TRANSACTION_LIMIT: Decimal = dec!(6000.00);

/// Typical weekly aggregate ACH limit for new U.S. accounts.
pub const ACH_SOFT_WEEKLY_LIMIT: Decimal = dec!(10000.00);
