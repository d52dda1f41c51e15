use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default tax (IVA) rate, in percent
pub const DEFAULT_TAX_RATE: Decimal = dec!(19.0);

/// Default margin or markup rate, in percent
pub const DEFAULT_RATE: Decimal = dec!(30.0);

/// Accepted tax rate range, in percent
pub const MIN_TAX_RATE: Decimal = dec!(0);
pub const MAX_TAX_RATE: Decimal = dec!(30);

/// Accepted default rate range, in percent
pub const MIN_DEFAULT_RATE: Decimal = dec!(0);
pub const MAX_DEFAULT_RATE: Decimal = dec!(200);

/// Margin rates at or above this value would divide by zero
pub const MARGIN_RATE_CEILING: Decimal = dec!(100);

/// Margin rate used in place of anything at or above the ceiling
pub const CLAMPED_MARGIN_RATE: Decimal = dec!(99);

/// Difference (in percentage points) above which a markup is flagged as
/// overstating the real margin on sales
pub const MARKUP_MARGIN_GAP_THRESHOLD: Decimal = dec!(0.1);

/// Decimal places kept in exported tables
pub const EXPORT_DECIMAL_PRECISION: u32 = 6;
