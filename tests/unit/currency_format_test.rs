// Display formatting of monetary totals: symbol, precision, placement,
// and the zero-amount strings the dashboard renders when nothing sold.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use salesdash::core::Currency;

#[test]
fn test_symbol_before_amount() {
    assert_eq!(Currency::USD.format_amount(dec!(1234.5)), "$1234.50");
    assert_eq!(Currency::GBP.format_amount(dec!(99)), "£99.00");
}

#[test]
fn test_symbol_after_amount() {
    assert_eq!(Currency::EUR.format_amount(dec!(1234.5)), "1234.50 €");
}

#[test]
fn test_zero_decimal_currencies() {
    assert_eq!(Currency::JPY.format_amount(dec!(1500)), "¥1500");
    assert_eq!(Currency::IDR.format_amount(dec!(250000)), "Rp250000");
}

#[test]
fn test_zero_amount_strings() {
    assert_eq!(Currency::USD.format_amount(Decimal::ZERO), "$0.00");
    assert_eq!(Currency::EUR.format_amount(Decimal::ZERO), "0.00 €");
    assert_eq!(Currency::JPY.format_amount(Decimal::ZERO), "¥0");
}

#[test]
fn test_rounding_to_currency_scale() {
    // Banker's rounding at the currency scale
    assert_eq!(Currency::USD.format_amount(dec!(10.005)), "$10.00");
    assert_eq!(Currency::USD.format_amount(dec!(10.015)), "$10.02");
    assert_eq!(Currency::JPY.format_amount(dec!(10.5)), "¥10");
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("eur".parse::<Currency>(), Ok(Currency::EUR));
    assert_eq!("Jpy".parse::<Currency>(), Ok(Currency::JPY));
    assert!("".parse::<Currency>().is_err());
}
