use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the currency symbol sits relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// Symbol before the amount, no space ("$1000.50")
    Before,
    /// Symbol after the amount, space-separated ("1000.50 €")
    After,
}

/// Supported company currencies with their display rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places, symbol before)
    USD,
    /// Euro (2 decimal places, symbol after)
    EUR,
    /// British Pound (2 decimal places, symbol before)
    GBP,
    /// Japanese Yen (no decimal places, symbol before)
    JPY,
    /// Indonesian Rupiah (no decimal places, symbol before)
    IDR,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - JPY/IDR: 0 (no decimals)
    /// - USD/EUR/GBP: 2 (2 decimal places)
    pub fn scale(&self) -> u32 {
        match self {
            Currency::JPY | Currency::IDR => 0,
            Currency::USD | Currency::EUR | Currency::GBP => 2,
        }
    }

    /// Returns the display symbol for this currency
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::IDR => "Rp",
        }
    }

    /// Returns where the symbol is placed when formatting
    pub fn symbol_position(&self) -> SymbolPosition {
        match self {
            Currency::EUR => SymbolPosition::After,
            _ => SymbolPosition::Before,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Formats an amount for display with symbol, precision and placement
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let digits = format!("{:.width$}", rounded, width = self.scale() as usize);
        match self.symbol_position() {
            SymbolPosition::Before => format!("{}{}", self.symbol(), digits),
            SymbolPosition::After => format!("{} {}", digits, self.symbol()),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::USD => write!(f, "USD"),
            Currency::EUR => write!(f, "EUR"),
            Currency::GBP => write!(f, "GBP"),
            Currency::JPY => write!(f, "JPY"),
            Currency::IDR => write!(f, "IDR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "IDR" => Ok(Currency::IDR),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
