use chiatien_domain::Money;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Vnd,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency '{0}' (expected 'usd' or 'vnd')")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "usd" | "$" => Ok(Currency::Usd),
            "vnd" | "₫" => Ok(Currency::Vnd),
            _ => Err(UnknownCurrency(value.to_owned())),
        }
    }
}

impl Currency {
    pub fn format(self) -> CurrencyFormat {
        match self {
            Currency::Usd => CurrencyFormat::usd(),
            Currency::Vnd => CurrencyFormat::vnd(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Display rules for amounts. Rounding happens here only; stored amounts keep
/// full precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub fraction_digits: u32,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::usd()
    }
}

impl CurrencyFormat {
    pub fn usd() -> Self {
        Self {
            symbol: "$",
            position: SymbolPosition::Prefix,
            fraction_digits: 2,
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    pub fn vnd() -> Self {
        Self {
            symbol: "₫",
            position: SymbolPosition::Suffix,
            fraction_digits: 0,
            group_separator: '.',
            decimal_separator: ',',
        }
    }

    /// `$1,234.50`, `-$3.00`, `1.234 ₫`
    pub fn format(&self, amount: Money) -> String {
        let rounded = amount.round_to(self.fraction_digits).as_decimal();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let number = self.format_number(rounded.abs());
        match self.position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{number} {}", self.symbol),
        }
    }

    /// Like [`Self::format`] with an explicit `+` on non-negative amounts.
    pub fn format_signed(&self, amount: Money) -> String {
        let formatted = self.format(amount);
        if formatted.starts_with('-') {
            formatted
        } else {
            format!("+{formatted}")
        }
    }

    fn format_number(&self, value: rust_decimal::Decimal) -> String {
        let digits = self.fraction_digits as usize;
        let plain = format!("{value:.digits$}");
        let (integer, fraction) = match plain.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
        for (idx, ch) in integer.chars().enumerate() {
            if idx > 0 && (integer.len() - idx) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }

        if let Some(fraction) = fraction {
            grouped.push(self.decimal_separator);
            grouped.push_str(fraction);
        }
        grouped
    }
}
