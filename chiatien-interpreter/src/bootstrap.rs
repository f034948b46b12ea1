use chiatien_presentation::{Currency, CurrencyFormat};
use std::{borrow::Cow, env};
use tracing_subscriber::EnvFilter;

const CURRENCY_VAR: &str = "CHIATIEN_CURRENCY";

pub struct AppConfig {
    pub currency: Currency,
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, Cow<'static, str>> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Cow<'static, str>> {
        let currency = match lookup(CURRENCY_VAR) {
            Some(value) => value
                .parse::<Currency>()
                .map_err(|err| format!("{CURRENCY_VAR}: {err}"))?,
            None => Currency::default(),
        };
        tracing::debug!(?currency, "Configuration loaded");
        Ok(Self { currency })
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        self.currency.format()
    }
}

/// Logs go to stderr; stdout carries the reports.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, Currency::Usd)]
    #[case::usd(Some("usd"), Currency::Usd)]
    #[case::vnd(Some("VND"), Currency::Vnd)]
    fn reads_currency(#[case] value: Option<&str>, #[case] expected: Currency) {
        let config = AppConfig::from_lookup(|_| value.map(str::to_owned)).expect("valid config");
        assert_eq!(config.currency, expected);
    }

    #[test]
    fn rejects_unknown_currency() {
        let err = AppConfig::from_lookup(|_| Some("eur".to_owned()))
            .err()
            .expect("unknown currency");
        assert!(err.contains(CURRENCY_VAR));
    }
}
