use std::str::FromStr;
use std::time::Duration;

use crate::vs_currency::VsCurrency;

pub const DEFAULT_API_BASE: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_PER_PAGE: u32 = 20;
pub const DEFAULT_REFRESH_SECS: u64 = 60;
pub const DEFAULT_CHART_DAYS: u32 = 7;

/// Settings for the widget. Every field has a built-in default and can be
/// overridden at build time.
#[derive(Clone, PartialEq, Debug)]
pub struct WidgetPrefs {
    /// Base URL of the CoinGecko-compatible API, without trailing slash.
    pub api_base: String,
    /// Reference currency for every price shown.
    pub vs_currency: VsCurrency,
    /// Number of ranked assets fetched (always page 1).
    pub per_page: u32,
    /// Interval between list refreshes.
    pub refresh_interval: Duration,
    /// Lookback window charted right after a row is selected.
    pub default_days: u32,
}

impl WidgetPrefs {
    /// Builds prefs from compile-time environment variables.
    ///
    /// A wasm build has no process environment, so values are captured by
    /// `option_env!` when the crate is compiled:
    /// - `COIN_WATCH_API_BASE`
    /// - `COIN_WATCH_CURRENCY`: a currency code such as "usd" or "EUR".
    /// - `COIN_WATCH_PER_PAGE`
    /// - `COIN_WATCH_REFRESH_SECS`
    /// - `COIN_WATCH_DEFAULT_DAYS`
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("COIN_WATCH_API_BASE"),
            option_env!("COIN_WATCH_CURRENCY"),
            option_env!("COIN_WATCH_PER_PAGE"),
            option_env!("COIN_WATCH_REFRESH_SECS"),
            option_env!("COIN_WATCH_DEFAULT_DAYS"),
        )
    }

    fn from_overrides(
        api_base: Option<&str>,
        currency: Option<&str>,
        per_page: Option<&str>,
        refresh_secs: Option<&str>,
        default_days: Option<&str>,
    ) -> Self {
        let api_base = api_base
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        Self {
            api_base,
            vs_currency: parse_or(currency, VsCurrency::default()),
            per_page: parse_positive(per_page, DEFAULT_PER_PAGE),
            refresh_interval: Duration::from_secs(parse_positive(
                refresh_secs,
                DEFAULT_REFRESH_SECS,
            )),
            default_days: parse_positive(default_days, DEFAULT_CHART_DAYS),
        }
    }
}

impl Default for WidgetPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|s| T::from_str(s.trim()).ok())
        .unwrap_or(default)
}

fn parse_positive<T: FromStr + PartialOrd + Default>(value: Option<&str>, default: T) -> T {
    let parsed: Option<T> = value.and_then(|s| T::from_str(s.trim()).ok());
    match parsed {
        Some(v) if v > T::default() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let prefs = WidgetPrefs::from_overrides(None, None, None, None, None);
        assert_eq!(prefs.api_base, DEFAULT_API_BASE);
        assert_eq!(prefs.vs_currency, VsCurrency::Usd);
        assert_eq!(prefs.per_page, 20);
        assert_eq!(prefs.refresh_interval, Duration::from_secs(60));
        assert_eq!(prefs.default_days, 7);
    }

    #[test]
    fn overrides_are_applied() {
        let prefs = WidgetPrefs::from_overrides(
            Some("http://localhost:8080/api/v3/"),
            Some("EUR"),
            Some("50"),
            Some("30"),
            Some("30"),
        );
        assert_eq!(prefs.api_base, "http://localhost:8080/api/v3");
        assert_eq!(prefs.vs_currency, VsCurrency::Eur);
        assert_eq!(prefs.per_page, 50);
        assert_eq!(prefs.refresh_interval, Duration::from_secs(30));
        assert_eq!(prefs.default_days, 30);
    }

    #[test]
    fn bad_overrides_fall_back() {
        let prefs = WidgetPrefs::from_overrides(
            Some("  "),
            Some("doge"),
            Some("0"),
            Some("-5"),
            Some("week"),
        );
        assert_eq!(prefs, WidgetPrefs::from_overrides(None, None, None, None, None));
    }
}
