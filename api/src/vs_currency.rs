//! The reference currencies a market data provider can quote prices in.

/// A quote currency accepted by the `vs_currency` query parameter.
///
/// The string form (via `strum`) is the lowercase code the API expects and
/// also the key under which per-currency maps are returned.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum VsCurrency {
    Aud,
    Btc,
    Cad,
    Chf,
    Cny,
    Eth,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Krw,
    #[default]
    Usd,
}

impl VsCurrency {
    /// The code used in request URLs and response maps (e.g. "usd").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Symbol prefixed to list prices (e.g. '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Aud => "A$",
            Self::Btc => "₿",
            Self::Cad => "C$",
            Self::Chf => "CHF ",
            Self::Cny => "¥",
            Self::Eth => "Ξ",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Inr => "₹",
            Self::Jpy => "¥",
            Self::Krw => "₩",
            Self::Usd => "$",
        }
    }

    /// Upper-case ticker for captions, e.g. "Price in USD".
    pub fn ticker(&self) -> String {
        self.code().to_ascii_uppercase()
    }
}
