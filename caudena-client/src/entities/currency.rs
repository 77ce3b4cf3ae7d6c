use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Blockchain that can be queried through the Prism API.
///
/// Its textual form is the lowercase ticker used in the API routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Currency {
    /// Bitcoin
    #[default]
    Btc,
    /// Ethereum
    Eth,
    /// Litecoin
    Ltc,
    /// Dogecoin
    Doge,
    /// Tron
    Trx,
    /// BNB Smart Chain
    Bnb,
}

impl Currency {
    /// List all the supported [currencies][Currency].
    pub fn list() -> Vec<Self> {
        Self::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn display_gives_the_lowercase_ticker() {
        assert_eq!("btc", Currency::Btc.to_string());
        assert_eq!("eth", Currency::Eth.to_string());
        assert_eq!("bnb", Currency::Bnb.to_string());
    }

    #[test]
    fn parse_from_lowercase_ticker() {
        assert_eq!(Currency::Doge, Currency::from_str("doge").unwrap());
        assert_eq!(Currency::Trx, Currency::from_str("trx").unwrap());

        Currency::from_str("xmr").expect_err("parsing an unsupported ticker should fail");
    }

    #[test]
    fn list_all_currencies() {
        assert_eq!(
            vec![
                Currency::Btc,
                Currency::Eth,
                Currency::Ltc,
                Currency::Doge,
                Currency::Trx,
                Currency::Bnb
            ],
            Currency::list()
        );
    }
}
