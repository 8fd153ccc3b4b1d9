//! [`Money`]-related definitions.

use std::{cmp::Ordering, fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

use crate::{define_kind, Percent};

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Number of decimal places every [`Money`] amount is rounded to.
    pub const SCALE: u32 = 2;

    /// Creates a zero [`Money`] amount in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Indicates whether this [`Money`] amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Sums this [`Money`] with the `other` one.
    ///
    /// [`None`] is returned if the currencies differ or the sum overflows.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        if self.currency != other.currency {
            return None;
        }
        Some(Self {
            amount: self.amount.checked_add(other.amount)?,
            currency: self.currency,
        })
    }

    /// Subtracts the `other` [`Money`] from this one, never going below zero.
    ///
    /// [`None`] is returned if the currencies differ or the difference
    /// overflows.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        if self.currency != other.currency {
            return None;
        }
        Some(Self {
            amount: self
                .amount
                .checked_sub(other.amount)?
                .max(Decimal::ZERO),
            currency: self.currency,
        })
    }

    /// Orders this [`Money`] against the `other` one by [`Currency`] first,
    /// so amounts in different currencies are never compared directly.
    #[must_use]
    pub fn cmp_by_currency(&self, other: &Self) -> Ordering {
        self.currency
            .cmp(&other.currency)
            .then_with(|| self.amount.cmp(&other.amount))
    }

    /// Returns the part of this [`Money`] amount matching the provided
    /// [`Percent`], rounded to [`Money::SCALE`] decimal places.
    #[must_use]
    pub fn percent(self, percent: Percent) -> Self {
        Self {
            amount: (self.amount * percent.fraction())
                .round_dp_with_strategy(
                    Self::SCALE,
                    RoundingStrategy::MidpointAwayFromZero,
                ),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{}{currency}", amount.normalize())
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        if amount.is_sign_negative() {
            return Err("negative amount");
        }
        if amount.scale() > Self::SCALE {
            return Err("too many decimal places");
        }
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "Pound Sterling."]
        Gbp = 3,
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is a non-negative integer;
    /// - `minor` is an optional integer of up to 2 digits;
    /// - `currency` is a three-letter currency code (`USD`, `EUR`, `GBP`).
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{cmp::Ordering, str::FromStr as _};

    use rust_decimal::Decimal;

    use crate::Percent;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            money("123.45USD"),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );
        assert_eq!(money("99GBP").currency, Currency::Gbp);
        assert_eq!(money("0.5EUR").amount, decimal("0.5"));

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Us").is_err());
        assert!(Money::from_str("123.45RUB").is_err());
        assert!(Money::from_str("-1.00USD").is_err());
        assert!(Money::from_str("1.001USD").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(money("123.45USD").to_string(), "123.45USD");
        assert_eq!(money("123.00EUR").to_string(), "123EUR");
        assert_eq!(money("123.50GBP").to_string(), "123.5GBP");
    }

    #[test]
    fn adds_same_currency_only() {
        assert_eq!(
            money("10.50USD").checked_add(money("4.25USD")),
            Some(money("14.75USD")),
        );
        assert_eq!(money("10USD").checked_add(money("1EUR")), None);
    }

    #[test]
    fn refuses_overflowing_sum() {
        let max = Money {
            amount: Decimal::MAX,
            currency: Currency::Usd,
        };

        assert_eq!(max.checked_add(money("1USD")), None);
        assert_eq!(max.checked_add(Money::zero(Currency::Usd)), Some(max));
    }

    #[test]
    fn subtracts_down_to_zero() {
        assert_eq!(
            money("10USD").checked_sub(money("2.5USD")),
            Some(money("7.5USD")),
        );
        assert_eq!(
            money("10USD").checked_sub(money("20USD")),
            Some(Money::zero(Currency::Usd)),
        );
        assert_eq!(money("10USD").checked_sub(money("1GBP")), None);
    }

    #[test]
    fn orders_by_currency_first() {
        assert_eq!(
            money("10USD").cmp_by_currency(&money("20USD")),
            Ordering::Less,
        );
        assert_eq!(
            money("1EUR").cmp_by_currency(&money("500USD")),
            Ordering::Greater,
        );
        assert_eq!(
            money("7GBP").cmp_by_currency(&money("7GBP")),
            Ordering::Equal,
        );
    }

    #[test]
    fn takes_percent() {
        let ten = Percent::new(decimal("10")).unwrap();
        assert_eq!(money("199.99USD").percent(ten), money("20.00USD"));

        let third = Percent::new(decimal("33.3")).unwrap();
        assert_eq!(money("100EUR").percent(third), money("33.30EUR"));
    }
}
