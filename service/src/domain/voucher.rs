//! [`Voucher`] definitions.

use std::sync::LazyLock;

use common::{unit, DateTimeOf, Percent};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discount voucher redeemable when placing an [`Order`].
///
/// [`Order`]: super::Order
#[derive(Clone, Debug)]
pub struct Voucher {
    /// ID of this [`Voucher`].
    pub id: Id,

    /// Unique [`Code`] of this [`Voucher`].
    pub code: Code,

    /// Discount this [`Voucher`] grants.
    pub discount: Percent,

    /// [`DateTime`] until which this [`Voucher`] can be redeemed.
    ///
    /// [`None`] means forever.
    ///
    /// [`DateTime`]: common::DateTime
    pub valid_until: Option<ExpirationDateTime>,

    /// Maximum number of times this [`Voucher`] can be redeemed.
    ///
    /// [`None`] means unlimited.
    pub max_redemptions: Option<u32>,

    /// Number of times this [`Voucher`] has been redeemed already.
    pub redemptions: u32,

    /// [`DateTime`] when this [`Voucher`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Voucher {
    /// Indicates whether this [`Voucher`] is past its validity period.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.valid_until.is_some_and(|at| at.is_past())
    }

    /// Indicates whether this [`Voucher`] can be redeemed once more.
    #[must_use]
    pub fn is_redeemable(&self) -> bool {
        !self.is_expired()
            && self.max_redemptions.map_or(true, |max| self.redemptions < max)
    }
}

/// ID of a [`Voucher`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Generates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Code of a [`Voucher`] typed in by guests.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Code(String);

impl Code {
    /// Creates a new [`Code`] if the given `code` is valid.
    ///
    /// The `code` is trimmed and uppercased first, so guests may type it in
    /// any case.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Option<Self> {
        let code = code.as_ref().trim().to_uppercase();
        Self::check(&code).then_some(Self(code))
    }

    /// Checks whether the given `code` is a valid [`Code`].
    fn check(code: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Code`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Z0-9-]{4,32}$").expect("valid regex")
        });

        REGEX.is_match(code.as_ref())
    }
}

impl std::str::FromStr for Code {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Code`")
    }
}

/// [`DateTime`] when a [`Voucher`] expires.
///
/// [`DateTime`]: common::DateTime
pub type ExpirationDateTime = DateTimeOf<(Voucher, unit::Expiration)>;

/// [`DateTime`] when a [`Voucher`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Voucher, unit::Creation)>;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::Percent;
    use rust_decimal::Decimal;

    use super::{Code, CreationDateTime, ExpirationDateTime, Id, Voucher};

    fn voucher() -> Voucher {
        Voucher {
            id: Id::new(),
            code: Code::new("SUMMER-24").unwrap(),
            discount: Percent::new(Decimal::TEN).unwrap(),
            valid_until: None,
            max_redemptions: None,
            redemptions: 0,
            created_at: CreationDateTime::now(),
        }
    }

    #[test]
    fn normalizes_code() {
        assert_eq!(
            Code::new(" summer-24 ").map(|c| c.to_string()),
            Some("SUMMER-24".to_owned()),
        );
        assert!(Code::new("ab").is_none());
        assert!(Code::new("SUMMER_24").is_none());
    }

    #[test]
    fn checks_redeemability() {
        let mut v = voucher();
        assert!(v.is_redeemable());

        v.max_redemptions = Some(2);
        v.redemptions = 2;
        assert!(!v.is_redeemable());

        v.max_redemptions = None;
        v.valid_until =
            Some(ExpirationDateTime::now() - Duration::from_secs(60));
        assert!(v.is_expired());
        assert!(!v.is_redeemable());
    }
}
