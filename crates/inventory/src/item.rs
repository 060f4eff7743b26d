use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Longest item name accepted, in characters.
pub const MAX_NAME_LEN: usize = 18;

/// Smallest and largest quantity a single item may carry.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 1000;

/// Largest unit price, in cents ($10,000.00).
pub const MAX_PRICE_CENTS: u64 = 1_000_000;

/// Item name: a single whitespace-free token of at most 18 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ValueObject for ItemName {}

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("item name cannot contain whitespace"));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "item name is {len} characters (max {MAX_NAME_LEN})"
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // `pad` so table columns honour width/alignment flags.
        f.pad(&self.0)
    }
}

/// Number of units on hand, in [1, 1000].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl ValueObject for Quantity {}

impl Quantity {
    pub fn new(value: u32) -> DomainResult<Self> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&value) {
            return Err(DomainError::validation(format!(
                "quantity {value} is outside {MIN_QUANTITY}..={MAX_QUANTITY}"
            )));
        }
        Ok(Self(value))
    }

    /// Parse a decimal integer, then range-check it.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let raw = input.trim();
        let value: i64 = raw
            .parse()
            .map_err(|_| DomainError::validation(format!("quantity {raw:?} is not an integer")))?;
        let value = u32::try_from(value).map_err(|_| {
            DomainError::validation(format!(
                "quantity {value} is outside {MIN_QUANTITY}..={MAX_QUANTITY}"
            ))
        })?;
        Self::new(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0.to_string())
    }
}

/// Unit price in cents, in [$0.00, $10,000.00].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub fn from_cents(cents: u64) -> DomainResult<Self> {
        if cents > MAX_PRICE_CENTS {
            return Err(Self::out_of_range(Money::from_cents(cents)));
        }
        Ok(Self(cents))
    }

    /// Parse a plain decimal such as `12`, `3.5` or `0.125`.
    ///
    /// The range check is applied to the exact value typed; only then is it rounded
    /// half away from zero to whole cents.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let raw = input.trim();
        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(DomainError::validation(format!("price {raw:?} is not a number")));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| Self::out_of_range(raw))?
        };
        let frac = frac.as_bytes();
        let digit = |i: usize| frac.get(i).map_or(0, |b| u64::from(b - b'0'));

        let exact = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(digit(0) * 10 + digit(1)))
            .ok_or_else(|| Self::out_of_range(raw))?;
        let has_remainder = frac.iter().skip(2).any(|b| *b != b'0');

        if negative && (exact > 0 || has_remainder) {
            return Err(Self::out_of_range(raw));
        }
        if exact > MAX_PRICE_CENTS || (exact == MAX_PRICE_CENTS && has_remainder) {
            return Err(Self::out_of_range(raw));
        }

        let cents = if digit(2) >= 5 { exact + 1 } else { exact };
        Ok(Self(cents))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Value of `quantity` units at this price.
    pub fn times(self, quantity: Quantity) -> Money {
        Money::from_cents(self.0 * u64::from(quantity.get()))
    }

    fn out_of_range(raw: impl core::fmt::Display) -> DomainError {
        DomainError::validation(format!("price {raw} is outside 0.00..=10000.00"))
    }
}

impl TryFrom<u64> for Price {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_cents(value)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&Money::from_cents(self.0), f)
    }
}

/// An amount of money in cents. Totals are kept exact; nothing is stored as a float.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: ItemName,
    quantity: Quantity,
    price: Price,
}

impl Item {
    pub fn new(name: ItemName, quantity: Quantity, price: Price) -> Self {
        Self {
            name,
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// quantity × price
    pub fn value(&self) -> Money {
        self.price.times(self.quantity)
    }
}
