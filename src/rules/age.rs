//! `cdate>8h`, `MDate <= 90m`: which timestamp, how to compare, and against how long.

use crate::Error;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static AGE_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(cdate|mdate)\s?(>=|<=|>|<|=)\s?([0-9]+)([smhd])$")
        .expect("Invalid age rule regex")
});

/// Which timestamp of a file the rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Created,
    Modified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Less,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    Greater,
}

impl Comparator {
    /// `=`, `>=` and `<=` all accept an age of exactly zero.
    #[must_use]
    pub const fn accepts_zero(self) -> bool {
        matches!(self, Self::Equal | Self::GreaterOrEqual | Self::LessOrEqual)
    }

    #[must_use]
    pub const fn accepts_older(self) -> bool {
        matches!(self, Self::Greater | Self::GreaterOrEqual)
    }

    #[must_use]
    pub const fn accepts_younger(self) -> bool {
        matches!(self, Self::Less | Self::LessOrEqual)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// Seconds per unit.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 3600,
            Self::Day => 86_400,
        }
    }
}

/// Parsed age rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRule {
    pub field: DateField,
    pub comparator: Comparator,
    pub value: u64,
    pub unit: TimeUnit,
}

impl AgeRule {
    /// Threshold in seconds, saturating instead of overflowing on absurd values.
    #[must_use]
    pub const fn threshold_secs(&self) -> u64 {
        self.value.saturating_mul(self.unit.seconds())
    }
}

impl FromStr for AgeRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Parse(format!("invalid age filter syntax: '{s}'"));
        let caps = AGE_RULE.captures(s).ok_or_else(invalid)?;

        let field = match caps[1].to_lowercase().as_str() {
            "cdate" => DateField::Created,
            _ => DateField::Modified,
        };
        let comparator = match &caps[2] {
            "<" => Comparator::Less,
            "<=" => Comparator::LessOrEqual,
            "=" => Comparator::Equal,
            ">=" => Comparator::GreaterOrEqual,
            _ => Comparator::Greater,
        };
        let value = caps[3].parse::<u64>().map_err(|_| invalid())?;
        let unit = match caps[4].to_lowercase().as_str() {
            "s" => TimeUnit::Second,
            "m" => TimeUnit::Minute,
            "h" => TimeUnit::Hour,
            _ => TimeUnit::Day,
        };

        Ok(Self {
            field,
            comparator,
            value,
            unit,
        })
    }
}
