//! `5 cdate desc`: keep the first N files of an ordering, hand over the rest.

use crate::Error;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static CAP_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+)\s?(cdate|mdate|name)\s?(asc|desc)?$")
        .expect("Invalid cap rule regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Created,
    Modified,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Parsed cap rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapRule {
    pub count: usize,
    pub field: SortField,
    pub order: SortOrder,
}

impl FromStr for CapRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Parse(format!("invalid cap filter syntax: '{s}'"));
        let caps = CAP_RULE.captures(s).ok_or_else(invalid)?;

        let count = caps[1].parse::<usize>().map_err(|_| invalid())?;
        let field = match caps[2].to_lowercase().as_str() {
            "cdate" => SortField::Created,
            "mdate" => SortField::Modified,
            _ => SortField::Name,
        };
        let order = match caps.get(3).map(|m| m.as_str().to_lowercase()).as_deref() {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        Ok(Self {
            count,
            field,
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn order_defaults_to_ascending() {
        let rule: CapRule = "1 cdate".parse().unwrap();
        assert_eq!(
            rule,
            CapRule {
                count: 1,
                field: SortField::Created,
                order: SortOrder::Asc,
            }
        );
    }

    #[test]
    fn parses_all_parts() {
        let rule: CapRule = "2 NAME Desc".parse().unwrap();
        assert_eq!(rule.count, 2);
        assert_eq!(rule.field, SortField::Name);
        assert_eq!(rule.order, SortOrder::Desc);
    }

    #[test]
    fn whitespace_is_optional() {
        let rule: CapRule = "10mdateasc".parse().unwrap();
        assert_eq!(rule.count, 10);
        assert_eq!(rule.field, SortField::Modified);
    }

    #[test]
    fn rejects_malformed() {
        for text in ["", "cdate", "5", "5 size", "-1 name", "5 name up", "5  name"] {
            let err = text.parse::<CapRule>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{text:?} should not parse");
        }
    }
}
