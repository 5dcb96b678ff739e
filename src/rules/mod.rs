//! Compact rule strings that parametrize the age and cap filters.
//!
//! ```
//! use paku::rules::{AgeRule, CapRule, Comparator, DateField, SortField, SortOrder, TimeUnit};
//!
//! let age: AgeRule = "cdate>8h".parse().unwrap();
//! assert_eq!(age.field, DateField::Created);
//! assert_eq!(age.comparator, Comparator::Greater);
//! assert_eq!(age.threshold_secs(), 8 * 3600);
//!
//! let cap: CapRule = "5 mdate desc".parse().unwrap();
//! assert_eq!(cap.count, 5);
//! assert_eq!(cap.field, SortField::Modified);
//! assert_eq!(cap.order, SortOrder::Desc);
//! ```

mod age;
mod cap;

pub use self::age::{AgeRule, Comparator, DateField, TimeUnit};
pub use self::cap::{CapRule, SortField, SortOrder};
