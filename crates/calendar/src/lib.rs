//! # smy-calendar
//!
//! Pure calendar arithmetic for standard-year synthesis.
//!
//! Source records live on the Gregorian calendar (leap years included); the
//! synthesized year lives on a fixed 365-day placeholder year. This crate
//! holds both sides of that mapping.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["u8 (1..=12)"] -->|"CalendarMonth::new()"| B["CalendarMonth"]
//!     B -->|".days_in(year)"| C["Gregorian month length"]
//!     B -->|".noleap_days()"| D["placeholder month length"]
//!     E["(year, CalendarMonth)"] --> F["MonthKey"]
//!     G["(month, day, hour)"] -->|"placeholder_hour_index()"| H["0..8760"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use smy_calendar::{CalendarMonth, MonthKey, is_leap_year, placeholder_hour_index};
//!
//! let feb = CalendarMonth::new(2).unwrap();
//! assert_eq!(feb.days_in(2000), 29);
//! assert_eq!(feb.noleap_days(), 28);
//! assert!(is_leap_year(2000));
//!
//! let key = MonthKey::new(2012, feb);
//! assert_eq!(key.days(), 29);
//!
//! // Mar 1 00:00 of the placeholder year
//! assert_eq!(placeholder_hour_index(CalendarMonth::MARCH, 1, 0).unwrap(), 59 * 24);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Calendar-month newtype and Gregorian leap rules |
//! | `key` | `(year, month)` key used by every grouping |
//! | `placeholder` | The 8760-hour placeholder year |
//! | `error` | Error types |

mod error;
mod key;
mod month;
mod placeholder;

pub use error::CalendarError;
pub use key::MonthKey;
pub use month::{CalendarMonth, days_in_year, is_leap_year};
pub use placeholder::{
    HOURS_PER_DAY, PLACEHOLDER_HOURS, PLACEHOLDER_YEAR, placeholder_hour_index,
    placeholder_month_start_hour,
};
