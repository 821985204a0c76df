//! Calendar label localization.
//!
//! Release dates are displayed and queried by their Spanish month and weekday
//! names. The vocabulary is closed (12 months, 7 weekdays), so the tables are
//! constant arrays keyed by the canonical English name.

mod error;
mod tables;

pub use error::{LocaleError, Result};
pub use tables::{
    MONTH_LABELS, WEEKDAY_LABELS, localize_month, localize_weekday, month_label, weekday_label,
};
