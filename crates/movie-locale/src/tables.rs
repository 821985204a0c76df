use chrono::{Month, Weekday};

use crate::error::{LocaleError, Result};

/// English month names paired with their Spanish labels, January first.
pub const MONTH_LABELS: [(&str, &str); 12] = [
    ("January", "Enero"),
    ("February", "Febrero"),
    ("March", "Marzo"),
    ("April", "Abril"),
    ("May", "Mayo"),
    ("June", "Junio"),
    ("July", "Julio"),
    ("August", "Agosto"),
    ("September", "Septiembre"),
    ("October", "Octubre"),
    ("November", "Noviembre"),
    ("December", "Diciembre"),
];

/// English weekday names paired with their Spanish labels, Monday first.
pub const WEEKDAY_LABELS: [(&str, &str); 7] = [
    ("Monday", "Lunes"),
    ("Tuesday", "Martes"),
    ("Wednesday", "Miércoles"),
    ("Thursday", "Jueves"),
    ("Friday", "Viernes"),
    ("Saturday", "Sábado"),
    ("Sunday", "Domingo"),
];

fn lookup(table: &[(&str, &'static str)], name: &str) -> Result<&'static str> {
    table
        .iter()
        .find(|(english, _)| *english == name)
        .map(|(_, label)| *label)
        .ok_or_else(|| LocaleError::UnknownLabel {
            name: name.to_string(),
        })
}

/// Translate a canonical English month name (`"January"`) to its label.
///
/// # Errors
///
/// Returns [`LocaleError::UnknownLabel`] for anything outside the 12 names.
///
/// # Examples
///
/// ```
/// use movie_locale::localize_month;
///
/// assert_eq!(localize_month("March").unwrap(), "Marzo");
/// assert!(localize_month("march").is_err());
/// ```
pub fn localize_month(name: &str) -> Result<&'static str> {
    lookup(&MONTH_LABELS, name)
}

/// Translate a canonical English weekday name (`"Monday"`) to its label.
///
/// # Errors
///
/// Returns [`LocaleError::UnknownLabel`] for anything outside the 7 names.
pub fn localize_weekday(name: &str) -> Result<&'static str> {
    lookup(&WEEKDAY_LABELS, name)
}

/// Label of a typed month; cannot fail.
pub fn month_label(month: Month) -> &'static str {
    MONTH_LABELS[month.number_from_month() as usize - 1].1
}

/// Label of a typed weekday; cannot fail.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[weekday.num_days_from_monday() as usize].1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn every_calendar_month_has_a_label() {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(2001, month, 1).unwrap();
            let english = date.format("%B").to_string();
            assert_eq!(
                localize_month(&english).unwrap(),
                MONTH_LABELS[date.month0() as usize].1
            );
        }
    }

    #[test]
    fn every_weekday_has_a_label() {
        // 2001-01-01 was a Monday.
        for offset in 0..7 {
            let date = NaiveDate::from_ymd_opt(2001, 1, 1 + offset).unwrap();
            let english = date.format("%A").to_string();
            let label = localize_weekday(&english).unwrap();
            assert_eq!(
                label,
                WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize].1
            );
        }
    }

    #[test]
    fn typed_labels_agree_with_names() {
        assert_eq!(month_label(Month::January), "Enero");
        assert_eq!(month_label(Month::December), "Diciembre");
        assert_eq!(weekday_label(Weekday::Mon), "Lunes");
        assert_eq!(weekday_label(Weekday::Sun), "Domingo");
        assert_eq!(
            weekday_label(Weekday::Wed),
            localize_weekday("Wednesday").unwrap()
        );
    }

    #[test]
    fn accented_labels() {
        assert_eq!(localize_weekday("Wednesday").unwrap(), "Miércoles");
        assert_eq!(localize_weekday("Saturday").unwrap(), "Sábado");
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            localize_month("Smarch"),
            Err(LocaleError::UnknownLabel {
                name: "Smarch".to_string()
            })
        );
        assert!(localize_weekday("Enero").is_err());
        assert!(localize_month("").is_err());
    }
}
