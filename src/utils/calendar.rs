use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::{Result, SightingError};
use crate::utils::constants::{ENGLISH_MONTHS, QUERY_DATE_FORMAT, SPANISH_MONTHS};

/// Fixed month-name table.
///
/// Month keys never depend on the process locale; pick the table explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MonthNames {
    #[default]
    English,
    Spanish,
}

impl MonthNames {
    /// All twelve names in calendar order
    pub fn table(&self) -> &'static [&'static str; 12] {
        match self {
            MonthNames::English => &ENGLISH_MONTHS,
            MonthNames::Spanish => &SPANISH_MONTHS,
        }
    }


    /// View month-keyed results January first instead of alphabetically
    pub fn in_calendar_order<'a, V>(
        &self,
        by_month: &'a BTreeMap<&'static str, V>,
    ) -> CalendarOrder<'a, V> {
        CalendarOrder {
            names: *self,
            by_month,
        }
    }
}

/// Month-keyed map walked in calendar order; serializes as a JSON object
/// whose keys keep that order.
pub struct CalendarOrder<'a, V> {
    names: MonthNames,
    by_month: &'a BTreeMap<&'static str, V>,
}

impl<'a, V: 'a> CalendarOrder<'a, V> {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'a V)> + 'a {
        let by_month = self.by_month;
        self.names
            .table()
            .iter()
            .filter_map(move |&month| by_month.get(month).map(|value| (month, value)))
    }
}

impl<V: Serialize> Serialize for CalendarOrder<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Parse a `YYYY-MM-DD` query date, rejecting anything else
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), QUERY_DATE_FORMAT).map_err(|_| {
        SightingError::InvalidArgument(format!(
            "Invalid date: '{}'. Expected format: 'YYYY-MM-DD'",
            date_str
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(MonthNames::English.table()[0], "January");
        assert_eq!(MonthNames::English.table()[11], "December");
        assert_eq!(MonthNames::Spanish.table()[2], "Marzo");
    }

    #[test]
    fn test_calendar_order() {
        let by_month: BTreeMap<&'static str, usize> =
            [("March", 2), ("December", 3), ("January", 1), ("April", 0)]
                .into_iter()
                .collect();
        let ordered = MonthNames::English.in_calendar_order(&by_month);

        let months: Vec<&str> = ordered.iter().map(|(month, _)| month).collect();
        assert_eq!(months, vec!["January", "March", "April", "December"]);

        let json = serde_json::to_string(&ordered).unwrap();
        assert_eq!(json, r#"{"January":1,"March":2,"April":0,"December":3}"#);
    }

    #[test]
    fn test_calendar_order_spanish() {
        let by_month: BTreeMap<&'static str, usize> =
            [("Octubre", 1), ("Abril", 2)].into_iter().collect();
        let json = serde_json::to_string(&MonthNames::Spanish.in_calendar_order(&by_month)).unwrap();
        assert_eq!(json, r#"{"Abril":2,"Octubre":1}"#);
    }

    #[test]
    fn test_default_table_is_english() {
        assert_eq!(MonthNames::default(), MonthNames::English);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2020-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert!(parse_date("01/01/2020").is_err());
        assert!(parse_date("2020-02-30").is_err());
        assert!(parse_date("").is_err());
    }
}
