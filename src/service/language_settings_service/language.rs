use strum::{AsRefStr, EnumString};
use time::{Date, Month};

///
/// Display language together with its static translation table.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, AsRefStr)]
pub enum Language {
    #[default]
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "fr")]
    French,
}

impl Language {
    pub fn today(self) -> &'static str {
        match self {
            Language::English => "Today",
            Language::French => "Aujourd'hui",
        }
    }

    pub fn yesterday(self) -> &'static str {
        match self {
            Language::English => "Yesterday",
            Language::French => "Hier",
        }
    }

    ///
    /// Formats date as day, abbreviated month and year, e.g. "15 Jan 2025"
    ///
    pub fn short_date(self, date: Date) -> String {
        format!(
            "{} {} {}",
            date.day(),
            self.month_abbreviation(date.month()),
            date.year()
        )
    }

    fn month_abbreviation(self, month: Month) -> &'static str {
        match self {
            Language::English => match month {
                Month::January => "Jan",
                Month::February => "Feb",
                Month::March => "Mar",
                Month::April => "Apr",
                Month::May => "May",
                Month::June => "Jun",
                Month::July => "Jul",
                Month::August => "Aug",
                Month::September => "Sep",
                Month::October => "Oct",
                Month::November => "Nov",
                Month::December => "Dec",
            },
            Language::French => match month {
                Month::January => "janv.",
                Month::February => "févr.",
                Month::March => "mars",
                Month::April => "avr.",
                Month::May => "mai",
                Month::June => "juin",
                Month::July => "juil.",
                Month::August => "août",
                Month::September => "sept.",
                Month::October => "oct.",
                Month::November => "nov.",
                Month::December => "déc.",
            },
        }
    }
}
