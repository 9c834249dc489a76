use chrono::{Datelike, Days, NaiveDate};

/// The eight concrete dates from `start` through `start + 7` days.
///
/// Birthday matching is membership of the contact's (month, day) in this
/// set, ignoring the birth year. Materializing the dates sidesteps the
/// classic month/day range-comparison bugs around year end: a window such
/// as Dec 28 .. Jan 4 is just eight dates, two months represented.
/// Feb 29 birthdays match only in years where the window actually
/// contains a Feb 29.
#[derive(Debug, Clone)]
pub struct BirthdayWindow {
    dates: Vec<NaiveDate>,
}

impl BirthdayWindow {
    pub fn starting(start: NaiveDate) -> Self {
        let dates = (0..8)
            .filter_map(|offset| start.checked_add_days(Days::new(offset)))
            .collect();
        Self { dates }
    }

    pub fn contains_birthday(&self, birth_date: NaiveDate) -> bool {
        let month_day = (birth_date.month(), birth_date.day());
        self.dates
            .iter()
            .any(|d| (d.month(), d.day()) == month_day)
    }
}
