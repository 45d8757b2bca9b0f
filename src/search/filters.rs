use crate::gbif::models::Occurrence;
use chrono::NaiveDate;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum KingdomFilter {
    #[default]
    All,
    Only(String),
}

impl KingdomFilter {
    /// `"all"` or an empty value disables the filter.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => KingdomFilter::All,
            Some(value) if value.eq_ignore_ascii_case("all") => KingdomFilter::All,
            Some(value) => KingdomFilter::Only(value.to_string()),
        }
    }

    pub fn matches(&self, kingdom: Option<&str>) -> bool {
        match self {
            KingdomFilter::All => true,
            KingdomFilter::Only(wanted) => {
                kingdom.is_some_and(|kingdom| kingdom.eq_ignore_ascii_case(wanted))
            }
        }
    }
}

/// Inclusive month range. `from > to` wraps over the new year, so `11..=2` is Nov to Feb.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MonthRange {
    from: u32,
    to: u32,
}

impl MonthRange {
    pub fn new(from: u32, to: u32) -> Option<Self> {
        let valid = 1..=12;
        (valid.contains(&from) && valid.contains(&to)).then_some(Self { from, to })
    }

    pub fn contains(&self, month: u32) -> bool {
        if self.from <= self.to {
            (self.from..=self.to).contains(&month)
        } else {
            month >= self.from || month <= self.to
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OccurrenceFilter {
    pub kingdom: KingdomFilter,
    pub require_media: bool,
    pub locality: Option<String>,
    pub months: Option<MonthRange>,
    pub dates: Option<(NaiveDate, NaiveDate)>,
}

impl OccurrenceFilter {
    pub fn with_media() -> Self {
        Self {
            require_media: true,
            ..Default::default()
        }
    }

    pub fn kingdom(mut self, kingdom: KingdomFilter) -> Self {
        self.kingdom = kingdom;
        self
    }

    pub fn locality(mut self, locality: Option<String>) -> Self {
        self.locality = locality
            .map(|locality| locality.trim().to_lowercase())
            .filter(|locality| !locality.is_empty());
        self
    }

    pub fn months(mut self, months: Option<MonthRange>) -> Self {
        self.months = months;
        self
    }

    pub fn dates(mut self, dates: Option<(NaiveDate, NaiveDate)>) -> Self {
        self.dates = dates;
        self
    }

    pub fn matches(&self, occurrence: &Occurrence) -> bool {
        if self.require_media && !occurrence.has_media() {
            return false;
        }
        if !self.kingdom.matches(occurrence.kingdom.as_deref()) {
            return false;
        }
        if let Some(needle) = &self.locality {
            let found = occurrence
                .locality
                .as_ref()
                .is_some_and(|locality| locality.to_lowercase().contains(needle));
            if !found {
                return false;
            }
        }
        if let Some(months) = &self.months {
            if !occurrence.month.is_some_and(|month| months.contains(month)) {
                return false;
            }
        }
        if let Some((from, to)) = &self.dates {
            if !occurrence
                .observed_on()
                .is_some_and(|date| (*from..=*to).contains(&date))
            {
                return false;
            }
        }
        true
    }
}
