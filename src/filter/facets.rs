use crate::entity::EventCategory;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Time window relative to "now"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Timeframe {
    #[default]
    All,
    Upcoming,
    Past,
    Today,
    Week,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::All => "all",
            Timeframe::Upcoming => "upcoming",
            Timeframe::Past => "past",
            Timeframe::Today => "today",
            Timeframe::Week => "week",
        }
    }

    /// Caption shown next to the result count
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::All => "All time",
            Timeframe::Upcoming => "Upcoming events",
            Timeframe::Past => "Past events",
            Timeframe::Today => "Today",
            Timeframe::Week => "This week",
        }
    }

    /// Whether an event starting at `start` falls in this window.
    ///
    /// `today` is the calendar day of `now` in `now`'s offset; `week` is
    /// `[now, now + 7 days]` inclusive at both ends.
    pub fn contains(&self, start: DateTime<Utc>, now: DateTime<FixedOffset>) -> bool {
        let now_utc = now.with_timezone(&Utc);
        match self {
            Timeframe::All => true,
            Timeframe::Upcoming => start > now_utc,
            Timeframe::Past => start < now_utc,
            Timeframe::Today => start.with_timezone(now.offset()).date_naive() == now.date_naive(),
            Timeframe::Week => start >= now_utc && start <= now_utc + Duration::days(7),
        }
    }
}

impl From<&str> for Timeframe {
    fn from(value: &str) -> Self {
        match value {
            "upcoming" => Timeframe::Upcoming,
            "past" => Timeframe::Past,
            "today" => Timeframe::Today,
            "week" => Timeframe::Week,
            _ => Timeframe::All,
        }
    }
}

impl From<String> for Timeframe {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Category facet: everything, or exactly one category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Events",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Uncategorized events only pass `All`
    pub fn matches(&self, category: Option<EventCategory>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(*wanted),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        EventCategory::from_name(value)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}

/// Result ordering by start date
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortOrder {
    /// Soonest first
    #[default]
    Upcoming,
    /// Latest first
    Recent,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Upcoming => "upcoming",
            SortOrder::Recent => "recent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Upcoming => "Soonest First",
            SortOrder::Recent => "Latest First",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value {
            "recent" => SortOrder::Recent,
            _ => SortOrder::Upcoming,
        }
    }
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
