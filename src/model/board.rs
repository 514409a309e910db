use chrono::{Datelike, Local, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::task::TaskItem;

/// A day-of-week key for the week board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All seven days, Monday first. This is the board's key order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Short label for tab bars and CLI output
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Parse a day name, accepting short and long forms in any case
    pub fn parse(s: &str) -> Option<Day> {
        match s.to_ascii_lowercase().as_str() {
            "mon" | "monday" => Some(Day::Mon),
            "tue" | "tues" | "tuesday" => Some(Day::Tue),
            "wed" | "wednesday" => Some(Day::Wed),
            "thu" | "thur" | "thurs" | "thursday" => Some(Day::Thu),
            "fri" | "friday" => Some(Day::Fri),
            "sat" | "saturday" => Some(Day::Sat),
            "sun" | "sunday" => Some(Day::Sun),
            _ => None,
        }
    }

    /// The current local day of week
    pub fn today() -> Day {
        Day::from(Local::now().weekday())
    }

    /// Position in `Day::ALL` (0 = Mon)
    pub fn index(self) -> usize {
        Day::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }

    /// Next day, wrapping Sun → Mon
    pub fn next(self) -> Day {
        Day::ALL[(self.index() + 1) % 7]
    }

    /// Previous day, wrapping Mon → Sun
    pub fn prev(self) -> Day {
        Day::ALL[(self.index() + 6) % 7]
    }
}

impl From<Weekday> for Day {
    fn from(w: Weekday) -> Day {
        match w {
            Weekday::Mon => Day::Mon,
            Weekday::Tue => Day::Tue,
            Weekday::Wed => Day::Wed,
            Weekday::Thu => Day::Thu,
            Weekday::Fri => Day::Fri,
            Weekday::Sat => Day::Sat,
            Weekday::Sun => Day::Sun,
        }
    }
}

/// The week board: one task collection per day, plus the active day selector.
/// All seven keys exist at all times, even when empty.
#[derive(Debug, Clone)]
pub struct Board {
    days: IndexMap<Day, Vec<TaskItem>>,
    /// The day operations target. `None` means nothing is selected yet.
    pub current: Option<Day>,
}

impl Board {
    pub fn new() -> Self {
        let mut days = IndexMap::with_capacity(7);
        for day in Day::ALL {
            days.insert(day, Vec::new());
        }
        Board {
            days,
            current: None,
        }
    }

    pub fn tasks(&self, day: Day) -> &[TaskItem] {
        // All keys are inserted in new(), so the lookup cannot miss
        &self.days[&day]
    }

    pub fn tasks_mut(&mut self, day: Day) -> &mut Vec<TaskItem> {
        self.days.get_mut(&day).unwrap()
    }

    /// The collection for the selected day, if one is selected
    pub fn current_tasks(&self) -> Option<&[TaskItem]> {
        self.current.map(|d| self.tasks(d))
    }

    pub fn current_tasks_mut(&mut self) -> Option<&mut Vec<TaskItem>> {
        self.current.map(|d| self.days.get_mut(&d).unwrap())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
