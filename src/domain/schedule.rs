//! Countdown calendar: which milestone today's post counts down to, and when the bot retires.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// The event a post counts down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Inauguration,
    TermEnd,
}

/// Threshold dates. Each date is compared at 00:00 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub inauguration: NaiveDate,
    pub term_end: NaiveDate,
    /// On or after this date a run is a no-op.
    pub retire_on: NaiveDate,
}

impl Default for Schedule {
    fn default() -> Self {
        let jan_20 = |year| NaiveDate::from_ymd_opt(year, 1, 20).expect("January 20th is a valid date");
        Self {
            inauguration: jan_20(2025),
            term_end: jan_20(2029),
            retire_on: jan_20(2029),
        }
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

impl Schedule {
    /// Milestone and target date for a post written at `now`.
    pub fn milestone_at(&self, now: DateTime<Utc>) -> (Milestone, NaiveDate) {
        if now < start_of_day(self.inauguration) {
            (Milestone::Inauguration, self.inauguration)
        } else {
            (Milestone::TermEnd, self.term_end)
        }
    }

    pub fn is_retired(&self, now: DateTime<Utc>) -> bool {
        now >= start_of_day(self.retire_on)
    }

    /// Build the user prompt for a run started at `now`.
    pub fn prompt_for(&self, now: DateTime<Utc>) -> Prompt {
        let (milestone, target) = self.milestone_at(now);
        Prompt::new(now, milestone, target)
    }
}

/// User-turn instruction sent to the text generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub milestone: Milestone,
    pub target: NaiveDate,
    pub text: String,
}

impl Prompt {
    pub fn new(now: DateTime<Utc>, milestone: Milestone, target: NaiveDate) -> Self {
        let today = now.format("%B %-d, %Y");
        let target_str = long_date_with_ordinal(target);
        let text = match milestone {
            Milestone::Inauguration => format!(
                "Today is {}. Write a short, encouraging post about how many days are left until Trump's inauguration. Include the exact number of days until {}. Trump is not a good guy. Say something randomly positive to get people through this.",
                today, target_str
            ),
            Milestone::TermEnd => format!(
                "Today is {}. Write a short, encouraging post about how many days are left of Trump's 2nd term in office. Include the exact number of days until {}. Trump is not a good guy. Say something randomly positive to get people through this.",
                today, target_str
            ),
        };
        Self {
            milestone,
            target,
            text,
        }
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// "January 20th, 2025".
pub fn long_date_with_ordinal(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}
