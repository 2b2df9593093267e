//! Command palette: a fixed keyword matcher over fleet questions.
//!
//! A query is split into lowercase words and scored against each intent's
//! keyword list. The intent with the most hits wins; ties go to the intent
//! listed first. Queries that hit nothing get a canned fallback. Answers
//! are built from the injected [`FleetRepository`], never from free text.

use crate::fleet::metrics::{
    bookings_per_day, commission_pence, drivers_by_status, drivers_on_shift, fleet_utilization,
    format_pence, gross_fares_pence, jobs_on,
};
use crate::fleet::{BookingStatus, FleetRepository};
use chrono::NaiveDateTime;
use std::fmt;

/// What a palette query is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteIntent {
    /// Driver availability.
    Drivers,
    /// Job counts and upcoming pickups.
    Bookings,
    /// Fares and commission.
    Revenue,
    /// Vehicles in use.
    Utilization,
    /// What the palette can answer.
    Help,
}

/// Keyword table, in tie-break order.
const KEYWORDS: &[(PaletteIntent, &[&str])] = &[
    (
        PaletteIntent::Drivers,
        &["driver", "drivers", "available", "online", "offline", "shift", "break"],
    ),
    (
        PaletteIntent::Bookings,
        &["booking", "bookings", "job", "jobs", "trip", "trips", "scheduled", "pickup", "pickups"],
    ),
    (
        PaletteIntent::Revenue,
        &["revenue", "fare", "fares", "gross", "earnings", "commission", "takings", "money"],
    ),
    (
        PaletteIntent::Utilization,
        &["utilization", "utilisation", "fleet", "vehicle", "vehicles", "car", "cars", "busy"],
    ),
    (PaletteIntent::Help, &["help", "commands", "how", "what"]),
];

/// Example queries listed by the help answer.
const EXAMPLES: &[&str] = &[
    "how many drivers are available",
    "bookings today",
    "what is today's revenue",
    "fleet utilization",
];

impl PaletteIntent {
    /// Heading shown above the answer.
    pub fn title(self) -> &'static str {
        match self {
            Self::Drivers => "Drivers",
            Self::Bookings => "Bookings",
            Self::Revenue => "Revenue",
            Self::Utilization => "Fleet utilization",
            Self::Help => "Palette help",
        }
    }
}

impl fmt::Display for PaletteIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Answer to one palette query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteResponse {
    /// Matched intent; `None` for the fallback answer.
    pub intent: Option<PaletteIntent>,
    /// Heading.
    pub title: String,
    /// Answer body, one entry per line.
    pub lines: Vec<String>,
}

impl fmt::Display for PaletteResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Picks the intent for `query`, or `None` when no keyword matches.
pub fn classify(query: &str) -> Option<PaletteIntent> {
    let lowered = query.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let mut best: Option<(PaletteIntent, usize)> = None;
    for (intent, keywords) in KEYWORDS {
        let hits = words.iter().filter(|w| keywords.contains(*w)).count();
        if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
            best = Some((*intent, hits));
        }
    }
    best.map(|(intent, _)| intent)
}

/// Answers `query` from `fleet` as of `now`.
pub fn respond(query: &str, fleet: &dyn FleetRepository, now: NaiveDateTime) -> PaletteResponse {
    let Some(intent) = classify(query) else {
        tracing::debug!(query, "palette query matched no intent");
        return PaletteResponse {
            intent: None,
            title: "No match".to_string(),
            lines: vec![
                "I couldn't match that question.".to_string(),
                "Try asking about drivers, bookings, revenue or utilization.".to_string(),
            ],
        };
    };
    tracing::debug!(query, %intent, "palette query matched");

    let today = now.date();
    let lines = match intent {
        PaletteIntent::Drivers => {
            let mut lines = vec![format!(
                "{} of {} drivers on shift",
                drivers_on_shift(fleet),
                fleet.drivers().len()
            )];
            lines.extend(
                drivers_by_status(fleet)
                    .into_iter()
                    .map(|(status, count)| format!("{}: {count}", status.label())),
            );
            lines
        }
        PaletteIntent::Bookings => {
            let upcoming = fleet
                .bookings()
                .iter()
                .filter(|b| b.status == BookingStatus::Scheduled && b.pickup_at > now)
                .count();
            let week: usize = bookings_per_day(fleet, today, 7)
                .iter()
                .map(|(_, n)| n)
                .sum();
            vec![
                format!("{} jobs today", jobs_on(fleet, today)),
                format!("{upcoming} scheduled pickups ahead"),
                format!("{week} jobs in the last 7 days"),
            ]
        }
        PaletteIntent::Revenue => vec![
            format!("Gross fares today: {}", format_pence(gross_fares_pence(fleet, today))),
            format!("Commission today: {}", format_pence(commission_pence(fleet, today))),
        ],
        PaletteIntent::Utilization => match fleet_utilization(fleet) {
            Some(ratio) => vec![format!(
                "{:.0}% of active vehicles are on a job",
                ratio * 100.0
            )],
            None => vec!["No active vehicles".to_string()],
        },
        PaletteIntent::Help => {
            let mut lines = vec!["Ask about drivers, bookings, revenue or utilization, e.g.".to_string()];
            lines.extend(EXAMPLES.iter().map(|q| format!("\"{q}\"")));
            lines
        }
    };

    PaletteResponse {
        intent: Some(intent),
        title: intent.title().to_string(),
        lines,
    }
}
