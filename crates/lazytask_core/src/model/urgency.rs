//! Due-date urgency classification.
//!
//! # Responsibility
//! - Map time remaining until a due date onto a display urgency band.
//!
//! # Invariants
//! - Bands are exhaustive and disjoint.
//! - Each band is inclusive on its lower bound: exactly 24h is `Soon`,
//!   exactly 7 days is `Normal`.

use chrono::Duration;

/// Urgency band for a task relative to the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Due date already passed.
    Overdue,
    /// Due within the next 24 hours.
    Urgent,
    /// Due within the next 7 days.
    Soon,
    /// Due in 7 days or more.
    Normal,
}

impl Urgency {
    /// Stable lowercase label for logs and plain output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Urgent => "urgent",
            Self::Soon => "soon",
            Self::Normal => "normal",
        }
    }

    /// Display color name consumed by list rendering.
    pub fn color_name(self) -> &'static str {
        match self {
            Self::Overdue => "gray",
            Self::Urgent => "red",
            Self::Soon => "orange",
            Self::Normal => "green",
        }
    }
}

/// Classifies time remaining until a due date.
pub fn classify(time_remaining: Duration) -> Urgency {
    if time_remaining < Duration::zero() {
        Urgency::Overdue
    } else if time_remaining < Duration::hours(24) {
        Urgency::Urgent
    } else if time_remaining < Duration::days(7) {
        Urgency::Soon
    } else {
        Urgency::Normal
    }
}
