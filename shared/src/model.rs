//! Content model for the landing page sections.

use serde::{Deserialize, Serialize};

/// One day of the tour schedule. Rendered as a single disclosure item in the
/// schedule accordion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayItinerary {
    pub day: u8,
    pub title: String,
    pub description: String,
    pub locations: Vec<TourLocation>,
    pub highlights: Vec<String>,
    pub notes: Option<String>,
}

/// A named stop within a tour day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TourLocation {
    pub name: String,
    pub description: String,
    pub activities: Vec<String>,
}

/// One FAQ question with its answer paragraph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A tour departure card ("TOUR 1: JUNE 16-25, 2026" plus bullet details).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TourDate {
    pub label: String,
    pub details: Vec<String>,
}

/// An entry in the "What's included" grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IncludedItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}
