//! Type-safe enumerations for coded survey answers.
//!
//! These enums give compile-time safety for values that the paper form
//! represents as closed choice lists. Each carries a short submission code
//! (what gets stored) and a display label (what the form shows).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Marital status at booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Cohabiting,
}

impl MaritalStatus {
    /// Returns the stored submission code.
    pub fn code(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Cohabiting => "cohabiting",
        }
    }

    /// Returns the display label as it appears on the form.
    pub fn label(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Cohabiting => "Cohabiting",
        }
    }

    pub const ALL: &'static [MaritalStatus] = &[
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Cohabiting,
    ];
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MaritalStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(MaritalStatus::Single),
            "married" => Ok(MaritalStatus::Married),
            "cohabiting" => Ok(MaritalStatus::Cohabiting),
            _ => Err(ModelError::UnknownMaritalStatus(s.to_string())),
        }
    }
}

/// Smoking status at booking.
///
/// The form distinguishes when a smoker gave up relative to the pregnancy,
/// not just whether she smokes now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    Never,
    /// Gave up prior to pregnancy.
    Prior,
    /// Gave up during pregnancy.
    During,
    Current,
}

impl SmokingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SmokingStatus::Never => "never",
            SmokingStatus::Prior => "prior",
            SmokingStatus::During => "during",
            SmokingStatus::Current => "current",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SmokingStatus::Never => "Never",
            SmokingStatus::Prior => "Gave up prior to pregnancy",
            SmokingStatus::During => "Gave up during pregnancy",
            SmokingStatus::Current => "Current",
        }
    }

    pub const ALL: &'static [SmokingStatus] = &[
        SmokingStatus::Never,
        SmokingStatus::Prior,
        SmokingStatus::During,
        SmokingStatus::Current,
    ];
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SmokingStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" => Ok(SmokingStatus::Never),
            "prior" => Ok(SmokingStatus::Prior),
            "during" => Ok(SmokingStatus::During),
            "current" => Ok(SmokingStatus::Current),
            _ => Err(ModelError::UnknownSmokingStatus(s.to_string())),
        }
    }
}

/// Explicit tri-state answer for questions that may legitimately be skipped.
///
/// `NotAnswered` is a real, testable value rather than a nullable bool, so
/// "the question was never reached" is distinguishable from "No".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    #[default]
    #[serde(rename = "not-answered")]
    NotAnswered,
}

impl Answer {
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, Answer::NotAnswered)
    }

    /// Label for listings: `Yes`, `No`, or empty when unanswered.
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::NotAnswered => "",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Answer {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "true" => Ok(Answer::Yes),
            "no" | "false" => Ok(Answer::No),
            "" | "not-answered" | "unanswered" => Ok(Answer::NotAnswered),
            _ => Err(ModelError::UnknownAnswer(s.to_string())),
        }
    }
}

/// Render a plain bool the way the form does.
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
