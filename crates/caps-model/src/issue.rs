//! Structured validation verdicts.
//!
//! Every failure the engine can produce is a user-input-correction issue,
//! never a system fault, so issues are plain data the form layer can group
//! and display rather than exceptions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The thematic grouping of case fields a failed check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    One,
    Two,
    Three,
}

impl Section {
    /// Short tag used as the message prefix.
    pub fn tag(&self) -> &'static str {
        match self {
            Section::One => "Section 1",
            Section::Two => "Section 2",
            Section::Three => "Section 3",
        }
    }

    /// Full heading as printed on the form.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::One => "Section 1: Woman's details",
            Section::Two => "Section 2: Previous Obstetric History",
            Section::Three => "Section 3: Previous Medical History",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One failed validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub section: Section,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(section: Section, message: impl Into<String>) -> Self {
        Self {
            section,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.section.tag(), self.message)
    }
}

/// Collected issues from one validation pass over a case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Issues belonging to one section, in check order.
    pub fn for_section(&self, section: Section) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.section == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_display_carries_the_section_tag() {
        let issue = ValidationIssue::new(Section::Two, "Please enter more information");
        assert_eq!(
            issue.to_string(),
            "Section 2: Please enter more information"
        );
    }

    #[test]
    fn report_filters_by_section() {
        let report = ValidationReport {
            issues: vec![
                ValidationIssue::new(Section::One, "a"),
                ValidationIssue::new(Section::Three, "b"),
                ValidationIssue::new(Section::One, "c"),
            ],
        };
        assert_eq!(report.issue_count(), 3);
        assert_eq!(report.for_section(Section::One).count(), 2);
        assert!(!report.is_clean());
    }
}
