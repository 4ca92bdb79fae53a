//! User-extensible drug dictionary.
//!
//! The list of illegal and recreational drugs is likely to be extensive, so
//! the dictionary is data rather than a closed enum. A small seed list drawn
//! from the drugs controlled under the UK Misuse of Drugs Act ships with the
//! crate; deployments extend it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// UK classification under the Misuse of Drugs Act.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UkClass {
    A,
    B,
    C,
    #[default]
    #[serde(rename = "U")]
    Unclassified,
}

impl UkClass {
    pub fn code(&self) -> &'static str {
        match self {
            UkClass::A => "A",
            UkClass::B => "B",
            UkClass::C => "C",
            UkClass::Unclassified => "U",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UkClass::A => "Class A",
            UkClass::B => "Class B",
            UkClass::C => "Class C",
            UkClass::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for UkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UkClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(UkClass::A),
            "B" => Ok(UkClass::B),
            "C" => Ok(UkClass::C),
            "U" | "UNCLASSIFIED" => Ok(UkClass::Unclassified),
            _ => Err(ModelError::UnknownUkClass(s.to_string())),
        }
    }
}

/// Pharmacological grouping for a dictionary entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrugKind {
    Opioid,
    Stimulant,
    Sedative,
    Erythroxylum,
    Arylcyclohexylamine,
    Phenethylamine,
    Benzodiazepine,
    #[default]
    Other,
}

impl DrugKind {
    pub fn label(&self) -> &'static str {
        match self {
            DrugKind::Opioid => "Opioid",
            DrugKind::Stimulant => "Stimulant",
            DrugKind::Sedative => "Sedative",
            DrugKind::Erythroxylum => "Erythroxylum",
            DrugKind::Arylcyclohexylamine => "Arylcyclohexylamine",
            DrugKind::Phenethylamine => "Phenethylamine",
            DrugKind::Benzodiazepine => "Benzodiazepine",
            DrugKind::Other => "Other",
        }
    }
}

impl fmt::Display for DrugKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DrugKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "opioid" => Ok(DrugKind::Opioid),
            "stimulant" => Ok(DrugKind::Stimulant),
            "sedative" => Ok(DrugKind::Sedative),
            "erythroxylum" => Ok(DrugKind::Erythroxylum),
            "arylcyclohexylamine" => Ok(DrugKind::Arylcyclohexylamine),
            "phenethylamine" => Ok(DrugKind::Phenethylamine),
            "benzodiazepine" => Ok(DrugKind::Benzodiazepine),
            "other" => Ok(DrugKind::Other),
            _ => Err(ModelError::UnknownDrugKind(s.to_string())),
        }
    }
}

/// One entry in the drug dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drug {
    pub name: String,
    #[serde(default)]
    pub alternative_names: Option<String>,
    #[serde(default)]
    pub uk_class: UkClass,
    #[serde(default)]
    pub kind: DrugKind,
    #[serde(default)]
    pub note: Option<String>,
}

impl Drug {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternative_names: None,
            uk_class: UkClass::default(),
            kind: DrugKind::default(),
            note: None,
        }
    }

    /// Built-in starter entries for a fresh deployment.
    pub fn seed_list() -> Vec<Drug> {
        fn entry(name: &str, alt: &str, uk_class: UkClass, kind: DrugKind) -> Drug {
            Drug {
                name: name.to_string(),
                alternative_names: (!alt.is_empty()).then(|| alt.to_string()),
                uk_class,
                kind,
                note: None,
            }
        }
        vec![
            entry("Diamorphine", "Heroin", UkClass::A, DrugKind::Opioid),
            entry("Cocaine", "Crack", UkClass::A, DrugKind::Erythroxylum),
            entry("MDMA", "Ecstasy", UkClass::A, DrugKind::Phenethylamine),
            entry("Methadone", "", UkClass::A, DrugKind::Opioid),
            entry("Amphetamine", "Speed", UkClass::B, DrugKind::Stimulant),
            entry("Cannabis", "Marijuana", UkClass::B, DrugKind::Sedative),
            entry("Ketamine", "", UkClass::B, DrugKind::Arylcyclohexylamine),
            entry("Diazepam", "Valium", UkClass::C, DrugKind::Benzodiazepine),
            entry("Temazepam", "", UkClass::C, DrugKind::Benzodiazepine),
            entry("Khat", "", UkClass::Unclassified, DrugKind::Stimulant),
        ]
    }
}

impl fmt::Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alternative_names.as_deref() {
            Some(alt) if !alt.is_empty() => write!(f, "{} ({})", self.name, alt),
            _ => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_alternative_names_when_present() {
        let mut drug = Drug::named("Diamorphine");
        assert_eq!(drug.to_string(), "Diamorphine");
        drug.alternative_names = Some("Heroin".to_string());
        assert_eq!(drug.to_string(), "Diamorphine (Heroin)");
    }

    #[test]
    fn uk_class_defaults_to_unclassified() {
        let drug = Drug::named("Khat");
        assert_eq!(drug.uk_class, UkClass::Unclassified);
        assert_eq!(drug.kind, DrugKind::Other);
    }

    #[test]
    fn seed_list_is_nonempty_and_classified() {
        let seed = Drug::seed_list();
        assert!(!seed.is_empty());
        assert!(seed.iter().any(|d| d.uk_class == UkClass::A));
    }
}
