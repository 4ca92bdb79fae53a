//! Coded problem types for the three classifying child records.
//!
//! Each enumeration mirrors one closed choice list from the paper form and
//! keeps an `Other` catch-all so undefined answers can still be stored (the
//! free-text details field carries the specifics).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Previous pregnancy problem codes (Section 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PregnancyProblemKind {
    #[serde(rename = "throm")]
    ThromboticEvent,
    #[serde(rename = "afe")]
    AmnioticFluidEmbolism,
    #[serde(rename = "eclampsia")]
    Eclampsia,
    #[serde(rename = "miscar3plus")]
    ThreePlusMiscarriages,
    #[serde(rename = "premormtril")]
    PretermBirthOrMidTrimesterLoss,
    #[serde(rename = "neodeath")]
    NeonatalDeath,
    #[serde(rename = "stillbirth")]
    Stillbirth,
    #[serde(rename = "majcongab")]
    MajorCongenitalAbnormality,
    #[serde(rename = "sga")]
    SmallForGestationalAge,
    #[serde(rename = "lga")]
    LargeForGestationalAge,
    #[serde(rename = "infinstcare")]
    InfantIntensiveCare,
    #[serde(rename = "puerpysco")]
    PuerperalPsychosis,
    #[serde(rename = "placentpreav")]
    PlacentaPraevia,
    #[serde(rename = "gestdiab")]
    GestationalDiabetes,
    #[serde(rename = "placentabrupt")]
    PlacentalAbruption,
    #[serde(rename = "postparthaemor")]
    PostPartumHaemorrhage,
    #[serde(rename = "surgpreg")]
    SurgicalProcedureInPregnancy,
    #[serde(rename = "hyperemadmit")]
    HyperemesisAdmission,
    #[serde(rename = "dehydrateadmin")]
    DehydrationAdmission,
    #[serde(rename = "ovhypersynd")]
    OvarianHyperstimulation,
    #[serde(rename = "sevinfect")]
    SevereInfection,
    #[serde(rename = "other")]
    Other,
}

impl PregnancyProblemKind {
    pub const ALL: &'static [PregnancyProblemKind] = &[
        PregnancyProblemKind::ThromboticEvent,
        PregnancyProblemKind::AmnioticFluidEmbolism,
        PregnancyProblemKind::Eclampsia,
        PregnancyProblemKind::ThreePlusMiscarriages,
        PregnancyProblemKind::PretermBirthOrMidTrimesterLoss,
        PregnancyProblemKind::NeonatalDeath,
        PregnancyProblemKind::Stillbirth,
        PregnancyProblemKind::MajorCongenitalAbnormality,
        PregnancyProblemKind::SmallForGestationalAge,
        PregnancyProblemKind::LargeForGestationalAge,
        PregnancyProblemKind::InfantIntensiveCare,
        PregnancyProblemKind::PuerperalPsychosis,
        PregnancyProblemKind::PlacentaPraevia,
        PregnancyProblemKind::GestationalDiabetes,
        PregnancyProblemKind::PlacentalAbruption,
        PregnancyProblemKind::PostPartumHaemorrhage,
        PregnancyProblemKind::SurgicalProcedureInPregnancy,
        PregnancyProblemKind::HyperemesisAdmission,
        PregnancyProblemKind::DehydrationAdmission,
        PregnancyProblemKind::OvarianHyperstimulation,
        PregnancyProblemKind::SevereInfection,
        PregnancyProblemKind::Other,
    ];

    /// Returns the stored submission code.
    pub fn code(&self) -> &'static str {
        match self {
            PregnancyProblemKind::ThromboticEvent => "throm",
            PregnancyProblemKind::AmnioticFluidEmbolism => "afe",
            PregnancyProblemKind::Eclampsia => "eclampsia",
            PregnancyProblemKind::ThreePlusMiscarriages => "miscar3plus",
            PregnancyProblemKind::PretermBirthOrMidTrimesterLoss => "premormtril",
            PregnancyProblemKind::NeonatalDeath => "neodeath",
            PregnancyProblemKind::Stillbirth => "stillbirth",
            PregnancyProblemKind::MajorCongenitalAbnormality => "majcongab",
            PregnancyProblemKind::SmallForGestationalAge => "sga",
            PregnancyProblemKind::LargeForGestationalAge => "lga",
            PregnancyProblemKind::InfantIntensiveCare => "infinstcare",
            PregnancyProblemKind::PuerperalPsychosis => "puerpysco",
            PregnancyProblemKind::PlacentaPraevia => "placentpreav",
            PregnancyProblemKind::GestationalDiabetes => "gestdiab",
            PregnancyProblemKind::PlacentalAbruption => "placentabrupt",
            PregnancyProblemKind::PostPartumHaemorrhage => "postparthaemor",
            PregnancyProblemKind::SurgicalProcedureInPregnancy => "surgpreg",
            PregnancyProblemKind::HyperemesisAdmission => "hyperemadmit",
            PregnancyProblemKind::DehydrationAdmission => "dehydrateadmin",
            PregnancyProblemKind::OvarianHyperstimulation => "ovhypersynd",
            PregnancyProblemKind::SevereInfection => "sevinfect",
            PregnancyProblemKind::Other => "other",
        }
    }

    /// Returns the display label as it appears on the form.
    pub fn label(&self) -> &'static str {
        match self {
            PregnancyProblemKind::ThromboticEvent => "Thrombotic event",
            PregnancyProblemKind::AmnioticFluidEmbolism => "Amniotic fluid embolism",
            PregnancyProblemKind::Eclampsia => "Eclampsia",
            PregnancyProblemKind::ThreePlusMiscarriages => "3 or more miscarriages",
            PregnancyProblemKind::PretermBirthOrMidTrimesterLoss => {
                "Preterm birth or mid trimester loss"
            }
            PregnancyProblemKind::NeonatalDeath => "Neonatal death",
            PregnancyProblemKind::Stillbirth => "Stillbirth",
            PregnancyProblemKind::MajorCongenitalAbnormality => {
                "Baby with a major congenital abnormality"
            }
            PregnancyProblemKind::SmallForGestationalAge => {
                "Small for gestational age (SGA) infant"
            }
            PregnancyProblemKind::LargeForGestationalAge => {
                "Large for gestational age (LGA) infant"
            }
            PregnancyProblemKind::InfantIntensiveCare => "Infant requiring intensive care",
            PregnancyProblemKind::PuerperalPsychosis => "Puerperal psychosis",
            PregnancyProblemKind::PlacentaPraevia => "Placenta praevia",
            PregnancyProblemKind::GestationalDiabetes => "Gestational diabetes",
            PregnancyProblemKind::PlacentalAbruption => "Significant placental abruption",
            PregnancyProblemKind::PostPartumHaemorrhage => {
                "Post-partum haemorrhage requiring transfusion"
            }
            PregnancyProblemKind::SurgicalProcedureInPregnancy => {
                "Surgical procedure in pregnancy"
            }
            PregnancyProblemKind::HyperemesisAdmission => "Hyperemesis requiring admission",
            PregnancyProblemKind::DehydrationAdmission => "Dehydration requiring admission",
            PregnancyProblemKind::OvarianHyperstimulation => "Ovarian hyperstimulation syndrome",
            PregnancyProblemKind::SevereInfection => "Severe infection e.g. pyelonephritis",
            PregnancyProblemKind::Other => "Other",
        }
    }
}

impl fmt::Display for PregnancyProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PregnancyProblemKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|kind| kind.code() == code)
            .copied()
            .ok_or_else(|| ModelError::UnknownProblemCode(s.to_string()))
    }
}

/// Predisposing factors for heart disease (Section 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeartDiseaseFactorKind {
    #[serde(rename = "knowichheartdis")]
    KnownIschaemicHeartDisease,
    #[serde(rename = "congheartdis")]
    CongenitalHeartDisease,
    #[serde(rename = "prevcardsurg")]
    PreviousCardiacSurgery,
    #[serde(rename = "prevmyoinfarc")]
    PreviousMyocardialInfarction,
    #[serde(rename = "cardiomypathy")]
    Cardiomyopathy,
    #[serde(rename = "prespermpacemaker")]
    PermanentPacemaker,
    #[serde(rename = "knowreductventfunc")]
    ReducedVentricularFunction,
    #[serde(rename = "lowlevhdlchol")]
    LowHdlCholesterol,
    #[serde(rename = "highlevldlchol")]
    HighLdlCholesterol,
    #[serde(rename = "cocaineuse")]
    CocaineUse,
    #[serde(rename = "vavheartdis")]
    ValvularHeartDisease,
    #[serde(rename = "vasculitis")]
    Vasculitis,
    #[serde(rename = "ischheartdisfirstdegrel")]
    IschaemicHeartDiseaseInFirstDegreeRelative,
    #[serde(rename = "diabetes")]
    Diabetes,
    #[serde(rename = "bromcripcarbelinuse")]
    BromocriptineCabergolineUse,
    #[serde(rename = "famhistsudcarddeath")]
    FamilyHistoryOfSuddenCardiacDeath,
    #[serde(rename = "histarrythimia")]
    HistoryOfArrhythmia,
    #[serde(rename = "persfamhisthyperobstcardmyp")]
    HypertrophicObstructiveCardiomyopathyHistory,
    #[serde(rename = "famhistinharry")]
    FamilyHistoryOfInheritedArrhythmia,
    #[serde(rename = "turnersynd")]
    TurnersSyndrome,
    #[serde(rename = "other")]
    Other,
}

impl HeartDiseaseFactorKind {
    pub const ALL: &'static [HeartDiseaseFactorKind] = &[
        HeartDiseaseFactorKind::KnownIschaemicHeartDisease,
        HeartDiseaseFactorKind::CongenitalHeartDisease,
        HeartDiseaseFactorKind::PreviousCardiacSurgery,
        HeartDiseaseFactorKind::PreviousMyocardialInfarction,
        HeartDiseaseFactorKind::Cardiomyopathy,
        HeartDiseaseFactorKind::PermanentPacemaker,
        HeartDiseaseFactorKind::ReducedVentricularFunction,
        HeartDiseaseFactorKind::LowHdlCholesterol,
        HeartDiseaseFactorKind::HighLdlCholesterol,
        HeartDiseaseFactorKind::CocaineUse,
        HeartDiseaseFactorKind::ValvularHeartDisease,
        HeartDiseaseFactorKind::Vasculitis,
        HeartDiseaseFactorKind::IschaemicHeartDiseaseInFirstDegreeRelative,
        HeartDiseaseFactorKind::Diabetes,
        HeartDiseaseFactorKind::BromocriptineCabergolineUse,
        HeartDiseaseFactorKind::FamilyHistoryOfSuddenCardiacDeath,
        HeartDiseaseFactorKind::HistoryOfArrhythmia,
        HeartDiseaseFactorKind::HypertrophicObstructiveCardiomyopathyHistory,
        HeartDiseaseFactorKind::FamilyHistoryOfInheritedArrhythmia,
        HeartDiseaseFactorKind::TurnersSyndrome,
        HeartDiseaseFactorKind::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HeartDiseaseFactorKind::KnownIschaemicHeartDisease => "knowichheartdis",
            HeartDiseaseFactorKind::CongenitalHeartDisease => "congheartdis",
            HeartDiseaseFactorKind::PreviousCardiacSurgery => "prevcardsurg",
            HeartDiseaseFactorKind::PreviousMyocardialInfarction => "prevmyoinfarc",
            HeartDiseaseFactorKind::Cardiomyopathy => "cardiomypathy",
            HeartDiseaseFactorKind::PermanentPacemaker => "prespermpacemaker",
            HeartDiseaseFactorKind::ReducedVentricularFunction => "knowreductventfunc",
            HeartDiseaseFactorKind::LowHdlCholesterol => "lowlevhdlchol",
            HeartDiseaseFactorKind::HighLdlCholesterol => "highlevldlchol",
            HeartDiseaseFactorKind::CocaineUse => "cocaineuse",
            HeartDiseaseFactorKind::ValvularHeartDisease => "vavheartdis",
            HeartDiseaseFactorKind::Vasculitis => "vasculitis",
            HeartDiseaseFactorKind::IschaemicHeartDiseaseInFirstDegreeRelative => {
                "ischheartdisfirstdegrel"
            }
            HeartDiseaseFactorKind::Diabetes => "diabetes",
            HeartDiseaseFactorKind::BromocriptineCabergolineUse => "bromcripcarbelinuse",
            HeartDiseaseFactorKind::FamilyHistoryOfSuddenCardiacDeath => "famhistsudcarddeath",
            HeartDiseaseFactorKind::HistoryOfArrhythmia => "histarrythimia",
            HeartDiseaseFactorKind::HypertrophicObstructiveCardiomyopathyHistory => {
                "persfamhisthyperobstcardmyp"
            }
            HeartDiseaseFactorKind::FamilyHistoryOfInheritedArrhythmia => "famhistinharry",
            HeartDiseaseFactorKind::TurnersSyndrome => "turnersynd",
            HeartDiseaseFactorKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeartDiseaseFactorKind::KnownIschaemicHeartDisease => "Known ischaemic heart disease",
            HeartDiseaseFactorKind::CongenitalHeartDisease => "Congenital heart disease",
            HeartDiseaseFactorKind::PreviousCardiacSurgery => "Previous cardiac surgery",
            HeartDiseaseFactorKind::PreviousMyocardialInfarction => {
                "Previous myocardial infarction"
            }
            HeartDiseaseFactorKind::Cardiomyopathy => "Cardiomyopathy",
            HeartDiseaseFactorKind::PermanentPacemaker => "Presence of Permanent Pacemaker",
            HeartDiseaseFactorKind::ReducedVentricularFunction => {
                "Known reduction in ventricular function"
            }
            HeartDiseaseFactorKind::LowHdlCholesterol => "Low levels of HDL cholesterol",
            HeartDiseaseFactorKind::HighLdlCholesterol => "High levels of LDL cholesterol",
            HeartDiseaseFactorKind::CocaineUse => "Cocaine use",
            HeartDiseaseFactorKind::ValvularHeartDisease => "Valvular heart disease",
            HeartDiseaseFactorKind::Vasculitis => "Vasculitis",
            HeartDiseaseFactorKind::IschaemicHeartDiseaseInFirstDegreeRelative => {
                "Ischaemic heart disease in first degree relative"
            }
            HeartDiseaseFactorKind::Diabetes => "Diabetes",
            HeartDiseaseFactorKind::BromocriptineCabergolineUse => "Bromocriptine/cabergoline use",
            HeartDiseaseFactorKind::FamilyHistoryOfSuddenCardiacDeath => {
                "Family history of sudden cardiac death"
            }
            HeartDiseaseFactorKind::HistoryOfArrhythmia => "History of arrhythmia",
            HeartDiseaseFactorKind::HypertrophicObstructiveCardiomyopathyHistory => {
                "Personal or family history of hypertrophic obstructive cardiomyopathy (HOCM)"
            }
            HeartDiseaseFactorKind::FamilyHistoryOfInheritedArrhythmia => {
                "Family history of inherited arrhythmia e.g. long QT syndrome Marfan syndrome"
            }
            HeartDiseaseFactorKind::TurnersSyndrome => "Turner's Syndrome",
            HeartDiseaseFactorKind::Other => "Other",
        }
    }
}

impl fmt::Display for HeartDiseaseFactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HeartDiseaseFactorKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|kind| kind.code() == code)
            .copied()
            .ok_or_else(|| ModelError::UnknownProblemCode(s.to_string()))
    }
}

/// Pre-existing or previous medical problem codes (Section 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicalProblemKind {
    #[serde(rename = "carddiscongoracq")]
    CardiacDisease,
    #[serde(rename = "renaldisease")]
    RenalDisease,
    #[serde(rename = "endodisord")]
    EndocrineDisorder,
    #[serde(rename = "haemdisord")]
    HaematologicalDisorder,
    #[serde(rename = "inflamdisord")]
    InflammatoryDisorder,
    #[serde(rename = "cancer")]
    Cancer,
    #[serde(rename = "hiv")]
    Hiv,
    #[serde(rename = "respdisease")]
    RespiratoryDisease,
    #[serde(rename = "other")]
    Other,
}

impl MedicalProblemKind {
    pub const ALL: &'static [MedicalProblemKind] = &[
        MedicalProblemKind::CardiacDisease,
        MedicalProblemKind::RenalDisease,
        MedicalProblemKind::EndocrineDisorder,
        MedicalProblemKind::HaematologicalDisorder,
        MedicalProblemKind::InflammatoryDisorder,
        MedicalProblemKind::Cancer,
        MedicalProblemKind::Hiv,
        MedicalProblemKind::RespiratoryDisease,
        MedicalProblemKind::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MedicalProblemKind::CardiacDisease => "carddiscongoracq",
            MedicalProblemKind::RenalDisease => "renaldisease",
            MedicalProblemKind::EndocrineDisorder => "endodisord",
            MedicalProblemKind::HaematologicalDisorder => "haemdisord",
            MedicalProblemKind::InflammatoryDisorder => "inflamdisord",
            MedicalProblemKind::Cancer => "cancer",
            MedicalProblemKind::Hiv => "hiv",
            MedicalProblemKind::RespiratoryDisease => "respdisease",
            MedicalProblemKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MedicalProblemKind::CardiacDisease => "Cardiac disease (congenital or acquired)",
            MedicalProblemKind::RenalDisease => "Renal disease",
            MedicalProblemKind::EndocrineDisorder => {
                "Endocrine disorders e.g. hypo or hyperthyroidism Psychiatric disorders"
            }
            MedicalProblemKind::HaematologicalDisorder => {
                "Haematological disorders e.g. sickle cell disease, diagnosed thrombophilia"
            }
            MedicalProblemKind::InflammatoryDisorder => {
                "Inflammatory disorders e.g. inflammatory bowel disease Autoimmune diseases"
            }
            MedicalProblemKind::Cancer => "Cancer",
            MedicalProblemKind::Hiv => "HIV",
            MedicalProblemKind::RespiratoryDisease => "Respiratory disease e.g. severe asthma, COPD",
            MedicalProblemKind::Other => "Other",
        }
    }
}

impl fmt::Display for MedicalProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MedicalProblemKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|kind| kind.code() == code)
            .copied()
            .ok_or_else(|| ModelError::UnknownProblemCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pregnancy_codes_are_unique() {
        let mut codes: Vec<&str> = PregnancyProblemKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), PregnancyProblemKind::ALL.len());
    }

    #[test]
    fn kinds_round_trip_through_codes() {
        for kind in HeartDiseaseFactorKind::ALL {
            assert_eq!(
                kind.code().parse::<HeartDiseaseFactorKind>().unwrap(),
                *kind
            );
        }
        for kind in MedicalProblemKind::ALL {
            assert_eq!(kind.code().parse::<MedicalProblemKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn kind_serde_uses_submission_codes() {
        let json = serde_json::to_string(&PregnancyProblemKind::ThreePlusMiscarriages).unwrap();
        assert_eq!(json, "\"miscar3plus\"");
        let kind: MedicalProblemKind = serde_json::from_str("\"respdisease\"").unwrap();
        assert_eq!(kind, MedicalProblemKind::RespiratoryDisease);
    }
}
