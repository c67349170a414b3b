use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicalCondition {
    Diabetic,
    Pcos,
    Thyroid,
    /// "None of the above". Exclusive with every other condition.
    None,
}

impl MedicalCondition {
    pub const ALL: [MedicalCondition; 4] = [
        MedicalCondition::Diabetic,
        MedicalCondition::Pcos,
        MedicalCondition::Thyroid,
        MedicalCondition::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MedicalCondition::Diabetic => "Diabetic",
            MedicalCondition::Pcos => "PCOS",
            MedicalCondition::Thyroid => "Thyroid",
            MedicalCondition::None => "None of the above",
        }
    }
}

impl fmt::Display for MedicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MedicalCondition {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diabetic" => Ok(MedicalCondition::Diabetic),
            "pcos" => Ok(MedicalCondition::Pcos),
            "thyroid" => Ok(MedicalCondition::Thyroid),
            "none" => Ok(MedicalCondition::None),
            other => Err(MealError::InvalidInput(format!(
                "unknown medical condition '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allergy {
    Lactose,
    Gluten,
    Seafood,
    Nuts,
    Coconut,
}

impl Allergy {
    pub const ALL: [Allergy; 5] = [
        Allergy::Lactose,
        Allergy::Gluten,
        Allergy::Seafood,
        Allergy::Nuts,
        Allergy::Coconut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Allergy::Lactose => "Lactose Intolerant",
            Allergy::Gluten => "Gluten Sensitivity",
            Allergy::Seafood => "Seafood Allergy",
            Allergy::Nuts => "Nut Allergy",
            Allergy::Coconut => "Coconut Allergy",
        }
    }

    /// Catalog keys this allergy disqualifies.
    pub fn excluded_keys(&self) -> &'static [&'static str] {
        match self {
            Allergy::Lactose => &["greek-yogurt"],
            Allergy::Gluten => &["whole-wheat-bread", "oats"],
            Allergy::Seafood => &["salmon"],
            Allergy::Nuts => &["almonds"],
            Allergy::Coconut => &["coconut-oil"],
        }
    }
}

impl fmt::Display for Allergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Allergy {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lactose" => Ok(Allergy::Lactose),
            "gluten" => Ok(Allergy::Gluten),
            "seafood" => Ok(Allergy::Seafood),
            "nuts" | "nut" => Ok(Allergy::Nuts),
            "coconut" => Ok(Allergy::Coconut),
            other => Err(MealError::InvalidInput(format!("unknown allergy '{}'", other))),
        }
    }
}

/// Medical conditions and allergies declared by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restrictions {
    pub medical_conditions: BTreeSet<MedicalCondition>,
    pub allergies: BTreeSet<Allergy>,
}

impl Restrictions {
    /// Check or uncheck a condition.
    ///
    /// Checking `None` clears everything else; checking any other condition
    /// clears `None`.
    pub fn set_condition(&mut self, condition: MedicalCondition, checked: bool) {
        if !checked {
            self.medical_conditions.remove(&condition);
            return;
        }

        if condition == MedicalCondition::None {
            self.medical_conditions.clear();
        } else {
            self.medical_conditions.remove(&MedicalCondition::None);
        }
        self.medical_conditions.insert(condition);
    }

    pub fn set_allergy(&mut self, allergy: Allergy, checked: bool) {
        if checked {
            self.allergies.insert(allergy);
        } else {
            self.allergies.remove(&allergy);
        }
    }

    /// True if any allergy disqualifies the ingredient key.
    pub fn excludes_key(&self, key: &str) -> bool {
        self.allergies
            .iter()
            .any(|a| a.excluded_keys().iter().any(|k| *k == key))
    }
}
