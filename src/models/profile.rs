use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn key(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        })
    }
}

impl FromStr for Gender {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(MealError::InvalidInput(format!("unknown gender '{}'", other))),
        }
    }
}

/// Biometric inputs collected on the first wizard step.
///
/// Zero values mean "not entered yet"; derivations treat an incomplete
/// profile as producing zero rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub gender: Option<Gender>,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Profile {
    /// True when every field BMR depends on has been provided.
    pub fn is_complete(&self) -> bool {
        self.age > 0 && self.height_cm > 0.0 && self.weight_kg > 0.0 && self.gender.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_incomplete() {
        assert!(!Profile::default().is_complete());
    }

    #[test]
    fn test_complete_profile() {
        let profile = Profile {
            name: "Asha".to_string(),
            age: 30,
            gender: Some(Gender::Female),
            height_cm: 165.0,
            weight_kg: 60.0,
        };
        assert!(profile.is_complete());

        let missing_gender = Profile {
            gender: None,
            ..profile
        };
        assert!(!missing_gender.is_complete());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }
}
