//! Symptom intake: diagnosis categories, the typed intake form, and the
//! prompt rendered from it.

pub mod form;
pub mod handlers;
pub mod prompt;

use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Which symptom domain a submission belongs to. Selects the field set and
/// prompt template; anything outside this enum is rejected at route level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisCategory {
    Skin,
    Digestive,
}

impl DiagnosisCategory {
    /// The word substituted into the prompt header in place of the generic
    /// "condition".
    pub fn condition_label(self) -> &'static str {
        match self {
            DiagnosisCategory::Skin => "skin condition",
            DiagnosisCategory::Digestive => "digestive condition",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosisCategory::Skin => "skin",
            DiagnosisCategory::Digestive => "digestive",
        }
    }
}

impl FromStr for DiagnosisCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skin" => Ok(DiagnosisCategory::Skin),
            "digestive" => Ok(DiagnosisCategory::Digestive),
            _ => Err(AppError::InvalidCategory),
        }
    }
}

impl fmt::Display for DiagnosisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_known_values() {
        assert_eq!(
            "skin".parse::<DiagnosisCategory>().unwrap(),
            DiagnosisCategory::Skin
        );
        assert_eq!(
            "digestive".parse::<DiagnosisCategory>().unwrap(),
            DiagnosisCategory::Digestive
        );
    }

    #[test]
    fn test_category_rejects_unknown_values() {
        for bad in ["dental", "SKIN", "", "skin "] {
            assert!(bad.parse::<DiagnosisCategory>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_condition_label() {
        assert_eq!(DiagnosisCategory::Skin.condition_label(), "skin condition");
        assert_eq!(
            DiagnosisCategory::Digestive.condition_label(),
            "digestive condition"
        );
    }
}
