use crate::error::StroopError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five Stroop task variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Classic,
    Emotional,
    Numerical,
    Spatial,
    Switching,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Classic,
        Variant::Emotional,
        Variant::Numerical,
        Variant::Spatial,
        Variant::Switching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Emotional => "emotional",
            Variant::Numerical => "numerical",
            Variant::Spatial => "spatial",
            Variant::Switching => "switching",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic Stroop (color-word)",
            Variant::Emotional => "Emotional Stroop",
            Variant::Numerical => "Numerical Stroop",
            Variant::Spatial => "Spatial Stroop",
            Variant::Switching => "Task-switching Stroop",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Variant::Classic => {
                "A colored word appears on each trial. Name the ink color of the word \
                 and ignore what the word says."
            }
            Variant::Emotional => {
                "A positive, negative or neutral word appears in some ink color. Name \
                 the ink color and ignore the meaning of the word."
            }
            Variant::Numerical => {
                "Two digits appear, one printed physically larger than the other. Pick \
                 the side holding the numerically larger digit and ignore print size."
            }
            Variant::Spatial => {
                "A location word (up, down, left, right) appears somewhere on screen. \
                 Report where the word is placed and ignore what it says."
            }
            Variant::Switching => {
                "A cue precedes every colored word. On a COLOR cue name the ink color; \
                 on a WORD cue report the printed word."
            }
        }
    }

    /// Label used for the variant's primary effect
    pub fn effect_label(&self) -> &'static str {
        match self {
            Variant::Classic => "Stroop effect",
            Variant::Emotional => "Emotional interference (emotional - neutral)",
            Variant::Numerical => "Numerical Stroop effect",
            Variant::Spatial => "Spatial Stroop effect",
            Variant::Switching => "Switch cost",
        }
    }

    /// Conditions balanced by the generator, in allocation order.
    ///
    /// Switching labels its trials after generation, so its conditions are
    /// not allocated up front.
    pub fn conditions(&self) -> &'static [Condition] {
        match self {
            Variant::Classic | Variant::Numerical | Variant::Spatial => {
                &[Condition::Congruent, Condition::Incongruent]
            }
            Variant::Emotional => &[Condition::Positive, Condition::Negative, Condition::Neutral],
            Variant::Switching => &[Condition::Switch, Condition::NoSwitch],
        }
    }

    pub fn has_balanced_conditions(&self) -> bool {
        !matches!(self, Variant::Switching)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = StroopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| StroopError::InvalidVariant(s.to_string()))
    }
}

/// Trial condition label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Congruent,
    Incongruent,
    Positive,
    Negative,
    Neutral,
    Switch,
    NoSwitch,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Congruent => "congruent",
            Condition::Incongruent => "incongruent",
            Condition::Positive => "positive",
            Condition::Negative => "negative",
            Condition::Neutral => "neutral",
            Condition::Switch => "switch",
            Condition::NoSwitch => "no-switch",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active task on a switching trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    NameColor,
    ReadWord,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::NameColor => "name_color",
            TaskType::ReadWord => "read_word",
        }
    }

    /// Cue shown to the participant before the stimulus
    pub fn cue(&self) -> &'static str {
        match self {
            TaskType::NameColor => "COLOR",
            TaskType::ReadWord => "WORD",
        }
    }

    pub fn other(&self) -> TaskType {
        match self {
            TaskType::NameColor => TaskType::ReadWord,
            TaskType::ReadWord => TaskType::NameColor,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_names_case_insensitively() {
        assert_eq!("Classic".parse::<Variant>().unwrap(), Variant::Classic);
        assert_eq!(" switching ".parse::<Variant>().unwrap(), Variant::Switching);
        for v in Variant::ALL {
            assert_eq!(v.as_str().parse::<Variant>().unwrap(), v);
        }
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = "flanker".parse::<Variant>().unwrap_err();
        assert!(matches!(err, StroopError::InvalidVariant(ref name) if name == "flanker"));
    }

    #[test]
    fn condition_sets_match_variants() {
        assert_eq!(Variant::Emotional.conditions().len(), 3);
        assert_eq!(Variant::Spatial.conditions()[0], Condition::Congruent);
        assert!(!Variant::Switching.has_balanced_conditions());
        assert_eq!(Condition::NoSwitch.to_string(), "no-switch");
    }

    #[test]
    fn task_type_flips() {
        assert_eq!(TaskType::NameColor.other(), TaskType::ReadWord);
        assert_eq!(TaskType::ReadWord.other().other(), TaskType::ReadWord);
    }
}
