use crate::variant::TaskType;
use serde::Serialize;

/// Read-only view of a stimulus for presentation layers
pub trait Stimulus: Clone + Send + Sync + std::fmt::Debug {
    /// Text printed on screen, if the stimulus is a single word
    fn text(&self) -> Option<&'static str>;
    /// Ink the text is printed in, if colored
    fn ink(&self) -> Option<InkColor>;

    fn is_text(&self) -> bool {
        self.text().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InkColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl InkColor {
    pub const ALL: [InkColor; 4] = [InkColor::Red, InkColor::Blue, InkColor::Green, InkColor::Yellow];

    /// Response label and color name
    pub fn name(&self) -> &'static str {
        match self {
            InkColor::Red => "red",
            InkColor::Blue => "blue",
            InkColor::Green => "green",
            InkColor::Yellow => "yellow",
        }
    }

    /// The color word as printed on screen
    pub fn word(&self) -> &'static str {
        match self {
            InkColor::Red => "RED",
            InkColor::Blue => "BLUE",
            InkColor::Green => "GREEN",
            InkColor::Yellow => "YELLOW",
        }
    }

    pub fn rgba(&self) -> [u8; 4] {
        match self {
            InkColor::Red => [255, 0, 0, 255],
            InkColor::Blue => [0, 0, 255, 255],
            InkColor::Green => [0, 160, 0, 255],
            InkColor::Yellow => [230, 200, 0, 255],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Relative print size of a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Large,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Digit {
    pub value: u8,
    pub size: FontSize,
}

/// Variant-specific rendering instructions, opaque to the runner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayPayload {
    ColorWord {
        word: InkColor,
        ink: InkColor,
    },
    AffectiveWord {
        word: &'static str,
        ink: InkColor,
    },
    DigitPair {
        left: Digit,
        right: Digit,
    },
    PlacedWord {
        word: Direction,
        zone: Direction,
    },
    CuedColorWord {
        cue: TaskType,
        word: InkColor,
        ink: InkColor,
    },
}

impl DisplayPayload {
    /// The response label that scores this stimulus as correct
    pub fn answer(&self) -> &'static str {
        match self {
            DisplayPayload::ColorWord { ink, .. } | DisplayPayload::AffectiveWord { ink, .. } => {
                ink.name()
            }
            DisplayPayload::DigitPair { left, right } => {
                if left.value > right.value {
                    Side::Left.name()
                } else {
                    Side::Right.name()
                }
            }
            DisplayPayload::PlacedWord { zone, .. } => zone.name(),
            DisplayPayload::CuedColorWord { cue, word, ink } => match cue {
                TaskType::NameColor => ink.name(),
                TaskType::ReadWord => word.name(),
            },
        }
    }
}

impl Stimulus for DisplayPayload {
    fn text(&self) -> Option<&'static str> {
        match self {
            DisplayPayload::ColorWord { word, .. } => Some(word.word()),
            DisplayPayload::AffectiveWord { word, .. } => Some(*word),
            DisplayPayload::DigitPair { .. } => None,
            DisplayPayload::PlacedWord { word, .. } => Some(word.word()),
            DisplayPayload::CuedColorWord { word, .. } => Some(word.word()),
        }
    }

    fn ink(&self) -> Option<InkColor> {
        match self {
            DisplayPayload::ColorWord { ink, .. }
            | DisplayPayload::AffectiveWord { ink, .. }
            | DisplayPayload::CuedColorWord { ink, .. } => Some(*ink),
            DisplayPayload::DigitPair { .. } | DisplayPayload::PlacedWord { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_follows_relevant_dimension() {
        let word = DisplayPayload::ColorWord {
            word: InkColor::Red,
            ink: InkColor::Green,
        };
        assert_eq!(word.answer(), "green");
        assert_eq!(word.text(), Some("RED"));
        assert_eq!(word.ink(), Some(InkColor::Green));

        let digits = DisplayPayload::DigitPair {
            left: Digit { value: 8, size: FontSize::Small },
            right: Digit { value: 3, size: FontSize::Large },
        };
        assert_eq!(digits.answer(), "left");
        assert!(!digits.is_text());

        let placed = DisplayPayload::PlacedWord {
            word: Direction::Up,
            zone: Direction::Left,
        };
        assert_eq!(placed.answer(), "left");

        let cued = DisplayPayload::CuedColorWord {
            cue: TaskType::ReadWord,
            word: InkColor::Blue,
            ink: InkColor::Yellow,
        };
        assert_eq!(cued.answer(), "blue");
    }
}
