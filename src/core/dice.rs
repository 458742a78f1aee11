//! Dice: the rolled pair and the sources that produce it.
//!
//! Randomness is an injected capability. Games hold any [`DiceSource`]:
//! [`GameRng`](super::GameRng) for seeded play, [`ScriptedDice`] when a test
//! needs an exact sequence of rolls.
//!
//! ```
//! use ludo_engine::core::{DicePair, DiceSource, ScriptedDice};
//!
//! let mut dice = ScriptedDice::new([DicePair::new(6, 2), DicePair::new(4, 4)]);
//! assert_eq!(dice.roll(), DicePair::new(6, 2));
//! assert!(dice.roll().is_double());
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Lowest die face.
pub const MIN_FACE: u8 = 1;

/// Highest die face; also the face that lets a piece leave home.
pub const MAX_FACE: u8 = 6;

/// Dice that cannot be built from the given values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum DiceError {
    #[display("die face {face} is out of range 1..=6")]
    FaceOutOfRange { face: u8 },

    #[display("dice script has no rolls")]
    EmptyScript,
}

/// The result of rolling two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDicePair")]
pub struct DicePair {
    first: u8,
    second: u8,
}

#[derive(Deserialize)]
struct RawDicePair {
    first: u8,
    second: u8,
}

impl TryFrom<RawDicePair> for DicePair {
    type Error = DiceError;

    fn try_from(raw: RawDicePair) -> Result<Self, Self::Error> {
        for face in [raw.first, raw.second] {
            if !(MIN_FACE..=MAX_FACE).contains(&face) {
                return Err(DiceError::FaceOutOfRange { face });
            }
        }
        Ok(Self { first: raw.first, second: raw.second })
    }
}

impl DicePair {
    /// Create a dice pair.
    ///
    /// # Panics
    ///
    /// Panics if either face is outside `1..=6`.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        assert!(
            first >= MIN_FACE && first <= MAX_FACE && second >= MIN_FACE && second <= MAX_FACE,
            "Die face out of range"
        );
        Self { first, second }
    }

    #[must_use]
    pub const fn first(self) -> u8 {
        self.first
    }

    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Steps a piece moves with this roll.
    #[must_use]
    pub const fn sum(self) -> u8 {
        self.first + self.second
    }

    /// Both dice show the same face; grants a bonus roll.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.first == self.second
    }

    /// At least one die shows a six; lets a piece leave home.
    #[must_use]
    pub const fn has_six(self) -> bool {
        self.first == MAX_FACE || self.second == MAX_FACE
    }
}

impl std::fmt::Display for DicePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// A source of dice rolls.
pub trait DiceSource {
    /// Roll both dice.
    fn roll(&mut self) -> DicePair;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> DicePair {
        (**self).roll()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> DicePair {
        (**self).roll()
    }
}

/// Replays a fixed list of rolls, starting over after the last one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScriptedDice")]
pub struct ScriptedDice {
    rolls: Vec<DicePair>,
    cursor: usize,
}

#[derive(Deserialize)]
struct RawScriptedDice {
    rolls: Vec<DicePair>,
    cursor: usize,
}

impl TryFrom<RawScriptedDice> for ScriptedDice {
    type Error = DiceError;

    fn try_from(raw: RawScriptedDice) -> Result<Self, Self::Error> {
        if raw.rolls.is_empty() {
            return Err(DiceError::EmptyScript);
        }
        Ok(Self { rolls: raw.rolls, cursor: raw.cursor })
    }
}

impl ScriptedDice {
    /// Create a script from a non-empty sequence of rolls.
    ///
    /// # Panics
    ///
    /// Panics if `rolls` is empty.
    pub fn new(rolls: impl IntoIterator<Item = DicePair>) -> Self {
        let rolls: Vec<_> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "Dice script must not be empty");
        Self { rolls, cursor: 0 }
    }

    /// Create a script from raw `(first, second)` faces.
    pub fn from_faces(faces: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self::new(faces.into_iter().map(|(a, b)| DicePair::new(a, b)))
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DicePair {
        let pair = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        pair
    }
}
