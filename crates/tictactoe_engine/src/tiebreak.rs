//! Starting-player tie-break.
//!
//! When a new game starts and nobody has won yet, both players guess a die
//! roll (1-6) and the closer guess moves first. Player one always plays the
//! default marker and player two the other one; exact ties and unusable
//! guesses go to player one.

use crate::Player;
use rand::Rng;
use tracing::{debug, instrument};

/// Number of faces on the tie-break die.
pub const DIE_FACES: u8 = 6;

/// Anything that can pick who moves first when the session has no previous
/// winner to go by.
pub trait StartingPlayerDecider {
    /// Returns the player who should move first.
    fn decide_starting_player(&mut self) -> Player;
}

impl<F> StartingPlayerDecider for F
where
    F: FnMut() -> Player,
{
    fn decide_starting_player(&mut self) -> Player {
        self()
    }
}

/// How a tie-break was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreakOutcome {
    /// At least one guess was unusable; no die was rolled.
    InvalidGuesses {
        /// The default player, who starts.
        starter: Player,
    },
    /// The die was rolled and compared against both guesses.
    Rolled {
        /// Face that came up.
        roll: u8,
        /// Player who starts.
        starter: Player,
        /// Both guesses were equally close.
        tie: bool,
    },
}

impl TieBreakOutcome {
    /// Player who moves first.
    pub fn starter(&self) -> Player {
        match self {
            TieBreakOutcome::InvalidGuesses { starter } => *starter,
            TieBreakOutcome::Rolled { starter, .. } => *starter,
        }
    }
}

/// Parses a typed guess.
///
/// Leading and trailing whitespace is ignored, one leading `+` is allowed and
/// the leading run of digits is used, so `"3"`, `"+3"` and `"3 please"` all
/// read as 3. Returns `None` when there are no leading digits or the value is
/// outside 1-6.
pub fn parse_guess(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: u32 = unsigned[..digits_end].parse().ok()?;
    u8::try_from(value)
        .ok()
        .filter(|v| (1..=DIE_FACES).contains(v))
}

/// Settles a tie-break for an already rolled die.
///
/// `guess_one` belongs to `default_player`, `guess_two` to its opponent.
pub fn resolve(
    guess_one: Option<u8>,
    guess_two: Option<u8>,
    roll: u8,
    default_player: Player,
) -> TieBreakOutcome {
    let (Some(one), Some(two)) = (guess_one, guess_two) else {
        return TieBreakOutcome::InvalidGuesses {
            starter: default_player,
        };
    };

    let diff_one = one.abs_diff(roll);
    let diff_two = two.abs_diff(roll);
    let starter = if diff_two < diff_one {
        default_player.opponent()
    } else {
        default_player
    };

    TieBreakOutcome::Rolled {
        roll,
        starter,
        tie: diff_one == diff_two,
    }
}

/// Die-rolling tie-break backed by a random number generator.
#[derive(Debug, Clone)]
pub struct DiceTieBreak<R> {
    rng: R,
    default_player: Player,
}

impl<R: Rng> DiceTieBreak<R> {
    /// Creates a tie-break where `default_player` is player one.
    pub fn new(rng: R, default_player: Player) -> Self {
        Self {
            rng,
            default_player,
        }
    }

    /// The player who wins ties and invalid input.
    pub fn default_player(&self) -> Player {
        self.default_player
    }

    /// Rolls the die (1-6, uniform).
    pub fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }

    /// Settles a tie-break from the two raw guesses.
    ///
    /// The die is only rolled when both guesses are usable.
    #[instrument(skip(self))]
    pub fn decide(&mut self, guess_one: &str, guess_two: &str) -> TieBreakOutcome {
        let (one, two) = (parse_guess(guess_one), parse_guess(guess_two));
        if one.is_none() || two.is_none() {
            debug!("Unusable tie-break guess, falling back to default player");
            return TieBreakOutcome::InvalidGuesses {
                starter: self.default_player,
            };
        }

        let roll = self.roll();
        let outcome = resolve(one, two, roll, self.default_player);
        debug!(?outcome, "Tie-break settled");
        outcome
    }
}
