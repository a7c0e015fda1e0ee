//! Error codes reported back to clients.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings the
//! transport layer relays to the offending client.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Action validation
    /// Setup called without exactly four players
    InvalidPlayerCount,
    /// Setup called with the same player id twice
    DuplicatePlayer,
    /// Action attempted outside its valid phase
    PhaseMismatch,
    /// Actor is not the seat to act
    OutOfTurn,
    /// Referenced card is not in the actor's hand
    CardNotInHand,
    /// Attempt to play the concealed trump card
    TrumpNotRevealed,
    /// Lead suit was held but another suit was played
    MustFollowSuit,
    /// Player id is not seated at this table
    UnknownPlayer,
    /// Card token could not be parsed
    ParseCard,

    // Resource Not Found
    /// No match registered for the room
    RoomNotFound,

    // Business Logic Conflicts
    /// Rematch requested before the current match finished
    MatchInProgress,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::TrumpNotRevealed => "TRUMP_NOT_REVEALED",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::ParseCard => "PARSE_CARD",

            Self::RoomNotFound => "ROOM_NOT_FOUND",

            Self::MatchInProgress => "MATCH_IN_PROGRESS",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
