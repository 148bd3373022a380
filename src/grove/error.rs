//! Typed rejections for every player intent.
//!
//! None of these are fatal: the presentation layer turns them into a log
//! line and leaves the state as it was.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Enter a valid minute amount.")]
    InvalidInput,
    #[error("Not enough 🍄! (need {price}, have {currency})")]
    InsufficientFunds { price: u32, currency: u64 },
    #[error("You already own {0}.")]
    AlreadyOwned(&'static str),
    #[error("Adopt a pet first!")]
    NoPet,
    #[error("No snacks! Buy one in the shop.")]
    NoFood,
    #[error("Your pet is full ❤️")]
    PetFull,
    #[error("A study session is already running.")]
    SessionAlreadyActive,
    #[error("Unknown id: {0}")]
    NotFound(String),
}

impl Rejection {
    /// Short machine-friendly name, used in console diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::InvalidInput => "InvalidInput",
            Rejection::InsufficientFunds { .. } => "InsufficientFunds",
            Rejection::AlreadyOwned(_) => "AlreadyOwned",
            Rejection::NoPet => "NoPet",
            Rejection::NoFood => "NoFood",
            Rejection::PetFull => "PetFull",
            Rejection::SessionAlreadyActive => "SessionAlreadyActive",
            Rejection::NotFound(_) => "NotFound",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_game_copy() {
        assert_eq!(Rejection::NoPet.to_string(), "Adopt a pet first!");
        assert_eq!(
            Rejection::NoFood.to_string(),
            "No snacks! Buy one in the shop."
        );
        assert_eq!(
            Rejection::InsufficientFunds { price: 10, currency: 3 }.to_string(),
            "Not enough 🍄! (need 10, have 3)"
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(Rejection::PetFull.kind(), "PetFull");
        assert_eq!(Rejection::NotFound("x".into()).kind(), "NotFound");
    }
}
