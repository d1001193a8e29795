//! The crate's narrow, local error types.
//!
//! There are no unrecoverable errors in the search core -- it is total
//! on any legal position. These types cover only the few real failure
//! seams named in the front ends: text that doesn't parse as a move,
//! and text that parses but names a move that isn't legal right now.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move text is too short or malformed: {0:?}")]
    Malformed(String),
    #[error("unknown promotion piece letter {0:?}")]
    UnknownPromotion(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("illegal move")]
pub struct IllegalMoveError;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a numeric argument, got {0:?}")]
pub struct TimeControlError(pub String);
