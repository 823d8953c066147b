mod bounded;
mod fixed;

pub use bounded::*;
pub use fixed::*;

use std::ops::DerefMut;

use thiserror::Error;

/// Returned when a move would take the head past either end of the tape.
///
/// The head is never moved when this is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EndOfTape {
    #[error("unable to move left by {by}, head is at {head}")]
    Left { head: usize, by: usize },
    #[error("unable to move right by {by}, head is at {head} of a {len}-cell tape")]
    Right { head: usize, by: usize, len: usize },
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TapeError {
    #[error("a tape needs at least one cell")]
    Empty,
    #[error("initial head {index} is outside a tape of {len} cells")]
    HeadOutOfBounds { index: usize, len: usize },
}

/// A finite tape whose current cell is reachable through `Deref`.
pub trait Tape: DerefMut {
    fn len(&self) -> usize;

    /// Always `false` for a constructed tape.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn head(&self) -> usize;

    /// Moves the head by `amount` cells, or leaves it alone and returns
    /// [`EndOfTape`] if the target is off the tape.
    fn shift(&mut self, amount: isize) -> Result<(), EndOfTape>;

    fn move_left(&mut self) -> Result<(), EndOfTape> {
        self.shift(-1)
    }

    fn move_right(&mut self) -> Result<(), EndOfTape> {
        self.shift(1)
    }

    fn read(&self) -> &Self::Target {
        self
    }

    fn write(&mut self, value: Self::Target)
    where
        Self::Target: Sized,
    {
        **self = value;
    }
}

/// Resolves where a shift of `amount` from `head` lands on a tape of `len` cells.
pub(crate) fn seek(head: usize, len: usize, amount: isize) -> Result<usize, EndOfTape> {
    let by = amount.unsigned_abs();

    match head.checked_add_signed(amount) {
        Some(target) if target < len => Ok(target),
        _ if amount < 0 => Err(EndOfTape::Left { head, by }),
        _ => Err(EndOfTape::Right { head, by, len }),
    }
}

pub(crate) fn check_head(index: usize, len: usize) -> Result<(), TapeError> {
    if len == 0 {
        return Err(TapeError::Empty);
    }

    if index >= len {
        return Err(TapeError::HeadOutOfBounds { index, len });
    }

    Ok(())
}
