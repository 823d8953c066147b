use super::{check_head, seek, EndOfTape, Tape, TapeError};
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

/// A tape whose length is fixed at compile time. `N` must be at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedLengthTape<const N: usize, T> {
    data: [T; N],
    index: usize,
}

impl<const N: usize, T: Default> Default for FixedLengthTape<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, T: Default> FixedLengthTape<N, T> {
    const NON_EMPTY: () = assert!(N > 0, "a fixed length tape needs at least one cell");

    pub fn new() -> Self {
        let () = Self::NON_EMPTY;

        debug!(len = N, head = 0, "created fixed length tape");

        Self {
            data: std::array::from_fn(|_| T::default()),
            index: 0,
        }
    }

    pub fn with_head(index: usize) -> Result<Self, TapeError> {
        check_head(index, N)?;

        let mut tape = Self::new();
        tape.index = index;
        Ok(tape)
    }
}

impl<const N: usize, T> FixedLengthTape<N, T> {
    pub fn cells(&self) -> &[T; N] {
        &self.data
    }
}

impl<const N: usize, T> Deref for FixedLengthTape<N, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data[self.index]
    }
}

impl<const N: usize, T> DerefMut for FixedLengthTape<N, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data[self.index]
    }
}

impl<const N: usize, T> Tape for FixedLengthTape<N, T> {
    fn len(&self) -> usize {
        N
    }

    fn head(&self) -> usize {
        self.index
    }

    fn shift(&mut self, amount: isize) -> Result<(), EndOfTape> {
        let new_index = seek(self.index, N, amount).inspect_err(|error| {
            trace!(%error, "rejected head move");
        })?;

        trace!(from = self.index, to = new_index, "moved head");
        self.index = new_index;
        Ok(())
    }
}
