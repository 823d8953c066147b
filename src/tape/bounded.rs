use super::{check_head, seek, EndOfTape, Tape, TapeError};
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

/// A tape whose length is chosen at runtime and never changes afterwards.
///
/// The head always points at a cell: construction rejects empty tapes and
/// out-of-range heads, and a move that would leave the tape returns
/// [`EndOfTape`] without touching the head.
///
/// ```
/// use bounded_tape::tape::{BoundedTape, Tape};
///
/// let mut tape = BoundedTape::<u8>::new(4, 0)?;
/// tape.write(1);
/// tape.move_right()?;
/// assert_eq!(*tape.read(), 0);
/// assert!(tape.move_left().and_then(|_| tape.move_left()).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedTape<T> {
    data: Box<[T]>,
    index: usize,
}

impl<T: Default> BoundedTape<T> {
    pub fn new(len: usize, initial_index: usize) -> Result<Self, TapeError> {
        check_head(initial_index, len)?;

        debug!(len, head = initial_index, "allocated bounded tape");

        Ok(Self {
            data: std::iter::repeat_with(T::default).take(len).collect(),
            index: initial_index,
        })
    }
}

impl<T> BoundedTape<T> {
    /// Builds a tape over existing cells, e.g. a preloaded input.
    pub fn from_cells(cells: Vec<T>, initial_index: usize) -> Result<Self, TapeError> {
        check_head(initial_index, cells.len())?;

        debug!(len = cells.len(), head = initial_index, "adopted bounded tape");

        Ok(Self {
            data: cells.into_boxed_slice(),
            index: initial_index,
        })
    }

    pub fn cells(&self) -> &[T] {
        &self.data
    }

    pub fn into_cells(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T> Deref for BoundedTape<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data[self.index]
    }
}

impl<T> DerefMut for BoundedTape<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data[self.index]
    }
}

impl<T> Tape for BoundedTape<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn head(&self) -> usize {
        self.index
    }

    fn shift(&mut self, amount: isize) -> Result<(), EndOfTape> {
        let new_index = seek(self.index, self.data.len(), amount).inspect_err(|error| {
            trace!(%error, "rejected head move");
        })?;

        trace!(from = self.index, to = new_index, "moved head");
        self.index = new_index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_tapes() {
        assert_eq!(BoundedTape::<u8>::new(0, 0), Err(TapeError::Empty));
        assert_eq!(BoundedTape::<u8>::from_cells(vec![], 0), Err(TapeError::Empty));
    }

    #[test]
    fn rejects_heads_past_the_end() {
        assert_eq!(
            BoundedTape::<u8>::new(4, 4),
            Err(TapeError::HeadOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            BoundedTape::from_cells(vec!['a', 'b'], 9),
            Err(TapeError::HeadOutOfBounds { index: 9, len: 2 })
        );
    }

    #[test]
    fn from_cells_keeps_contents() {
        let mut tape = BoundedTape::from_cells(vec![3, 1, 4], 2).unwrap();
        assert_eq!(*tape, 4);
        tape.shift(-2).unwrap();
        assert_eq!(*tape.read(), 3);
        assert_eq!(tape.into_cells(), vec![3, 1, 4]);
    }

    #[test]
    fn failed_shift_keeps_head() {
        let mut tape = BoundedTape::<u8>::new(5, 2).unwrap();
        assert_eq!(tape.shift(-3), Err(EndOfTape::Left { head: 2, by: 3 }));
        assert_eq!(tape.shift(3), Err(EndOfTape::Right { head: 2, by: 3, len: 5 }));
        assert_eq!(tape.head(), 2);

        tape.shift(2).unwrap();
        assert_eq!(tape.head(), 4);
    }

    #[test]
    fn works_with_non_copy_cells() {
        let mut tape = BoundedTape::<String>::new(2, 0).unwrap();
        tape.write("blank".to_owned());
        tape.move_right().unwrap();
        tape.push('!');
        assert_eq!(tape.cells(), ["blank".to_owned(), "!".to_owned()]);
    }
}
