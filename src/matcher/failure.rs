//! Knuth-Morris-Pratt failure table.

/// `table[i]` is the length of the longest proper prefix of `word[..=i]`
/// that is also a suffix of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FailureTable {
    table: Box<[usize]>,
}

impl FailureTable {
    /// Builds the table for `word` in O(len) steps.
    pub(crate) fn new(word: &[u8]) -> Self {
        let mut table = vec![0usize; word.len()];
        let mut k = 0;

        for i in 1..word.len() {
            while k > 0 && word[i] != word[k] {
                k = table[k - 1];
            }
            if word[i] == word[k] {
                k += 1;
            }
            table[i] = k;
        }

        Self {
            table: table.into_boxed_slice(),
        }
    }

    /// Returns the state to fall back to after a mismatch in state `len`.
    ///
    /// `len` must be in `1..=word.len()`.
    #[inline]
    pub(crate) fn fallback(&self, len: usize) -> usize {
        self.table[len - 1]
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.table
    }
}
