use std::ops::Index;

/// Numbers of gap characters to insert into a sequence.
///
/// Entry `k` counts the gaps inserted immediately before the character at position `k`,
/// and the last entry counts the gaps after the last character.
/// Hence a gap vector of a sequence of length `n` has `n + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GapVector {
    gaps: Vec<usize>,
}

impl GapVector {
    /// Creates a gap vector without any gaps for a sequence of the given length.
    pub fn new_zeroed(sequence_length: usize) -> Self {
        Self {
            gaps: vec![0; sequence_length + 1],
        }
    }

    /// **Panics** if `gaps` is empty.
    pub fn from_gaps(gaps: impl Into<Vec<usize>>) -> Self {
        let gaps = gaps.into();
        assert!(!gaps.is_empty(), "a gap vector has at least one entry");
        Self { gaps }
    }

    pub fn sequence_length(&self) -> usize {
        self.gaps.len() - 1
    }

    /// The total number of gaps.
    pub fn total(&self) -> usize {
        self.gaps.iter().sum()
    }

    /// The length of the sequence after inserting the gaps.
    pub fn gapped_length(&self) -> usize {
        self.sequence_length() + self.total()
    }

    /// **Panics** if `position` is greater than the sequence length.
    pub fn add_gaps(&mut self, position: usize, count: usize) {
        self.gaps[position] += count;
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.gaps.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.gaps.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.gaps
    }
}

impl Index<usize> for GapVector {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.gaps[index]
    }
}
