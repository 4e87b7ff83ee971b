//! Reconciliation of the pairwise alignments against the center into one set of gap profiles.
//!
//! Every sequence starts with the gaps that it and the center need to realise their pairwise alignment.
//! Two sequences are reconciled by widening the gaps of the center to the maximum of both,
//! and by inserting the gaps that one sequence lacks into its own gap vector at the column that corresponds to the widened center position.
//!
//! The own gap vector of a sequence is walked by a cursor.
//! Block `b` of a sequence consists of its `own_gaps[b]` gaps followed by its residue `b`,
//! where the last block ends with a virtual residue after the end of the sequence.

use log::{debug, trace};

use crate::{
    alignment_matrix::gap_vector::GapVector,
    error::{Error, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationState {
    sequence: usize,
    center_gaps: GapVector,
    own_gaps: GapVector,
    block_index: usize,
    /// Offset into the current block.
    /// An offset equal to the block length means that the cursor sits at the end of the block.
    block_offset: usize,
}

impl ReconciliationState {
    pub fn new(sequence: usize, center_gaps: GapVector, own_gaps: GapVector) -> Self {
        Self {
            sequence,
            center_gaps,
            own_gaps,
            block_index: 0,
            block_offset: 0,
        }
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn center_gaps(&self) -> &GapVector {
        &self.center_gaps
    }

    pub fn own_gaps(&self) -> &GapVector {
        &self.own_gaps
    }

    pub fn into_own_gaps(self) -> GapVector {
        self.own_gaps
    }

    fn reset_cursor(&mut self) {
        self.block_index = 0;
        self.block_offset = 0;
    }

    fn block_length(&self) -> usize {
        self.own_gaps[self.block_index] + 1
    }

    fn overflow(&self) -> Error {
        Error::ProfileMergeOverflow {
            sequence: self.sequence,
            block_index: self.block_index,
        }
    }

    /// Moves a cursor that sits at the end of its block to the start of the next block.
    fn normalise_cursor(&mut self) -> Result<()> {
        if self.block_offset == self.block_length() {
            if self.block_index + 1 >= self.own_gaps.as_slice().len() {
                return Err(self.overflow());
            }

            self.block_index += 1;
            self.block_offset = 0;
        }

        Ok(())
    }

    /// Moves the cursor forward by `slots` columns.
    fn advance(&mut self, slots: usize) -> Result<()> {
        self.block_offset += slots;
        while self.block_offset > self.block_length() {
            self.block_offset -= self.block_length();
            self.block_index += 1;

            if self.block_index >= self.own_gaps.as_slice().len() {
                self.block_index = self.own_gaps.as_slice().len() - 1;
                return Err(self.overflow());
            }
        }

        trace!(
            "Cursor of sequence {} at block {} offset {}",
            self.sequence, self.block_index, self.block_offset
        );
        Ok(())
    }

    /// Widens the gaps of the center at `center_position` to `target`
    /// and moves the cursor past the widened center block.
    fn widen(&mut self, center_position: usize, target: usize) -> Result<()> {
        let shortfall = target - self.center_gaps[center_position];
        self.normalise_cursor()?;
        if shortfall > 0 {
            self.own_gaps.add_gaps(self.block_index, shortfall);
            self.center_gaps.add_gaps(center_position, shortfall);
        }

        self.advance(target + 1)
    }
}

/// Reconciles the state of the `current` sequence with the state of an `earlier` sequence.
///
/// Afterwards both states have the same center gaps.
pub fn reconcile(
    current: &mut ReconciliationState,
    earlier: &mut ReconciliationState,
) -> Result<()> {
    if current.center_gaps.as_slice().len() != earlier.center_gaps.as_slice().len() {
        let shorter = if current.center_gaps.as_slice().len() < earlier.center_gaps.as_slice().len()
        {
            &*current
        } else {
            &*earlier
        };
        return Err(Error::ProfileMergeOverflow {
            sequence: shorter.sequence,
            block_index: shorter.center_gaps.sequence_length(),
        });
    }

    current.reset_cursor();
    earlier.reset_cursor();

    for center_position in 0..current.center_gaps.as_slice().len() {
        let target = current.center_gaps[center_position].max(earlier.center_gaps[center_position]);
        current.widen(center_position, target)?;
        earlier.widen(center_position, target)?;
    }

    trace!(
        "Reconciled sequence {} with sequence {}",
        current.sequence, earlier.sequence
    );
    Ok(())
}

/// Reconciles all states pairwise and returns the final gap profiles in the order of the states.
///
/// Each state is reconciled with all earlier states in ascending order.
pub fn merge_gap_profiles(mut states: Vec<ReconciliationState>) -> Result<Vec<GapVector>> {
    for current_index in 1..states.len() {
        let (earlier_states, rest) = states.split_at_mut(current_index);
        let current = &mut rest[0];
        for earlier in earlier_states {
            reconcile(current, earlier)?;
        }
    }

    if let Some(state) = states.first() {
        debug!("Merged center gaps: {:?}", state.center_gaps.as_slice());
    }

    Ok(states
        .into_iter()
        .map(ReconciliationState::into_own_gaps)
        .collect())
}
