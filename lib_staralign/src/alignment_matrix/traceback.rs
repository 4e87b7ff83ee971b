use log::trace;

use super::{AlignmentMatrix, BaseAlignmentType, gap_vector::GapVector, index::AlignmentMatrixIndex};
use crate::{
    alphabet::ProteinSequence,
    error::{Error, Result},
};

impl AlignmentMatrix<'_> {
    /// Reconstructs an optimal alignment from the filled matrix.
    ///
    /// Returns the gap vectors of `x` and `y` that realise the alignment.
    /// Moves are re-derived from the scores with the same preference order as [`align`](Self::align).
    pub fn traceback(
        &self,
        x: &ProteinSequence,
        y: &ProteinSequence,
    ) -> Result<(GapVector, GapVector)> {
        debug_assert_eq!(self.matrix.dim(), (x.len() + 1, y.len() + 1));

        let mut x_gaps = GapVector::new_zeroed(x.len());
        let mut y_gaps = GapVector::new_zeroed(y.len());
        let mut index = self.last_index();

        while index.x_index > 0 && index.y_index > 0 {
            let alignment_type =
                self.traceback_move(index, x, y)
                    .ok_or(Error::DegenerateTraceback {
                        x_index: index.x_index,
                        y_index: index.y_index,
                    })?;

            match alignment_type {
                BaseAlignmentType::Insertion => x_gaps.add_gaps(index.x_index, 1),
                BaseAlignmentType::Deletion => y_gaps.add_gaps(index.y_index, 1),
                _ => {}
            }
            index = index.predecessor(alignment_type);
        }

        // The remaining prefix of one sequence is aligned against a leading gap run.
        x_gaps.add_gaps(0, index.y_index);
        y_gaps.add_gaps(0, index.x_index);

        trace!(
            "Traceback gaps x: {:?}, y: {:?}",
            x_gaps.as_slice(),
            y_gaps.as_slice()
        );
        Ok((x_gaps, y_gaps))
    }

    fn traceback_move(
        &self,
        index: AlignmentMatrixIndex,
        x: &ProteinSequence,
        y: &ProteinSequence,
    ) -> Option<BaseAlignmentType> {
        let score = self.matrix[index].score;

        [
            self.compute_match_or_substitution_entry(index, x, y),
            self.compute_deletion_entry(index, x),
            self.compute_insertion_entry(index, y),
        ]
        .into_iter()
        .find(|entry| entry.score == score)
        .map(|entry| entry.alignment_type)
    }
}
