use index::{
    AlignmentMatrixIndex,
    iterators::{AlignmentMatrixInnerIterator, AlignmentMatrixLineIterator, Axis},
};
use ndarray::Array2;
use num_traits::{Bounded, Zero};

use crate::{alphabet::ProteinSequence, score::Score, substitution_matrix::SubstitutionMatrix};

pub mod gap_vector;
pub mod index;
mod traceback;

/// The dynamic programming matrix of an optimal global alignment of `x` against `y`.
///
/// Rows are indexed by positions in `x` and columns by positions in `y`.
/// When multiple predecessors yield the same score, the first of
/// diagonal, deletion and insertion is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix<'scoring> {
    matrix: Array2<AlignmentMatrixEntry>,
    scoring: &'scoring SubstitutionMatrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixEntry {
    pub score: Score,
    pub alignment_type: BaseAlignmentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseAlignmentType {
    /// Marks the matrix origin at [0, 0].
    None,
    /// A character of `y` against a gap, i.e. a gap inserted into `x`.
    Insertion,
    /// A character of `x` against a gap, i.e. a gap inserted into `y`.
    Deletion,
    Match,
    Substitution,
}

impl<'scoring> AlignmentMatrix<'scoring> {
    pub fn new(scoring: &'scoring SubstitutionMatrix, x_length: usize, y_length: usize) -> Self {
        Self {
            matrix: Array2::default((x_length + 1, y_length + 1)),
            scoring,
        }
    }

    /// All indices with the given `y_index`.
    pub fn x_index_iter(&self, y_index: usize) -> AlignmentMatrixLineIterator {
        AlignmentMatrixLineIterator::new(Axis::X, y_index, self.matrix.dim().0)
    }

    /// All indices with the given `x_index`.
    pub fn y_index_iter(&self, x_index: usize) -> AlignmentMatrixLineIterator {
        AlignmentMatrixLineIterator::new(Axis::Y, x_index, self.matrix.dim().1)
    }

    pub fn inner_index_iter(&self) -> AlignmentMatrixInnerIterator {
        AlignmentMatrixInnerIterator::new(self.limit())
    }

    /// The number of rows and columns, i.e. `(|x| + 1, |y| + 1)`.
    pub fn dim(&self) -> (usize, usize) {
        self.matrix.dim()
    }

    pub fn entry(&self, x_index: usize, y_index: usize) -> AlignmentMatrixEntry {
        self.matrix[[x_index, y_index]]
    }

    pub fn score_at(&self, x_index: usize, y_index: usize) -> Score {
        self.entry(x_index, y_index).score
    }

    /// Fills the matrix and returns the score of an optimal alignment.
    pub fn align(&mut self, x: &ProteinSequence, y: &ProteinSequence) -> Score {
        debug_assert_eq!(self.matrix.dim(), (x.len() + 1, y.len() + 1));

        self.initialise(x, y);
        self.align_inner(x, y);
        self.matrix[self.last_index()].score
    }

    fn limit(&self) -> AlignmentMatrixIndex {
        AlignmentMatrixIndex::new(self.matrix.dim().0, self.matrix.dim().1)
    }

    fn last_index(&self) -> AlignmentMatrixIndex {
        AlignmentMatrixIndex::new(self.matrix.dim().0 - 1, self.matrix.dim().1 - 1)
    }

    fn initialise(&mut self, x: &ProteinSequence, y: &ProteinSequence) {
        // Initialise matrix origin.
        self.matrix[[0, 0]].score = Score::zero();
        self.matrix[[0, 0]].alignment_type = BaseAlignmentType::None;

        // Initialise matrix edges.
        for index in self.x_index_iter(0).skip(1) {
            self.matrix[index] = self.compute_deletion_entry(index, x);
        }
        for index in self.y_index_iter(0).skip(1) {
            self.matrix[index] = self.compute_insertion_entry(index, y);
        }
    }

    fn align_inner(&mut self, x: &ProteinSequence, y: &ProteinSequence) {
        for index in self.inner_index_iter() {
            self.set_max_score(index, x, y);
        }
    }

    fn set_max_score(
        &mut self,
        index: AlignmentMatrixIndex,
        x: &ProteinSequence,
        y: &ProteinSequence,
    ) {
        // Handle matches and substitutions.
        let mut entry = self.compute_match_or_substitution_entry(index, x, y);

        // Handle deletions.
        let deletion_entry = self.compute_deletion_entry(index, x);
        if deletion_entry.score > entry.score {
            entry = deletion_entry;
        }

        // Handle insertions.
        let insertion_entry = self.compute_insertion_entry(index, y);
        if insertion_entry.score > entry.score {
            entry = insertion_entry;
        }

        self.matrix[index] = entry;
    }

    fn compute_insertion_entry(
        &self,
        index: AlignmentMatrixIndex,
        y: &ProteinSequence,
    ) -> AlignmentMatrixEntry {
        let alignment_type = BaseAlignmentType::Insertion;
        let predecessor_score = self.matrix[index.predecessor(alignment_type)].score;

        AlignmentMatrixEntry {
            score: predecessor_score + self.scoring.gap_score(y[index.y_index - 1]),
            alignment_type,
        }
    }

    fn compute_deletion_entry(
        &self,
        index: AlignmentMatrixIndex,
        x: &ProteinSequence,
    ) -> AlignmentMatrixEntry {
        let alignment_type = BaseAlignmentType::Deletion;
        let predecessor_score = self.matrix[index.predecessor(alignment_type)].score;

        AlignmentMatrixEntry {
            score: predecessor_score + self.scoring.gap_score(x[index.x_index - 1]),
            alignment_type,
        }
    }

    fn compute_match_or_substitution_entry(
        &self,
        index: AlignmentMatrixIndex,
        x: &ProteinSequence,
        y: &ProteinSequence,
    ) -> AlignmentMatrixEntry {
        let x_character = x[index.x_index - 1];
        let y_character = y[index.y_index - 1];
        let alignment_type = if x_character == y_character {
            BaseAlignmentType::Match
        } else {
            BaseAlignmentType::Substitution
        };
        let predecessor_score = self.matrix[index.match_or_substitution_predecessor()].score;

        AlignmentMatrixEntry {
            score: predecessor_score + self.scoring.score(x_character, y_character),
            alignment_type,
        }
    }

    #[cfg(test)]
    fn manual_debug_fill(&mut self, entries: impl IntoIterator<Item = AlignmentMatrixEntry>) {
        let mut entries = entries.into_iter();
        for index in self.inner_index_iter() {
            self.matrix[index] = entries.next().unwrap();
        }
        assert!(entries.next().is_none());
    }
}

impl Default for AlignmentMatrixEntry {
    fn default() -> Self {
        Self {
            score: Score::min_value(),
            alignment_type: BaseAlignmentType::None,
        }
    }
}

impl core::fmt::Display for AlignmentMatrix<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut score_column_widths = vec![0; self.matrix.dim().1];
        for x_index in 0..self.matrix.dim().0 {
            for (y_index, score_column_width) in score_column_widths.iter_mut().enumerate() {
                let score = self.matrix[[x_index, y_index]].score.as_i64();
                let mut local_score_column_width = 1;

                if score < 0 {
                    local_score_column_width += 1;
                }
                let mut limit = 1i64;
                for _ in 1..=10 {
                    limit *= 10;
                    if score.unsigned_abs() >= limit as u64 {
                        local_score_column_width += 1;
                    }
                }

                *score_column_width = local_score_column_width.max(*score_column_width);
            }
        }

        for x_index in 0..self.matrix.dim().0 {
            write!(f, "[ ")?;
            #[allow(clippy::needless_range_loop)]
            for y_index in 0..self.matrix.dim().1 {
                write!(
                    f,
                    "{: >width$}",
                    self.matrix[[x_index, y_index]].score.as_i64(),
                    width = score_column_widths[y_index],
                )?;
                write!(
                    f,
                    "{} ",
                    match self.matrix[[x_index, y_index]].alignment_type {
                        BaseAlignmentType::None => "N",
                        BaseAlignmentType::Insertion => "I",
                        BaseAlignmentType::Deletion => "D",
                        BaseAlignmentType::Match => "M",
                        BaseAlignmentType::Substitution => "S",
                    }
                )?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alignment_matrix::{AlignmentMatrixEntry, BaseAlignmentType},
        alphabet::ProteinSequence,
        error::Error,
        score::Score,
        substitution_matrix::SubstitutionMatrix,
    };

    use super::AlignmentMatrix;

    fn sequence(input: &str) -> ProteinSequence {
        ProteinSequence::parse(input).unwrap()
    }

    #[test]
    fn test_simple_alignments() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let x = sequence("AD");
        let y = sequence("ACD");

        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        assert_eq!(matrix.align(&x, &y), 6.into());

        let mut manual_matrix = matrix.clone();
        manual_matrix.manual_debug_fill(
            [
                (4i64, BaseAlignmentType::Match),
                (0, BaseAlignmentType::Deletion),
                (0, BaseAlignmentType::Insertion),
                (1, BaseAlignmentType::Substitution),
                (-4, BaseAlignmentType::Insertion),
                (6, BaseAlignmentType::Match),
            ]
            .into_iter()
            .map(|(score, alignment_type)| AlignmentMatrixEntry {
                score: score.into(),
                alignment_type,
            }),
        );
        assert_eq!(
            matrix, manual_matrix,
            "matrix:\n{matrix}\nmanual_matrix:\n{manual_matrix}"
        );

        let x = sequence("ACD");
        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), x.len());
        assert_eq!(matrix.align(&x, &x), 19.into());

        let x = sequence("ABCD");
        let y = sequence("ACD");
        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        assert_eq!(matrix.align(&x, &y), 15.into());

        let y = sequence("AD");
        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        assert_eq!(matrix.align(&x, &y), 2.into());
    }

    #[test]
    fn edges_follow_gap_scores() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let x = sequence("WAC");
        let y = sequence("-K");

        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        matrix.align(&x, &y);

        assert_eq!(matrix.score_at(0, 0), Score::ZERO);
        assert_eq!(matrix.score_at(3, 0), Score::from(-12));
        // A gap character in the input aligned with a gap scores the gap-gap score.
        assert_eq!(matrix.score_at(0, 1), Score::from(1));
        assert_eq!(matrix.score_at(0, 2), Score::from(-3));
        assert_eq!(matrix.entry(0, 2).alignment_type, BaseAlignmentType::Insertion);
        assert_eq!(matrix.entry(2, 0).alignment_type, BaseAlignmentType::Deletion);
    }

    #[test]
    fn recurrence_holds_for_every_cell() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let pairs = [
            ("HEAGAWGHEE", "PAWHEAE"),
            ("MKVLAAGIV", "MKLLAGV"),
            ("A", "WWWW"),
            ("XBZ", "NDQE"),
            ("", "ACD"),
            ("ACD", ""),
        ];

        for (x, y) in pairs {
            let x = sequence(x);
            let y = sequence(y);
            let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
            matrix.align(&x, &y);

            for i in 0..=x.len() {
                for j in 0..=y.len() {
                    let mut candidates = Vec::new();
                    if i > 0 && j > 0 {
                        candidates.push(matrix.score_at(i - 1, j - 1) + scoring.score(x[i - 1], y[j - 1]));
                    }
                    if i > 0 {
                        candidates.push(matrix.score_at(i - 1, j) + scoring.gap_score(x[i - 1]));
                    }
                    if j > 0 {
                        candidates.push(matrix.score_at(i, j - 1) + scoring.gap_score(y[j - 1]));
                    }
                    let expected = candidates.into_iter().max().unwrap_or(Score::ZERO);
                    assert_eq!(matrix.score_at(i, j), expected, "cell ({i}, {j})\n{matrix}");
                }
            }
        }
    }

    #[test]
    fn diagonal_wins_ties() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let x = sequence("A");
        let y = sequence("AA");

        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        assert_eq!(matrix.align(&x, &y), Score::ZERO);
        // Both a match from [0, 1] and an insertion from [1, 1] reach a score of zero.
        assert_eq!(matrix.entry(1, 2).alignment_type, BaseAlignmentType::Match);

        let (x_gaps, y_gaps) = matrix.traceback(&x, &y).unwrap();
        assert_eq!(x_gaps.as_slice(), &[1, 0]);
        assert_eq!(y_gaps.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn deletion_wins_ties_over_insertion() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let x = sequence("CA");
        let y = sequence("DAC");

        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        assert_eq!(matrix.align(&x, &y), Score::from(-3));
        // Both a deletion from [1, 3] and an insertion from [2, 2] reach a score of -3.
        assert_eq!(matrix.score_at(1, 3), Score::from(1));
        assert_eq!(matrix.score_at(2, 2), Score::from(1));
        assert_eq!(matrix.entry(2, 3).alignment_type, BaseAlignmentType::Deletion);

        // --CA / DAC-
        let (x_gaps, y_gaps) = matrix.traceback(&x, &y).unwrap();
        assert_eq!(x_gaps.as_slice(), &[2, 0, 0]);
        assert_eq!(y_gaps.as_slice(), &[0, 0, 0, 1]);
    }

    #[test]
    fn traceback_of_simple_alignment() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let x = sequence("AD");
        let y = sequence("ACD");

        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        matrix.align(&x, &y);
        let (x_gaps, y_gaps) = matrix.traceback(&x, &y).unwrap();
        assert_eq!(x_gaps.as_slice(), &[0, 1, 0]);
        assert_eq!(y_gaps.as_slice(), &[0, 0, 0, 0]);

        let (y_gaps, x_gaps) = {
            let mut matrix = AlignmentMatrix::new(&scoring, y.len(), x.len());
            matrix.align(&y, &x);
            matrix.traceback(&y, &x).unwrap()
        };
        assert_eq!(x_gaps.as_slice(), &[0, 1, 0]);
        assert_eq!(y_gaps.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn traceback_of_empty_sequence() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let x = sequence("");
        let y = sequence("ACD");

        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
        assert_eq!(matrix.align(&x, &y), Score::from(-12));
        let (x_gaps, y_gaps) = matrix.traceback(&x, &y).unwrap();
        assert_eq!(x_gaps.as_slice(), &[3]);
        assert_eq!(y_gaps.as_slice(), &[0, 0, 0, 0]);

        let mut matrix = AlignmentMatrix::new(&scoring, y.len(), x.len());
        matrix.align(&y, &x);
        let (y_gaps, x_gaps) = matrix.traceback(&y, &x).unwrap();
        assert_eq!(x_gaps.as_slice(), &[3]);
        assert_eq!(y_gaps.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn inconsistent_matrix_is_detected() {
        let scoring = SubstitutionMatrix::blosum62().unwrap();
        let x = sequence("A");

        let mut matrix = AlignmentMatrix::new(&scoring, x.len(), x.len());
        matrix.align(&x, &x);
        matrix.manual_debug_fill([AlignmentMatrixEntry {
            score: 5.into(),
            alignment_type: BaseAlignmentType::Match,
        }]);

        assert!(matches!(
            matrix.traceback(&x, &x),
            Err(Error::DegenerateTraceback {
                x_index: 1,
                y_index: 1
            })
        ));
    }
}
