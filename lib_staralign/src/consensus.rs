//! Scores of a materialized alignment.

use log::debug;

use crate::{
    alphabet::ProteinSequence, score::Score, substitution_matrix::SubstitutionMatrix,
};

/// The score of two aligned rows.
///
/// Leading columns where both rows have a gap are skipped.
/// Later columns are all scored, including columns where both rows have a gap.
pub fn pair_score(scoring: &SubstitutionMatrix, a: &ProteinSequence, b: &ProteinSequence) -> Score {
    a.iter()
        .zip(b.iter())
        .skip_while(|(a, b)| a.is_gap() && b.is_gap())
        .map(|(a, b)| scoring.score(a, b))
        .sum()
}

/// The sum of [`pair_score`] over all pairs of rows.
pub fn consensus_score(scoring: &SubstitutionMatrix, rows: &[ProteinSequence]) -> Score {
    let mut total = Score::ZERO;
    for (a_index, a) in rows.iter().enumerate() {
        for (b_index, b) in rows.iter().enumerate().take(a_index) {
            let score = pair_score(scoring, a, b);
            debug!("Consensus score of rows {a_index} and {b_index}: {score}");
            total += score;
        }
    }
    total
}

/// The score of the pairwise alignment of `a` and `b` that is induced by the two rows.
///
/// All columns where both rows have a gap are removed before scoring.
/// This score never exceeds the score of an optimal alignment of the ungapped sequences.
pub fn induced_pairwise_score(
    scoring: &SubstitutionMatrix,
    a: &ProteinSequence,
    b: &ProteinSequence,
) -> Score {
    a.iter()
        .zip(b.iter())
        .filter(|(a, b)| !(a.is_gap() && b.is_gap()))
        .map(|(a, b)| scoring.score(a, b))
        .sum()
}
