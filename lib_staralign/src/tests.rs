use crate::{
    alignment_matrix::AlignmentMatrix,
    alphabet::{AminoAcid, ProteinSequence},
    consensus::{induced_pairwise_score, pair_score},
    error::Error,
    score::Score,
    star_aligner::{CenterStarAligner, StarAlignerConfig, align},
    substitution_matrix::SubstitutionMatrix,
};

fn aligner() -> CenterStarAligner {
    CenterStarAligner::new(&StarAlignerConfig::default()).unwrap()
}

fn character(character: char) -> AminoAcid {
    AminoAcid::from_char(character).unwrap()
}

#[test]
fn identical_sequences() {
    let scoring = SubstitutionMatrix::blosum62().unwrap();
    let (score, rows) = align("blosum62", [("first", "ACD"), ("second", "ACD")]).unwrap();

    assert_eq!(rows, vec!["ACD", "ACD"]);
    assert_eq!(
        score,
        scoring.score(character('A'), character('A'))
            + scoring.score(character('C'), character('C'))
            + scoring.score(character('D'), character('D'))
    );
    assert_eq!(score, Score::from(19));
}

#[test]
fn deletion_in_shorter_sequence() {
    let scoring = SubstitutionMatrix::blosum62().unwrap();
    let alignment = aligner().align([("long", "ACD"), ("short", "AD")]).unwrap();

    assert_eq!(alignment.center(), 0);
    assert_eq!(alignment.aligned_sequences(), vec!["ACD", "A-D"]);
    assert_eq!(
        alignment.score(),
        scoring.score(character('A'), character('A'))
            + scoring.gap_score(character('C'))
            + scoring.score(character('D'), character('D'))
    );
}

#[test]
fn three_sequences_share_columns() {
    let scoring = SubstitutionMatrix::blosum62().unwrap();
    let alignment = aligner()
        .align([("s0", "ACD"), ("s1", "AD"), ("s2", "ABCD")])
        .unwrap();

    assert_eq!(alignment.center(), 0);
    assert_eq!(alignment.aligned_sequences(), vec!["A-CD", "A--D", "ABCD"]);
    assert_eq!(alignment.alignment().column_count(), 4);
    // The double gap column of s0 and s1 is scored after the leading columns.
    assert_eq!(alignment.score(), Score::from(24));

    let rows = alignment.alignment().rows();
    assert_eq!(pair_score(&scoring, &rows[1], &rows[0]), Score::from(7));
    for a in 0..rows.len() {
        for b in 0..a {
            assert!(
                induced_pairwise_score(&scoring, &rows[a], &rows[b])
                    <= alignment.optimal_pairwise_score(a, b)
            );
        }
    }
}

#[test]
fn center_pairs_keep_their_optimal_alignment() {
    let scoring = SubstitutionMatrix::blosum62().unwrap();
    let sequences = [
        ("P1", "MKTAYIAKQRQISFVKSHFSRQ"),
        ("P2", "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ"),
        ("P3", "MKSAYIAKQRQISFVKSHFSRQ"),
        ("P4", "TAYIAKQRQISFVKSH"),
        ("P5", "MKTAYIAKQRQWSFVKSHFSRQAPXZB"),
    ];
    let alignment = aligner().align(sequences).unwrap();

    let rows = alignment.alignment().rows();
    let column_count = alignment.alignment().column_count();
    assert!(rows.iter().all(|row| row.len() == column_count));

    for (row, (_, sequence)) in rows.iter().zip(sequences) {
        let ungapped: String = row
            .iter()
            .filter(|character| !character.is_gap())
            .map(|character| character.as_char())
            .collect();
        assert_eq!(ungapped, sequence);
    }

    let center = alignment.center();
    for a in 0..rows.len() {
        for b in 0..a {
            let induced = induced_pairwise_score(&scoring, &rows[a], &rows[b]);
            let optimal = alignment.optimal_pairwise_score(a, b);
            if a == center || b == center {
                assert_eq!(induced, optimal, "pair ({a}, {b})");
            } else {
                assert!(induced <= optimal, "pair ({a}, {b})");
            }
        }
    }
}

#[test]
fn optimal_pairwise_scores_match_the_matrix() {
    let scoring = SubstitutionMatrix::blosum62().unwrap();
    let sequences = ["HEAGAWGHEE", "PAWHEAE", "HEAWGE"];
    let alignment = aligner()
        .align(sequences.iter().enumerate().map(|(index, sequence)| (index.to_string(), *sequence)))
        .unwrap();

    for a in 0..sequences.len() {
        for b in 0..a {
            let x = ProteinSequence::parse(sequences[a]).unwrap();
            let y = ProteinSequence::parse(sequences[b]).unwrap();
            let mut matrix = AlignmentMatrix::new(&scoring, x.len(), y.len());
            assert_eq!(matrix.align(&x, &y), alignment.optimal_pairwise_score(a, b));
        }
    }
}

#[test]
fn single_sequence_is_returned_verbatim() {
    let (score, rows) = align("blosum62", [("only", "MKV-ACD")]).unwrap();
    assert_eq!(score, Score::ZERO);
    assert_eq!(rows, vec!["MKV-ACD"]);

    let (score, rows) = align("blosum62", [("empty", "")]).unwrap();
    assert_eq!(score, Score::ZERO);
    assert_eq!(rows, vec![""]);
}

#[test]
fn empty_sequences_are_padded() {
    let (_, rows) = align("blosum62", [("a", "ACD"), ("b", ""), ("c", "AD")]).unwrap();
    assert_eq!(rows, vec!["ACD", "---", "A-D"]);
}

#[test]
fn unknown_symbol_is_reported() {
    let result = align("blosum62", [("valid", "ACD"), ("invalid", "Q1")]);
    match result {
        Err(Error::UnknownSymbol { sequence, source }) => {
            assert_eq!(sequence, "invalid");
            assert_eq!(source.character, '1');
            assert_eq!(source.position, 1);
        }
        other => panic!("expected an unknown symbol error, got {other:?}"),
    }
}

#[test]
fn unknown_matrix_is_reported() {
    let result = align("pam250", [("a", "ACD")]);
    assert!(matches!(result, Err(Error::UnknownMatrix(name)) if name == "pam250"));

    // Matrix names are case-sensitive.
    assert!(matches!(
        align("BLOSUM62", [("a", "ACD")]),
        Err(Error::UnknownMatrix(_))
    ));
}

#[test]
fn empty_input_is_reported() {
    let result = align("blosum62", Vec::<(String, String)>::new());
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn alignment_is_deterministic() {
    let sequences = [
        ("a", "GATTACA"),
        ("b", "GCATGCW"),
        ("c", "TACGATTAC"),
        ("d", "ACAGT"),
    ];
    let first = align("blosum62", sequences).unwrap();
    for _ in 0..3 {
        assert_eq!(align("blosum62", sequences).unwrap(), first);
    }
}
