use crate::{
    alignment_matrix::gap_vector::GapVector,
    alphabet::{AminoAcid, ProteinSequence},
    error::{Error, Result},
};

/// Inserts the gaps of `profile` into `sequence`.
///
/// Returns an error if the profile was not created for a sequence of this length.
pub fn materialize(sequence: &ProteinSequence, profile: &GapVector) -> Result<ProteinSequence> {
    if profile.sequence_length() != sequence.len() {
        return Err(Error::ProfileLengthMismatch {
            sequence_length: sequence.len(),
            profile_length: profile.sequence_length(),
        });
    }

    let mut row = Vec::with_capacity(profile.gapped_length());
    for (gaps, character) in profile
        .iter()
        .zip(sequence.iter().map(Some).chain([None]))
    {
        row.extend(std::iter::repeat_n(AminoAcid::GAP, gaps));
        row.extend(character);
    }

    Ok(row.into_iter().collect())
}

/// Equal-length aligned rows, one per named input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleAlignment {
    names: Vec<String>,
    rows: Vec<ProteinSequence>,
}

impl MultipleAlignment {
    pub fn new(names: Vec<String>, rows: Vec<ProteinSequence>) -> Result<Self> {
        if names.len() != rows.len() {
            return Err(Error::NameCountMismatch {
                names: names.len(),
                rows: rows.len(),
            });
        }

        if let Some(expected) = rows.first().map(ProteinSequence::len) {
            if let Some((sequence, row)) = rows
                .iter()
                .enumerate()
                .find(|(_, row)| row.len() != expected)
            {
                return Err(Error::UnequalRowLengths {
                    sequence,
                    expected,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { names, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(ProteinSequence::len).unwrap_or(0)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rows(&self) -> &[ProteinSequence] {
        &self.rows
    }

    /// The aligned rows as strings, in input order.
    pub fn aligned_sequences(&self) -> Vec<String> {
        self.rows.iter().map(ToString::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProteinSequence)> {
        self.names.iter().map(String::as_str).zip(&self.rows)
    }
}

impl core::fmt::Display for MultipleAlignment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (name, row) in self.iter() {
            writeln!(f, ">{name}")?;
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
