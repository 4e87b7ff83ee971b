//! The amino acid alphabet including the ambiguity codes `B`, `Z`, `X` and the gap symbol `-`.

use std::ops::Index;

use thiserror::Error;

/// Symbols in index order.
const SYMBOLS: [u8; AminoAcid::SIZE] = *b"ARNDCQEGHILKMFPSTWYVBZX-";

/// A single symbol of the amino acid alphabet.
///
/// Symbols are identified by a dense index in `0..AminoAcid::SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AminoAcid(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character '{character}' at position {position} which is not part of the amino acid alphabet")]
pub struct NonAlphabetCharacter {
    pub character: char,
    pub position: usize,
}

/// A sequence over the amino acid alphabet.
///
/// Aligned rows are represented by the same type, with gaps as [`AminoAcid::GAP`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProteinSequence {
    characters: Vec<AminoAcid>,
}

impl AminoAcid {
    pub const SIZE: usize = 24;
    pub const GAP: Self = Self(23);

    /// Case-sensitive conversion from a character.
    pub fn from_char(character: char) -> Option<Self> {
        if !character.is_ascii() {
            return None;
        }

        SYMBOLS
            .iter()
            .position(|symbol| *symbol == character as u8)
            .map(|index| Self(index as u8))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0.into()
    }

    pub fn is_gap(&self) -> bool {
        *self == Self::GAP
    }

    pub fn as_char(&self) -> char {
        SYMBOLS[self.index()].into()
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::SIZE as u8).map(Self)
    }
}

impl core::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl ProteinSequence {
    /// Parses a sequence, failing on the first character outside of the alphabet.
    pub fn parse(input: &str) -> Result<Self, NonAlphabetCharacter> {
        input
            .chars()
            .enumerate()
            .map(|(position, character)| {
                AminoAcid::from_char(character).ok_or(NonAlphabetCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|characters| Self { characters })
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.characters.iter().copied()
    }

    pub fn as_slice(&self) -> &[AminoAcid] {
        &self.characters
    }
}

impl FromIterator<AminoAcid> for ProteinSequence {
    fn from_iter<T: IntoIterator<Item = AminoAcid>>(iter: T) -> Self {
        Self {
            characters: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for ProteinSequence {
    type Output = AminoAcid;

    fn index(&self, index: usize) -> &Self::Output {
        &self.characters[index]
    }
}

impl core::fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for character in &self.characters {
            write!(f, "{character}")?;
        }
        Ok(())
    }
}
