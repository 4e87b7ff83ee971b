use std::io::{Read, Write};

use log::trace;
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take},
    combinator::opt,
    multi::{count, many1},
    sequence::{preceded, tuple},
};

use super::SubstitutionMatrix;
use crate::{
    alphabet::AminoAcid,
    error::Result,
    io::{
        parse_any_whitespace, parse_title, parse_whitespace, skip_any_whitespace, skip_whitespace,
        translate_nom_error,
    },
    score::Score,
};

impl SubstitutionMatrix {
    pub fn read_plain(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        Self::parse_plain(&input)
            .map_err(translate_nom_error)
            .map(|(_, output)| output)
    }

    pub fn write_plain(&self, mut writer: impl Write) -> Result<()> {
        writeln!(writer, "# {}", self.name)?;
        writeln!(writer)?;

        writeln!(writer, "SubstitutionScoreTable")?;

        let column_width = self
            .score_table
            .iter()
            .map(|score| format!("{score}").len())
            .max()
            .unwrap_or(1);

        write!(writer, "  |")?;
        for character in AminoAcid::iter() {
            for _ in 0..column_width {
                write!(writer, " ")?;
            }
            write!(writer, "{character}")?;
        }
        writeln!(writer)?;

        write!(writer, "--+")?;
        for _ in 0..(AminoAcid::SIZE * (column_width + 1)) {
            write!(writer, "-")?;
        }
        writeln!(writer)?;

        for row_character in AminoAcid::iter() {
            write!(writer, "{row_character} |")?;
            for column_character in AminoAcid::iter() {
                let score = self.score(row_character, column_character);
                write!(writer, " {score: >column_width$}")?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    pub(crate) fn parse_plain(input: &str) -> IResult<&str, Self> {
        let (input, name) = opt(parse_title).parse(input)?;
        let (input, score_table) = parse_substitution_score_table(input)?;
        let input = skip_any_whitespace(input)?;

        let name = name.unwrap_or("").to_string();
        Ok((input, Self::new(name, score_table)))
    }
}

fn parse_substitution_score_table(input: &str) -> IResult<&str, Vec<Score>> {
    // Identifier
    let input = skip_any_whitespace(input)?;
    let input = tag("SubstitutionScoreTable")(input)?.0;

    // First row gives the order of the characters in the columns
    let (input, column_character_order) = parse_substitution_score_table_first_row(input)?;

    // Separator line
    let input = tuple((
        parse_any_whitespace,
        many1(tag("-")),
        tag("+"),
        many1(tag("-")),
    ))
    .parse(input)?
    .0;

    let (input, mut rows) =
        count(parse_substitution_score_table_row, AminoAcid::SIZE).parse(input)?;

    let mut row_characters: Vec<_> = rows.iter().map(|(character, _)| *character).collect();
    row_characters.sort();
    row_characters.dedup();
    if row_characters.len() != AminoAcid::SIZE {
        return Err(nom::Err::Failure(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Verify,
        }));
    }
    rows.sort_unstable_by_key(|(character, _)| character.index());

    // Reorder the columns into index order
    let mut score_table = Vec::with_capacity(AminoAcid::SIZE * AminoAcid::SIZE);
    for (_, row) in rows.iter() {
        for column in AminoAcid::iter() {
            let column_index = column_character_order
                .iter()
                .position(|character| *character == column)
                .ok_or(nom::Err::Failure(nom::error::Error {
                    input,
                    code: nom::error::ErrorKind::Verify,
                }))?;
            score_table.push(row[column_index]);
        }
    }

    Ok((input, score_table))
}

fn parse_substitution_score_table_first_row(input: &str) -> IResult<&str, Vec<AminoAcid>> {
    trace!(
        "Parsing the first row of a substitution score table with alphabet size {}",
        AminoAcid::SIZE
    );

    let input = skip_any_whitespace(input)?;
    let input = tag("|")(input)?.0;
    let (input, characters) = count(
        preceded(parse_whitespace, parse_alphabet_character),
        AminoAcid::SIZE,
    )
    .parse(input)?;

    let mut sorted_characters = characters.clone();
    sorted_characters.sort();
    sorted_characters.dedup();

    if sorted_characters.len() != AminoAcid::SIZE {
        Err(nom::Err::Failure(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Verify,
        }))
    } else {
        Ok((input, characters))
    }
}

fn parse_substitution_score_table_row(input: &str) -> IResult<&str, (AminoAcid, Vec<Score>)> {
    let input = skip_any_whitespace(input)?;
    let (input, character) = parse_alphabet_character(input)?;
    let input = skip_whitespace(input)?;
    let input = tag("|")(input)?.0;
    let (input, scores) = count(
        preceded(parse_whitespace, nom::character::complete::i64),
        AminoAcid::SIZE,
    )
    .parse(input)?;
    let scores = scores.into_iter().map(Score::from).collect();
    Ok((input, (character, scores)))
}

fn parse_alphabet_character(input: &str) -> IResult<&str, AminoAcid> {
    let (input, character) = take(1usize)(input)?;
    let character = character
        .chars()
        .next()
        .and_then(AminoAcid::from_char)
        .ok_or(nom::Err::Failure(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Verify,
        }))?;
    Ok((input, character))
}
