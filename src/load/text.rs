use super::*;
use crate::data::Edge;

use cli_log::debug;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads sequences from the line-oriented `name | edges` notation.
///
/// Blank lines are ignored. Every other line needs exactly one `|`; the name
/// and edge text are trimmed of spaces and tabs. Edge characters map
/// case-insensitively: `-`/space keep, `H`/`1` high, `L`/`0` low,
/// `Z` high impedance and `B` both.
pub struct TextLoader {
    sequences: Vec<Sequence>,
}

impl TextLoader {
    pub fn new(mut input: impl Read) -> Result<Self> {
        let mut contents = String::new();
        input.read_to_string(&mut contents)?;

        Self::parse(&contents)
    }

    pub fn open(filename: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(filename.as_ref())?;
        Self::new(file)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let line_re = Regex::new(r"^[ \t\r]*([^|]*?)[ \t\r]*\|[ \t\r]*([^|]*?)[ \t\r]*$")?;
        let mut sequences = vec![];

        for (i, line) in contents.split('\n').enumerate() {
            let lineno = i + 1;

            if line.trim().is_empty() {
                continue;
            }

            let caps = line_re.captures(line)
                .ok_or(Error::MalformedLine {
                    line: lineno,
                    separators: line.matches('|').count(),
                })?;

            let title = &caps[1];
            if title.is_empty() {
                return Err(Error::EmptyTitle { line: lineno });
            }

            let edges = Self::parse_edges(&caps[2], lineno)?;
            sequences.push(Sequence::new(title, edges));
        }

        debug!("parsed {} sequences", sequences.len());

        Ok(Self {
            sequences
        })
    }

    fn parse_edges(text: &str, lineno: usize) -> Result<Vec<Edge>> {
        text.chars()
            .enumerate()
            .map(|(col, c)| {
                Edge::from_char(c).ok_or(Error::IllegalEdgeCharacter {
                    line: lineno,
                    column: col + 1,
                    character: c,
                })
            })
            .collect()
    }
}


impl LoadSequences for TextLoader {
    fn load_sequences(&self) -> Result<Vec<Sequence>> {
        Ok(self.sequences.clone())
    }
}
