use crate::data::*;
use crate::error::*;
use crate::load::LoadSequences;

use cli_log::{debug, warn};

/// A non-empty set of sequences sharing one step count.
///
/// Construction is the only validation point; a `Wave` that exists is ready
/// to be drawn.
pub struct Wave<'a> {
    sequences: &'a [Sequence],
    num_cycles: usize,
}

impl<'a> Wave<'a> {
    pub fn new(sequences: &'a [Sequence]) -> Result<Self> {
        let first = sequences.first().ok_or(Error::EmptyInput)?;
        let num_cycles = first.len();

        if let Some(odd) = sequences.iter().find(|seq| seq.len() != num_cycles) {
            warn!("sequence '{}' has {} steps, expected {}", odd.title(), odd.len(), num_cycles);
            return Err(Error::MismatchedLengths {
                title: odd.title().to_string(),
                expected: num_cycles,
                found: odd.len(),
            });
        }

        if num_cycles == 0 {
            return Err(Error::EmptyInput);
        }

        debug!("{} sequences of {} steps", sequences.len(), num_cycles);

        Ok(Self {
            sequences,
            num_cycles,
        })
    }

    pub fn num_cycles(&self) -> usize {
        self.num_cycles
    }

    pub fn num_signals(&self) -> usize {
        self.sequences.len()
    }

    pub fn sequences(&self) -> &'a [Sequence] {
        self.sequences
    }
}


/// Collect the sequences a loader provides.
pub fn load_all(loader: &impl LoadSequences) -> Result<Vec<Sequence>> {
    let sequences = loader.load_sequences()?;
    Wave::new(&sequences)?;
    Ok(sequences)
}
