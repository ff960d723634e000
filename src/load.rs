pub mod text;

use crate::data::Sequence;
use crate::error::*;

pub trait LoadSequences {
    fn load_sequences(&self) -> Result<Vec<Sequence>>;
}
