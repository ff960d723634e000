use std::fmt;
use std::ops::Index;

//
// Types
//

/// Signal level instruction for one time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// No transition, the previous level continues.
    Keep,
    High,
    Low,
    HighImpedance,
    /// Simultaneous high and low, used for bus activity.
    Both,
}

impl Edge {
    pub const ALL: [Edge; 5] = [
        Edge::Keep,
        Edge::High,
        Edge::Low,
        Edge::HighImpedance,
        Edge::Both,
    ];

    /// Position of the variant in the glyph tables.
    pub const fn index(self) -> usize {
        match self {
            Edge::Keep => 0,
            Edge::High => 1,
            Edge::Low => 2,
            Edge::HighImpedance => 3,
            Edge::Both => 4,
        }
    }

    /// Map one character of the textual edge notation, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '-' | ' ' => Some(Edge::Keep),
            'H' | '1' => Some(Edge::High),
            'L' | '0' => Some(Edge::Low),
            'Z' => Some(Edge::HighImpedance),
            'B' => Some(Edge::Both),
            _ => None,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Edge::Keep => '-',
            Edge::High => 'H',
            Edge::Low => 'L',
            Edge::HighImpedance => 'Z',
            Edge::Both => 'B',
        };
        write!(f, "{}", c)
    }
}


/// One named signal with one edge per time step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    title: String,
    edges: Vec<Edge>,
}

impl Sequence {
    pub fn new(title: impl Into<String>, edges: Vec<Edge>) -> Self {
        Self {
            title: title.into(),
            edges,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Index<usize> for Sequence {
    type Output = Edge;

    fn index(&self, step: usize) -> &Edge {
        &self.edges[step]
    }
}
