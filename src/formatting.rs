use crate::config::GlyphKind;
use crate::data::Edge;

/// One entry of a transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Literal glyph, printed as is.
    Glyph(&'static str),

    /// Nothing on this row. Replaced by the grid glyph when the grid is on.
    Blank,
}

/// Table indexed by `[current edge][previous state]`.
pub type TransitionTable = [[Cell; 5]; 5];

/// The three glyph lanes drawn per signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Top,
    Middle,
    Bottom,
}

impl RowKind {
    pub const ALL: [RowKind; 3] = [RowKind::Top, RowKind::Middle, RowKind::Bottom];

    /// Whether a rail is drawn on this row while the trace sits in `state`.
    pub fn is_active(self, state: Edge) -> bool {
        use Edge::*;

        match self {
            RowKind::Top => matches!(state, High | Both),
            RowKind::Middle => state == HighImpedance,
            RowKind::Bottom => matches!(state, Low | Both),
        }
    }
}

#[derive(Debug)]
pub struct GlyphSet {
    /// Stub before the first and after the last step.
    pub phase_out: &'static str,

    /// Filler between two steps while a rail is sustained.
    pub keep_level: &'static str,

    pub grid: &'static str,

    /// Drawn between the title and the trace on the level row.
    pub title_separator: &'static str,

    pub top: TransitionTable,
    pub middle: TransitionTable,
    pub bottom: TransitionTable,
}

impl GlyphSet {
    pub fn for_kind(kind: GlyphKind) -> &'static GlyphSet {
        match kind {
            GlyphKind::Unicode => &UNICODE,
            GlyphKind::Ascii => &ASCII,
        }
    }

    pub fn table(&self, row: RowKind) -> &TransitionTable {
        match row {
            RowKind::Top => &self.top,
            RowKind::Middle => &self.middle,
            RowKind::Bottom => &self.bottom,
        }
    }

    pub fn lookup(&self, row: RowKind, current: Edge, previous: Edge) -> Cell {
        self.table(row)[current.index()][previous.index()]
    }
}


const fn g(s: &'static str) -> Cell {
    Cell::Glyph(s)
}

const B: Cell = Cell::Blank;

// Rows: current edge, columns: previous state, both in order `-, H, L, Z, B`.

pub static UNICODE: GlyphSet = GlyphSet {
    phase_out: "╍╍",
    keep_level: "━━",
    grid: "┊",
    title_separator: "│",
    top: [
        [B, g("━"), B,      B,      g("━")],
        [B, g("━"), g("┏"), g("┏"), g("┳")],
        [B, g("┓"), B,      B,      g("┓")],
        [B, g("┓"), B,      B,      g("┓")],
        [B, g("┳"), g("┏"), g("┏"), g("┳")],
    ],
    middle: [
        [B, g(" "), g(" "), g("━"), g(" ")],
        [B, g(" "), g("┃"), g("┛"), g("┃")],
        [B, g("┃"), g(" "), g("┓"), g("┃")],
        [B, g("┗"), g("┏"), g("━"), g("┣")],
        [B, g("┃"), g("┃"), g("┫"), g("┃")],
    ],
    bottom: [
        [B, B,      g("━"), B,      g("━")],
        [B, B,      g("┛"), B,      g("┛")],
        [B, g("┗"), g("━"), g("┗"), g("┻")],
        [B, B,      g("┛"), B,      g("┛")],
        [B, g("┗"), g("┻"), g("┗"), g("┻")],
    ],
};

pub static ASCII: GlyphSet = GlyphSet {
    phase_out: "--",
    keep_level: "--",
    grid: ".",
    title_separator: "|",
    top: [
        [B, g("-"), B,      B,      g("-")],
        [B, g("-"), g("."), g("."), g("+")],
        [B, g("."), B,      B,      g(".")],
        [B, g("."), B,      B,      g(".")],
        [B, g("+"), g("."), g("."), g("+")],
    ],
    middle: [
        [B, g(" "), g(" "), g("-"), g(" ")],
        [B, g(" "), g("|"), g("'"), g("|")],
        [B, g("|"), g(" "), g("."), g("|")],
        [B, g("'"), g("."), g("-"), g("+")],
        [B, g("|"), g("|"), g("+"), g("|")],
    ],
    bottom: [
        [B, B,      g("-"), B,      g("-")],
        [B, B,      g("'"), B,      g("'")],
        [B, g("'"), g("-"), g("'"), g("+")],
        [B, B,      g("'"), B,      g("'")],
        [B, g("'"), g("+"), g("'"), g("+")],
    ],
};
