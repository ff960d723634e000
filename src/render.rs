//! Text rendering of a [`Wave`] as a three-row-per-signal timing diagram.
//!
//! Every signal occupies a top rail, a level row carrying the title and a
//! bottom rail, followed by a separator line. Columns are shared by all
//! signals: a two character stub, then one glyph per time step with a two
//! character spacer in between.

use crate::config::RenderConfig;
use crate::data::*;
use crate::error::*;
use crate::formatting::{Cell, GlyphSet, RowKind};
use crate::wave::Wave;

use cli_log::debug;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Stub and spacer width is two columns.
const SPACER_BLANK: &str = "  ";

/// Draw `sequences` into `out`.
///
/// Input is validated before the first byte is written. Write failures abort
/// the render and leave whatever was already written in the sink.
pub fn render(sequences: &[Sequence], config: &RenderConfig, out: &mut impl Write) -> Result<()> {
    let wave = Wave::new(sequences)?;
    Renderer::new(&wave, *config).write_to(out)
}


pub struct Renderer<'a, 'w> {
    wave: &'w Wave<'a>,
    config: RenderConfig,
    glyphs: &'static GlyphSet,
    gutter_width: usize,
}

impl<'a, 'w> Renderer<'a, 'w> {
    pub fn new(wave: &'w Wave<'a>, config: RenderConfig) -> Self {
        let gutter_width = wave.sequences()
            .iter()
            .map(|seq| seq.title().width())
            .max()
            .unwrap_or(0);

        Self {
            wave,
            config,
            glyphs: GlyphSet::for_kind(config.glyphs),
            gutter_width,
        }
    }

    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        debug!("rendering {} signals, {:?}", self.wave.num_signals(), self.config);

        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        Ok(())
    }

    /// All output rows in document order, trailing whitespace removed.
    pub fn lines(&self) -> Vec<String> {
        let mut rv = vec![];

        if self.config.show_time_axis {
            rv.extend(self.time_axis());
        }

        rv.push(self.separator_line());

        for seq in self.wave.sequences() {
            for row in RowKind::ALL {
                let trace = trace_row(seq.edges(), row, self.glyphs, self.config.show_grid);
                let prefix = match row {
                    RowKind::Middle => self.title_prefix(seq.title()),
                    _ => self.blank_prefix(),
                };
                rv.push(finish_line(prefix + &trace));
            }
            rv.push(self.separator_line());
        }

        rv
    }

    fn blank_prefix(&self) -> String {
        " ".repeat(self.gutter_width + 2)
    }

    fn title_prefix(&self, title: &str) -> String {
        let pad = self.gutter_width - title.width();
        format!("{}{} {}", " ".repeat(pad), title, self.glyphs.title_separator)
    }

    /// Row with one cell per time step, aligned under the step glyphs.
    fn column_line(&self, cell: impl Fn(usize) -> String) -> String {
        let mut line = self.blank_prefix();
        line.push_str(SPACER_BLANK);

        for i in 0..self.wave.num_cycles() {
            if i > 0 {
                line.push_str(SPACER_BLANK);
            }
            line.push_str(&cell(i));
        }

        finish_line(line)
    }

    fn separator_line(&self) -> String {
        let mark = if self.config.show_grid { self.glyphs.grid } else { " " };
        self.column_line(|_| mark.to_string())
    }

    fn time_axis(&self) -> Vec<String> {
        let digits = num_digits(self.wave.num_cycles() - 1);
        let mut rv = Vec::with_capacity(digits);

        for place in (1..digits).rev() {
            let scale = 10usize.pow(place as u32);
            rv.push(self.column_line(|i| {
                if i % 10 == 0 && i >= scale {
                    ((i / scale) % 10).to_string()
                } else {
                    " ".to_string()
                }
            }));
        }

        rv.push(self.column_line(|i| (i % 10).to_string()));

        rv
    }
}


/// Glyphs of one row for a whole sequence, stubs included.
///
/// The visual state starts out as high impedance and is replaced by every
/// edge that is not `Keep`.
pub fn trace_row(edges: &[Edge], row: RowKind, glyphs: &GlyphSet, show_grid: bool) -> String {
    let blank = if show_grid { glyphs.grid } else { " " };

    let mut acc = TraceAcc::new(Edge::HighImpedance);
    acc.msg.push_str(stub(glyphs, row, acc.state));

    let acc = edges.iter()
        .enumerate()
        .fold(acc, |mut acc, (i, &edge)| {
            if i > 0 {
                acc.msg.push_str(spacer(glyphs, row, acc.state));
            }

            let glyph = match glyphs.lookup(row, edge, acc.state) {
                Cell::Glyph(s) => s,
                Cell::Blank => blank,
            };
            acc.msg.push_str(glyph);

            if edge != Edge::Keep {
                acc.state = edge;
            }

            acc
        });

    let TraceAcc { state, mut msg } = acc;
    msg.push_str(stub(glyphs, row, state));

    msg
}

struct TraceAcc {
    state: Edge,
    msg: String,
}

impl TraceAcc {
    fn new(state: Edge) -> Self {
        Self {
            state,
            msg: String::new(),
        }
    }
}

fn stub(glyphs: &GlyphSet, row: RowKind, state: Edge) -> &'static str {
    if row.is_active(state) {
        glyphs.phase_out
    } else {
        SPACER_BLANK
    }
}

fn spacer(glyphs: &GlyphSet, row: RowKind, state: Edge) -> &'static str {
    if row.is_active(state) {
        glyphs.keep_level
    } else {
        SPACER_BLANK
    }
}

fn finish_line(mut line: String) -> String {
    let len = line.trim_end().len();
    line.truncate(len);
    line
}

/// Decimal digits needed to print `n`.
pub fn num_digits(mut n: usize) -> usize {
    let mut rv = 1;
    while n >= 10 {
        n /= 10;
        rv += 1;
    }
    rv
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::config::GlyphKind;
    use crate::formatting::{ASCII, UNICODE};
    use Edge::*;

    fn edges(s: &str) -> Vec<Edge> {
        s.chars().map(|c| Edge::from_char(c).unwrap()).collect()
    }

    fn render_lines(sequences: &[Sequence], config: RenderConfig) -> Vec<String> {
        let mut out = Vec::new();
        render(sequences, &config, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn no_frills(glyphs: GlyphKind) -> RenderConfig {
        RenderConfig {
            show_grid: false,
            show_time_axis: false,
            glyphs,
        }
    }

    #[test]
    fn test_num_digits() {
        assert_eq!(1, num_digits(0));
        assert_eq!(1, num_digits(9));
        assert_eq!(2, num_digits(10));
        assert_eq!(2, num_digits(23));
        assert_eq!(3, num_digits(100));
    }

    #[test]
    fn test_clock_rows() {
        let clk = edges("LLHLHL");

        assert_eq!(
            "  ┊  ┊  ┏━━┓  ┏━━┓  ",
            trace_row(&clk, RowKind::Top, &UNICODE, true)
        );
        assert_eq!(
            "╍╍┓     ┃  ┃  ┃  ┃  ",
            trace_row(&clk, RowKind::Middle, &UNICODE, true)
        );
        assert_eq!(
            "  ┗━━━━━┛  ┗━━┛  ┗╍╍",
            trace_row(&clk, RowKind::Bottom, &UNICODE, true)
        );
    }

    #[test]
    fn test_keep_propagates_state() {
        let seq = edges("H--L");

        assert_eq!("  ┏━━━━━━━━┓  ", trace_row(&seq, RowKind::Top, &UNICODE, false));
        assert_eq!("╍╍┛        ┃  ", trace_row(&seq, RowKind::Middle, &UNICODE, false));
        assert_eq!("           ┗╍╍", trace_row(&seq, RowKind::Bottom, &UNICODE, false));
    }

    #[test]
    fn test_high_impedance_and_bus() {
        let seq = edges("ZBZ");

        assert_eq!("     ┏━━┓  ", trace_row(&seq, RowKind::Top, &UNICODE, false));
        assert_eq!("╍╍━━━┫  ┣╍╍", trace_row(&seq, RowKind::Middle, &UNICODE, false));
        assert_eq!("     ┗━━┛  ", trace_row(&seq, RowKind::Bottom, &UNICODE, false));
    }

    #[test]
    fn test_single_step_stubs() {
        let seq = [High];

        assert_eq!("  ┏╍╍", trace_row(&seq, RowKind::Top, &UNICODE, true));
        assert_eq!("╍╍┛  ", trace_row(&seq, RowKind::Middle, &UNICODE, true));
        assert_eq!("  ┊  ", trace_row(&seq, RowKind::Bottom, &UNICODE, true));

        let seq = [Keep];

        assert_eq!("  ┊  ", trace_row(&seq, RowKind::Top, &UNICODE, true));
        assert_eq!("╍╍━╍╍", trace_row(&seq, RowKind::Middle, &UNICODE, true));
        assert_eq!("  ┊  ", trace_row(&seq, RowKind::Bottom, &UNICODE, true));
    }

    #[test]
    fn test_grid_only_on_rail_blanks() {
        let seq = edges("HHHH");
        let bottom = trace_row(&seq, RowKind::Bottom, &UNICODE, true);
        let middle = trace_row(&seq, RowKind::Middle, &UNICODE, true);

        assert_eq!("  ┊  ┊  ┊  ┊  ", bottom);
        assert!(!middle.contains('┊'));

        let bottom = trace_row(&seq, RowKind::Bottom, &UNICODE, false);
        assert_eq!("              ", bottom);
    }

    #[test]
    fn test_ascii_clock() {
        let clk = edges("LLHLHL");

        assert_eq!("  .  .  .--.  .--.  ", trace_row(&clk, RowKind::Top, &ASCII, true));
        assert_eq!("--.     |  |  |  |  ", trace_row(&clk, RowKind::Middle, &ASCII, true));
        assert_eq!("  '-----'  '--'  '--", trace_row(&clk, RowKind::Bottom, &ASCII, true));
    }

    #[test]
    fn test_layout() {
        let seqs = vec![
            Sequence::new("clk", edges("LH")),
            Sequence::new("enable", edges("ZL")),
        ];
        let lines = render_lines(&seqs, no_frills(GlyphKind::Unicode));

        assert_eq!(
            vec![
                "",
                "             ┏╍╍",
                "   clk │╍╍┓  ┃",
                "          ┗━━┛",
                "",
                "",
                "enable │╍╍━━━┓",
                "             ┗╍╍",
                "",
            ],
            lines
        );
    }

    #[test]
    fn test_time_axis() {
        let seqs = vec![Sequence::new("x", vec![Keep; 12])];
        let config = RenderConfig {
            show_grid: true,
            show_time_axis: true,
            glyphs: GlyphKind::Ascii,
        };
        let lines = render_lines(&seqs, config);

        assert_eq!("                                   1", lines[0]);
        assert_eq!("     0  1  2  3  4  5  6  7  8  9  0  1", lines[1]);
        assert_eq!("     .  .  .  .  .  .  .  .  .  .  .  .", lines[2]);
    }

    #[test]
    fn test_line_count() {
        for (steps, signals) in [(1, 1), (9, 2), (10, 3), (101, 1)] {
            let seqs: Vec<_> = (0..signals)
                .map(|i| Sequence::new(format!("s{}", i), vec![High; steps]))
                .collect();

            for &show_time_axis in &[false, true] {
                let config = RenderConfig {
                    show_grid: true,
                    show_time_axis,
                    glyphs: GlyphKind::Unicode,
                };
                let axis = if show_time_axis { num_digits(steps - 1) } else { 0 };

                assert_eq!(axis + signals * 4 + 1, render_lines(&seqs, config).len());
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let seqs = vec![
            Sequence::new("a", edges("LHZB-L")),
            Sequence::new("b", edges("B--ZHH")),
        ];
        let config = RenderConfig::default();

        assert_eq!(render_lines(&seqs, config), render_lines(&seqs, config));
    }

    #[test]
    fn test_ascii_output_is_ascii() {
        let seqs = vec![
            Sequence::new("a", edges("LHZB-LHLHZZBBL")),
            Sequence::new("b", edges("B--ZHHL-------")),
        ];
        let mut out = Vec::new();
        let config = RenderConfig {
            glyphs: GlyphKind::Ascii,
            ..RenderConfig::default()
        };
        render(&seqs, &config, &mut out).unwrap();

        assert!(out.is_ascii());
    }

    /// Every glyph column either matches the table for its edge and
    /// previous state or, where the table is blank, the grid glyph.
    #[test]
    fn test_columns_follow_tables() {
        let seq = edges("LHZB-LHLHZZBBL--HB");

        for &show_grid in &[false, true] {
            for row in RowKind::ALL {
                let trace: Vec<char> = trace_row(&seq, row, &UNICODE, show_grid)
                    .chars()
                    .collect();
                let mut state = HighImpedance;

                for (i, &edge) in seq.iter().enumerate() {
                    let expected = match UNICODE.lookup(row, edge, state) {
                        Cell::Glyph(s) => s,
                        Cell::Blank if show_grid => UNICODE.grid,
                        Cell::Blank => " ",
                    };
                    let pos = SPACER_BLANK.len() + i * (SPACER_BLANK.len() + 1);
                    assert_eq!(expected, trace[pos].to_string());

                    if edge != Keep {
                        state = edge;
                    }
                }
            }
        }
    }

    struct FailingSink {
        writes: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            self.writes += 1;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mismatch_writes_nothing() {
        let seqs = vec![
            Sequence::new("a", edges("LH")),
            Sequence::new("b", edges("LHL")),
        ];
        let mut sink = FailingSink { writes: 0 };

        match render(&seqs, &RenderConfig::default(), &mut sink) {
            Err(Error::MismatchedLengths { .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(0, sink.writes);
    }

    #[test]
    fn test_write_failure_propagates() {
        let seqs = vec![Sequence::new("a", edges("LH"))];
        let mut sink = FailingSink { writes: 0 };

        match render(&seqs, &RenderConfig::default(), &mut sink) {
            Err(Error::IoError(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(1, sink.writes);
    }
}
