// src/core/diagnostics.rs
//! Pretty, colored, file+line diagnostics for errors found in input files.

use std::ops::Range;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
    pub len: usize, // underline length (use 1 if unknown)
}

impl Span {
    pub fn single(line: usize, col: usize) -> Self {
        Self { line, col, len: 1 }
    }

    /// Convert a byte range in `source` into a 1-based line/column span.
    /// The underline stops at the end of the first line.
    pub fn from_byte_range(source: &str, range: Range<usize>) -> Self {
        let start = floor_char_boundary(source, range.start);
        let before = &source[..start];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = source[line_start..start].chars().count() + 1;

        let end = floor_char_boundary(source, range.end.max(start));
        let len = source[start..end]
            .split('\n')
            .next()
            .map_or(0, |s| s.chars().count());
        Self {
            line,
            col,
            len: len.max(1),
        }
    }
}

pub fn print_error(filename: &str, source: &str, title: &str, span: Span) {
    eprint!("{}", render_error(filename, source, title, span));
}

pub fn render_error(filename: &str, source: &str, title: &str, span: Span) -> String {
    let (ln, col) = (span.line, span.col);
    let line_text = nth_line(source, ln).unwrap_or_default();

    // line number gutter
    let ln_str = format!("{:>4}", ln);
    let underline = " ".repeat(col.saturating_sub(1)) + &"^".repeat(span.len.max(1));

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        "error:".bright_red().bold(),
        title.bright_white()
    ));
    out.push_str(&format!(
        "{} {}\n",
        "-->".bright_blue(),
        format!("{}:{}:{}", filename, ln, col).bright_white()
    ));
    out.push_str(&format!(" {} {}\n", ln_str.dimmed(), "|".dimmed()));
    out.push_str(&format!("{} {} {}\n", ln_str.dimmed(), "|".dimmed(), line_text));
    out.push_str(&format!(
        " {} {} {}\n\n",
        " ".repeat(ln_str.len()).dimmed(),
        "|".dimmed(),
        underline.bright_red()
    ));
    out
}

fn nth_line(src: &str, n: usize) -> Option<String> {
    src.lines().nth(n.saturating_sub(1)).map(|s| s.to_string())
}

fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_from_range_on_later_line() {
        let src = "price = 1.0\nnumbers = [1, \"two\"]\n";
        let start = src.find('[').unwrap();
        let end = src.find(']').unwrap() + 1;
        let span = Span::from_byte_range(src, start..end);
        assert_eq!(span, Span { line: 2, col: 11, len: 10 });
    }

    #[test]
    fn span_underline_stops_at_newline() {
        let src = "a = [\n1]\n";
        let span = Span::from_byte_range(src, 4..src.len());
        assert_eq!(span, Span { line: 1, col: 5, len: 1 });
    }

    #[test]
    fn span_clamps_out_of_range() {
        let span = Span::from_byte_range("x", 10..20);
        assert_eq!(span, Span::single(1, 2));
    }

    #[test]
    fn render_points_at_column() {
        colored::control::set_override(false);
        let out = render_error("demo.toml", "seed = \"x\"\n", "bad seed", Span { line: 1, col: 8, len: 3 });
        assert!(out.contains("error: bad seed"));
        assert!(out.contains("--> demo.toml:1:8"));
        assert!(out.contains("   1 | seed = \"x\""));
        assert!(out.contains("|        ^^^"));
    }
}
