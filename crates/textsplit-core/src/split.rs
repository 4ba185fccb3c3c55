//! Recursive separator-priority splitter.
//!
//! Splits text into contiguous pieces bounded by `max_chars`, preferring
//! to cut at the coarsest separator available (paragraph, then line, then
//! sentence, then word).
//!
//! # Algorithm
//!
//! 1. Empty text yields no spans.
//! 2. With no separators left, the fragment is emitted whole. This is an
//!    atomic unit and may exceed `max_chars`.
//! 3. Otherwise split the fragment on the first separator, keeping the
//!    separator attached to the end of each piece (see [`split_literal`]).
//! 4. Accumulate pieces into a buffer. A piece that would push a
//!    non-empty buffer past `max_chars` flushes the buffer first.
//! 5. A piece that alone exceeds `max_chars` flushes the buffer and is
//!    split again with the remaining, finer separators; its sub-pieces go
//!    through the same buffer rule.
//! 6. Flush whatever is left.
//!
//! Lengths are counted in Unicode scalar values, not bytes. Spans carry
//! byte offsets so callers can slice the input without copying.

/// A contiguous region of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    /// Length in chars.
    pub chars: usize,
}

impl Span {
    fn new(start: usize, piece: &str) -> Self {
        Self {
            start,
            end: start + piece.len(),
            chars: piece.chars().count(),
        }
    }

    /// Borrow this span out of the text it was computed from.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Split `text` on every occurrence of `separator`, keeping the separator
/// attached to the end of the piece it terminates.
///
/// The split is lossless: no piece is empty, and concatenating the pieces
/// reproduces `text` exactly. Two separators in a row produce a piece that
/// is just the separator.
///
/// ```rust
/// use textsplit_core::split_literal;
///
/// let pieces: Vec<&str> = split_literal("a,,b", ",").collect();
/// assert_eq!(pieces, vec!["a,", ",", "b"]);
/// ```
pub fn split_literal<'a>(text: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.split_inclusive(separator)
}

/// Split `text` into spans of at most `max_chars` chars, breaking at the
/// highest-priority separator that makes the pieces fit.
///
/// Spans are ordered, contiguous, and cover `text` exactly. A span is only
/// longer than `max_chars` when it is an atomic unit that none of the
/// separators can break.
pub fn split_spans<S: AsRef<str>>(text: &str, separators: &[S], max_chars: usize) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }
    split_recursive(text, 0, separators, max_chars)
}

/// Same as [`split_spans`] but returns the chunks as slices of `text`.
pub fn split_text<'a, S: AsRef<str>>(
    text: &'a str,
    separators: &[S],
    max_chars: usize,
) -> Vec<&'a str> {
    split_spans(text, separators, max_chars)
        .into_iter()
        .map(|span| span.slice(text))
        .collect()
}

/// `text` is never empty here; `offset` is its position in the root input.
fn split_recursive<S: AsRef<str>>(
    text: &str,
    offset: usize,
    separators: &[S],
    max_chars: usize,
) -> Vec<Span> {
    let Some((separator, finer)) = separators.split_first() else {
        return vec![Span::new(offset, text)];
    };

    let mut spans = Vec::new();
    let mut buffer = Buffer::default();
    let mut piece_start = offset;

    for piece in split_literal(text, separator.as_ref()) {
        let span = Span::new(piece_start, piece);
        piece_start = span.end;

        if span.chars > max_chars {
            buffer.flush(&mut spans);
            for sub in split_recursive(piece, span.start, finer, max_chars) {
                buffer.push(sub, max_chars, &mut spans);
            }
        } else {
            buffer.push(span, max_chars, &mut spans);
        }
    }

    buffer.flush(&mut spans);
    spans
}

/// The chunk currently being accumulated.
#[derive(Default)]
struct Buffer(Option<Span>);

impl Buffer {
    /// Append `span`, flushing first if the result would exceed `max_chars`.
    /// An empty buffer accepts any span, however large.
    fn push(&mut self, span: Span, max_chars: usize, out: &mut Vec<Span>) {
        if let Some(current) = self.0.as_mut() {
            if current.chars + span.chars <= max_chars {
                debug_assert_eq!(current.end, span.start);
                current.end = span.end;
                current.chars += span.chars;
                return;
            }
        }
        self.flush(out);
        self.0 = Some(span);
    }

    fn flush(&mut self, out: &mut Vec<Span>) {
        if let Some(span) = self.0.take() {
            out.push(span);
        }
    }
}
