/*!
Provides line utility functions for splitting RPSL text into numbered physical lines and
classifying them.
*/

/// Characters that mark a line as the continuation of the previous attribute.
pub const CONTINUATION_MARKERS: [char; 3] = [' ', '+', '\t'];

/// Character that starts a WHOIS server message line.
pub const MESSAGE_MARKER: char = '%';

/// One physical line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    /// 1-based line number within the full input.
    pub number: usize,
    /// Byte offset of the line start within the full input.
    pub offset: usize,
    /// Line content without the line ending.
    pub text: &'a str,
}

impl Line<'_> {
    /// Byte offset of the end of the line content.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Iterator over the `\n` separated lines of a text. A `\r` preceding the `\n` is dropped.
#[derive(Debug, Clone)]
pub(crate) struct NumberedLines<'a> {
    lines: std::str::Split<'a, char>,
    number: usize,
    offset: usize,
}

impl<'a> NumberedLines<'a> {
    /// `first_line` is the number of the line preceding `text`, 0 if `text` is the full input.
    pub fn new(text: &'a str, first_line: usize) -> NumberedLines<'a> {
        NumberedLines {
            lines: text.split('\n'),
            number: first_line,
            offset: 0,
        }
    }
}

impl<'a> Iterator for NumberedLines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        self.number += 1;
        let line = Line {
            number: self.number,
            offset: self.offset,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        };
        self.offset += raw.len() + 1;
        Some(line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// Empty or whitespace only without a continuation marker, ends an object.
    Empty,
    /// WHOIS server message, starts with `%`.
    Message,
    /// Continues the value of the previous attribute. A continuation line holding nothing
    /// but whitespace is an empty value.
    Continuation,
    /// Starts a new attribute.
    Start,
}

pub(crate) trait LineUtils {
    fn line_kind(&self) -> LineKind;

    /// Whether the line has no content at all, regardless of its kind.
    fn is_blank_line(&self) -> bool;

    fn is_continuation_line(&self) -> bool {
        self.line_kind() == LineKind::Continuation
    }
}

impl LineUtils for str {
    fn line_kind(&self) -> LineKind {
        if self.starts_with(CONTINUATION_MARKERS) {
            LineKind::Continuation
        } else if self.is_blank_line() {
            LineKind::Empty
        } else if self.starts_with(MESSAGE_MARKER) {
            LineKind::Message
        } else {
            LineKind::Start
        }
    }

    fn is_blank_line(&self) -> bool {
        self.trim().is_empty()
    }
}

/// Value of an attribute start line, given the text following the `:` separator.
///
/// Leading spaces are removed; nothing left but whitespace means no value.
pub(crate) fn start_line_value(rest: &str) -> Option<&str> {
    non_empty(rest.trim_start_matches(' '))
}

/// Value of a continuation line: the marker and the whitespace following it are removed.
pub(crate) fn continuation_line_value(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix(CONTINUATION_MARKERS)
        .unwrap_or(line)
        .trim_start();
    non_empty(rest)
}

/// Value of a server message line: the text after `%`, surrounding whitespace removed.
pub(crate) fn message_line_value(line: &str) -> &str {
    line.strip_prefix(MESSAGE_MARKER).unwrap_or(line).trim()
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
