/*!
Attribute tokenizer: turns the text of one RPSL object into its attributes.

```text
remarks:        Locations              <- start line: name, ':', first value
                LA1 - One Wilshire     <- continuation line (space)
+                                      <- continuation line (plus), no value
	            NY1 - Equinix          <- continuation line (tab)
source:         RIPE                   <- next start line ends the attribute
```
*/
use crate::error::{MalformedReason, ParserError};
use crate::models::{AttributeValues, RpslAttribute};
use crate::parser::utils::{
    continuation_line_value, start_line_value, Line, LineKind, LineUtils, NumberedLines,
};
use std::iter::Peekable;

/// Iterator over the attributes of one RPSL object.
///
/// Blank lines before the first attribute and after the last one are ignored. An empty line
/// between two attributes is an error. A continuation line holding only whitespace adds an
/// empty value to its attribute.
pub struct AttributeTokenizer<'a> {
    text: &'a str,
    lines: Peekable<NumberedLines<'a>>,
    started: bool,
    /// Byte range of the attribute lines consumed so far.
    span: Option<(usize, usize)>,
}

impl<'a> AttributeTokenizer<'a> {
    pub fn new(text: &'a str) -> AttributeTokenizer<'a> {
        AttributeTokenizer::with_line_offset(text, 0)
    }

    /// Tokenize `text` that starts after line `line_offset` of some larger input, so errors
    /// point at the line of that input.
    pub(crate) fn with_line_offset(text: &'a str, line_offset: usize) -> AttributeTokenizer<'a> {
        AttributeTokenizer {
            text,
            lines: NumberedLines::new(text, line_offset).peekable(),
            started: false,
            span: None,
        }
    }

    /// The text from the first attribute line to the last one tokenized so far, without
    /// surrounding blank lines or the final line ending.
    pub fn source(&self) -> Option<&'a str> {
        self.span.map(|(start, end)| &self.text[start..end])
    }

    fn remaining_lines_blank(&self) -> bool {
        self.lines.clone().all(|line| line.text.is_blank_line())
    }

    fn attribute(&mut self, line: Line<'a>) -> Result<RpslAttribute, ParserError> {
        if line.text.is_continuation_line() {
            return Err(ParserError::malformed(
                line.number,
                line.text,
                MalformedReason::OrphanContinuation,
            ));
        }

        let (name, rest) = line.text.split_once(':').ok_or_else(|| {
            ParserError::malformed(line.number, line.text, MalformedReason::MissingSeparator)
        })?;
        if name.is_empty() {
            return Err(ParserError::malformed(
                line.number,
                line.text,
                MalformedReason::EmptyName,
            ));
        }

        let mut end = line.end();
        let mut values = AttributeValues::new();
        values.push(start_line_value(rest).map(str::to_string));
        while let Some(continuation) = self.lines.next_if(|next| next.text.is_continuation_line()) {
            values.push(continuation_line_value(continuation.text).map(str::to_string));
            end = continuation.end();
        }

        let start = self.span.map_or(line.offset, |(start, _)| start);
        self.span = Some((start, end));
        Ok(RpslAttribute::from_parsed(name, values))
    }
}

impl Iterator for AttributeTokenizer<'_> {
    type Item = Result<RpslAttribute, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;

            if !self.started && line.text.is_blank_line() {
                continue;
            }

            if line.text.line_kind() == LineKind::Empty {
                if self.remaining_lines_blank() {
                    self.lines.by_ref().for_each(drop);
                    return None;
                }
                return Some(Err(ParserError::malformed(
                    line.number,
                    line.text,
                    MalformedReason::UnexpectedBlankLine,
                )));
            }

            self.started = true;
            return Some(self.attribute(line));
        }
    }
}
