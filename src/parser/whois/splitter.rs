use crate::parser::utils::{message_line_value, LineKind, LineUtils, NumberedLines};
use std::iter::Peekable;

/// One piece of a WHOIS response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// A server message line.
    Message { line: usize, value: &'a str },
    /// The lines of one object, borrowed from the response. `line` is the number of its
    /// first line.
    Block { line: usize, text: &'a str },
}

/// Splits a WHOIS response into server messages and object blocks.
///
/// Empty lines and message lines both end an object block. Whitespace-only continuation
/// lines belong to the block they follow and are skipped between blocks.
pub(crate) struct ResponseSplitter<'a> {
    text: &'a str,
    lines: Peekable<NumberedLines<'a>>,
}

impl<'a> ResponseSplitter<'a> {
    pub fn new(text: &'a str) -> ResponseSplitter<'a> {
        ResponseSplitter {
            text,
            lines: NumberedLines::new(text, 0).peekable(),
        }
    }
}

impl<'a> Iterator for ResponseSplitter<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let first = self.lines.next()?;
            match first.text.line_kind() {
                LineKind::Empty => continue,
                LineKind::Continuation if first.text.is_blank_line() => continue,
                LineKind::Message => {
                    return Some(Segment::Message {
                        line: first.number,
                        value: message_line_value(first.text),
                    })
                }
                LineKind::Continuation | LineKind::Start => {
                    let mut end = first.end();
                    while let Some(next) = self.lines.next_if(|next| {
                        matches!(
                            next.text.line_kind(),
                            LineKind::Start | LineKind::Continuation
                        )
                    }) {
                        end = next.end();
                    }
                    return Some(Segment::Block {
                        line: first.number,
                        text: &self.text[first.offset..end],
                    });
                }
            }
        }
    }
}
