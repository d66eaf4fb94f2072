/*!
error module defines the error types used in rpsl-parser.
*/
use crate::models::WhoisResponse;
use std::fmt::{Display, Formatter};
use std::{error::Error, fmt};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// The input contains no non-whitespace content where an object was expected.
    ///
    /// ## Occurs during:
    ///  - Parsing of a single RPSL object
    #[error("empty input, expected an RPSL object")]
    EmptyInput,
    /// A line could not be tokenized into an attribute.
    ///
    /// `line` is 1-based and counted from the start of the text handed to the parser, so
    /// errors inside a WHOIS response point at the line of the full response.
    ///
    /// ## Occurs during:
    ///  - Tokenizing the attributes of an RPSL object
    #[error("malformed object at line {line}: {reason}: {content:?}")]
    MalformedObject {
        line: usize,
        content: String,
        reason: MalformedReason,
    },
    /// The object parsed fine but does not conform to RFC 2622.
    ///
    /// ## Occurs during:
    ///  - Parsing with [RpslParser::validate_rfc2622](crate::RpslParser::validate_rfc2622) enabled
    #[error("object starting at line {line} is not RFC 2622 conformant: {error}")]
    Validation {
        line: usize,
        error: ObjectValidationError,
    },
    /// A block of a WHOIS response failed to parse. Carries everything parsed before it.
    ///
    /// ## Occurs during:
    ///  - Parsing of a WHOIS server response with [ErrorPolicy::FailFast](crate::ErrorPolicy::FailFast)
    #[error(transparent)]
    PartialParse(Box<PartialParseError>),
}

/// Why a line could not be tokenized.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    #[error("missing `:` separator after attribute name")]
    MissingSeparator,
    #[error("empty attribute name")]
    EmptyName,
    #[error("continuation line without a preceding attribute")]
    OrphanContinuation,
    #[error("unexpected empty line inside object")]
    UnexpectedBlankLine,
}

impl ParserError {
    pub(crate) fn malformed(line: usize, content: &str, reason: MalformedReason) -> Self {
        ParserError::MalformedObject {
            line,
            content: content.to_string(),
            reason,
        }
    }

    /// The 1-based line number the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParserError::EmptyInput => None,
            ParserError::MalformedObject { line, .. } => Some(*line),
            ParserError::Validation { line, .. } => Some(*line),
            ParserError::PartialParse(partial) => partial.error.line().or(Some(partial.line)),
        }
    }
}

/// A single attribute that violates RFC 2622.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid attribute name {name:?}: {message}")]
    InvalidName { name: String, message: &'static str },
    #[error("invalid value {value:?} of attribute {name:?}: {message}")]
    InvalidValue {
        name: String,
        value: String,
        message: &'static str,
    },
}

/// Every attribute of an object that failed validation, keyed by attribute index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectValidationError {
    pub errors: Vec<(usize, ValidationError)>,
}

impl Display for ObjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut errors = self.errors.iter();
        if let Some((index, error)) = errors.next() {
            write!(f, "attribute #{}: {}", index, error)?;
        }
        for (index, error) in errors {
            write!(f, "; attribute #{}: {}", index, error)?;
        }
        Ok(())
    }
}

impl Error for ObjectValidationError {}

/// The first failing block of a WHOIS response, together with the part of the response
/// that was parsed successfully before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialParseError {
    /// Index of the failing object block, counting object blocks only.
    pub block_index: usize,
    /// Line of the response the failing block starts at.
    pub line: usize,
    pub error: ParserError,
    /// Messages and objects preceding the failing block, in response order.
    pub parsed: WhoisResponse,
}

impl Display for PartialParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse object block {} of whois response (starting at line {}): {}",
            self.block_index, self.line, self.error
        )
    }
}

impl Error for PartialParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl From<PartialParseError> for ParserError {
    fn from(error: PartialParseError) -> Self {
        ParserError::PartialParse(Box::new(error))
    }
}
