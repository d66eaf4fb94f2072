/*!
parser module provides the tokenizer, the object parser and the WHOIS response parser.

The free functions [parse_rpsl_object], [parse_whois_response] and
[parse_whois_server_response] use the default configuration. [RpslParser] allows choosing
how malformed object blocks of a response are handled and turning on RFC 2622 validation.
*/
pub mod rpsl;
pub mod utils;
pub mod whois;

pub use rpsl::{parse_rpsl_object, AttributeTokenizer};
pub use whois::{parse_whois_response, parse_whois_server_response};

use crate::error::ParserError;
use crate::models::RpslObject;
use log::debug;

/// What to do with an object block of a WHOIS response that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Stop at the first failing block, returning [ParserError::PartialParse] with everything
    /// parsed before it.
    #[default]
    FailFast,
    /// Leave failing blocks out of the response, recording them in
    /// [WhoisResponse::skipped](crate::models::WhoisResponse::skipped).
    SkipMalformed,
}

/// Configurable parser.
///
/// ```
/// use rpsl_parser::{ErrorPolicy, RpslParser};
///
/// let parser = RpslParser::new().error_policy(ErrorPolicy::SkipMalformed);
/// let response = parser
///     .parse_whois_response("aut-num: AS1\n\nbroken line\n\nrole: ACME\n")
///     .unwrap();
///
/// assert_eq!(response.objects().count(), 2);
/// assert_eq!(response.skipped().len(), 1);
/// assert_eq!(response.skipped()[0].line, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RpslParser {
    error_policy: ErrorPolicy,
    validate_rfc2622: bool,
}

impl RpslParser {
    pub fn new() -> RpslParser {
        RpslParser::default()
    }

    pub fn error_policy(self, error_policy: ErrorPolicy) -> RpslParser {
        RpslParser {
            error_policy,
            ..self
        }
    }

    /// Check every parsed object against RFC 2622, see [RpslObject::validate_rfc2622].
    pub fn validate_rfc2622(self, validate: bool) -> RpslParser {
        RpslParser {
            validate_rfc2622: validate,
            ..self
        }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Parse the text of a single RPSL object.
    pub fn parse_object(&self, text: &str) -> Result<RpslObject, ParserError> {
        self.parse_block(text, 0)
    }

    /// Parse an object block starting after line `line_offset` and validate it if configured.
    pub(crate) fn parse_block(&self, text: &str, line_offset: usize) -> Result<RpslObject, ParserError> {
        let object = rpsl::parse_object_block(text, line_offset)?;
        if self.validate_rfc2622 {
            object
                .validate_rfc2622()
                .map_err(|error| ParserError::Validation {
                    line: line_offset + 1,
                    error,
                })?;
            debug!("{} object passed RFC 2622 validation", object.class().unwrap_or_default());
        }
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object;

    #[test]
    fn test_builder() {
        let parser = RpslParser::new();
        assert_eq!(parser.policy(), ErrorPolicy::FailFast);

        let parser = parser
            .validate_rfc2622(true)
            .error_policy(ErrorPolicy::SkipMalformed);
        assert_eq!(parser.policy(), ErrorPolicy::SkipMalformed);
        assert!(parser.validate_rfc2622);
    }

    #[test]
    fn test_parse_object_without_validation() {
        let obj = RpslParser::new().parse_object("1st: value\n").unwrap();
        assert_eq!(obj, object! { "1st": "value"; });
    }

    #[test]
    fn test_parse_object_with_validation() {
        let error = RpslParser::new()
            .validate_rfc2622(true)
            .parse_object("aut-num: AS1\n1st: value\n")
            .unwrap_err();
        let ParserError::Validation { line, error } = error else {
            panic!("expected validation error");
        };
        assert_eq!(line, 1);
        assert_eq!(error.errors.len(), 1);
        assert_eq!(error.errors[0].0, 1);
    }
}
