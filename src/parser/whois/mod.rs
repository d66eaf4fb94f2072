/*!
Parsing of WHOIS server responses.

A response is a sequence of server messages (lines starting with `%`) and RPSL objects
separated by blank lines:

```text
% This is the RIPE Database query service.        <- message
                                                   <- blank line
aut-num:        AS51531                            <- object block
as-name:        ALIBABA-CN-NET
                                                   <- blank line
% This query was served by the RIPE Database Query Service
```
*/
mod splitter;

use crate::error::{ParserError, PartialParseError};
use crate::models::{
    RpslObject, SkippedBlock, WhoisResponse, WhoisResponseItem, WhoisServerMessage,
};
use crate::parser::{ErrorPolicy, RpslParser};
use log::{debug, warn};
use splitter::{ResponseSplitter, Segment};

/// Parse a WHOIS server response into its messages and objects.
///
/// ```
/// use rpsl_parser::parse_whois_response;
///
/// let response = parse_whois_response(concat!(
///     "% Information related to 'AS51531'\n",
///     "\n",
///     "aut-num:        AS51531\n",
///     "as-name:        ALIBABA-CN-NET\n",
///     "\n",
///     "% This query was served by the RIPE Database Query Service\n",
/// ))
/// .unwrap();
///
/// assert_eq!(response.items().len(), 3);
/// assert_eq!(response.objects().next().unwrap().get("as-name"), vec!["ALIBABA-CN-NET"]);
/// ```
pub fn parse_whois_response(text: &str) -> Result<WhoisResponse, ParserError> {
    RpslParser::default().parse_whois_response(text)
}

/// Parse the objects contained in a WHOIS server response, dropping server messages.
pub fn parse_whois_server_response(text: &str) -> Result<Vec<RpslObject>, ParserError> {
    parse_whois_response(text).map(WhoisResponse::into_objects)
}

impl RpslParser {
    /// Parse a WHOIS server response, handling failing object blocks according to the
    /// configured [ErrorPolicy].
    pub fn parse_whois_response(&self, text: &str) -> Result<WhoisResponse, ParserError> {
        let mut response = WhoisResponse::default();
        let mut block_index = 0;

        for segment in ResponseSplitter::new(text) {
            match segment {
                Segment::Message { value, .. } => {
                    response.push(WhoisResponseItem::Message(WhoisServerMessage::new(value)));
                }
                Segment::Block { line, text } => {
                    match self.parse_block(text, line - 1) {
                        Ok(object) => response.push(WhoisResponseItem::Object(object)),
                        Err(error) => match self.policy() {
                            ErrorPolicy::FailFast => {
                                return Err(PartialParseError {
                                    block_index,
                                    line,
                                    error,
                                    parsed: response,
                                }
                                .into());
                            }
                            ErrorPolicy::SkipMalformed => {
                                warn!(
                                    "skipping object block {} starting at line {}: {}",
                                    block_index, line, error
                                );
                                response.push_skipped(SkippedBlock {
                                    block_index,
                                    line,
                                    error,
                                });
                            }
                        },
                    }
                    block_index += 1;
                }
            }
        }

        debug!(
            "parsed whois response: {} objects, {} messages, {} skipped blocks",
            response.objects().count(),
            response.messages().count(),
            response.skipped().len()
        );
        Ok(response)
    }
}
