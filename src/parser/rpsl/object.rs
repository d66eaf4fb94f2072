use crate::error::ParserError;
use crate::models::RpslObject;
use crate::parser::rpsl::AttributeTokenizer;
use log::debug;

/// Parse the text of a single RPSL object.
///
/// Leading and trailing blank lines are ignored. An empty line between two attributes, a
/// continuation line before the first attribute or a line without `:` separator are errors.
/// The parsed object keeps its attribute lines as [source](RpslObject::source) and displays
/// them unchanged.
///
/// ```
/// use rpsl_parser::parse_rpsl_object;
///
/// let role = parse_rpsl_object(concat!(
///     "role:           ACME Company\n",
///     "address:        Packet Street 6\n",
///     "                128 Series of Tubes\n",
///     "                Internet\n",
///     "nic-hdl:        RPSL1-RIPE\n",
///     "source:         RIPE\n",
/// ))
/// .unwrap();
///
/// assert_eq!(role.class(), Some("role"));
/// assert_eq!(role[1].values().len(), 3);
/// ```
pub fn parse_rpsl_object(text: &str) -> Result<RpslObject, ParserError> {
    parse_object_block(text, 0)
}

/// Parse one object block whose first line is line `line_offset + 1` of the full input.
pub(crate) fn parse_object_block(text: &str, line_offset: usize) -> Result<RpslObject, ParserError> {
    let mut tokenizer = AttributeTokenizer::with_line_offset(text, line_offset);
    let attributes = tokenizer.by_ref().collect::<Result<Vec<_>, _>>()?;

    let Some(source) = tokenizer.source() else {
        return Err(ParserError::EmptyInput);
    };
    let object = RpslObject::new_parsed(source, attributes);
    debug!(
        "parsed {} object with {} attributes",
        object.class().unwrap_or_default(),
        object.len()
    );
    Ok(object)
}
