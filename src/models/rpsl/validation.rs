/*!
Opt-in conformance checks against [RFC 2622](https://datatracker.ietf.org/doc/html/rfc2622).

The parser itself is permissive: an attribute name is whatever precedes the first `:` and a
value is whatever follows it. Registries do not always stick to the RFC (e.g. ARIN's
`ASNumber`, which happens to conform, next to names in the wild that do not), so validation
is a separate step.
*/
use crate::error::{ObjectValidationError, ValidationError};
use crate::models::{RpslAttribute, RpslObject};
use regex::Regex;
use std::sync::LazyLock;

/// Characters allowed in an attribute name. The first and last character are checked on their
/// own.
static ATTRIBUTE_NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("attribute name pattern is valid")
});

impl RpslAttribute {
    /// Check the attribute name and every value against RFC 2622.
    ///
    /// ```
    /// # use rpsl_parser::models::RpslAttribute;
    /// assert!(RpslAttribute::single("aut-num", "AS3257").validate_rfc2622().is_ok());
    /// assert!(RpslAttribute::single("-aut-num", "AS3257").validate_rfc2622().is_err());
    /// ```
    pub fn validate_rfc2622(&self) -> Result<(), ValidationError> {
        validate_name(self.name())?;
        for value in self.with_content() {
            validate_value(self.name(), value)?;
        }
        Ok(())
    }
}

impl RpslObject {
    /// Check every attribute against RFC 2622, collecting all failures.
    pub fn validate_rfc2622(&self) -> Result<(), ObjectValidationError> {
        let errors: Vec<(usize, ValidationError)> = self
            .iter()
            .enumerate()
            .filter_map(|(index, attribute)| {
                attribute.validate_rfc2622().err().map(|e| (index, e))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ObjectValidationError { errors })
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let invalid = |message| {
        Err(ValidationError::InvalidName {
            name: name.to_string(),
            message,
        })
    };

    if name.len() < 2 {
        return invalid("must be at least two characters long");
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return invalid("must start with an ASCII letter");
    }
    if !name.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        return invalid("must end with an ASCII letter or digit");
    }
    if !ATTRIBUTE_NAME_CHARS.is_match(name) {
        return invalid("may only contain ASCII letters, digits, '-' or '_'");
    }
    Ok(())
}

fn validate_value(name: &str, value: &str) -> Result<(), ValidationError> {
    let invalid = |message| {
        Err(ValidationError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            message,
        })
    };

    if !value.is_ascii() {
        return invalid("must contain only ASCII characters");
    }
    if value.chars().any(|c| c.is_ascii_control()) {
        return invalid("must not contain ASCII control characters");
    }
    if value.starts_with(|c: char| c.is_ascii_whitespace()) {
        return invalid("must not start with whitespace");
    }
    Ok(())
}
