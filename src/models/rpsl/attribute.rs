use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// Column RPSL values are aligned to when displaying attributes.
pub const VALUE_COLUMN: usize = 16;

/// Values of one attribute, one entry per physical line.
///
/// Nearly every attribute in registry data is single-line, so one value is stored inline.
pub type AttributeValues = SmallVec<[Option<String>; 1]>;

/// An attribute of an [RpslObject](crate::models::RpslObject).
///
/// ```text
/// remarks:        Locations          <- values[0]
///                 LA1 - One Wilshire <- values[1]
/// +                                  <- values[2], None
/// ```
///
/// A single-line attribute has exactly one value, `None` if the line carries nothing but
/// whitespace after the separator. A multi-line attribute has one value per line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpslAttribute {
    name: String,
    values: AttributeValues,
}

impl RpslAttribute {
    /// Create an attribute from a name and the values of each of its lines.
    ///
    /// Values that are empty or consist only of whitespace are stored as `None`. An empty
    /// iterator results in a single `None` value.
    pub fn new<N, I>(name: N, values: I) -> RpslAttribute
    where
        N: Into<String>,
        I: IntoIterator<Item = Option<String>>,
    {
        let mut values: AttributeValues = values
            .into_iter()
            .map(|value| value.and_then(coerce_empty_value))
            .collect();
        if values.is_empty() {
            values.push(None);
        }
        RpslAttribute {
            name: name.into(),
            values,
        }
    }

    /// Create a single-line attribute.
    pub fn single<N: Into<String>, V: Into<String>>(name: N, value: V) -> RpslAttribute {
        RpslAttribute::new(name, [Some(value.into())])
    }

    /// Create a single-line attribute without a value.
    pub fn empty<N: Into<String>>(name: N) -> RpslAttribute {
        RpslAttribute::new(name, [None])
    }

    /// Create a multi-line attribute from the text of each line, empty lines become `None`.
    pub fn multi<N, I, V>(name: N, values: I) -> RpslAttribute
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        RpslAttribute::new(name, values.into_iter().map(|v| Some(v.into())))
    }

    /// Build an attribute from already tokenized parts, without coercion.
    pub(crate) fn from_parsed(name: &str, values: AttributeValues) -> RpslAttribute {
        RpslAttribute {
            name: name.to_string(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// The first value, which is the only one for single-line attributes.
    pub fn value(&self) -> Option<&str> {
        self.values.first().and_then(|v| v.as_deref())
    }

    pub fn is_multi_line(&self) -> bool {
        self.values.len() > 1
    }

    /// The values that are not `None`, in line order.
    ///
    /// ```
    /// # use rpsl_parser::models::RpslAttribute;
    /// let remarks = RpslAttribute::multi("remarks", ["I have lots", "", "to say."]);
    /// assert_eq!(remarks.with_content(), vec!["I have lots", "to say."]);
    /// ```
    pub fn with_content(&self) -> Vec<&str> {
        self.values.iter().filter_map(|v| v.as_deref()).collect()
    }

    pub fn into_parts(self) -> (String, Vec<Option<String>>) {
        (self.name, self.values.into_vec())
    }
}

impl From<RpslAttribute> for (String, Vec<Option<String>>) {
    fn from(attribute: RpslAttribute) -> Self {
        attribute.into_parts()
    }
}

impl PartialEq<(&str, &[Option<&str>])> for RpslAttribute {
    fn eq(&self, other: &(&str, &[Option<&str>])) -> bool {
        self.name == other.0
            && self.values.len() == other.1.len()
            && self
                .values
                .iter()
                .zip(other.1)
                .all(|(a, b)| a.as_deref() == *b)
    }
}

/// Display the attribute as RPSL, values aligned at [VALUE_COLUMN].
///
/// Continuation lines are indented with spaces, except for empty continuation values which
/// are written as a single `+`.
impl Display for RpslAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let key = format!("{}:", self.name);
        let mut values = self.values.iter();

        match values.next().and_then(|v| v.as_deref()) {
            Some(value) => writeln!(
                f,
                "{:width$}{}",
                key,
                value,
                width = VALUE_COLUMN.max(key.len() + 1)
            )?,
            None => writeln!(f, "{}", key)?,
        }

        for value in values {
            match value {
                Some(value) => writeln!(f, "{:width$}{}", "", value, width = VALUE_COLUMN)?,
                None => writeln!(f, "+")?,
            }
        }
        Ok(())
    }
}

fn coerce_empty_value(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_coerce_empty_values() {
        assert_eq!(RpslAttribute::single("remarks", "   "), RpslAttribute::empty("remarks"));
        assert_eq!(
            RpslAttribute::new("remarks", Vec::<Option<String>>::new()).values(),
            &[None]
        );

        let attr = RpslAttribute::multi("address", ["Packet Street 6", "", "Internet"]);
        assert_eq!(
            attr.values(),
            &[
                Some("Packet Street 6".to_string()),
                None,
                Some("Internet".to_string())
            ]
        );
        assert!(attr.is_multi_line());
        assert_eq!(attr.value(), Some("Packet Street 6"));
    }

    #[test]
    fn test_compare_with_tuple() {
        let attr = RpslAttribute::multi("address", ["Packet Street 6", ""]);
        assert_eq!(attr, ("address", &[Some("Packet Street 6"), None][..]));
        assert_ne!(attr, ("address", &[Some("Packet Street 6")][..]));
    }

    #[test]
    fn test_display_single() {
        assert_eq!(
            RpslAttribute::single("role", "ACME Company").to_string(),
            "role:           ACME Company\n"
        );
        assert_eq!(RpslAttribute::empty("remarks").to_string(), "remarks:\n");
        assert_eq!(
            RpslAttribute::single("a-very-long-name", "value").to_string(),
            "a-very-long-name: value\n"
        );
    }

    #[test]
    fn test_display_multi() {
        let attr = RpslAttribute::multi("remarks", ["Locations", "", "LA1 - One Wilshire"]);
        assert_eq!(
            attr.to_string(),
            concat!(
                "remarks:        Locations\n",
                "+\n",
                "                LA1 - One Wilshire\n",
            )
        );
    }

    #[test]
    fn test_into_parts() {
        let (name, values): (String, Vec<Option<String>>) =
            RpslAttribute::single("source", "RIPE").into();
        assert_eq!(name, "source");
        assert_eq!(values, vec![Some("RIPE".to_string())]);
    }
}
