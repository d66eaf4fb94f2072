use crate::models::RpslAttribute;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// An RPSL object, an ordered list of attributes.
///
/// ```text
/// ┌───────────────────────────────────────────────┐
/// │  RpslObject                                   │
/// ├───────────────────────────────────────────────┤
/// │  [role]    ──── ACME Company                  │
/// │  [address] ──┬─ Packet Street 6               │
/// │              ├─ 128 Series of Tubes           │
/// │              └─ Internet                      │
/// │  [nic-hdl] ──── RPSL1-RIPE                    │
/// │  [source]  ──── RIPE                          │
/// └───────────────────────────────────────────────┘
/// ```
///
/// Attributes keep their order and repeated names are separate entries, e.g. the `import`
/// lines of an `aut-num` object.
///
/// ```
/// use rpsl_parser::{object, parse_rpsl_object};
///
/// let parsed = parse_rpsl_object("role: ACME Company\naddress: Packet Street 6\naddress: Internet\n").unwrap();
/// assert_eq!(
///     parsed,
///     object! {
///         "role": "ACME Company";
///         "address": "Packet Street 6";
///         "address": "Internet";
///     }
/// );
/// assert_eq!(parsed.get("address"), vec!["Packet Street 6", "Internet"]);
/// ```
///
/// Equality and hashing only consider the attributes, a parsed object equals one built by
/// hand even though only the parsed one has a [source](RpslObject::source).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpslObject {
    attributes: Vec<RpslAttribute>,
    #[cfg_attr(feature = "serde", serde(skip))]
    source: Option<String>,
}

impl RpslObject {
    pub fn new(attributes: Vec<RpslAttribute>) -> RpslObject {
        RpslObject {
            attributes,
            source: None,
        }
    }

    /// An object parsed from `source`, the text of its attribute lines.
    pub(crate) fn new_parsed(source: &str, attributes: Vec<RpslAttribute>) -> RpslObject {
        RpslObject {
            attributes,
            source: Some(source.to_string()),
        }
    }

    /// The attribute lines this object was parsed from, as they appeared in the input.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn attributes(&self) -> &[RpslAttribute] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RpslAttribute> {
        self.attributes.iter()
    }

    /// The object class, which by convention is the name of the first attribute.
    pub fn class(&self) -> Option<&str> {
        self.attributes.first().map(|a| a.name())
    }

    /// All non-empty values of every attribute with the given name, in order.
    pub fn get(&self, name: &str) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|a| a.name() == name)
            .flat_map(|a| a.with_content())
            .collect()
    }

    /// The object as `(name, values)` pairs.
    pub fn to_tuples(&self) -> Vec<(&str, Vec<Option<&str>>)> {
        self.attributes
            .iter()
            .map(|a| {
                (
                    a.name(),
                    a.values().iter().map(|v| v.as_deref()).collect_vec(),
                )
            })
            .collect()
    }

    /// Serialize the object into a JSON value.
    #[cfg(feature = "serde")]
    pub fn json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

impl PartialEq for RpslObject {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}

impl Eq for RpslObject {}

impl Hash for RpslObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.attributes.hash(state);
    }
}

impl Index<usize> for RpslObject {
    type Output = RpslAttribute;

    fn index(&self, index: usize) -> &Self::Output {
        &self.attributes[index]
    }
}

impl IntoIterator for RpslObject {
    type Item = RpslAttribute;
    type IntoIter = std::vec::IntoIter<RpslAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RpslObject {
    type Item = &'a RpslAttribute;
    type IntoIter = std::slice::Iter<'a, RpslAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl FromIterator<RpslAttribute> for RpslObject {
    fn from_iter<T: IntoIterator<Item = RpslAttribute>>(iter: T) -> Self {
        RpslObject::new(iter.into_iter().collect())
    }
}

impl From<Vec<RpslAttribute>> for RpslObject {
    fn from(attributes: Vec<RpslAttribute>) -> Self {
        RpslObject::new(attributes)
    }
}

/// Display the object as RPSL text, terminated by the blank line that ends an object.
///
/// A parsed object writes its source text unchanged, any other object is written with values
/// aligned at column 16.
impl Display for RpslObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(source) = &self.source {
            return write!(f, "{}\n\n", source);
        }
        for attribute in &self.attributes {
            write!(f, "{}", attribute)?;
        }
        writeln!(f)
    }
}

/// Creates an [RpslObject] containing the given attributes.
///
/// Each attribute is written as `name: value;`, multi-line attributes list their values
/// separated by commas. An empty string stands for an empty value.
///
/// ```
/// use rpsl_parser::object;
///
/// let obj = object! {
///     "role": "ACME Company";
///     "address": "Packet Street 6", "128 Series of Tubes", "Internet";
///     "remarks": "";
/// };
/// assert_eq!(obj[0].value(), Some("ACME Company"));
/// assert_eq!(obj[1].values().len(), 3);
/// assert_eq!(obj[2].value(), None);
/// ```
#[macro_export]
macro_rules! object {
    ($($name:literal: $value:literal $(, $continuation:literal)*);+ $(;)?) => {
        $crate::models::RpslObject::new(vec![
            $(
                $crate::models::RpslAttribute::multi($name, [$value $(, $continuation)*]),
            )+
        ])
    };
}
