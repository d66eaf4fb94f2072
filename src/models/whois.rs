use crate::error::ParserError;
use crate::models::RpslObject;
use std::fmt::{Display, Formatter};

/// A response code or message sent by a WHOIS server, a line starting with `%`.
///
/// ```text
/// % Information related to 'AS51531'
///   ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ - value
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhoisServerMessage {
    pub value: String,
}

impl WhoisServerMessage {
    pub fn new<V: Into<String>>(value: V) -> WhoisServerMessage {
        WhoisServerMessage {
            value: value.into(),
        }
    }
}

impl Display for WhoisServerMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "% {}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum WhoisResponseItem {
    Message(WhoisServerMessage),
    Object(RpslObject),
}

/// An object block that was left out of a [WhoisResponse] because it failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    pub block_index: usize,
    pub line: usize,
    pub error: ParserError,
}

/// A parsed WHOIS server response: objects and server messages in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WhoisResponse {
    items: Vec<WhoisResponseItem>,
    #[cfg_attr(feature = "serde", serde(skip))]
    skipped: Vec<SkippedBlock>,
}

impl WhoisResponse {
    pub(crate) fn push(&mut self, item: WhoisResponseItem) {
        self.items.push(item);
    }

    pub(crate) fn push_skipped(&mut self, skipped: SkippedBlock) {
        self.skipped.push(skipped);
    }

    pub fn items(&self) -> &[WhoisResponseItem] {
        &self.items
    }

    pub fn objects(&self) -> impl Iterator<Item = &RpslObject> {
        self.items.iter().filter_map(|item| match item {
            WhoisResponseItem::Object(object) => Some(object),
            WhoisResponseItem::Message(_) => None,
        })
    }

    pub fn messages(&self) -> impl Iterator<Item = &WhoisServerMessage> {
        self.items.iter().filter_map(|item| match item {
            WhoisResponseItem::Message(message) => Some(message),
            WhoisResponseItem::Object(_) => None,
        })
    }

    pub fn into_objects(self) -> Vec<RpslObject> {
        self.items
            .into_iter()
            .filter_map(|item| match item {
                WhoisResponseItem::Object(object) => Some(object),
                WhoisResponseItem::Message(_) => None,
            })
            .collect()
    }

    /// Blocks that failed to parse under [ErrorPolicy::SkipMalformed](crate::ErrorPolicy::SkipMalformed).
    pub fn skipped(&self) -> &[SkippedBlock] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<WhoisResponseItem> for WhoisResponse {
    fn from_iter<T: IntoIterator<Item = WhoisResponseItem>>(iter: T) -> Self {
        WhoisResponse {
            items: iter.into_iter().collect(),
            skipped: Vec::new(),
        }
    }
}

/// Display the response as text again, messages and objects separated by blank lines.
impl Display for WhoisResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for item in &self.items {
            match item {
                WhoisResponseItem::Message(message) => writeln!(f, "{}", message)?,
                WhoisResponseItem::Object(object) => write!(f, "{}", object)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object;

    fn response() -> WhoisResponse {
        let mut response = WhoisResponse::default();
        response.push(WhoisResponseItem::Message(WhoisServerMessage::new(
            "Information related to 'AS51531'",
        )));
        response.push(WhoisResponseItem::Object(object! { "aut-num": "AS51531"; }));
        response.push(WhoisResponseItem::Message(WhoisServerMessage::new(
            "This query was served by the RIPE Database Query Service",
        )));
        response
    }

    #[test]
    fn test_accessors() {
        let response = response();
        assert_eq!(response.items().len(), 3);
        assert_eq!(response.objects().count(), 1);
        assert_eq!(
            response.messages().map(|m| m.value.as_str()).collect::<Vec<_>>(),
            vec![
                "Information related to 'AS51531'",
                "This query was served by the RIPE Database Query Service"
            ]
        );
        assert_eq!(response.into_objects(), vec![object! { "aut-num": "AS51531"; }]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            response().to_string(),
            concat!(
                "% Information related to 'AS51531'\n",
                "\n",
                "aut-num:        AS51531\n",
                "\n",
                "% This query was served by the RIPE Database Query Service\n",
                "\n",
            )
        );
    }
}
