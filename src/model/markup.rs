//! Opaque markup fragments held by free-text leaves.

use std::fmt;

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

/// The raw inner markup of a free-text leaf such as `<p>` or `<head>`.
///
/// The fragment is kept exactly as it appeared between the start and end
/// tags, entity references and nested tags included, and is written back
/// unchanged. Callers constructing a fragment by hand are responsible for
/// keeping it well-formed; [`Markup::from_text`] escapes plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Markup(String);

impl Markup {
    /// Wrap an already well-formed fragment.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a fragment from plain text, escaping markup characters.
    pub fn from_text(text: &str) -> Self {
        Self(escape(text).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Text content with tags stripped and entities decoded.
    ///
    /// Falls back to the raw fragment if it cannot be read as XML.
    pub fn plain_text(&self) -> String {
        let mut reader = Reader::from_str(&self.0);
        let mut text = String::new();
        loop {
            match reader.read_event() {
                Ok(Event::Text(t)) => match t.unescape() {
                    Ok(chunk) => text.push_str(&chunk),
                    Err(_) => return self.0.clone(),
                },
                Ok(Event::CData(c)) => text.push_str(&String::from_utf8_lossy(&c)),
                Ok(Event::Eof) => return text,
                Ok(_) => {}
                Err(_) => return self.0.clone(),
            }
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Markup {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Markup {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl PartialEq<str> for Markup {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Markup {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
