//! Event targets and the selector that keeps interactive children from
//! starting a drag.
//!
//! The selector understands the subset of CSS that drag rows need: a comma
//! separated list of tag names (`button`, `a`) and attribute presence tests
//! (`[data-no-drag]`). Matching follows DOM `closest`: an event target path
//! matches when any element on it matches any entry.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Selector used when none is configured.
pub const DEFAULT_IGNORE_SELECTOR: &str = "input,textarea,select,button,a,[data-no-drag]";

/// Minimal description of an element on an event's path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetElement {
    tag: String,
    attributes: SmallVec<[String; 2]>,
}

impl TargetElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: SmallVec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into().to_ascii_lowercase());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|attribute| attribute.eq_ignore_ascii_case(name))
    }
}

/// Target element first, then its ancestors outwards.
pub type TargetPath = SmallVec<[TargetElement; 4]>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SelectorPart {
    Tag(String),
    Attribute(String),
}

impl SelectorPart {
    fn matches(&self, element: &TargetElement) -> bool {
        match self {
            SelectorPart::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            SelectorPart::Attribute(name) => element.has_attribute(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    Empty,
    EmptyEntry { index: usize },
    Unsupported { entry: String },
    Unterminated { entry: String },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::Empty => write!(f, "selector list is empty"),
            SelectorError::EmptyEntry { index } => {
                write!(f, "selector entry {index} is empty")
            }
            SelectorError::Unsupported { entry } => {
                write!(f, "unsupported selector `{entry}`; expected a tag or [attribute]")
            }
            SelectorError::Unterminated { entry } => {
                write!(f, "attribute selector `{entry}` is missing `]`")
            }
        }
    }
}

impl std::error::Error for SelectorError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSelector {
    parts: SmallVec<[SelectorPart; 8]>,
}

impl TargetSelector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        if source.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut parts = SmallVec::new();
        for (index, raw) in source.split(',').enumerate() {
            let entry = raw.trim();
            if entry.is_empty() {
                return Err(SelectorError::EmptyEntry { index });
            }
            parts.push(parse_entry(entry)?);
        }
        Ok(Self { parts })
    }

    /// Selector that matches nothing.
    pub fn none() -> Self {
        Self {
            parts: SmallVec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn matches(&self, element: &TargetElement) -> bool {
        self.parts.iter().any(|part| part.matches(element))
    }

    /// First element on `path` (target outwards) matching this selector.
    pub fn closest<'a>(&self, path: &'a [TargetElement]) -> Option<&'a TargetElement> {
        path.iter().find(|element| self.matches(element))
    }
}

impl Default for TargetSelector {
    /// [`DEFAULT_IGNORE_SELECTOR`], parsed.
    fn default() -> Self {
        Self::parse(DEFAULT_IGNORE_SELECTOR).unwrap_or_else(|_| Self::none())
    }
}

impl FromStr for TargetSelector {
    type Err = SelectorError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

fn parse_entry(entry: &str) -> Result<SelectorPart, SelectorError> {
    if let Some(rest) = entry.strip_prefix('[') {
        let Some(name) = rest.strip_suffix(']') else {
            return Err(SelectorError::Unterminated {
                entry: entry.to_string(),
            });
        };
        let name = name.trim();
        if is_identifier(name) {
            return Ok(SelectorPart::Attribute(name.to_ascii_lowercase()));
        }
    } else if is_identifier(entry) {
        return Ok(SelectorPart::Tag(entry.to_ascii_lowercase()));
    }
    Err(SelectorError::Unsupported {
        entry: entry.to_string(),
    })
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
