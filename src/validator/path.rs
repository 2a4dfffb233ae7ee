//! Structural paths and their presentation
//!
//! Paths are typed segment lists internally and only become strings at the
//! presentation boundary, where field names that would read as an index
//! (or share a character with the separator) are quoted.

use std::fmt::Write;

use super::errors::{ValidatorError, ValidatorResult};

/// Marker rendered for the document root.
pub const ROOT: &str = "$";

/// One step below the root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Field(String),
    Index(usize),
}

/// Location of a value within the document tree.
///
/// Extending a path returns a new one; a path handed to one branch of the
/// traversal is never changed by another.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    /// The path of a field below this one.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.extended(Segment::Field(name.into()))
    }

    /// The path of a list element below this one.
    pub fn index(&self, index: usize) -> Self {
        self.extended(Segment::Index(index))
    }

    fn extended(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Renders a path for display.
pub trait PathPresenter: Send + Sync {
    fn present(&self, path: &Path) -> String;
}

/// Characters that delimit quoted names and indices.
const RESERVED: [char; 4] = ['"', '\\', '[', ']'];

/// `$`, `$.name`, `$.[1].age` style presenter with a configurable separator.
#[derive(Debug, Clone)]
pub struct SeparatorPathPresenter {
    separator: String,
}

impl SeparatorPathPresenter {
    /// Fails with `InvalidSeparator` for an empty separator or one that
    /// contains `"`, `\`, `[` or `]`.
    pub fn new(separator: impl Into<String>) -> ValidatorResult<Self> {
        let separator = separator.into();
        if separator.is_empty() || separator.contains(&RESERVED[..]) {
            return Err(ValidatorError::InvalidSeparator(separator));
        }
        Ok(Self { separator })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn needs_quoting(&self, name: &str) -> bool {
        name.is_empty()
            || name.starts_with('[')
            || name.contains('"')
            || name.contains(|c: char| self.separator.contains(c))
    }

    fn push_field(&self, out: &mut String, name: &str) {
        if !self.needs_quoting(name) {
            out.push_str(name);
            return;
        }
        out.push('"');
        for c in name.chars() {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('"');
    }
}

impl Default for SeparatorPathPresenter {
    fn default() -> Self {
        Self {
            separator: ".".to_string(),
        }
    }
}

impl PathPresenter for SeparatorPathPresenter {
    fn present(&self, path: &Path) -> String {
        let mut out = String::from(ROOT);
        for segment in path.segments() {
            out.push_str(&self.separator);
            match segment {
                Segment::Field(name) => self.push_field(&mut out, name),
                Segment::Index(index) => {
                    let _ = write!(out, "[{}]", index);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        let presenter = SeparatorPathPresenter::default();
        assert!(Path::root().is_root());
        assert_eq!(presenter.present(&Path::root()), "$");
    }

    #[test]
    fn test_fields_and_indices() {
        let presenter = SeparatorPathPresenter::new(".").unwrap();
        let path = Path::root().index(1).field("age");
        assert_eq!(presenter.present(&path), "$.[1].age");
        assert_eq!(presenter.present(&Path::root().field("age")), "$.age");
    }

    #[test]
    fn test_custom_separator() {
        let presenter = SeparatorPathPresenter::new("/").unwrap();
        let path = Path::root().field("users").index(0).field("name");
        assert_eq!(presenter.present(&path), "$/users/[0]/name");
    }

    #[test]
    fn test_extension_leaves_parent_untouched() {
        let parent = Path::root().field("a");
        let left = parent.field("b");
        let right = parent.index(3);

        assert_eq!(parent.segments().len(), 1);
        assert_eq!(left.segments()[1], Segment::Field("b".into()));
        assert_eq!(right.segments()[1], Segment::Index(3));
    }

    #[test]
    fn test_index_like_field_is_quoted() {
        let presenter = SeparatorPathPresenter::default();
        let literal = presenter.present(&Path::root().field("[1]"));
        let index = presenter.present(&Path::root().index(1));

        assert_eq!(literal, "$.\"[1]\"");
        assert_eq!(index, "$.[1]");
        assert_ne!(literal, index);
    }

    #[test]
    fn test_separator_and_quotes_are_escaped() {
        let presenter = SeparatorPathPresenter::default();
        assert_eq!(presenter.present(&Path::root().field("a.b")), "$.\"a.b\"");
        assert_eq!(
            presenter.present(&Path::root().field("say \"hi\"")),
            "$.\"say \\\"hi\\\"\""
        );
        assert_eq!(presenter.present(&Path::root().field("")), "$.\"\"");
    }

    #[test]
    fn test_same_location_renders_identically() {
        let presenter = SeparatorPathPresenter::default();
        let a = Path::root().field("x").index(2);
        let b = Path::root().field("x").index(2);
        assert_eq!(presenter.present(&a), presenter.present(&b));
    }

    #[test]
    fn test_invalid_separators_rejected() {
        for separator in ["", "\"", "\\", "[", "]", ".]"] {
            assert_eq!(
                SeparatorPathPresenter::new(separator).unwrap_err(),
                ValidatorError::InvalidSeparator(separator.to_string())
            );
        }
        assert_eq!(SeparatorPathPresenter::new("::").unwrap().separator(), "::");
    }

    #[test]
    fn test_partial_separator_in_name_is_quoted() {
        let presenter = SeparatorPathPresenter::new("..").unwrap();
        let left = Path::root().field("a.").field("b");
        let right = Path::root().field("a").field(".b");

        assert_eq!(presenter.present(&left), "$..\"a.\"..b");
        assert_eq!(presenter.present(&right), "$..a..\".b\"");
    }
}
