use std::fmt;

/// Location reference into a document: `{base}#/{segment}/{segment}...`.
///
/// The base is an opaque document reference (file name, URL, or empty) and is kept verbatim.
/// Segments are escaped per RFC 6901 so paths such as `/widgets/{id}` stay a single segment.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonPointer {
    base: String,
    segments: Vec<String>,
}

impl JsonPointer {
    pub fn new<S: AsRef<str>>(base: S) -> Self {
        Self {
            base: base.as_ref().to_string(),
            segments: Vec::new(),
        }
    }

    pub fn push<S: AsRef<str>>(mut self, segment: S) -> Self {
        self.segments.push(segment.as_ref().to_string());
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#", self.base)?;
        for segment in &self.segments {
            write!(f, "/{}", escape_segment(segment))?;
        }
        Ok(())
    }
}

/// Escape one reference token: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// `{base}#/components/schemas/{name}`
pub fn schema_pointer(base: &str, name: &str) -> String {
    JsonPointer::new(base)
        .push("components")
        .push("schemas")
        .push(name)
        .to_string()
}

/// `{base}#/paths/{path}/{method}`, method lowercased.
pub fn operation_pointer(base: &str, path: &str, method: &str) -> String {
    JsonPointer::new(base)
        .push("paths")
        .push(path)
        .push(method.to_ascii_lowercase())
        .to_string()
}
