use std::fmt;

/// Location of a value inside the value passed to the printer, used to
/// report where printing failed.  Displayed as `$` followed by one part per
/// nesting level, e.g. `$[0].key(1)` or `$['name'][2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValuePath(Vec<PathSegment>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Element of a list or tuple, or field of a constructor
    Index(usize),

    /// The key of the n-th map entry
    Key(usize),

    /// The value of a map entry, identified by the literal form of its key
    Value(String),
}

impl ValuePath {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;

        for segment in &self.0 {
            match segment {
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
                PathSegment::Key(idx) => write!(f, ".key({})", idx)?,
                PathSegment::Value(key) => write!(f, "[{}]", key)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{PathSegment, ValuePath};

    #[test]
    fn display() {
        let mut path = ValuePath::new();
        assert_eq!(path.to_string(), "$");
        assert!(path.is_root());

        path.push(PathSegment::Index(3));
        path.push(PathSegment::Value(String::from("'name'")));
        path.push(PathSegment::Key(0));
        assert_eq!(path.to_string(), "$[3]['name'].key(0)");

        path.pop();
        assert_eq!(path.to_string(), "$[3]['name']");
    }
}
