//!
//! A benchmark method with all its measured results.
//!

pub mod result;

use self::result::Result as MethodResult;

///
/// A benchmark method with all its measured results.
///
/// When the table distinguishes runtimes, each runtime variant of a method is a
/// method of its own, named with the runtime in parentheses. Variants share the
/// order of their common name prefix.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Method {
    /// The method name, with the runtime appended when present.
    pub name: String,
    /// The first-seen index of the method name prefix, used for ordering.
    pub order: usize,
    /// The measured results in row order.
    pub results: Vec<MethodResult>,
}

impl Method {
    ///
    /// A shortcut constructor for a method with no results yet.
    ///
    pub fn new(name: String, order: usize) -> Self {
        Self {
            name,
            order,
            results: Vec::new(),
        }
    }
}
