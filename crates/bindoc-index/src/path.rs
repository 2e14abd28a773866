//! Structural paths for querying a documentation index.
//!
//! A [`Path`] is a sequence of steps, each selecting elements by tag along the
//! child or descendant axis and narrowing them with filters. It covers the
//! subset of XPath that tag files need:
//!
//! ```ignore
//! // //compound[@kind='class' or @kind='struct'][name='Widget']/member[@kind='function']
//! let path = Path::descendant("compound")
//!     .attr_in("kind", &["class", "struct"])
//!     .child_text("name", "Widget")
//!     .child("member")
//!     .attr("kind", "function");
//! ```

use std::fmt;

/// Axis a step moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Child,
    Descendant,
}

/// Predicate narrowing the elements selected by a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Filter {
    /// Attribute equals one of the values.
    Attr { name: String, values: Vec<String> },
    /// Some child element's trimmed text equals one of the values.
    ChildText { name: String, values: Vec<String> },
}

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) axis: Axis,
    pub(crate) tag: String,
    pub(crate) filters: Vec<Filter>,
}

/// Structural query against a [`DocIndex`](crate::DocIndex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub(crate) steps: Vec<Step>,
}

impl Path {
    /// Start a path selecting `tag` elements anywhere below the context node.
    #[must_use]
    pub fn descendant(tag: &str) -> Self {
        Self {
            steps: vec![Step::new(Axis::Descendant, tag)],
        }
    }

    /// Start a path selecting `tag` children of the context node.
    #[must_use]
    pub fn children(tag: &str) -> Self {
        Self {
            steps: vec![Step::new(Axis::Child, tag)],
        }
    }

    /// Append a step selecting `tag` children.
    #[must_use]
    pub fn child(mut self, tag: &str) -> Self {
        self.steps.push(Step::new(Axis::Child, tag));
        self
    }

    /// Require an attribute value on the last step.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.attr_in(name, &[value])
    }

    /// Require an attribute to equal one of `values` on the last step.
    #[must_use]
    pub fn attr_in<S: AsRef<str>>(self, name: &str, values: &[S]) -> Self {
        self.filter(Filter::Attr {
            name: name.to_owned(),
            values: values.iter().map(|v| v.as_ref().to_owned()).collect(),
        })
    }

    /// Require a child element with the given text on the last step.
    #[must_use]
    pub fn child_text(self, name: &str, value: &str) -> Self {
        self.child_text_in(name, &[value])
    }

    /// Require a child element whose text equals one of `values` on the last step.
    #[must_use]
    pub fn child_text_in<S: AsRef<str>>(self, name: &str, values: &[S]) -> Self {
        self.filter(Filter::ChildText {
            name: name.to_owned(),
            values: values.iter().map(|v| v.as_ref().to_owned()).collect(),
        })
    }

    fn filter(mut self, filter: Filter) -> Self {
        if let Some(step) = self.steps.last_mut() {
            step.filters.push(filter);
        }
        self
    }
}

impl Step {
    fn new(axis: Axis, tag: &str) -> Self {
        Self {
            axis,
            tag: tag.to_owned(),
            filters: Vec::new(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            match step.axis {
                Axis::Descendant => f.write_str("//")?,
                Axis::Child if index > 0 => f.write_str("/")?,
                Axis::Child => {}
            }
            f.write_str(&step.tag)?;
            for filter in &step.filters {
                let (prefix, name, values) = match filter {
                    Filter::Attr { name, values } => ("@", name, values),
                    Filter::ChildText { name, values } => ("", name, values),
                };
                let alternatives = values
                    .iter()
                    .map(|value| format!("{prefix}{name}='{value}'"))
                    .collect::<Vec<_>>()
                    .join(" or ");
                write!(f, "[{alternatives}]")?;
            }
        }
        Ok(())
    }
}
