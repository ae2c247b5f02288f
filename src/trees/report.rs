use std::fmt::Write;

/// What a reported node is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// An internal node splitting on `attribute`.
    Split { attribute: usize },
    /// A leaf deciding `label`.
    Leaf { label: &'a str },
}

/// One node of a tree, as seen during a pre-order walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeEvent<'a> {
    pub depth: usize,
    /// Attribute the parent split on, `None` at the root.
    pub parent_attribute: Option<usize>,
    /// Value of the parent's attribute leading to this node, `None` at the root.
    pub branch: Option<&'a str>,
    pub kind: NodeKind<'a>,
}

impl NodeEvent<'_> {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// Receives the nodes of a tree, parent before children.
pub trait Reporter {
    fn report(&mut self, event: &NodeEvent<'_>);
}

impl<F> Reporter for F
where
    F: FnMut(&NodeEvent<'_>),
{
    fn report(&mut self, event: &NodeEvent<'_>) {
        self(event)
    }
}

/// Renders reported nodes as an indented outline, one line per node.
///
/// ```text
/// split on age
///   age = old -> down
///   age = mid: split on competition
///     competition = yes -> down
///     competition = no -> up
///   age = new -> up
/// ```
///
/// Attributes are printed by name when names are given, as `#index` otherwise.
#[derive(Clone, Debug, Default)]
pub struct OutlineReporter {
    attribute_names: Option<Vec<String>>,
    output: String,
}

impl OutlineReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute_names(attribute_names: Vec<String>) -> Self {
        Self {
            attribute_names: Some(attribute_names),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn attribute_name(&self, attribute: usize) -> String {
        match self
            .attribute_names
            .as_ref()
            .and_then(|names| names.get(attribute))
        {
            Some(name) => name.clone(),
            None => format!("#{}", attribute),
        }
    }
}

impl Reporter for OutlineReporter {
    fn report(&mut self, event: &NodeEvent<'_>) {
        let mut line = "  ".repeat(event.depth);

        if let (Some(parent), Some(branch)) = (event.parent_attribute, event.branch) {
            let _ = write!(line, "{} = {}", self.attribute_name(parent), branch);
        }

        match event.kind {
            NodeKind::Split { attribute } => {
                if event.branch.is_some() {
                    line.push_str(": ");
                }
                let _ = write!(line, "split on {}", self.attribute_name(attribute));
            }
            NodeKind::Leaf { label } => {
                if event.branch.is_some() {
                    line.push(' ');
                }
                let _ = write!(line, "-> {}", label);
            }
        }

        self.output.push_str(&line);
        self.output.push('\n');
    }
}
