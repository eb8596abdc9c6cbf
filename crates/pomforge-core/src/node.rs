//! Mutable, ordered element tree used as the output representation.
//!
//! A [`Node`] owns its children exclusively, so the structure is always a
//! pure tree. Children keep insertion order because the consuming tool reads
//! order as meaning (e.g. `pluginManagement` before `plugins`).
//!
//! Builders append through [`Node::append`] and friends, each of which returns
//! the freshly created child so deeper structure can be chained:
//!
//! ```
//! use pomforge_core::Node;
//!
//! # fn main() -> pomforge_core::Result<()> {
//! let mut project = Node::new("project")?;
//! project
//!     .append("parent")?
//!     .append_text("groupId", "org.springframework.boot")?;
//! assert_eq!(
//!     project.find(&["parent", "groupId"]).and_then(|n| n.text()),
//!     Some("org.springframework.boot")
//! );
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A single element of the descriptor tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    text: Option<String>,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Node {
    /// Create a detached element with no text and no children.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            text: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        })
    }

    /// Create a detached element carrying a text value.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let mut node = Self::new(name)?;
        node.text = Some(text.into());
        Ok(node)
    }

    /// Append an empty child element and return it.
    pub fn append(&mut self, name: impl Into<String>) -> Result<&mut Node> {
        let child = Node::new(name)?;
        Ok(self.adopt(child))
    }

    /// Append a child element with a text value and return it.
    pub fn append_text(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut Node> {
        let child = Node::with_text(name, text)?;
        Ok(self.adopt(child))
    }

    /// Build a child element with a closure, then append it.
    ///
    /// The child is only attached once `build` succeeds, so a failing builder
    /// leaves the receiver untouched.
    pub fn append_with<F>(&mut self, name: impl Into<String>, build: F) -> Result<&mut Node>
    where
        F: FnOnce(&mut Node) -> Result<()>,
    {
        let mut child = Node::new(name)?;
        build(&mut child)?;
        Ok(self.adopt(child))
    }

    /// Attach an already-built subtree as the last child.
    pub fn adopt(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Return the first child with the given name, appending it if absent.
    pub fn ensure_child(&mut self, name: &str) -> Result<&mut Node> {
        match self.children.iter().position(|c| c.name == name) {
            Some(index) => Ok(&mut self.children[index]),
            None => self.append(name),
        }
    }

    /// Set an attribute on this element.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let key = key.into();
        validate_name(&key)?;
        self.attributes.insert(key, value.into());
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name, in order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Index of the first child with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|c| c.name == name)
    }

    /// Follow a path of child names, taking the first match at each level.
    pub fn find(&self, path: &[&str]) -> Option<&Node> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Text of the element at `path`, if it exists and has text.
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.find(path).and_then(Node::text)
    }

    /// Depth-first, pre-order listing of every element with its depth.
    pub fn walk(&self) -> Vec<(usize, &Node)> {
        let mut out = Vec::new();
        let mut stack = vec![(0usize, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}

/// Element names must start with a letter or `_` and otherwise contain only
/// letters, digits, `-`, `_` or `.`.
fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::MalformedNode {
            name: name.to_string(),
        })
    }
}
