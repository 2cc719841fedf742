//! Output tree type.

use serde::{Deserialize, Serialize};

/// A node of the taxonomy tree. Leaves are accession numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child with this name.
    pub fn child(&self, name: &str) -> Option<&TaxonomyNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Walk down by child names.
    pub fn find(&self, path: &[&str]) -> Option<&TaxonomyNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Number of leaves below (a leaf counts itself).
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TaxonomyNode::leaf_count).sum()
        }
    }

    /// Longest path to a leaf, in edges.
    pub fn depth(&self) -> usize {
        self.children.iter().map(|c| c.depth() + 1).max().unwrap_or(0)
    }

    /// Format as an indented tree string for display.
    pub fn format_tree(&self) -> String {
        let mut output = String::new();
        output.push_str(&display_name(&self.name));
        output.push('\n');
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.format_subtree("", i + 1 == count, &mut output);
        }
        output
    }

    fn format_subtree(&self, prefix: &str, is_last: bool, output: &mut String) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{}{}{}\n", prefix, connector, display_name(&self.name)));

        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.format_subtree(&child_prefix, i + 1 == count, output);
        }
    }
}

fn display_name(name: &str) -> String {
    if name.is_empty() {
        "(unranked)".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaxonomyNode {
        TaxonomyNode {
            name: "root".into(),
            children: vec![
                TaxonomyNode {
                    name: "a".into(),
                    children: vec![TaxonomyNode::new("a1"), TaxonomyNode::new("a2")],
                },
                TaxonomyNode::new(""),
            ],
        }
    }

    #[test]
    fn navigation() {
        let t = sample();
        assert_eq!(t.find(&["a", "a2"]).unwrap().name, "a2");
        assert!(t.find(&["a", "missing"]).is_none());
        assert_eq!(t.find(&[]).unwrap().name, "root");
    }

    #[test]
    fn counts() {
        let t = sample();
        assert_eq!(t.leaf_count(), 3);
        assert_eq!(t.depth(), 2);
        assert_eq!(TaxonomyNode::new("x").depth(), 0);
    }

    #[test]
    fn format_tree() {
        let out = sample().format_tree();
        assert_eq!(out, "root\n├── a\n│   ├── a1\n│   └── a2\n└── (unranked)\n");
    }

    #[test]
    fn leaves_serialize_without_children() {
        let json = serde_json::to_string(&TaxonomyNode::new("CCB-UPLB-1")).unwrap();
        assert_eq!(json, r#"{"name":"CCB-UPLB-1"}"#);
    }
}
