//! Arena-backed trie that groups isolates rank by rank.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use isolate_domain::{Isolate, TaxonomicRank};
use isolate_store::{EntityStore, UNKNOWN};

use crate::node::TaxonomyNode;

/// Name of the root node.
pub const ROOT_NAME: &str = "Microorganisms";

/// Grouping levels of the tree, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    OrganismType,
    Domain,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl Rank {
    pub const PATH: [Rank; 8] = [
        Rank::OrganismType,
        Rank::Domain,
        Rank::Phylum,
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
        Rank::Species,
    ];

    fn taxonomic(self) -> Option<TaxonomicRank> {
        match self {
            Rank::OrganismType => None,
            Rank::Domain => Some(TaxonomicRank::Domain),
            Rank::Phylum => Some(TaxonomicRank::Phylum),
            Rank::Class => Some(TaxonomicRank::Class),
            Rank::Order => Some(TaxonomicRank::Order),
            Rank::Family => Some(TaxonomicRank::Family),
            Rank::Genus => Some(TaxonomicRank::Genus),
            Rank::Species => Some(TaxonomicRank::Species),
        }
    }

    /// Group key of a row at this rank. Missing values group under "".
    pub fn key<'a>(self, row: &TaxonomyRow<'a>) -> &'a str {
        match self.taxonomic() {
            None => row.organism_type,
            Some(rank) => row.isolate.rank(rank).unwrap_or(""),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.taxonomic() {
            None => f.write_str("organism_type"),
            Some(rank) => fmt::Display::fmt(&rank, f),
        }
    }
}

/// An isolate pre-joined with its organism type.
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyRow<'a> {
    pub organism_type: &'a str,
    pub isolate: &'a Isolate,
}

/// Join isolates with their organism types; unresolved organisms become [`UNKNOWN`].
pub fn rows_for<'a>(isolates: impl IntoIterator<Item = &'a Isolate>, store: &'a EntityStore) -> Vec<TaxonomyRow<'a>> {
    isolates
        .into_iter()
        .map(|isolate| TaxonomyRow {
            organism_type: store
                .organism_of(isolate)
                .map(|o| o.organism_type.as_str())
                .unwrap_or(UNKNOWN),
            isolate,
        })
        .collect()
}

/// Rows for every isolate in the snapshot.
pub fn rows_from_store(store: &EntityStore) -> Vec<TaxonomyRow<'_>> {
    rows_for(store.isolates(), store)
}

type NodeId = usize;

#[derive(Debug)]
struct ArenaNode {
    name: String,
    children: Vec<NodeId>,
    by_name: HashMap<String, NodeId>,
}

impl ArenaNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

/// Flat node storage; children keep insertion order.
#[derive(Debug)]
struct Arena {
    nodes: Vec<ArenaNode>,
}

impl Arena {
    const ROOT: NodeId = 0;

    fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![ArenaNode::new(root_name)],
        }
    }

    fn push(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(ArenaNode::new(name));
        self.nodes[parent].children.push(id);
        id
    }

    /// Existing child with this group key, or a new one appended last.
    fn group(&mut self, parent: NodeId, key: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent].by_name.get(key) {
            return id;
        }
        let id = self.push(parent, key);
        self.nodes[parent].by_name.insert(key.to_string(), id);
        id
    }

    /// Leaves are appended without grouping: one per isolate.
    fn leaf(&mut self, parent: NodeId, name: &str) {
        self.push(parent, name);
    }

    fn to_node(&self, id: NodeId) -> TaxonomyNode {
        let node = &self.nodes[id];
        TaxonomyNode {
            name: node.name.clone(),
            children: node.children.iter().map(|&child| self.to_node(child)).collect(),
        }
    }
}

/// Build the taxonomy tree under the default root name.
pub fn build_taxonomy_tree(rows: &[TaxonomyRow<'_>]) -> TaxonomyNode {
    build_taxonomy_tree_named(rows, ROOT_NAME)
}

/// Build the taxonomy tree under a custom root name.
///
/// Children appear in the order their key was first seen. Every isolate
/// ends in its own accession leaf, even when accessions repeat.
pub fn build_taxonomy_tree_named(rows: &[TaxonomyRow<'_>], root_name: &str) -> TaxonomyNode {
    let mut arena = Arena::new(root_name);

    for row in rows {
        let parent = Rank::PATH
            .iter()
            .fold(Arena::ROOT, |parent, rank| arena.group(parent, rank.key(row)));
        arena.leaf(parent, &row.isolate.accession_number);
    }

    tracing::debug!(rows = rows.len(), nodes = arena.nodes.len(), "built taxonomy tree");
    arena.to_node(Arena::ROOT)
}
