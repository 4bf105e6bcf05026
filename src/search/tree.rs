//! Arena-backed search tree.
//!
//! Nodes are appended once and never removed; a node refers to its parent by [`NodeId`], so
//! there are no ownership cycles and a whole tree drops in one go with its driver.

use crate::core::configuration::Configuration;
use crate::core::crossing::Crossing;

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub config: Configuration,
    /// Boat trips from the root.
    pub cost: u32,
    pub parent: Option<NodeId>,
    /// The crossing that produced this node (`None` for the root).
    pub crossing: Option<Crossing>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tree branch at `config` with cost 0.
    pub fn add_root(&mut self, config: Configuration) -> NodeId {
        self.push(Node {
            config,
            cost: 0,
            parent: None,
            crossing: None,
        })
    }

    /// Append a child of `parent` reached by `crossing`; its cost is the parent's plus one trip.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        crossing: Crossing,
        config: Configuration,
    ) -> NodeId {
        let cost = self.get(parent).cost + 1;
        self.push(Node {
            config,
            cost,
            parent: Some(parent),
            crossing: Some(crossing),
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn config(&self, id: NodeId) -> Configuration {
        self.get(id).config
    }

    #[inline]
    pub fn cost(&self, id: NodeId) -> u32 {
        self.get(id).cost
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root down to `id` (inclusive).
    pub fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.cost(id) as usize + 1);
        let mut cur = Some(id);
        while let Some(n) = cur {
            out.push(n);
            cur = self.get(n).parent;
        }
        out.reverse();
        out
    }

    /// Configurations from the root down to `id` (inclusive).
    pub fn reconstruct(&self, id: NodeId) -> Vec<Configuration> {
        self.lineage(id)
            .into_iter()
            .map(|n| self.config(n))
            .collect()
    }

    /// Crossings taken from the root down to `id`, one per trip.
    pub fn crossings(&self, id: NodeId) -> Vec<Crossing> {
        self.lineage(id)
            .into_iter()
            .filter_map(|n| self.get(n).crossing)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::side::Side;

    #[test]
    fn reconstruct_walks_parents_back_to_root() {
        let mut tree = SearchTree::new();
        let a = Configuration::new(3, 3, Side::Left);
        let b = Configuration::new(2, 2, Side::Right);
        let c = Configuration::new(3, 2, Side::Left);

        let root = tree.add_root(a);
        let n1 = tree.add_child(root, Crossing::new(1, 1, Side::Left), b);
        let _sibling = tree.add_child(root, Crossing::new(0, 2, Side::Left), b);
        let n2 = tree.add_child(n1, Crossing::new(1, 0, Side::Right), c);

        assert_eq!(tree.cost(n2), 2);
        assert_eq!(tree.reconstruct(n2), vec![a, b, c]);
        assert_eq!(
            tree.crossings(n2),
            vec![
                Crossing::new(1, 1, Side::Left),
                Crossing::new(1, 0, Side::Right)
            ]
        );
        assert_eq!(tree.reconstruct(root), vec![a]);
        assert!(tree.crossings(root).is_empty());
        assert_eq!(tree.len(), 4);
    }
}
