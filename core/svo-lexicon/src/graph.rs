use petgraph::algo::toposort;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Directed;
use petgraph::Direction;
use svo_protocol::SenseId;
use std::collections::HashMap;

/// Hypernym relation between senses. Edges point from a sense to its parent.
#[derive(Debug, Default)]
pub struct HypernymGraph {
    graph: Graph<SenseId, (), Directed>,
    index_map: HashMap<SenseId, NodeIndex>,
}

impl HypernymGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(senses: usize, links: usize) -> Self {
        Self {
            graph: Graph::with_capacity(senses, links),
            index_map: HashMap::with_capacity(senses),
        }
    }

    pub fn add_sense(&mut self, sense: SenseId) {
        if !self.index_map.contains_key(&sense) {
            let idx = self.graph.add_node(sense);
            self.index_map.insert(sense, idx);
        }
    }

    pub fn add_hypernym(&mut self, child: SenseId, parent: SenseId) {
        let child_idx = *self.index_map.entry(child).or_insert_with(|| self.graph.add_node(child));
        let parent_idx = *self.index_map.entry(parent).or_insert_with(|| self.graph.add_node(parent));

        self.graph.add_edge(child_idx, parent_idx, ());
    }

    /// Direct parents of `sense`, in the order they were linked.
    pub fn parents(&self, sense: SenseId) -> Vec<SenseId> {
        let Some(idx) = self.index_map.get(&sense) else {
            return Vec::new();
        };

        // petgraph walks adjacency lists newest-first
        let mut parents: Vec<SenseId> = self
            .graph
            .neighbors_directed(*idx, Direction::Outgoing)
            .map(|n| self.graph[n])
            .collect();
        parents.reverse();
        parents
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// A sense that sits on a hypernym cycle, if the relation is not acyclic.
    pub fn find_cycle(&self) -> Option<SenseId> {
        toposort(&self.graph, None)
            .err()
            .map(|cycle| self.graph[cycle.node_id()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_keep_link_order() {
        let mut graph = HypernymGraph::new();
        let walk = SenseId(1);
        let act = SenseId(2);
        let event = SenseId(3);

        graph.add_hypernym(walk, act);
        graph.add_hypernym(walk, event);

        assert_eq!(graph.parents(walk), vec![act, event]);
        assert!(graph.parents(act).is_empty());
        assert!(graph.parents(SenseId(99)).is_empty());
        assert_eq!(graph.link_count(), 2);
    }

    #[test]
    fn test_cycle_detection() {
        let mut graph = HypernymGraph::new();
        graph.add_hypernym(SenseId(0), SenseId(1));
        graph.add_hypernym(SenseId(1), SenseId(2));
        assert_eq!(graph.find_cycle(), None);

        graph.add_hypernym(SenseId(2), SenseId(0));
        let on_cycle = graph.find_cycle().expect("cycle should be reported");
        assert!([SenseId(0), SenseId(1), SenseId(2)].contains(&on_cycle));
    }
}
