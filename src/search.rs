use std::collections::{HashSet, VecDeque};

use crate::Graph;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Breadth-first traversal yielding each reachable node once.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::NodeId>,
    queue: VecDeque<G::NodeId>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::NodeId>) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue: start.into(),
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(nid) = self.queue.pop_front() {
            if !self.visited.insert(nid.clone()) {
                continue;
            }
            for neighbor in self.graph.neighbors(&nid) {
                if !self.visited.contains(&neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
            return Some(nid);
        }
        None
    }
}

/// Depth-first traversal yielding each reachable node once, in preorder.
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::NodeId>,
    stack: Vec<G::NodeId>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::NodeId>) -> Self {
        let mut stack = start;
        stack.reverse();
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        }
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(nid) = self.stack.pop() {
            if self.visited.insert(nid.clone()) {
                let unvisited = self
                    .graph
                    .neighbors(&nid)
                    .filter(|neighbor| !self.visited.contains(neighbor));
                self.stack.extend(unvisited);
                return Some(nid);
            }
        }
        None
    }
}
