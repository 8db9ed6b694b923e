//! Checking a caller-supplied node set against the bipartition of a graph.

use crate::bipartite::component_bipartitions;
use crate::error::BipartiteError;
use crate::graph::Graph;
use crate::tracing_support::{debug, info_span};
use crate::util::collect_unique;

/// Returns true if `nodes` is one side of a valid bipartition of `graph`.
///
/// Each connected component is checked against its own bipartition:
/// `nodes` must contain every node of one side of the component and no node
/// of the other side.  Which side is chosen may differ from component to
/// component, since colors in different components are unrelated.  An
/// isolated node may therefore be included or left out.  Nodes of `nodes`
/// that are not in `graph` are ignored.
///
/// Returns `Ok(false)` if `graph` is not bipartite, and
/// [`BipartiteError::AmbiguousInput`] if `nodes` lists a node more than once.
///
/// ```
/// use bipartite::prelude::*;
///
/// let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]);
/// assert_eq!(validate_candidate_bipartition(&graph, [1, 3]), Ok(true));
/// assert_eq!(validate_candidate_bipartition(&graph, [4, 2]), Ok(true));
/// assert_eq!(validate_candidate_bipartition(&graph, [1, 2]), Ok(false));
/// assert!(validate_candidate_bipartition(&graph, [1, 1, 3]).is_err());
/// ```
pub fn validate_candidate_bipartition<G, I>(
    graph: &G,
    nodes: I,
) -> Result<bool, BipartiteError<G::NodeId>>
where
    G: Graph,
    I: IntoIterator<Item = G::NodeId>,
{
    let _span = info_span!("validate_candidate_bipartition").entered();

    let (candidate, duplicates) = collect_unique(nodes);
    if !duplicates.is_empty() {
        return Err(BipartiteError::AmbiguousInput { duplicates });
    }

    let bipartitions = match component_bipartitions(graph) {
        Ok(bipartitions) => bipartitions,
        Err(error) => {
            debug!(%error, "candidate rejected");
            return Ok(false);
        }
    };

    for sides in &bipartitions {
        if !sides.aligns_with(&candidate) {
            debug!(left = ?sides.left(), right = ?sides.right(), "component misaligned");
            return Ok(false);
        }
    }
    Ok(true)
}
