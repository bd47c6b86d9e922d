use fixedbitset::FixedBitSet;

use crate::{core::id::NodeId, store::GraphStore};

/// Runs one dense Dijkstra pass from `source`, filling the distance and
/// predecessor rows of the table.
///
/// Distances are `Option<u64>` where `None` means "not reached"; relaxation
/// only ever adds to a known distance, so the infinity-plus-cost overflow of
/// sentinel encodings cannot occur. A candidate sum past `u64::MAX` is not a
/// representable distance and leaves the destination unreached instead of
/// wrapping around.
pub(super) fn run(
    store: &GraphStore,
    source: usize,
    dist: &mut [Option<u64>],
    pred: &mut [Option<NodeId>],
    visited: &mut FixedBitSet,
) {
    let n = dist.len();

    dist.fill(None);
    pred.fill(None);
    visited.clear();

    dist[source] = Some(0);

    for _ in 0..n {
        // Select the unvisited node with the minimum known distance. The
        // strict comparison keeps the lowest-indexed node on ties, which
        // makes the reported paths reproducible.
        let mut next = None;
        for (index, d) in dist.iter().enumerate() {
            if visited.contains(index) {
                continue;
            }
            if let Some(d) = *d {
                if next.map_or(true, |(_, best)| d < best) {
                    next = Some((index, d));
                }
            }
        }

        // Every node still without a distance is unreachable from the source.
        let Some((v, v_dist)) = next else { break };
        visited.insert(v);

        for w in 0..n {
            if visited.contains(w) {
                continue;
            }

            let Some(cost) = store.cost_between(v, w) else {
                continue;
            };

            let Some(candidate) = v_dist.checked_add(cost) else {
                continue;
            };
            if dist[w].map_or(true, |curr| candidate < curr) {
                dist[w] = Some(candidate);
                pred[w] = Some(NodeId::from_index(v));
            }
        }
    }
}
