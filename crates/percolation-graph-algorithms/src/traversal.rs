//! Breadth-first traversal algorithms
//!
//! Component discovery by BFS over the CSR adjacency of a `GraphView`.

use super::common::GraphView;
use std::collections::VecDeque;

/// Collect the component reachable from `source` (BFS order).
///
/// Returns `None` when `source` is not a node index of the view.
pub fn bfs_component(view: &GraphView, source: usize) -> Option<Vec<usize>> {
    if source >= view.node_count {
        return None;
    }
    let mut visited = vec![false; view.node_count];
    Some(bfs_from(view, source, &mut visited))
}

/// Size of the largest connected component.
///
/// Runs a BFS from every unvisited node and keeps the largest traversal.
/// Isolated nodes count as components of size 1; an empty view yields 0.
pub fn largest_component_size(view: &GraphView) -> usize {
    let mut visited = vec![false; view.node_count];
    let mut best = 0;

    for start in 0..view.node_count {
        if visited[start] {
            continue;
        }
        let size = bfs_from(view, start, &mut visited).len();
        best = best.max(size);
    }

    best
}

fn bfs_from(view: &GraphView, start: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current_idx) = queue.pop_front() {
        order.push(current_idx);

        for &next_idx in view.neighbors(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                queue.push_back(next_idx);
            }
        }
    }

    order
}
