/// This module implements the priority-queue search shared by Dijkstra and A*, a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// that annotates the [Grid] as it explores so the search can be replayed.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Add;

use crate::grid::Grid;
use crate::tile::TileType;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// When a tile is annotated as [Visited](TileType::Visited).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Marking {
    /// As soon as it is first reached from a neighbour (Dijkstra).
    OnDiscovery,
    /// When it is taken off the open set and expanded (A*).
    OnExpansion,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialOrd> Eq for SmallestCostHolder<K> {}

impl<K: PartialOrd> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of smallest cost nodes first
        match other
            .estimated_cost
            .partial_cmp(&self.estimated_cost)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => self
                .cost
                .partial_cmp(&other.cost)
                .unwrap_or(Ordering::Equal),
            s => s,
        }
    }
}

fn reverse_path<V, F>(parents: &FxIndexMap<Point, V>, mut parent: F, start: usize) -> Vec<Point>
where
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<Point> = std::iter::successors(Some(start), |&i| {
        parents.get_index(i).map(|(_, value)| parent(value))
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| *node))
    .collect();
    path.reverse();
    path
}

/// Runs a best-first search from `start` to `goal` over the passable tiles of `grid`
/// with unit step cost, ordering the open set by `cost + heuristic`. Tiles are marked
/// [Visited](TileType::Visited) according to `marking`. Returns the path from `start`
/// to `goal` inclusive together with its cost, without marking the path itself.
/// `start` and `goal` are never marked.
pub(crate) fn best_first<C, FH>(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    mut heuristic: FH,
    marking: Marking,
) -> Option<(Vec<Point>, C)>
where
    C: Zero + One + Add<Output = C> + PartialOrd + Copy,
    FH: FnMut(&Point) -> C,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(&start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<Point, (usize, C)> = FxIndexMap::default();
    parents.insert(start, (usize::MAX, Zero::zero()));
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let node = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                continue;
            }
            *node
        };
        if node == goal {
            let path = reverse_path(&parents, |&(p, _)| p, index);
            return Some((path, cost));
        }
        if marking == Marking::OnExpansion && node != start {
            grid.mark(node, TileType::Visited);
        }
        for successor in grid.neighbours(node) {
            let new_cost = cost + C::one();
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                    if marking == Marking::OnDiscovery && successor != goal {
                        grid.mark(successor, TileType::Visited);
                    }
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holder_pops_lowest_estimate_first() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, cost, index) in [(3.0, 1.0, 0), (1.5, 1.0, 1), (1.5, 1.2, 2)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                cost,
                index,
            });
        }
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect::<Vec<_>>();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn reverse_path_walks_back_to_start() {
        let mut parents: FxIndexMap<Point, (usize, u32)> = FxIndexMap::default();
        parents.insert(Point::new(0, 0), (usize::MAX, 0));
        parents.insert(Point::new(1, 0), (0, 1));
        parents.insert(Point::new(5, 5), (0, 1));
        parents.insert(Point::new(1, 1), (1, 2));
        let path = reverse_path(&parents, |&(p, _)| p, 3);
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn unreachable_goal_exhausts_open_set() {
        // |.#.|
        let mut grid = Grid::new(3, 1);
        grid.set_tile(1, 0, TileType::Wall).unwrap();
        let result = best_first::<u32, _>(
            &mut grid,
            Point::new(0, 0),
            Point::new(2, 0),
            |_| 0,
            Marking::OnDiscovery,
        );
        assert!(result.is_none());
    }
}
