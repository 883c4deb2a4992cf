//! Generic minimax with optional alpha-beta pruning.
//!
//! The search knows nothing about chess: it is driven by a `NodeEvaluator`
//! that scores a node and a `ChildGenerator` that expands one. Values are
//! always from the maximizing side's point of view. Pruning only skips
//! children that cannot change the value returned at the root, so the root
//! value is the same with or without it.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::ChessResult;

/// Scores a node for the maximizing side.
pub trait NodeEvaluator<N> {
    fn evaluate(&self, node: &N) -> ChessResult<f64>;
}

/// Expands a node into its children, in the order they should be searched.
pub trait ChildGenerator<N> {
    fn children(&self, node: &N) -> ChessResult<Vec<N>>;
}

impl<N, F> NodeEvaluator<N> for F
where
    F: Fn(&N) -> ChessResult<f64>,
{
    fn evaluate(&self, node: &N) -> ChessResult<f64> {
        self(node)
    }
}

impl<N, F> ChildGenerator<N> for F
where
    F: Fn(&N) -> ChessResult<Vec<N>>,
{
    fn children(&self, node: &N) -> ChessResult<Vec<N>> {
        self(node)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<N> {
    /// Child chosen at this level; at depth 0 the node itself. `None` when
    /// the node had no children.
    pub best: Option<N>,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the search, root included.
    pub nodes: u64,
    /// Nodes handed to the evaluator.
    pub evaluations: u64,
    /// Times the remaining children of a node were skipped.
    pub cutoffs: u64,
    pub cancelled: bool,
}

/// Search parameters and counters for one run.
pub struct Minimax<'a, N, E: NodeEvaluator<N>, C: ChildGenerator<N>> {
    evaluator: &'a E,
    generator: &'a C,
    prune: bool,
    cancel: Option<&'a AtomicBool>,
    stats: SearchStats,
    _node: std::marker::PhantomData<fn(&N)>,
}

impl<'a, N: Clone, E: NodeEvaluator<N>, C: ChildGenerator<N>> Minimax<'a, N, E, C> {
    pub fn new(evaluator: &'a E, generator: &'a C, prune: bool) -> Self {
        Self {
            evaluator,
            generator,
            prune,
            cancel: None,
            stats: SearchStats::default(),
            _node: std::marker::PhantomData,
        }
    }

    /// Checked on entry to every node. Once set, nodes are scored as leaves.
    pub fn with_cancel_flag(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn leaf(&mut self, node: N) -> ChessResult<SearchOutcome<N>> {
        self.stats.evaluations += 1;
        let value = self.evaluator.evaluate(&node)?;
        Ok(SearchOutcome {
            best: Some(node),
            value,
        })
    }

    pub fn search(
        &mut self,
        node: N,
        depth: u8,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> ChessResult<SearchOutcome<N>> {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(node);
        }
        if self.is_cancelled() {
            self.stats.cancelled = true;
            return self.leaf(node);
        }

        let children = self.generator.children(&node)?;
        if children.is_empty() {
            let mut outcome = self.leaf(node)?;
            outcome.best = None;
            return Ok(outcome);
        }

        let mut best: Option<N> = None;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        let total = children.len();
        for (index, child) in children.into_iter().enumerate() {
            let value = self
                .search(child.clone(), depth - 1, !maximizing, alpha, beta)?
                .value;

            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if best.is_none() || improves {
                best_value = value;
                best = Some(child);
            }

            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
            if self.prune && alpha >= beta {
                if index + 1 < total {
                    self.stats.cutoffs += 1;
                }
                break;
            }
        }

        Ok(SearchOutcome {
            best,
            value: best_value,
        })
    }
}

/// One-shot search with fresh statistics.
#[allow(clippy::too_many_arguments)]
pub fn minimax<N, E, C>(
    node: N,
    evaluator: &E,
    generator: &C,
    depth: u8,
    maximizing: bool,
    alpha: f64,
    beta: f64,
    prune: bool,
) -> ChessResult<SearchOutcome<N>>
where
    N: Clone,
    E: NodeEvaluator<N>,
    C: ChildGenerator<N>,
{
    Minimax::new(evaluator, generator, prune).search(node, depth, maximizing, alpha, beta)
}
