use anyhow::{bail, Result};

use crate::{Corpus, PageId, RankVector};

/// Probability mass reserved for uniform teleportation.
pub const DAMPING: f64 = 0.15;
/// Euclidean distance between successive vectors below which the iteration
/// is considered converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;
/// Hard cap on power iterations; a degenerate transition structure must not
/// spin forever.
pub const MAX_ITERATIONS: usize = 2000;

/// Transition weight from page `from` to page `to`, recomputed on demand
/// from the outbound link sets. The row-stochastic matrix is never
/// materialized.
///
/// A dangling page spreads its non-teleport mass over every other page but
/// keeps only the teleport share for itself.
pub fn transition_weight(corpus: &Corpus, from: PageId, to: PageId) -> f64 {
    let n = corpus.page_count() as f64;
    let links = &corpus.pages[&from].outbound_links;
    if links.is_empty() {
        if to == from {
            DAMPING / n
        } else {
            (1.0 - DAMPING) / (n - 1.0) + DAMPING / n
        }
    } else if links.contains(&to) {
        (1.0 - DAMPING) / links.len() as f64 + DAMPING / n
    } else {
        DAMPING / n
    }
}

/// Power-iterate the authority distribution to convergence, starting from
/// the uniform vector. Total mass stays 1 at every step because each row of
/// the transition model sums to 1.
///
/// If the iteration cap is hit first, the best current vector is returned
/// and a warning logged; the scores are then an approximation.
pub fn page_ranks(corpus: &Corpus) -> Result<RankVector> {
    let n = corpus.page_count();
    if n == 0 {
        bail!("cannot rank an empty corpus");
    }

    let ids: Vec<PageId> = corpus.pages.keys().copied().collect();
    let mut ranks = vec![1.0 / n as f64; n];
    let mut converged = false;

    for iteration in 0..MAX_ITERATIONS {
        let mut next = vec![0.0; n];
        for (j, &to) in ids.iter().enumerate() {
            next[j] = ids
                .iter()
                .enumerate()
                .map(|(k, &from)| transition_weight(corpus, from, to) * ranks[k])
                .sum();
        }
        let dist = euclidean_distance(&ranks, &next);
        ranks = next;
        if dist < CONVERGENCE_THRESHOLD {
            tracing::debug!(iterations = iteration + 1, "rank iteration converged");
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::warn!(
            max_iterations = MAX_ITERATIONS,
            "rank iteration capped before convergence; scores are approximate"
        );
    }

    Ok(ids.into_iter().zip(ranks).collect())
}

fn euclidean_distance(prev: &[f64], cur: &[f64]) -> f64 {
    prev.iter()
        .zip(cur)
        .map(|(p, c)| (p - c) * (p - c))
        .sum::<f64>()
        .sqrt()
}
