//! Fragment chaining.
//!
//! The upstream geometry endpoint returns a route's polyline fragments
//! in arbitrary order. This module reassembles them into maximal chains
//! by greedy endpoint matching: fragment `B` attaches after fragment `A`
//! when `first(A) == last(B)`, so a finished chain reads in reverse
//! traversal order (the normalizer undoes this).
//!
//! Matching is by exact point equality. Endpoints that drift by any
//! amount never match; such fragments simply terminate their chain and
//! seed a new one.

use crate::domain::Fragment;

/// Reassemble fragments into maximal chains, one `Vec` per chain.
///
/// The pool is a fixed arena scanned by index; consumed fragments are
/// marked by taking them out of their slot, so no collection is mutated
/// mid-iteration.
///
/// Each chain starts from the first still-available fragment in input
/// order. The chain is then grown element by element: for the fragment
/// at position `i`, the pool is scanned (in input order, first match
/// wins) for a fragment whose last point equals that fragment's first
/// point; a match is appended to the chain's end and the scan moves on
/// to position `i + 1`. The chain is finished when the scan runs off its
/// end.
///
/// Every input fragment appears in exactly one chain: unmatched
/// endpoints are not an error, they just bound a chain. With degree-2
/// endpoints (a simple loop) the result is a single chain regardless of
/// the input permutation.
pub fn chains(fragments: Vec<Fragment>) -> Vec<Vec<Fragment>> {
    let mut pool: Vec<Option<Fragment>> = fragments.into_iter().map(Some).collect();
    let mut result = Vec::new();

    for seed in 0..pool.len() {
        let Some(fragment) = pool[seed].take() else {
            continue;
        };

        let mut chain = vec![fragment];
        let mut i = 0;
        while i < chain.len() {
            let head = chain[i].first();
            let matched = pool
                .iter()
                .position(|slot| slot.as_ref().is_some_and(|f| f.last() == head));
            if let Some(j) = matched
                && let Some(next) = pool[j].take()
            {
                chain.push(next);
            }
            i += 1;
        }
        result.push(chain);
    }

    result
}

/// Reassemble fragments and concatenate the chains in discovery order.
///
/// This is the behavior the rest of the pipeline consumes. Note that
/// chain boundaries are *not* marked in the output: an input encoding
/// more than one disjoint loop comes back as one flat sequence, and the
/// downstream loop closure will silently treat it as a single loop.
/// Callers that need to reject multi-loop input should use [`chains`]
/// and check the chain count.
pub fn chain_fragments(fragments: Vec<Fragment>) -> Vec<Fragment> {
    chains(fragments).into_iter().flatten().collect()
}
