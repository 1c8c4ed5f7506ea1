//! Closure engine - derive new conversions by composing known ones
//!
//! One derivation step composes two cached edges A -> B and B -> C
//! into A -> C. The scan order is fixed (registry declaration order,
//! then store insertion order) so repeated runs over an unchanged
//! store always find edges in the same order. That matters: different
//! graph paths between the same units can compose to slightly
//! different factors, and the engine commits to the first path found,
//! never overwriting a cached edge.

use tracing::debug;
use unitspan_core::{ConvertError, UnitId};

use crate::registry::UnitRegistry;
use crate::store::ConversionStore;

/// Derive and cache one new conversion, if any remains derivable
///
/// Returns `Ok(true)` when an edge (and its inverse) was inserted,
/// `Ok(false)` when the store is at a fixpoint. A composed factor
/// that overflows or underflows out of the valid range surfaces as
/// `InvalidMultiplier`.
pub(crate) fn derive_one(
    registry: &UnitRegistry,
    store: &mut ConversionStore,
) -> Result<bool, ConvertError> {
    let Some((a, b, c, factor)) = find_candidate(registry, store) else {
        return Ok(false);
    };

    store.put(registry, a, c, factor)?;
    debug!(
        source = registry.name(a),
        via = registry.name(b),
        target = registry.name(c),
        factor,
        "derived conversion"
    );
    Ok(true)
}

/// Run `derive_one` to a fixpoint
///
/// Terminates because each productive step grows the store and the
/// edge count is bounded by units squared. Worst case rescans the
/// whole store per step; this is a diagnostic and test mode, not the
/// query path.
pub(crate) fn saturate(
    registry: &UnitRegistry,
    store: &mut ConversionStore,
) -> Result<(), ConvertError> {
    while derive_one(registry, store)? {}
    Ok(())
}

/// First (A, B, C) with A -> B and B -> C cached, A != C, A -> C absent
///
/// Returns the triple along with the composed factor A -> C.
fn find_candidate(
    registry: &UnitRegistry,
    store: &ConversionStore,
) -> Option<(UnitId, UnitId, UnitId, f64)> {
    for a in registry.ids() {
        for &b in store.neighbors(a) {
            let Some(ab) = store.get(a, b) else { continue };
            for &c in store.neighbors(b) {
                if a == c || store.contains(a, c) {
                    continue;
                }
                let Some(bc) = store.get(b, c) else { continue };
                return Some((a, b, c, ab.factor * bc.factor));
            }
        }
    }
    None
}
