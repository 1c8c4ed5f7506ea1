//! unitspan - a conversion-graph engine
//!
//! Derives and caches multiplicative conversion factors between
//! measurement units. Only some unit pairs have a directly-known
//! factor; the rest are derived by composing known conversions
//! transitively along graph paths.
//!
//! The pieces, leaves first:
//! - [`UnitRegistry`] - the fixed set of unit names, interned at
//!   construction.
//! - [`ConversionStore`] - the cache of known conversions, always
//!   holding each edge together with its algebraic inverse.
//! - `closure` - single-step derivation and the fixpoint driver,
//!   reached through the converter.
//! - [`UnitConverter`] - the lazy query facade and completeness
//!   check; the type callers use.
//! - [`table`] / [`parse`] - diagnostic rendering and the
//!   definition-file boundary.
//!
//! Queries are lazy by design: most callers need a handful of pairs,
//! so the store is enriched one derivation step at a time instead of
//! precomputing the full closure up front.

mod closure;
mod converter;
pub mod parse;
mod registry;
mod store;
pub mod table;

pub use converter::UnitConverter;
pub use registry::UnitRegistry;
pub use store::ConversionStore;
pub use unitspan_core::{Conversion, ConvertError, UnitId};
