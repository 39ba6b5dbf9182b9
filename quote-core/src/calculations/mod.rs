//! Quote calculation for vehicle graphics.
//!
//! [`PricingEngine`] turns a complete selection into a [`QuoteCalculation`];
//! [`SelectionState`] tracks what has been chosen so far.
//!
//! [`QuoteCalculation`]: crate::models::QuoteCalculation

pub mod common;
pub mod pricing;
pub mod selection;

pub use pricing::{PricingEngine, compute_quote};
pub use selection::{CompleteSelection, SelectionState};
