//! Market reference data
//!
//! Maps platform stat vocabularies onto sportsbook markets and ranks the
//! sportsbooks used as the pricing reference.

mod books;
mod stats;

pub use books::SharpBooks;
pub use stats::StatMarketMap;
