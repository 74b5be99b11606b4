//! No-vig probability derivation
//!
//! Implied probability of American odds:
//! - underdog (+odds): 100 / (odds + 100)
//! - favorite (-odds): |odds| / (|odds| + 100)
//!
//! A two-way market's implied probabilities sum to more than 1; the excess is
//! the bookmaker's margin. Dividing each side by the sum keeps their ratio and
//! brings the total back to 100%.

use super::{OddsError, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Implied probability (0-1) of a single American odds price
pub fn implied_probability(odds: i32) -> Result<Decimal, OddsError> {
    let hundred = dec!(100);
    match odds {
        0 => Err(OddsError::ZeroOdds),
        o if o > 0 => Ok(hundred / (Decimal::from(o) + hundred)),
        o => {
            let abs = Decimal::from(o).abs();
            Ok(abs / (abs + hundred))
        }
    }
}

/// True win probabilities for both sides of an over/under, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoVig {
    /// Over probability (0-100)
    pub over: Decimal,
    /// Under probability (0-100)
    pub under: Decimal,
    /// Bookmaker margin: sum of implied probabilities minus 100, in percent
    pub overround: Decimal,
}

impl NoVig {
    /// Side with the higher true probability; an exact tie goes to UNDER
    pub fn favored(&self) -> Side {
        if self.over > self.under {
            Side::Over
        } else {
            Side::Under
        }
    }

    /// Probability of the given side
    pub fn probability(&self, side: Side) -> Decimal {
        match side {
            Side::Over => self.over,
            Side::Under => self.under,
        }
    }

    /// Probability of the favored side
    pub fn best_probability(&self) -> Decimal {
        self.probability(self.favored())
    }
}

/// Remove the vig from an over/under price pair
pub fn remove_vig(over_odds: i32, under_odds: i32) -> Result<NoVig, OddsError> {
    let over_implied = implied_probability(over_odds)?;
    let under_implied = implied_probability(under_odds)?;
    let total = over_implied + under_implied;

    Ok(NoVig {
        over: over_implied / total * dec!(100),
        under: under_implied / total * dec!(100),
        overround: (total - Decimal::ONE) * dec!(100),
    })
}
