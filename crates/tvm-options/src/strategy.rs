//! Multi-leg option strategies.
//!
//! A [`Strategy`] is a named set of [`OptionLeg`]s whose payoffs add up. The
//! named constructors build the common textbook positions:
//!
//! | Strategy | Legs |
//! |----------|------|
//! | Long call / put | one long option |
//! | Straddle | long call + long put, same strike |
//! | Bull call spread | long call `K_low`, short call `K_high` |
//! | Bear put spread | long put `K_high`, short put `K_low` |
//! | Butterfly | long call `K1`, two short calls `K2`, long call `K3` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};
use crate::payoff::OptionLeg;

/// A named combination of option legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    name: String,
    legs: Vec<OptionLeg>,
}

impl Strategy {
    /// Creates a strategy from arbitrary legs.
    pub fn new(name: impl Into<String>, legs: Vec<OptionLeg>) -> OptionsResult<Self> {
        if legs.is_empty() {
            return Err(OptionsError::InvalidStrategy(
                "a strategy needs at least one leg".to_string(),
            ));
        }
        for leg in &legs {
            leg.validate()?;
        }
        Ok(Self {
            name: name.into(),
            legs,
        })
    }

    /// A single long call.
    pub fn long_call(strike: f64, premium: f64) -> OptionsResult<Self> {
        Self::new("Long call", vec![OptionLeg::call(strike, premium)])
    }

    /// A single long put.
    pub fn long_put(strike: f64, premium: f64) -> OptionsResult<Self> {
        Self::new("Long put", vec![OptionLeg::put(strike, premium)])
    }

    /// Long call and long put at the same strike.
    ///
    /// `premiums` is `[call, put]`.
    pub fn straddle(strike: f64, premiums: [f64; 2]) -> OptionsResult<Self> {
        Self::new(
            "Straddle",
            vec![
                OptionLeg::call(strike, premiums[0]),
                OptionLeg::put(strike, premiums[1]),
            ],
        )
    }

    /// Long call at the lower strike, short call at the higher one.
    pub fn bull_call_spread(strikes: [f64; 2], premiums: [f64; 2]) -> OptionsResult<Self> {
        ensure_increasing("bull call spread", &strikes)?;
        Self::new(
            "Bull spread",
            vec![
                OptionLeg::call(strikes[0], premiums[0]),
                OptionLeg::call(strikes[1], premiums[1]).with_quantity(-1.0),
            ],
        )
    }

    /// Long put at the higher strike, short put at the lower one.
    ///
    /// `strikes` is `[high, low]`.
    pub fn bear_put_spread(strikes: [f64; 2], premiums: [f64; 2]) -> OptionsResult<Self> {
        ensure_increasing("bear put spread", &[strikes[1], strikes[0]])?;
        Self::new(
            "Bear spread",
            vec![
                OptionLeg::put(strikes[0], premiums[0]),
                OptionLeg::put(strikes[1], premiums[1]).with_quantity(-1.0),
            ],
        )
    }

    /// Long `K1` call, two short `K2` calls, long `K3` call.
    pub fn butterfly(strikes: [f64; 3], premiums: [f64; 3]) -> OptionsResult<Self> {
        ensure_increasing("butterfly", &strikes)?;
        Self::new(
            "Butterfly spread",
            vec![
                OptionLeg::call(strikes[0], premiums[0]),
                OptionLeg::call(strikes[1], premiums[1]).with_quantity(-2.0),
                OptionLeg::call(strikes[2], premiums[2]),
            ],
        )
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The legs.
    pub fn legs(&self) -> &[OptionLeg] {
        &self.legs
    }

    /// Net premium paid to open the position (negative for a net credit).
    pub fn net_premium(&self) -> f64 {
        self.legs.iter().map(|leg| leg.quantity * leg.premium).sum()
    }

    /// Profit of the whole position at expiry.
    pub fn payoff(&self, spot: f64) -> f64 {
        self.legs.iter().map(|leg| leg.payoff(spot)).sum()
    }
}

fn ensure_increasing(name: &str, strikes: &[f64]) -> OptionsResult<()> {
    if strikes.windows(2).any(|w| w[0] >= w[1]) {
        return Err(OptionsError::InvalidStrategy(format!(
            "{} strikes out of order: {:?}",
            name, strikes
        )));
    }
    Ok(())
}

/// Strategy shapes that can be built from a list of strikes and premiums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// [`Strategy::long_call`]
    LongCall,
    /// [`Strategy::long_put`]
    LongPut,
    /// [`Strategy::straddle`]
    Straddle,
    /// [`Strategy::bull_call_spread`]
    BullCallSpread,
    /// [`Strategy::bear_put_spread`]
    BearPutSpread,
    /// [`Strategy::butterfly`]
    Butterfly,
}

impl StrategyKind {
    /// All kinds, in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::LongCall,
            Self::LongPut,
            Self::Straddle,
            Self::BullCallSpread,
            Self::BearPutSpread,
            Self::Butterfly,
        ]
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongCall => "long-call",
            Self::LongPut => "long-put",
            Self::Straddle => "straddle",
            Self::BullCallSpread => "bull-call-spread",
            Self::BearPutSpread => "bear-put-spread",
            Self::Butterfly => "butterfly",
        }
    }

    /// Number of strikes the shape takes.
    pub fn strike_count(self) -> usize {
        match self {
            Self::LongCall | Self::LongPut | Self::Straddle => 1,
            Self::BullCallSpread | Self::BearPutSpread => 2,
            Self::Butterfly => 3,
        }
    }

    /// Number of premiums the shape takes.
    pub fn premium_count(self) -> usize {
        match self {
            Self::LongCall | Self::LongPut => 1,
            Self::Straddle | Self::BullCallSpread | Self::BearPutSpread => 2,
            Self::Butterfly => 3,
        }
    }

    /// Builds the strategy.
    ///
    /// An empty `premiums` slice means zero premiums on every leg.
    pub fn build(self, strikes: &[f64], premiums: &[f64]) -> OptionsResult<Strategy> {
        if strikes.len() != self.strike_count() {
            return Err(OptionsError::InvalidStrategy(format!(
                "{} takes {} strike(s), got {}",
                self,
                self.strike_count(),
                strikes.len()
            )));
        }
        let premiums = if premiums.is_empty() {
            vec![0.0; self.premium_count()]
        } else if premiums.len() == self.premium_count() {
            premiums.to_vec()
        } else {
            return Err(OptionsError::InvalidStrategy(format!(
                "{} takes {} premium(s), got {}",
                self,
                self.premium_count(),
                premiums.len()
            )));
        };

        match self {
            Self::LongCall => Strategy::long_call(strikes[0], premiums[0]),
            Self::LongPut => Strategy::long_put(strikes[0], premiums[0]),
            Self::Straddle => Strategy::straddle(strikes[0], [premiums[0], premiums[1]]),
            Self::BullCallSpread => {
                Strategy::bull_call_spread([strikes[0], strikes[1]], [premiums[0], premiums[1]])
            }
            Self::BearPutSpread => {
                Strategy::bear_put_spread([strikes[0], strikes[1]], [premiums[0], premiums[1]])
            }
            Self::Butterfly => Strategy::butterfly(
                [strikes[0], strikes[1], strikes[2]],
                [premiums[0], premiums[1], premiums[2]],
            ),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| OptionsError::InvalidStrategy(format!("unknown strategy: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::{call_payoff, put_payoff};

    #[test]
    fn test_straddle_is_call_plus_put() {
        let straddle = Strategy::straddle(5.0, [1.0, 1.0]).unwrap();

        for spot in [0.0, 2.5, 5.0, 7.5, 9.9] {
            let expected = call_payoff(spot, 5.0, 1.0) + put_payoff(spot, 5.0, 1.0);
            assert_eq!(straddle.payoff(spot), expected);
        }
        assert_eq!(straddle.payoff(5.0), -2.0);
    }

    #[test]
    fn test_butterfly_shape() {
        let fly = Strategy::butterfly([30.0, 35.0, 40.0], [0.0; 3]).unwrap();

        assert_eq!(fly.payoff(20.0), 0.0);
        assert_eq!(fly.payoff(32.5), 2.5);
        assert_eq!(fly.payoff(35.0), 5.0);
        assert_eq!(fly.payoff(37.5), 2.5);
        assert_eq!(fly.payoff(60.0), 0.0);
    }

    #[test]
    fn test_butterfly_with_premiums() {
        let fly = Strategy::butterfly([45.0, 50.0, 55.0], [4.0, 6.0, 9.0]).unwrap();

        assert_eq!(fly.net_premium(), 1.0);
        assert_eq!(fly.payoff(10.0), -1.0);
        assert_eq!(fly.payoff(50.0), 4.0);
        assert_eq!(fly.payoff(70.0), -1.0);
    }

    #[test]
    fn test_bull_call_spread() {
        let bull = Strategy::bull_call_spread([30.0, 35.0], [0.0, 0.0]).unwrap();

        assert_eq!(bull.payoff(25.0), 0.0);
        assert_eq!(bull.payoff(33.0), 3.0);
        assert_eq!(bull.payoff(50.0), 5.0);
    }

    #[test]
    fn test_bear_put_spread() {
        let bear = Strategy::bear_put_spread([20.0, 15.0], [0.0, 0.0]).unwrap();

        assert_eq!(bear.payoff(10.0), 5.0);
        assert_eq!(bear.payoff(18.0), 2.0);
        assert_eq!(bear.payoff(25.0), 0.0);
    }

    #[test]
    fn test_strikes_out_of_order() {
        assert!(matches!(
            Strategy::butterfly([40.0, 35.0, 30.0], [0.0; 3]),
            Err(OptionsError::InvalidStrategy(_))
        ));
        assert!(Strategy::bull_call_spread([35.0, 30.0], [0.0; 2]).is_err());
        assert!(Strategy::bear_put_spread([15.0, 20.0], [0.0; 2]).is_err());
    }

    #[test]
    fn test_empty_strategy() {
        assert!(Strategy::new("Nothing", Vec::new()).is_err());
    }

    #[test]
    fn test_kind_build() {
        let fly = StrategyKind::Butterfly
            .build(&[30.0, 35.0, 40.0], &[])
            .unwrap();
        assert_eq!(fly.legs().len(), 3);
        assert_eq!(fly.name(), "Butterfly spread");

        assert!(StrategyKind::Straddle.build(&[5.0, 6.0], &[]).is_err());
        assert!(StrategyKind::LongCall.build(&[5.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            "bull_call_spread".parse::<StrategyKind>().unwrap(),
            StrategyKind::BullCallSpread
        );
        assert_eq!("Butterfly".parse::<StrategyKind>().unwrap(), StrategyKind::Butterfly);
        assert!("iron-condor".parse::<StrategyKind>().is_err());
    }
}
