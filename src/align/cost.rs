//! Gale-Church length-based cost model
//!
//!     The cost of pairing two stretches of text is `-100 * log P(match)`, where the
//!     probability comes from assuming the length difference (scaled by the expected
//!     length ratio) is normally distributed. Unbalanced shapes (one region against
//!     nothing, two against one, two against two) pay a fixed penalty on top.

use crate::config::CostConfig;

/// The six ways regions can be paired in one alignment step.
///
/// The declaration order is also the tie-break order of the aligner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// 1-1
    Substitution,
    /// 1-0
    Deletion,
    /// 0-1
    Insertion,
    /// 2-1
    Contraction,
    /// 1-2
    Expansion,
    /// 2-2
    Melding,
}

impl Move {
    pub const ALL: [Move; 6] = [
        Move::Substitution,
        Move::Deletion,
        Move::Insertion,
        Move::Contraction,
        Move::Expansion,
        Move::Melding,
    ];

    /// Regions consumed from the first and second sequence.
    pub fn span(self) -> (usize, usize) {
        match self {
            Move::Substitution => (1, 1),
            Move::Deletion => (1, 0),
            Move::Insertion => (0, 1),
            Move::Contraction => (2, 1),
            Move::Expansion => (1, 2),
            Move::Melding => (2, 2),
        }
    }
}

/// Scores alignment steps from region lengths.
pub trait Distance {
    /// Cost of applying `movement` to the regions of length `xs` and `ys`.
    ///
    /// `xs` and `ys` hold exactly as many lengths as [`Move::span`] names.
    fn cost(&self, movement: Move, xs: &[usize], ys: &[usize]) -> i64;
}

/// Area under the standard normal curve from -inf to `z` (Abramowitz & Stegun 26.2.17).
pub fn pnorm(z: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.2316419 * z);
    1.0 - 0.3989423
        * (-z * z / 2.0).exp()
        * ((((1.330274429 * t - 1.821255978) * t + 1.781477937) * t - 0.356563782) * t
            + 0.319381530)
        * t
}

/// The two-sided Gale-Church distance.
#[derive(Debug, Clone, PartialEq)]
pub struct GaleChurchCost {
    params: CostConfig,
}

impl GaleChurchCost {
    pub fn new(params: CostConfig) -> Self {
        Self { params }
    }

    /// `-100 * log` of the probability that texts of `len1` and `len2` are translations.
    pub fn match_cost(&self, len1: usize, len2: usize) -> i64 {
        if len1 == 0 && len2 == 0 {
            return 0;
        }
        let c = self.params.chars_per_char;
        let (len1, len2) = (len1 as f64, len2 as f64);
        let mean = (len1 + len2 / c) / 2.0;
        let z = ((c * len1 - len2) / (self.params.variance_per_char * mean).sqrt()).abs();
        let pd = 2.0 * (1.0 - pnorm(z));
        if pd > 0.0 {
            (-100.0 * pd.ln()) as i64
        } else {
            self.params.big_distance
        }
    }
}

impl Default for GaleChurchCost {
    fn default() -> Self {
        Self::new(CostConfig::default())
    }
}

impl Distance for GaleChurchCost {
    fn cost(&self, movement: Move, xs: &[usize], ys: &[usize]) -> i64 {
        let x: usize = xs.iter().sum();
        let y: usize = ys.iter().sum();
        let penalty = match movement {
            Move::Substitution => 0,
            Move::Deletion | Move::Insertion => self.params.penalty_0_1,
            Move::Contraction | Move::Expansion => self.params.penalty_2_1,
            Move::Melding => self.params.penalty_2_2,
        };
        self.match_cost(x, y) + penalty
    }
}
