//! Sequence alignment with contractions and expansions
//!
//! Dynamic program over two sequences of region lengths. Every cell of the
//! `(|x|+1) x (|y|+1)` table keeps the cheapest way to reach it with one of the
//! six [`Move`]s; ties go to the move listed first in [`Move::ALL`]. The path is
//! then walked back from the far corner and returned in forward order.

use super::cost::{Distance, Move};

/// One step of an alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub movement: Move,
    /// Index of the first region consumed from each sequence.
    pub x_start: usize,
    pub y_start: usize,
    /// Cost of this step alone.
    pub cost: i64,
}

impl Alignment {
    /// Range of regions consumed from the first sequence.
    pub fn x_range(&self) -> std::ops::Range<usize> {
        self.x_start..self.x_start + self.movement.span().0
    }

    /// Range of regions consumed from the second sequence.
    pub fn y_range(&self) -> std::ops::Range<usize> {
        self.y_start..self.y_start + self.movement.span().1
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    distance: i64,
    via: Option<Move>,
}

/// Align the region lengths `x` and `y` under `distance`.
pub fn seq_align<D: Distance + ?Sized>(x: &[usize], y: &[usize], distance: &D) -> Vec<Alignment> {
    let cols = y.len() + 1;
    let mut table = vec![
        Cell {
            distance: 0,
            via: None,
        };
        (x.len() + 1) * cols
    ];

    for j in 0..=y.len() {
        for i in 0..=x.len() {
            let mut best: Option<(i64, Move)> = None;
            for movement in Move::ALL {
                let (di, dj) = movement.span();
                if i < di || j < dj {
                    continue;
                }
                let (pi, pj) = (i - di, j - dj);
                let candidate =
                    table[pi * cols + pj].distance + distance.cost(movement, &x[pi..i], &y[pj..j]);
                if best.map_or(true, |(d, _)| candidate < d) {
                    best = Some((candidate, movement));
                }
            }
            if let Some((d, movement)) = best {
                table[i * cols + j] = Cell {
                    distance: d,
                    via: Some(movement),
                };
            }
        }
    }

    let mut steps = Vec::new();
    let (mut i, mut j) = (x.len(), y.len());
    while let Some(movement) = table[i * cols + j].via {
        let (di, dj) = movement.span();
        let (pi, pj) = (i - di, j - dj);
        steps.push(Alignment {
            movement,
            x_start: pi,
            y_start: pj,
            cost: table[i * cols + j].distance - table[pi * cols + pj].distance,
        });
        i = pi;
        j = pj;
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::cost::GaleChurchCost;

    fn moves(steps: &[Alignment]) -> Vec<Move> {
        steps.iter().map(|s| s.movement).collect()
    }

    #[test]
    fn test_empty_sequences() {
        assert!(seq_align(&[], &[], &GaleChurchCost::default()).is_empty());
    }

    #[test]
    fn test_one_side_empty() {
        let steps = seq_align(&[12, 30], &[], &GaleChurchCost::default());
        assert_eq!(moves(&steps), vec![Move::Deletion, Move::Deletion]);
        let steps = seq_align(&[], &[7], &GaleChurchCost::default());
        assert_eq!(moves(&steps), vec![Move::Insertion]);
    }

    #[test]
    fn test_parallel_lengths_substitute() {
        let steps = seq_align(&[40, 80, 25], &[42, 78, 26], &GaleChurchCost::default());
        assert_eq!(
            moves(&steps),
            vec![Move::Substitution, Move::Substitution, Move::Substitution]
        );
        assert_eq!(steps[1].x_range(), 1..2);
        assert_eq!(steps[2].y_range(), 2..3);
    }

    #[test]
    fn test_split_sentence_is_expansion() {
        let steps = seq_align(&[100, 50], &[48, 52, 51], &GaleChurchCost::default());
        assert_eq!(moves(&steps), vec![Move::Expansion, Move::Substitution]);
        assert_eq!(steps[0].y_range(), 0..2);
        assert_eq!(steps[1].y_range(), 2..3);
    }

    #[test]
    fn test_step_costs_sum_to_total() {
        let cost = GaleChurchCost::default();
        let steps = seq_align(&[100, 50, 10], &[48, 52, 51, 30], &cost);
        let total: i64 = steps.iter().map(|s| s.cost).sum();
        let recomputed: i64 = steps
            .iter()
            .map(|s| {
                cost.cost(
                    s.movement,
                    &[100, 50, 10][s.x_range()],
                    &[48, 52, 51, 30][s.y_range()],
                )
            })
            .sum();
        assert_eq!(total, recomputed);
    }

    #[test]
    fn test_steps_cover_both_sequences() {
        let x = [5, 9, 14, 3, 22];
        let y = [11, 2, 30];
        let steps = seq_align(&x, &y, &GaleChurchCost::default());
        let (mut xi, mut yi) = (0, 0);
        for step in &steps {
            assert_eq!(step.x_start, xi);
            assert_eq!(step.y_start, yi);
            xi = step.x_range().end;
            yi = step.y_range().end;
        }
        assert_eq!((xi, yi), (x.len(), y.len()));
    }
}
