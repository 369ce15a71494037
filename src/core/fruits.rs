//! Static merge-progression table.
//!
//! Ranks are ordered smallest to largest; merging two fruits of rank `n`
//! yields one fruit of rank `n + 1`. The last entry has no successor.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Immutable per-rank data: collider radius, points awarded when a merge
/// produces this rank, display glyph and fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankDefinition {
    pub index: usize,
    pub name: &'static str,
    pub glyph: &'static str,
    pub radius: f32,
    pub score: u32,
    /// sRGB fill color.
    pub rgb: [u8; 3],
}

impl RankDefinition {
    pub fn color(&self) -> Color {
        Color::srgb_u8(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

pub const FRUITS: [RankDefinition; 8] = [
    RankDefinition { index: 0, name: "Cherry", glyph: "🍒", radius: 30.0, score: 10, rgb: [0xdc, 0x26, 0x26] },
    RankDefinition { index: 1, name: "Strawberry", glyph: "🍓", radius: 36.0, score: 20, rgb: [0xf9, 0x73, 0x16] },
    RankDefinition { index: 2, name: "Grape", glyph: "🍇", radius: 44.0, score: 40, rgb: [0x7c, 0x3a, 0xed] },
    RankDefinition { index: 3, name: "Pear", glyph: "🍐", radius: 52.0, score: 80, rgb: [0x16, 0xa3, 0x4a] },
    RankDefinition { index: 4, name: "Orange", glyph: "🍊", radius: 60.0, score: 160, rgb: [0xea, 0x58, 0x0c] },
    RankDefinition { index: 5, name: "Melon", glyph: "🍈", radius: 70.0, score: 320, rgb: [0x16, 0xa3, 0x4a] },
    RankDefinition { index: 6, name: "Pineapple", glyph: "🍍", radius: 80.0, score: 640, rgb: [0xea, 0xb3, 0x08] },
    RankDefinition { index: 7, name: "Watermelon", glyph: "🍉", radius: 100.0, score: 1280, rgb: [0xdc, 0x26, 0x26] },
];

/// Number of low ranks the next-fruit roll draws from.
pub const STARTER_RANKS: usize = 3;

/// Position in [`FRUITS`]. Always a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Rank(u8);

impl Rank {
    pub const SMALLEST: Rank = Rank(0);
    pub const HIGHEST: Rank = Rank(FRUITS.len() as u8 - 1);

    pub fn new(index: usize) -> Option<Self> {
        (index < FRUITS.len()).then_some(Rank(index as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn definition(self) -> &'static RankDefinition {
        &FRUITS[self.index()]
    }

    #[inline]
    pub fn radius(self) -> f32 {
        self.definition().radius
    }

    pub fn is_highest(self) -> bool {
        self == Self::HIGHEST
    }

    /// Rank produced by merging two fruits of this rank.
    pub fn next(self) -> Option<Self> {
        Self::new(self.index() + 1)
    }

    /// Uniform draw from the [`STARTER_RANKS`] lowest ranks.
    pub fn random_starter(rng: &mut impl Rng) -> Self {
        Rank(rng.gen_range(0..STARTER_RANKS) as u8)
    }
}

impl TryFrom<usize> for Rank {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} out of range 0..{}", FRUITS.len()))
    }
}

impl From<Rank> for usize {
    fn from(rank: Rank) -> Self {
        rank.index()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.definition().name, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn table_is_ordered_and_indexed() {
        for (i, def) in FRUITS.iter().enumerate() {
            assert_eq!(def.index, i);
        }
        for pair in FRUITS.windows(2) {
            assert!(pair[0].radius < pair[1].radius);
            assert_eq!(pair[0].score * 2, pair[1].score);
        }
    }

    #[test]
    fn highest_rank_has_no_successor() {
        assert_eq!(Rank::HIGHEST.index(), 7);
        assert!(Rank::HIGHEST.is_highest());
        assert_eq!(Rank::HIGHEST.next(), None);
        assert_eq!(Rank::SMALLEST.next(), Rank::new(1));
        assert!(Rank::new(8).is_none());
    }

    #[test]
    fn starter_roll_stays_in_low_ranks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; STARTER_RANKS];
        for _ in 0..500 {
            let r = Rank::random_starter(&mut rng);
            assert!(r.index() < STARTER_RANKS);
            seen[r.index()] = true;
        }
        assert!(seen.iter().all(|s| *s), "all starter ranks should appear");
    }

    #[test]
    fn rank_deserializes_from_index() {
        let r: Rank = ron::from_str("2").unwrap();
        assert_eq!(r.definition().name, "Grape");
        assert!(ron::from_str::<Rank>("9").is_err());
    }
}
