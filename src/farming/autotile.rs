//! Tilled-soil art selection from the four orthogonal neighbours.
//!
//! Names follow the soil sheet: the letters list the edges that are *open*
//! (drawn with a border), so a lone tile is `o` and a tile with tilled soil
//! only on its left shows its right border, `r`.

use crate::shared::TileVariant;

/// Which of the eight surrounding cells are tilled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

/// Pick the sprite for a tilled cell. Rules are evaluated in order and a
/// later match replaces an earlier one.
pub fn classify(n: Neighbours) -> TileVariant {
    let Neighbours {
        top: t,
        bottom: b,
        left: l,
        right: r,
        ..
    } = n;

    let mut variant = TileVariant::O;

    if t && b && l && r {
        variant = TileVariant::X;
    }

    // horizontal only
    if l && !(t || b || r) {
        variant = TileVariant::R;
    }
    if r && !(t || b || l) {
        variant = TileVariant::L;
    }
    if l && r && !(t || b) {
        variant = TileVariant::LR;
    }

    // vertical only
    if t && !(b || l || r) {
        variant = TileVariant::B;
    }
    if b && !(t || l || r) {
        variant = TileVariant::T;
    }
    if t && b && !(l || r) {
        variant = TileVariant::TB;
    }

    // corners
    if t && l && !(b || r) {
        variant = TileVariant::BR;
    }
    if t && r && !(b || l) {
        variant = TileVariant::BL;
    }
    if b && l && !(t || r) {
        variant = TileVariant::TR;
    }
    if b && r && !(t || l) {
        variant = TileVariant::TL;
    }

    // three-sided
    if t && b && r && !l {
        variant = TileVariant::TBR;
    }
    if t && b && l && !r {
        variant = TileVariant::TBL;
    }
    if t && l && r && !b {
        variant = TileVariant::TLR;
    }
    if b && l && r && !t {
        variant = TileVariant::BLR;
    }

    // three-sided middles, told apart by a diagonal on the closed side
    if l && r && b && !t && (n.bottom_left || n.bottom_right) {
        variant = TileVariant::TM;
    }
    if l && r && t && !b && (n.top_left || n.top_right) {
        variant = TileVariant::BM;
    }
    if t && r && b && !l && (n.top_right || n.bottom_right) {
        variant = TileVariant::LM;
    }
    if t && l && b && !r && (n.top_left || n.bottom_left) {
        variant = TileVariant::RM;
    }

    variant
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(t: bool, b: bool, l: bool, r: bool) -> Neighbours {
        Neighbours {
            top: t,
            bottom: b,
            left: l,
            right: r,
            ..Default::default()
        }
    }

    #[test]
    fn isolated_tile_is_o() {
        assert_eq!(classify(Neighbours::default()), TileVariant::O);
    }

    #[test]
    fn surrounded_tile_is_x() {
        assert_eq!(classify(sides(true, true, true, true)), TileVariant::X);
    }

    #[test]
    fn single_neighbour_opens_the_far_edge() {
        assert_eq!(classify(sides(false, false, true, false)), TileVariant::R);
        assert_eq!(classify(sides(false, false, false, true)), TileVariant::L);
        assert_eq!(classify(sides(true, false, false, false)), TileVariant::B);
        assert_eq!(classify(sides(false, true, false, false)), TileVariant::T);
    }

    #[test]
    fn straight_runs() {
        assert_eq!(classify(sides(false, false, true, true)), TileVariant::LR);
        assert_eq!(classify(sides(true, true, false, false)), TileVariant::TB);
    }

    #[test]
    fn corners() {
        assert_eq!(classify(sides(true, false, true, false)), TileVariant::BR);
        assert_eq!(classify(sides(true, false, false, true)), TileVariant::BL);
        assert_eq!(classify(sides(false, true, true, false)), TileVariant::TR);
        assert_eq!(classify(sides(false, true, false, true)), TileVariant::TL);
    }

    #[test]
    fn three_sided_without_diagonals() {
        assert_eq!(classify(sides(true, true, false, true)), TileVariant::TBR);
        assert_eq!(classify(sides(true, true, true, false)), TileVariant::TBL);
        assert_eq!(classify(sides(true, false, true, true)), TileVariant::TLR);
        assert_eq!(classify(sides(false, true, true, true)), TileVariant::BLR);
    }

    #[test]
    fn diagonal_turns_three_sided_into_middle() {
        let mut n = sides(false, true, true, true);
        n.bottom_left = true;
        assert_eq!(classify(n), TileVariant::TM);

        let mut n = sides(true, false, true, true);
        n.top_right = true;
        assert_eq!(classify(n), TileVariant::BM);

        let mut n = sides(true, true, false, true);
        n.bottom_right = true;
        assert_eq!(classify(n), TileVariant::LM);

        let mut n = sides(true, true, true, false);
        n.top_left = true;
        assert_eq!(classify(n), TileVariant::RM);
    }

    #[test]
    fn diagonal_on_the_open_side_is_ignored() {
        let mut n = sides(false, true, true, true);
        n.top_left = true;
        n.top_right = true;
        assert_eq!(classify(n), TileVariant::BLR);
    }

    #[test]
    fn every_variant_has_a_distinct_name() {
        let mut names: Vec<_> = TileVariant::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }
}
