use crate::math::Matrix;
use crate::shape::Facing;
use arrayvec::ArrayVec;

/// The edges of a [`SlicedCollider`](crate::shape::SlicedCollider) that were produced by a
/// portal cut.
///
/// A cut edge lies on a portal line: there is no material behind it, so it can neither
/// support nor push riders.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CutFlags(u8);

bitflags::bitflags! {
    impl CutFlags: u8 {
        /// The top edge (smallest `y`) was produced by a cut.
        const TOP = 1 << 0;
        /// The right edge (largest `x`) was produced by a cut.
        const RIGHT = 1 << 1;
        /// The bottom edge (largest `y`) was produced by a cut.
        const BOTTOM = 1 << 2;
        /// The left edge (smallest `x`) was produced by a cut.
        const LEFT = 1 << 3;
    }
}

impl CutFlags {
    /// The flag of the edge whose outward normal points towards `side`.
    #[inline]
    pub fn from_side(side: Facing) -> CutFlags {
        match side {
            Facing::Up => CutFlags::TOP,
            Facing::Down => CutFlags::BOTTOM,
            Facing::Left => CutFlags::LEFT,
            Facing::Right => CutFlags::RIGHT,
        }
    }

    /// Is the edge on `side` a cut edge?
    #[inline]
    pub fn is_cut(self, side: Facing) -> bool {
        self.contains(CutFlags::from_side(side))
    }

    /// The sides of all the cut edges.
    pub fn sides(self) -> ArrayVec<Facing, 4> {
        Facing::ALL
            .into_iter()
            .filter(|side| self.is_cut(*side))
            .collect()
    }

    /// Remaps every flag through the rotation/reflection `m`, so they keep naming the same
    /// physical edges once the box itself is transformed by `m`.
    pub fn transformed(self, m: &Matrix) -> CutFlags {
        let mut result = CutFlags::empty();

        for side in self.sides() {
            if let Some(new_side) = Facing::from_direction(&(m * side.direction())) {
                result |= CutFlags::from_side(new_side);
            }
        }

        result
    }
}
