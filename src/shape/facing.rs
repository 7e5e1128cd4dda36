use crate::math::{Int, Vector};

/// One of the four cardinal directions of the pixel grid.
///
/// For a portal, the facing is the direction a body travels along to enter it. For the edges
/// of a box, it names the side whose outward normal points that way.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Towards negative `y`.
    Up,
    /// Towards positive `y`.
    Down,
    /// Towards negative `x`.
    Left,
    /// Towards positive `x`.
    Right,
}

impl Facing {
    /// All four facings.
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// The facing pointing the other way.
    #[inline]
    pub fn opposite(self) -> Facing {
        match self {
            Facing::Up => Facing::Down,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Is a portal with this facing lying along a horizontal line?
    ///
    /// This is the case for `Up` and `Down`, which are crossed by moving vertically.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Facing::Up | Facing::Down)
    }

    /// The coordinate axis this facing points along: `0` for `x`, `1` for `y`.
    #[inline]
    pub fn axis(self) -> usize {
        if self.is_horizontal() {
            1
        } else {
            0
        }
    }

    /// `1` if this facing points towards increasing coordinates, `-1` otherwise.
    #[inline]
    pub fn sign(self) -> Int {
        match self {
            Facing::Down | Facing::Right => 1,
            Facing::Up | Facing::Left => -1,
        }
    }

    /// The unit vector of this facing.
    #[inline]
    pub fn direction(self) -> Vector {
        let mut dir = Vector::zeros();
        dir[self.axis()] = self.sign();
        dir
    }

    /// The facing of a unit axis-aligned vector, if it is one.
    pub fn from_direction(dir: &Vector) -> Option<Facing> {
        match (dir.x, dir.y) {
            (0, -1) => Some(Facing::Up),
            (0, 1) => Some(Facing::Down),
            (-1, 0) => Some(Facing::Left),
            (1, 0) => Some(Facing::Right),
            _ => None,
        }
    }
}
