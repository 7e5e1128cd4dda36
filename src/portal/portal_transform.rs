use crate::math::{Int, Matrix};
use crate::shape::Facing;

/// The symmetry classes of ordered pairs of portal facings.
///
/// Each class is carried through by a single rotation/reflection matrix, see
/// [`portal_transform`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FacingPairClass {
    /// `Up`/`Down` or `Down`/`Up`.
    OppositeHorizontal,
    /// `Left`/`Right` or `Right`/`Left`.
    OppositeVertical,
    /// Both `Up` or both `Down`.
    SameHorizontal,
    /// Both `Left` or both `Right`.
    SameVertical,
    /// Perpendicular facings carried through by a reflection across the main diagonal.
    PerpendicularTranspose,
    /// Perpendicular facings carried through by a reflection across the anti-diagonal.
    PerpendicularAntiTranspose,
}

// Row-major entries of the matrix of each class, in declaration order.
const CLASS_TRANSFORMS: [[Int; 4]; 6] = [
    [1, 0, 0, 1],
    [1, 0, 0, 1],
    [1, 0, 0, -1],
    [-1, 0, 0, 1],
    [0, 1, 1, 0],
    [0, -1, -1, 0],
];

impl FacingPairClass {
    /// The class of the ordered facing pair `(a, b)`.
    pub fn of(a: Facing, b: Facing) -> FacingPairClass {
        if a == b {
            if a.is_horizontal() {
                FacingPairClass::SameHorizontal
            } else {
                FacingPairClass::SameVertical
            }
        } else if a == b.opposite() {
            if a.is_horizontal() {
                FacingPairClass::OppositeHorizontal
            } else {
                FacingPairClass::OppositeVertical
            }
        } else {
            let entry = a.direction();
            let exit = -b.direction();
            if entry.x == exit.y && entry.y == exit.x {
                FacingPairClass::PerpendicularTranspose
            } else {
                FacingPairClass::PerpendicularAntiTranspose
            }
        }
    }

    /// The position of this class in the transform table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The matrix carrying a body through a portal pair of this class.
    #[inline]
    pub fn transform(self) -> Matrix {
        let [m11, m12, m21, m22] = CLASS_TRANSFORMS[self.index()];
        Matrix::new(m11, m12, m21, m22)
    }
}

/// The rotation/reflection carrying a body entering a portal facing `a` out of its partner
/// facing `b`.
///
/// The result maps the entry direction `a.direction()` onto the exit direction
/// `-b.direction()`:
/// - opposite facings pass straight through (identity),
/// - identical facings mirror across the portal line,
/// - perpendicular facings rotate by ±90° and mirror, which amounts to a reflection across
///   one of the diagonals.
///
/// # Example
///
/// ```rust
/// use portalslice2d::math::Matrix;
/// use portalslice2d::portal::portal_transform;
/// use portalslice2d::shape::Facing;
///
/// assert_eq!(portal_transform(Facing::Right, Facing::Left), Matrix::identity());
/// assert_eq!(portal_transform(Facing::Right, Facing::Right), Matrix::new(-1, 0, 0, 1));
/// assert_eq!(
///     portal_transform(Facing::Right, Facing::Up) * Facing::Right.direction(),
///     -Facing::Up.direction()
/// );
/// ```
#[inline]
pub fn portal_transform(a: Facing, b: Facing) -> Matrix {
    FacingPairClass::of(a, b).transform()
}
