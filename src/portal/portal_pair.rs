use crate::math::Int;
use crate::portal::{PortalDesc, SinglePortal};

/// Identifies one of the two ends of a [`PortalPair`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PortalEnd {
    /// The first portal of the pair.
    A,
    /// The second portal of the pair.
    B,
}

impl PortalEnd {
    /// The other end of the pair.
    #[inline]
    pub fn other(self) -> PortalEnd {
        match self {
            PortalEnd::A => PortalEnd::B,
            PortalEnd::B => PortalEnd::A,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            PortalEnd::A => 0,
            PortalEnd::B => 1,
        }
    }
}

/// Indicates inconsistent portal data while building a [`PortalPair`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PortalPairError {
    /// A portal must span at least one pixel.
    #[error("the portal {end:?} has a non-positive length ({length}).")]
    NonPositiveLength {
        /// The offending end.
        end: PortalEnd,
        /// Its length.
        length: Int,
    },
    /// A portal must be at least one pixel thick.
    #[error("the portal {end:?} has a non-positive thickness ({thickness}).")]
    NonPositiveThickness {
        /// The offending end.
        end: PortalEnd,
        /// Its thickness.
        thickness: Int,
    },
    /// Linked portals must have the same length, otherwise pieces would not fit through.
    #[error("linked portals have different lengths ({a} and {b}).")]
    LengthMismatch {
        /// The length of portal `A`.
        a: Int,
        /// The length of portal `B`.
        b: Int,
    },
}

/// Two linked portals.
///
/// Both ends are built together and the transforms from each end to the other are computed
/// once, at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PortalPair {
    portals: [SinglePortal; 2],
}

impl PortalPair {
    /// Links the portals described by `a` and `b`.
    pub fn new(a: PortalDesc, b: PortalDesc) -> Result<Self, PortalPairError> {
        for (end, desc) in [(PortalEnd::A, &a), (PortalEnd::B, &b)] {
            if desc.length <= 0 {
                return Err(PortalPairError::NonPositiveLength {
                    end,
                    length: desc.length,
                });
            }

            if desc.thickness <= 0 {
                return Err(PortalPairError::NonPositiveThickness {
                    end,
                    thickness: desc.thickness,
                });
            }
        }

        if a.length != b.length {
            return Err(PortalPairError::LengthMismatch {
                a: a.length,
                b: b.length,
            });
        }

        Ok(PortalPair {
            portals: [
                SinglePortal::new(&a, b.facing),
                SinglePortal::new(&b, a.facing),
            ],
        })
    }

    /// The portal at the given end.
    #[inline]
    pub fn portal(&self, end: PortalEnd) -> &SinglePortal {
        &self.portals[end.index()]
    }

    /// The portal linked to the one at the given end.
    #[inline]
    pub fn partner(&self, end: PortalEnd) -> &SinglePortal {
        self.portal(end.other())
    }
}
