use crate::bounding_volume::Aabb;
use crate::math::{Point, RealVector};
use crate::portal::{PortalEnd, PortalPair, SinglePortal};
use crate::shape::SlicedCollider;

/// Identifies a single portal within a [`PortalSet`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PortalId {
    /// The index of the pair in the set.
    pub pair: usize,
    /// The end of the pair.
    pub end: PortalEnd,
}

/// The portals of a scene.
///
/// Portals are enumerated pair by pair, end `A` before end `B`. When several portals could
/// cut the same piece, this order decides which one does.
#[derive(Clone, Debug, Default)]
pub struct PortalSet {
    pairs: Vec<PortalPair>,
}

impl PortalSet {
    /// An empty set.
    pub fn new() -> Self {
        PortalSet { pairs: Vec::new() }
    }

    /// Adds a pair to this set and returns its index.
    pub fn push(&mut self, pair: PortalPair) -> usize {
        self.pairs.push(pair);
        self.pairs.len() - 1
    }

    /// The number of pairs in this set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Does this set contain no pair?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The portal with the given id, if it exists.
    pub fn get(&self, id: PortalId) -> Option<PortalRef<'_>> {
        self.pairs.get(id.pair).map(|pair| PortalRef { pair, id })
    }

    /// Every portal of this set, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = PortalRef<'_>> + '_ {
        self.pairs.iter().enumerate().flat_map(|(i, pair)| {
            [PortalEnd::A, PortalEnd::B].map(|end| PortalRef {
                pair,
                id: PortalId { pair: i, end },
            })
        })
    }
}

impl FromIterator<PortalPair> for PortalSet {
    fn from_iter<I: IntoIterator<Item = PortalPair>>(iter: I) -> Self {
        PortalSet {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// A view of one portal together with its partner.
#[derive(Copy, Clone, Debug)]
pub struct PortalRef<'a> {
    pair: &'a PortalPair,
    id: PortalId,
}

impl<'a> PortalRef<'a> {
    /// The id of this portal.
    #[inline]
    pub fn id(&self) -> PortalId {
        self.id
    }

    /// The portal itself.
    #[inline]
    pub fn portal(&self) -> &'a SinglePortal {
        self.pair.portal(self.id.end)
    }

    /// The portal linked to this one.
    #[inline]
    pub fn partner(&self) -> &'a SinglePortal {
        self.pair.partner(self.id.end)
    }

    /// Relocates a piece cut off by this portal in front of its partner.
    pub fn move_sliced_part_to_partner(&self, piece: SlicedCollider) -> SlicedCollider {
        self.portal()
            .move_sliced_part_to_partner(self.partner(), piece)
    }

    /// Maps a pixel corner through this portal into its partner.
    pub fn map_point(&self, point: &Point) -> Point {
        self.portal().map_point(self.partner(), point)
    }

    /// Maps a continuous position through this portal into its partner.
    pub fn map_position(&self, position: &RealVector) -> RealVector {
        self.portal().map_position(self.partner(), position)
    }

    /// Maps a box through this portal into its partner.
    pub fn map_aabb(&self, aabb: &Aabb) -> Aabb {
        self.portal().map_aabb(self.partner(), aabb)
    }
}
