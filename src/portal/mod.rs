//! Paired portals and the transforms carrying bodies through them.

pub use self::portal_desc::PortalDesc;
pub use self::portal_pair::{PortalEnd, PortalPair, PortalPairError};
pub use self::portal_set::{PortalId, PortalRef, PortalSet};
pub use self::portal_transform::{portal_transform, FacingPairClass};
pub use self::single_portal::SinglePortal;

mod portal_desc;
mod portal_pair;
mod portal_set;
mod portal_transform;
mod single_portal;
