//! Solids sliced by the portals they go through.

pub use self::scene::Scene;
pub use self::sliced_solid::SlicedSolidBody;

mod carry;
mod movement;
mod regenerate;
mod scene;
mod sliced_solid;
