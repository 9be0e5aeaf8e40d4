mod arrangement;
mod experiment;
mod fluid;
mod imaging;
mod jet;

pub use arrangement::{Arrangement, DualJetGeometry};
pub use experiment::Input;
pub use fluid::Fluid;
pub use imaging::Imaging;
pub use jet::Jet;
