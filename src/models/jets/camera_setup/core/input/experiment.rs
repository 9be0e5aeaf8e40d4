use uom::si::{
    f64::{Length, VolumeRate},
    length::millimeter,
    volume_rate::liter_per_minute,
};

use super::{Arrangement, DualJetGeometry, Fluid, Imaging, Jet};

/// Everything needed to evaluate one experiment configuration.
///
/// Inputs are immutable for the duration of a calculation; each invocation
/// of the calculator takes a fresh `Input` and shares no state with any
/// other invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// Single- or dual-jet configuration.
    pub arrangement: Arrangement,

    /// Camera and field-of-view parameters.
    pub imaging: Imaging,

    /// Working fluid.
    pub fluid: Fluid,

    /// Name used in the report header and the persisted filename.
    pub experiment_name: String,
}

impl Input {
    /// The lab's reference single-jet experiment.
    ///
    /// 1.7 L/min through an 11 mm nozzle observed 27.2 diameters downstream,
    /// imaged over an 11 cm field of view at 1024 px with a 16 px target
    /// displacement, in water.
    #[must_use]
    pub fn single_jet_reference() -> Self {
        Self {
            arrangement: Arrangement::default(),
            imaging: Imaging::default(),
            fluid: Fluid::water(),
            experiment_name: "single_jet_test".to_string(),
        }
    }

    /// The lab's reference dual-jet experiment.
    ///
    /// Adds a secondary jet of 0.55 L/min through a 1.3 mm nozzle observed
    /// 7.5 diameters downstream, with the default nozzle geometry.
    #[must_use]
    pub fn dual_jet_reference() -> Self {
        let secondary = Jet::new_unchecked(
            VolumeRate::new::<liter_per_minute>(0.55),
            Length::new::<millimeter>(1.3),
            7.5,
        );
        Self {
            arrangement: Arrangement::Dual {
                primary: Jet::default(),
                secondary,
                geometry: DualJetGeometry::default(),
            },
            experiment_name: "dual_jet_test".to_string(),
            ..Self::single_jet_reference()
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::single_jet_reference()
    }
}
