//! The visit event - one bee, one plant, one compatibility check

use crate::core::types::{compatibility, Compatibility};
use crate::sim::bee::Bee;
use crate::sim::plant::Plant;

/// Perform one visit.
///
/// The pairing is classified once; a usable pairing increments exactly one
/// counter on each side, an unusable pairing mutates neither. The bee and
/// plant are only borrowed for the duration of the call - no links between
/// them persist.
pub fn visit(bee: &mut Bee, plant: &mut Plant) {
    if compatibility(bee.kind, plant.kind) == Compatibility::Unusable {
        return;
    }
    bee.record_visit(plant.kind);
    plant.record_visit(bee.kind);
}
