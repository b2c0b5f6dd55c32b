use crate::selection::BitMaskType;

/// One reconstructed event cataloged for analysis.
///
/// A collision row is written once per event, after every particle of that
/// event has been classified, and is immutable afterwards. Its dense id is
/// its row index in production order; [`Particle`](super::Particle) rows
/// reference it through `collision_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    /// Primary-vertex z position (cm).
    pub pos_z: f32,
    /// V0M multiplicity estimate (percentile input).
    pub mult_v0m: f32,
    /// Charged-track multiplicity as defined by the producer.
    pub mult_ntr: i32,
    /// Transverse sphericity of the event.
    pub sphericity: f32,
    /// Magnetic field of the event (kG).
    pub mag_field: f32,
}

/// 1:1 companion to [`Collision`] tagging mixing-pool eligibility.
///
/// Each mask is an independent 32-bit container, one per particle role of the
/// configured analysis, so a mixing task can skip collisions that contributed
/// nothing to a given pool without scanning their particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionMask {
    /// Eligibility mask for the first particle role.
    pub bitmask_track_one: BitMaskType,
    /// Eligibility mask for the second particle role.
    pub bitmask_track_two: BitMaskType,
    /// Eligibility mask for the third particle role.
    pub bitmask_track_three: BitMaskType,
}
