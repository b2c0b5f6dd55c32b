//! # Table Row Types
//!
//! Typed row structs and closed tag enumerations for every table in the
//! derived data model. The structs here are plain data carriers: they hold
//! exactly what is persisted, nothing more. Derived kinematic quantities live
//! in [`crate::kinematics`], display-name lookups in [`crate::conventions`],
//! and the commit/validation machinery in [`crate::batch`].
//!
//! ## Entity families
//!
//! | Family | Rows | Cardinality |
//! |--------|------|-------------|
//! | Collision | [`Collision`], [`CollisionMask`], downsample flag | one per event |
//! | Particle | [`Particle`], [`ExtParticle`], track ref | many per collision |
//! | MC truth | [`McParticle`], [`ExtMcParticle`], [`McLabel`] | nullable per particle |
//! | Heavy flavor | [`HfCandidate`], [`HfCandidateMc`], [`HfCandidateMcGen`] | many per collision |
//! | Results | [`HfPairResult`] | one per analyzed pair |
//!
//! All tag enumerations are closed `u8` enums; raw integers coming from an
//! upstream producer go through `TryFrom<u8>` and out-of-range values are
//! rejected before a row can exist.

mod collision;
mod hf;
mod mc;
mod particle;

#[cfg(test)]
mod tests;

pub use collision::{Collision, CollisionMask};
pub use hf::{HfCandidate, HfCandidateMc, HfCandidateMcGen, HfPairResult};
pub use mc::{ExtMcParticle, McLabel, McParticle, McType, ParticleOriginMcTruth};
pub use particle::{ExtParticle, MomentumType, Particle, ParticleType, TrackType};

/// Error for a raw integer that does not correspond to any variant of a
/// closed tag enumeration.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} tag: {value}")]
pub struct UnknownTag {
    /// Name of the enumeration the value was decoded against.
    pub kind: &'static str,
    /// The rejected raw value.
    pub value: u8,
}
