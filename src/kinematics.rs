//! # Dynamic Kinematic Columns
//!
//! Momentum-frame quantities are never persisted. They are recomputed on
//! every access as pure closed-form functions of the stored canonical triple
//! (`pt`, `eta`, `phi`), so they can never diverge from their sources and
//! need no cache-invalidation story. Recomputation is a handful of libm
//! calls, cheap enough to run on every read.
//!
//! The trait is the row-accessor capability: any row type that exposes the
//! canonical triple gets the full set of derivations for free, and no
//! implementor may override them.

use crate::tables::{ExtParticle, HfCandidate, McParticle, Particle};

/// Derived momentum-frame quantities over the canonical kinematic triple.
///
/// # Example
///
/// ```
/// use femtoderived::kinematics::Kinematics;
/// use femtoderived::selection::CutContainer;
/// use femtoderived::tables::{Particle, ParticleType};
///
/// let p = Particle {
///     collision_id: 0,
///     pt: 1.0,
///     eta: 0.0,
///     phi: 0.0,
///     part_type: ParticleType::Track,
///     cut: CutContainer::EMPTY,
///     pid_cut: CutContainer::EMPTY,
///     temp_fit_var: 0.0,
///     children: Vec::new(),
///     m_lambda: 0.0,
///     m_anti_lambda: 0.0,
///     m_kaon: 0.0,
/// };
/// assert!((p.theta() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// assert_eq!(p.px(), 0.0);
/// assert_eq!(p.py(), 1.0);
/// assert_eq!(p.pz(), 0.0);
/// assert_eq!(p.p(), 1.0);
/// ```
pub trait Kinematics {
    /// Stored transverse momentum (GeV/c).
    fn pt(&self) -> f32;
    /// Stored pseudorapidity.
    fn eta(&self) -> f32;
    /// Stored azimuthal angle (rad).
    fn phi(&self) -> f32;

    /// Polar angle: `theta = 2 * atan(exp(-eta))`.
    fn theta(&self) -> f32 {
        2.0 * (-self.eta()).exp().atan()
    }

    /// Momentum in x: `px = pt * sin(phi)` (GeV/c).
    fn px(&self) -> f32 {
        self.pt() * self.phi().sin()
    }

    /// Momentum in y: `py = pt * cos(phi)` (GeV/c).
    fn py(&self) -> f32 {
        self.pt() * self.phi().cos()
    }

    /// Momentum in z: `pz = pt * sinh(eta)` (GeV/c).
    fn pz(&self) -> f32 {
        self.pt() * self.eta().sinh()
    }

    /// Overall momentum: `p = pt * cosh(eta)` (GeV/c).
    fn p(&self) -> f32 {
        self.pt() * self.eta().cosh()
    }
}

impl Kinematics for Particle {
    fn pt(&self) -> f32 {
        self.pt
    }
    fn eta(&self) -> f32 {
        self.eta
    }
    fn phi(&self) -> f32 {
        self.phi
    }
}

impl Kinematics for McParticle {
    fn pt(&self) -> f32 {
        self.pt
    }
    fn eta(&self) -> f32 {
        self.eta
    }
    fn phi(&self) -> f32 {
        self.phi
    }
}

// The candidate table stores p and y as producer-filled columns; the trait
// derivations still apply to its canonical triple.
impl Kinematics for HfCandidate {
    fn pt(&self) -> f32 {
        self.pt
    }
    fn eta(&self) -> f32 {
        self.eta
    }
    fn phi(&self) -> f32 {
        self.phi
    }
}

impl ExtParticle {
    /// Crossed TPC rows over findable clusters, recomputed on every access.
    pub fn tpc_crossed_rows_over_findable_cls(&self) -> f32 {
        f32::from(self.tpc_n_cls_crossed_rows) / f32::from(self.tpc_n_cls_findable)
    }
}
