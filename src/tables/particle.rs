use super::UnknownTag;
use crate::selection::CutContainer;

/// Distinguishes the different particle types stored in the particle table.
///
/// Closed enumeration; the integer values are part of the on-disk convention
/// and must never be reordered within one production configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParticleType {
    /// Primary track.
    Track = 0,
    /// V0 candidate.
    V0 = 1,
    /// Child track of a V0.
    V0Child = 2,
    /// Cascade candidate.
    Cascade = 3,
    /// Bachelor track of a cascade.
    CascadeBachelor = 4,
    /// Charm-hadron candidate.
    CharmHadron = 5,
}

impl ParticleType {
    /// Number of particle types.
    pub const COUNT: usize = 6;

    /// All variants, in tag order.
    pub const ALL: [ParticleType; Self::COUNT] = [
        ParticleType::Track,
        ParticleType::V0,
        ParticleType::V0Child,
        ParticleType::Cascade,
        ParticleType::CascadeBachelor,
        ParticleType::CharmHadron,
    ];

    /// The stored tag value.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether rows of this type carry meaningful V0/cascade mass hypotheses.
    pub const fn has_mass_hypotheses(self) -> bool {
        matches!(self, ParticleType::V0 | ParticleType::Cascade)
    }
}

impl TryFrom<u8> for ParticleType {
    type Error = UnknownTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(UnknownTag {
                kind: "ParticleType",
                value,
            })
    }
}

/// Distinguishes V0 child tracks by charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TrackType {
    /// Not a V0 child.
    NoChild = 0,
    /// Positive V0 child.
    PosChild = 1,
    /// Negative V0 child.
    NegChild = 2,
}

impl TrackType {
    /// Number of track types.
    pub const COUNT: usize = 3;

    /// All variants, in tag order.
    pub const ALL: [TrackType; Self::COUNT] =
        [TrackType::NoChild, TrackType::PosChild, TrackType::NegChild];

    /// The stored tag value.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TrackType {
    type Error = UnknownTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(UnknownTag {
            kind: "TrackType",
            value,
        })
    }
}

/// Which momentum definition a histogram axis refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MomentumType {
    /// Transverse momentum.
    Pt = 0,
    /// Reconstructed momentum propagated to the vertex.
    Preco = 1,
    /// Momentum at the inner wall of the TPC (useful for PID plots).
    Ptpc = 2,
}

/// One selected track or decay-candidate object tied to a collision.
///
/// `pt`/`eta`/`phi` form the canonical kinematic triple: every momentum-frame
/// quantity is derived from them on demand (see [`crate::kinematics`]) and
/// never duplicated in storage.
///
/// `children` holds 0–2 indices of daughter rows *within the same batch*,
/// used downstream to drop auto-correlated pairs (e.g. a V0 paired with one
/// of its own daughters). Daughters are committed no later than their parent
/// and are never forward-referenced, which makes the relation structurally
/// acyclic; the commit path in [`crate::batch`] still rejects any row that
/// violates this.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Weak reference to the owning [`Collision`](super::Collision) row.
    pub collision_id: u32,
    /// Transverse momentum (GeV/c).
    pub pt: f32,
    /// Pseudorapidity.
    pub eta: f32,
    /// Azimuthal angle (rad).
    pub phi: f32,
    /// Type of the particle.
    pub part_type: ParticleType,
    /// Bit-wise container for the selection criteria, write-once.
    pub cut: CutContainer,
    /// Bit-wise container for the PID selection criteria, write-once.
    pub pid_cut: CutContainer,
    /// Observable for template fitting; DCA_xy for track-like rows, CPA for
    /// V0/cascade rows (meaning selected by `part_type`).
    pub temp_fit_var: f32,
    /// Indices of daughter rows for auto-correlation removal (0–2 entries).
    pub children: Vec<u32>,
    /// Invariant mass under the Lambda hypothesis (V0/cascade types only).
    pub m_lambda: f32,
    /// Invariant mass under the anti-Lambda hypothesis (V0/cascade types only).
    pub m_anti_lambda: f32,
    /// Invariant mass under the K0s hypothesis (V0/cascade types only).
    pub m_kaon: f32,
}

/// 1:1 companion to [`Particle`] carrying detector-level debug attributes.
///
/// Kept in a separate table so the primary analysis path stays narrow; an
/// analysis that never looks at cluster counts or PID separations never pays
/// for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtParticle {
    /// Sign of the track charge.
    pub sign: i8,
    /// Number of TPC clusters found.
    pub tpc_n_cls_found: u8,
    /// Number of findable TPC clusters.
    pub tpc_n_cls_findable: u8,
    /// Number of crossed TPC readout rows.
    pub tpc_n_cls_crossed_rows: u8,
    /// Number of TPC clusters shared with other tracks.
    pub tpc_n_cls_shared: u8,
    /// Momentum at the inner wall of the TPC (GeV/c).
    pub tpc_inner_param: f32,
    /// Number of ITS clusters.
    pub its_n_cls: u8,
    /// Number of ITS clusters in the inner barrel.
    pub its_n_cls_inner_barrel: u8,
    /// Transverse distance of closest approach to the primary vertex (cm).
    pub dca_xy: f32,
    /// Longitudinal distance of closest approach to the primary vertex (cm).
    pub dca_z: f32,
    /// TPC dE/dx signal.
    pub tpc_signal: f32,
    /// TPC n-sigma separation, electron hypothesis.
    pub tpc_n_sigma_el: f32,
    /// TPC n-sigma separation, pion hypothesis.
    pub tpc_n_sigma_pi: f32,
    /// TPC n-sigma separation, kaon hypothesis.
    pub tpc_n_sigma_ka: f32,
    /// TPC n-sigma separation, proton hypothesis.
    pub tpc_n_sigma_pr: f32,
    /// TPC n-sigma separation, deuteron hypothesis.
    pub tpc_n_sigma_de: f32,
    /// TOF n-sigma separation, electron hypothesis.
    pub tof_n_sigma_el: f32,
    /// TOF n-sigma separation, pion hypothesis.
    pub tof_n_sigma_pi: f32,
    /// TOF n-sigma separation, kaon hypothesis.
    pub tof_n_sigma_ka: f32,
    /// TOF n-sigma separation, proton hypothesis.
    pub tof_n_sigma_pr: f32,
    /// TOF n-sigma separation, deuteron hypothesis.
    pub tof_n_sigma_de: f32,
    /// Distance of closest approach between V0 daughters (cm).
    pub daugh_dca: f32,
    /// Transverse radius of the decay vertex (cm).
    pub trans_radius: f32,
    /// X position of the decay vertex (cm).
    pub decay_vtx_x: f32,
    /// Y position of the decay vertex (cm).
    pub decay_vtx_y: f32,
    /// Z position of the decay vertex (cm).
    pub decay_vtx_z: f32,
}
