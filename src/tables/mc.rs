use super::UnknownTag;

/// Physics interpretation of a reconstructed-to-truth match.
///
/// `Fake` and `WrongCollision` rows are explicitly permitted to still carry a
/// [`McLabel`] pointing at a nearest-truth candidate; that debug aid is a
/// deliberate representable state, not an integrity error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParticleOriginMcTruth {
    /// Primary track or V0.
    Primary = 0,
    /// Particle from a decay.
    Secondary = 1,
    /// Particle produced in detector material.
    Material = 2,
    /// Non-primary particle, undifferentiated (kept for compatibility with
    /// producers that do not classify secondaries further).
    NotPrimary = 3,
    /// Particle whose PDG code does not match the analyzed hypothesis.
    Fake = 4,
    /// Particle associated to the wrong collision.
    WrongCollision = 5,
    /// Daughter from a Lambda decay.
    SecondaryDaughterLambda = 6,
    /// Daughter from a Sigma+ decay.
    SecondaryDaughterSigmaPlus = 7,
    /// None of the above; catches classification gaps during MC validation.
    Else = 8,
}

impl ParticleOriginMcTruth {
    /// Number of origin types.
    pub const COUNT: usize = 9;

    /// All variants, in tag order.
    pub const ALL: [ParticleOriginMcTruth; Self::COUNT] = [
        ParticleOriginMcTruth::Primary,
        ParticleOriginMcTruth::Secondary,
        ParticleOriginMcTruth::Material,
        ParticleOriginMcTruth::NotPrimary,
        ParticleOriginMcTruth::Fake,
        ParticleOriginMcTruth::WrongCollision,
        ParticleOriginMcTruth::SecondaryDaughterLambda,
        ParticleOriginMcTruth::SecondaryDaughterSigmaPlus,
        ParticleOriginMcTruth::Else,
    ];

    /// The stored tag value.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether the match classification is physically usable for efficiency
    /// and purity studies (as opposed to a mis-association tag).
    pub const fn is_genuine_match(self) -> bool {
        !matches!(
            self,
            ParticleOriginMcTruth::Fake | ParticleOriginMcTruth::WrongCollision
        )
    }
}

impl TryFrom<u8> for ParticleOriginMcTruth {
    type Error = UnknownTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(UnknownTag {
            kind: "ParticleOriginMcTruth",
            value,
        })
    }
}

/// Distinguishes reconstructed-level from truth-level processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum McType {
    /// Reconstructed in case of MC; also the default for real data.
    Recon = 0,
    /// MC truth.
    Truth = 1,
}

/// Truth-level companion row for a matched particle.
#[derive(Debug, Clone, PartialEq)]
pub struct McParticle {
    /// Origin classification of the match.
    pub origin: ParticleOriginMcTruth,
    /// Signed PDG code of the truth particle.
    pub pdg_code: i32,
    /// Truth transverse momentum (GeV/c).
    pub pt: f32,
    /// Truth pseudorapidity.
    pub eta: f32,
    /// Truth azimuthal angle (rad).
    pub phi: f32,
}

/// 1:1 debug companion to [`McParticle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtMcParticle {
    /// PDG code of the primary mother of the decay chain.
    pub mother_pdg: i32,
}

/// Nullable weak reference from a particle row to exactly one truth row.
///
/// A particle is either unmatched (absent label) or matched to exactly one
/// [`McParticle`]; the state is decided once at production and immutable
/// afterwards. The absent value is first-class: there is no magic sentinel
/// index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct McLabel(Option<u32>);

impl McLabel {
    /// An unmatched label.
    pub const NONE: McLabel = McLabel(None);

    /// A label matched to the truth row at `index`.
    pub const fn matched(index: u32) -> Self {
        McLabel(Some(index))
    }

    /// The referenced truth row index, if matched.
    pub const fn index(self) -> Option<u32> {
        self.0
    }

    /// Whether this particle carries a truth match.
    pub const fn is_matched(self) -> bool {
        self.0.is_some()
    }
}
