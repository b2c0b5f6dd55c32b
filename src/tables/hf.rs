/// Reconstructed 2–3 prong secondary-vertex (heavy-flavor decay) candidate.
///
/// The heavy-flavor family is disjoint from the [`Particle`](super::Particle)
/// family: prong references are *raw external track ids* from the upstream
/// reconstruction, never particle row indices. The two families correlate
/// only through the shared `collision_id` (and, where needed, through the
/// per-particle track-ref table).
///
/// Two-prong candidates leave the third prong absent; the absent value is
/// first-class (`Option`), not a sentinel id.
#[derive(Debug, Clone, PartialEq)]
pub struct HfCandidate {
    /// Weak reference to the owning collision row.
    pub collision_id: u32,
    /// Candidate charge.
    pub charge: i8,
    /// External track id of the first prong.
    pub prong0_id: i32,
    /// External track id of the second prong.
    pub prong1_id: i32,
    /// External track id of the third prong, for 3-prong candidates.
    pub prong2_id: Option<i32>,
    /// Transverse momentum of the first prong (GeV/c).
    pub prong0_pt: f32,
    /// Transverse momentum of the second prong (GeV/c).
    pub prong1_pt: f32,
    /// Transverse momentum of the third prong (GeV/c).
    pub prong2_pt: Option<f32>,
    /// Pseudorapidity of the first prong.
    pub prong0_eta: f32,
    /// Pseudorapidity of the second prong.
    pub prong1_eta: f32,
    /// Pseudorapidity of the third prong.
    pub prong2_eta: Option<f32>,
    /// Azimuthal angle of the first prong (rad).
    pub prong0_phi: f32,
    /// Azimuthal angle of the second prong (rad).
    pub prong1_phi: f32,
    /// Azimuthal angle of the third prong (rad).
    pub prong2_phi: Option<f32>,
    /// Selection flag assigned by the candidate selector.
    pub candidate_sel_flag: i8,
    /// ML discriminant score for the background hypothesis.
    pub bdt_bkg: f32,
    /// ML discriminant score for the prompt hypothesis.
    pub bdt_prompt: f32,
    /// ML discriminant score for the feed-down hypothesis.
    pub bdt_fd: f32,
    /// Invariant mass of the candidate (GeV/c^2).
    pub m: f32,
    /// Transverse momentum of the candidate (GeV/c).
    pub pt: f32,
    /// Total momentum of the candidate (GeV/c).
    pub p: f32,
    /// Pseudorapidity of the candidate.
    pub eta: f32,
    /// Azimuthal angle of the candidate (rad).
    pub phi: f32,
    /// Rapidity of the candidate.
    pub y: f32,
}

impl HfCandidate {
    /// Number of prongs (2 or 3).
    pub fn prong_count(&self) -> usize {
        if self.prong2_id.is_some() {
            3
        } else {
            2
        }
    }

    /// Whether the optional third-prong columns are set consistently: either
    /// id and all three kinematic components are present, or none of them.
    pub fn third_prong_consistent(&self) -> bool {
        let set = self.prong2_id.is_some();
        self.prong2_pt.is_some() == set
            && self.prong2_eta.is_some() == set
            && self.prong2_phi.is_some() == set
    }
}

/// Nullable 1:1 MC companion of an [`HfCandidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HfCandidateMc {
    /// Decay-channel flag from the MC matcher.
    pub flag_mc: i8,
    /// Origin of the reconstructed candidate (prompt / non-prompt tag).
    pub origin_mc_rec: i8,
}

/// Generator-level heavy-flavor row, independent of reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct HfCandidateMcGen {
    /// Weak reference to the owning collision row.
    pub collision_id: u32,
    /// Generated transverse momentum (GeV/c).
    pub pt: f32,
    /// Generated pseudorapidity.
    pub eta: f32,
    /// Generated azimuthal angle (rad).
    pub phi: f32,
    /// Generated rapidity.
    pub y: f32,
    /// Decay-channel flag from the generator.
    pub flag_mc: i8,
    /// Origin of the generated candidate (prompt / non-prompt tag).
    pub origin_mc_gen: i8,
}

/// Terminal, append-only pair-observable row.
///
/// One row per analyzed (candidate, associated-particle) pair per event;
/// cardinality is O(particles^2), so the layout is restricted to flat scalars
/// with no nested references.
#[derive(Debug, Clone, PartialEq)]
pub struct HfPairResult {
    /// Invariant mass of the candidate (GeV/c^2).
    pub m: f32,
    /// Transverse momentum of the candidate (GeV/c).
    pub pt: f32,
    /// Transverse momentum of the associated particle (GeV/c).
    pub pt_assoc: f32,
    /// ML background score of the candidate.
    pub bdt_bkg: f32,
    /// ML prompt score of the candidate.
    pub bdt_prompt: f32,
    /// ML feed-down score of the candidate.
    pub bdt_fd: f32,
    /// Relative momentum of the pair, k* (GeV/c).
    pub k_star: f32,
    /// Average transverse momentum of the pair, kT (GeV/c).
    pub k_t: f32,
    /// Transverse mass of the pair, mT (GeV/c^2).
    pub m_t: f32,
    /// Charged-track multiplicity of the event.
    pub mult: i32,
    /// Multiplicity percentile of the event.
    pub mult_percentile: f32,
    /// Sign combination of the pair.
    pub pair_sign: i8,
    /// Process-type tag (same-event, mixed-event, ...).
    pub process_type: i64,
}
