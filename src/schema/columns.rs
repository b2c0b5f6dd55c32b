//! Column names as constants for type safety.

// =============================================================================
// Collision family
// =============================================================================

/// Primary-vertex z position
pub const POS_Z: &str = "pos_z";
/// V0M multiplicity estimate
pub const MULT_V0M: &str = "mult_v0m";
/// Charged-track multiplicity as defined by the producer
pub const MULT_NTR: &str = "mult_ntr";
/// Transverse sphericity of the event
pub const SPHERICITY: &str = "sphericity";
/// Magnetic field of the event
pub const MAG_FIELD: &str = "mag_field";
/// Mixing-pool eligibility mask for the first particle role
pub const BITMASK_TRACK_ONE: &str = "bitmask_track_one";
/// Mixing-pool eligibility mask for the second particle role
pub const BITMASK_TRACK_TWO: &str = "bitmask_track_two";
/// Mixing-pool eligibility mask for the third particle role
pub const BITMASK_TRACK_THREE: &str = "bitmask_track_three";
/// Downsampling flag
pub const DOWNSAMPLE: &str = "downsample";
/// Event-mixing hash bin
pub const BIN: &str = "bin";

// =============================================================================
// Particle family
// =============================================================================

/// Weak reference to the owning collision row
pub const COLLISION_ID: &str = "collision_id";
/// Transverse momentum
pub const PT: &str = "pt";
/// Pseudorapidity
pub const ETA: &str = "eta";
/// Azimuthal angle
pub const PHI: &str = "phi";
/// Particle-type tag
pub const PART_TYPE: &str = "part_type";
/// Bit-wise selection container
pub const CUT: &str = "cut";
/// Bit-wise PID selection container
pub const PID_CUT: &str = "pid_cut";
/// Template-fit observable (meaning selected by part_type)
pub const TEMP_FIT_VAR: &str = "temp_fit_var";
/// Daughter row indices for auto-correlation removal
pub const CHILDREN: &str = "children";
/// Invariant mass, Lambda hypothesis
pub const M_LAMBDA: &str = "m_lambda";
/// Invariant mass, anti-Lambda hypothesis
pub const M_ANTI_LAMBDA: &str = "m_anti_lambda";
/// Invariant mass, K0s hypothesis
pub const M_KAON: &str = "m_kaon";
/// Raw external track id of a particle row
pub const TRACK_ID: &str = "track_id";

// =============================================================================
// Extended (debug) particle columns
// =============================================================================

/// Sign of the track charge
pub const SIGN: &str = "sign";
/// Number of TPC clusters found
pub const TPC_N_CLS_FOUND: &str = "tpc_n_cls_found";
/// Number of findable TPC clusters
pub const TPC_N_CLS_FINDABLE: &str = "tpc_n_cls_findable";
/// Number of crossed TPC readout rows
pub const TPC_N_CLS_CROSSED_ROWS: &str = "tpc_n_cls_crossed_rows";
/// Number of shared TPC clusters
pub const TPC_N_CLS_SHARED: &str = "tpc_n_cls_shared";
/// Momentum at the inner wall of the TPC
pub const TPC_INNER_PARAM: &str = "tpc_inner_param";
/// Number of ITS clusters
pub const ITS_N_CLS: &str = "its_n_cls";
/// Number of ITS clusters in the inner barrel
pub const ITS_N_CLS_INNER_BARREL: &str = "its_n_cls_inner_barrel";
/// Transverse DCA to the primary vertex
pub const DCA_XY: &str = "dca_xy";
/// Longitudinal DCA to the primary vertex
pub const DCA_Z: &str = "dca_z";
/// TPC dE/dx signal
pub const TPC_SIGNAL: &str = "tpc_signal";
/// TPC n-sigma, electron hypothesis
pub const TPC_N_SIGMA_EL: &str = "tpc_n_sigma_el";
/// TPC n-sigma, pion hypothesis
pub const TPC_N_SIGMA_PI: &str = "tpc_n_sigma_pi";
/// TPC n-sigma, kaon hypothesis
pub const TPC_N_SIGMA_KA: &str = "tpc_n_sigma_ka";
/// TPC n-sigma, proton hypothesis
pub const TPC_N_SIGMA_PR: &str = "tpc_n_sigma_pr";
/// TPC n-sigma, deuteron hypothesis
pub const TPC_N_SIGMA_DE: &str = "tpc_n_sigma_de";
/// TOF n-sigma, electron hypothesis
pub const TOF_N_SIGMA_EL: &str = "tof_n_sigma_el";
/// TOF n-sigma, pion hypothesis
pub const TOF_N_SIGMA_PI: &str = "tof_n_sigma_pi";
/// TOF n-sigma, kaon hypothesis
pub const TOF_N_SIGMA_KA: &str = "tof_n_sigma_ka";
/// TOF n-sigma, proton hypothesis
pub const TOF_N_SIGMA_PR: &str = "tof_n_sigma_pr";
/// TOF n-sigma, deuteron hypothesis
pub const TOF_N_SIGMA_DE: &str = "tof_n_sigma_de";
/// DCA between V0 daughters
pub const DAUGH_DCA: &str = "daugh_dca";
/// Transverse radius of the decay vertex
pub const TRANS_RADIUS: &str = "trans_radius";
/// Decay-vertex x position
pub const DECAY_VTX_X: &str = "decay_vtx_x";
/// Decay-vertex y position
pub const DECAY_VTX_Y: &str = "decay_vtx_y";
/// Decay-vertex z position
pub const DECAY_VTX_Z: &str = "decay_vtx_z";

// =============================================================================
// MC truth family
// =============================================================================

/// MC-origin classification tag
pub const ORIGIN: &str = "origin";
/// Signed PDG code of the truth particle
pub const PDG_CODE: &str = "pdg_code";
/// PDG code of the primary mother of the decay chain
pub const MOTHER_PDG: &str = "mother_pdg";
/// Nullable truth-row reference of a particle
pub const MC_PARTICLE_ID: &str = "mc_particle_id";
/// Nullable extended-truth-row reference of a particle
pub const EXT_MC_PARTICLE_ID: &str = "ext_mc_particle_id";

// =============================================================================
// Heavy-flavor family
// =============================================================================

/// Candidate charge
pub const CHARGE: &str = "charge";
/// External track id of the first prong
pub const PRONG0_ID: &str = "prong0_id";
/// External track id of the second prong
pub const PRONG1_ID: &str = "prong1_id";
/// External track id of the third prong (2-prong candidates: null)
pub const PRONG2_ID: &str = "prong2_id";
/// Transverse momentum of the first prong
pub const PRONG0_PT: &str = "prong0_pt";
/// Transverse momentum of the second prong
pub const PRONG1_PT: &str = "prong1_pt";
/// Transverse momentum of the third prong
pub const PRONG2_PT: &str = "prong2_pt";
/// Pseudorapidity of the first prong
pub const PRONG0_ETA: &str = "prong0_eta";
/// Pseudorapidity of the second prong
pub const PRONG1_ETA: &str = "prong1_eta";
/// Pseudorapidity of the third prong
pub const PRONG2_ETA: &str = "prong2_eta";
/// Azimuthal angle of the first prong
pub const PRONG0_PHI: &str = "prong0_phi";
/// Azimuthal angle of the second prong
pub const PRONG1_PHI: &str = "prong1_phi";
/// Azimuthal angle of the third prong
pub const PRONG2_PHI: &str = "prong2_phi";
/// Selection flag from the candidate selector
pub const CANDIDATE_SEL_FLAG: &str = "candidate_sel_flag";
/// ML background score
pub const BDT_BKG: &str = "bdt_bkg";
/// ML prompt score
pub const BDT_PROMPT: &str = "bdt_prompt";
/// ML feed-down score
pub const BDT_FD: &str = "bdt_fd";
/// Invariant mass
pub const M: &str = "m";
/// Total momentum
pub const P: &str = "p";
/// Rapidity
pub const Y: &str = "y";
/// Decay-channel flag from the MC matcher
pub const FLAG_MC: &str = "flag_mc";
/// Prompt / non-prompt origin of the reconstructed candidate
pub const ORIGIN_MC_REC: &str = "origin_mc_rec";
/// Prompt / non-prompt origin of the generated candidate
pub const ORIGIN_MC_GEN: &str = "origin_mc_gen";

// =============================================================================
// Pair-result columns
// =============================================================================

/// Transverse momentum of the associated particle
pub const PT_ASSOC: &str = "pt_assoc";
/// Relative momentum of the pair, k*
pub const K_STAR: &str = "k_star";
/// Average transverse momentum of the pair, kT
pub const K_T: &str = "k_t";
/// Transverse mass of the pair, mT
pub const M_T: &str = "m_t";
/// Charged-track multiplicity of the event
pub const MULT: &str = "mult";
/// Multiplicity percentile of the event
pub const MULT_PERCENTILE: &str = "mult_percentile";
/// Sign combination of the pair
pub const PAIR_SIGN: &str = "pair_sign";
/// Process-type tag (same-event, mixed-event, ...)
pub const PROCESS_TYPE: &str = "process_type";
