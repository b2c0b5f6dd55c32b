//! # Event Production and Commit
//!
//! ## Production model
//!
//! Production is single-writer-per-event: an [`EventBuilder`] buffers one
//! event's full row set (collision, masks, particles with companions, truth
//! rows, heavy-flavor candidates) with builder-local indices, and
//! [`DerivedTables::commit`] merges it into the store in one atomic step:
//! validate first, then append, rewriting every local reference to its final
//! global index. A failed commit leaves the store untouched; dropping an
//! uncommitted builder discards the batch.
//!
//! Multiple events may be built concurrently by independent workers; the
//! commit pass itself is the single-threaded merge that fixes the global
//! ordering. Once committed, all tables are read-only and may be scanned from
//! any number of threads without locking.
//!
//! ## Integrity
//!
//! Invalid state is rejected at commit time, never at read time: a child
//! reference outside the event, a forward or self reference, a truth label
//! past the end of the MC table, or inconsistent third-prong columns all fail
//! the commit with a typed [`CommitError`]. After commit, rows are trusted;
//! read paths perform no re-validation (see [`crate::quality`] for the
//! downstream audit).

mod record;


use std::sync::atomic::{AtomicU64, Ordering};

use crate::mixing::{InvalidBinning, MixingBinning};
use crate::tables::{
    Collision, CollisionMask, ExtMcParticle, ExtParticle, HfCandidate, HfCandidateMc,
    HfCandidateMcGen, HfPairResult, McLabel, McParticle, Particle,
};

/// Errors that reject an event at commit time.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    /// A particle row carries more than two daughter references.
    #[error("particle {index}: {count} children exceeds the 2-daughter limit")]
    TooManyChildren {
        /// Local row index of the offending particle.
        index: usize,
        /// Number of children attached.
        count: usize,
    },

    /// A daughter reference points outside the event.
    #[error("particle {parent}: child reference {child} does not exist in this event")]
    ChildOutOfRange {
        /// Local row index of the parent.
        parent: usize,
        /// The out-of-range local child index.
        child: usize,
    },

    /// A particle references itself as its own daughter.
    #[error("particle {index}: self-reference in children")]
    SelfReference {
        /// Local row index of the particle.
        index: usize,
    },

    /// A daughter reference points at a later row. Daughters are committed no
    /// later than their parent, which keeps the relation structurally acyclic.
    #[error("particle {parent}: child reference {child} is not an earlier row")]
    ForwardChildReference {
        /// Local row index of the parent.
        parent: usize,
        /// The forward-referenced local child index.
        child: usize,
    },

    /// A row was handed to the builder with the `children` field pre-filled
    /// instead of attaching daughters through handles.
    #[error("particle {index}: children must be attached through builder handles")]
    PrefilledChildren {
        /// Local row index of the particle.
        index: usize,
    },

    /// A truth label points past the end of the event's MC table.
    #[error("particle {particle}: truth label {label} exceeds the MC table ({rows} rows)")]
    LabelOutOfRange {
        /// Local row index of the labeled particle.
        particle: usize,
        /// The out-of-range local truth index.
        label: usize,
        /// Number of MC rows in the event.
        rows: usize,
    },

    /// A particle handle does not belong to this builder.
    #[error("stale particle handle: row {index} does not exist in this event")]
    StaleParticleHandle {
        /// The handle's local index.
        index: usize,
    },

    /// An MC handle does not belong to this builder.
    #[error("stale MC handle: row {index} does not exist in this event")]
    StaleMcHandle {
        /// The handle's local index.
        index: usize,
    },

    /// The optional third-prong columns of a heavy-flavor candidate are set
    /// inconsistently.
    #[error("hf candidate {index}: third-prong columns must be set together (id, pt, eta, phi)")]
    ThirdProngMismatch {
        /// Local row index of the candidate.
        index: usize,
    },

    /// The configured mixing binning cannot define bins.
    #[error("invalid mixing binning: {0}")]
    InvalidBinning(#[from] InvalidBinning),
}

// Handles are stamped with the issuing builder so a handle presented to a
// different builder is rejected instead of silently resolving to whatever row
// shares its local index.
static NEXT_BUILDER_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque reference to a particle row inside one [`EventBuilder`].
///
/// Handles are the only way to attach daughters and labels, which makes
/// forward references and self-references unrepresentable through the API.
/// Each handle carries the identity of the builder that issued it, so a
/// handle from another event is rejected as stale; commit still validates
/// the raw data as a final defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleHandle {
    builder: u64,
    local: usize,
}

/// Opaque reference to a truth row inside one [`EventBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McHandle {
    builder: u64,
    local: usize,
    ext_local: Option<usize>,
}

/// Local buffer for one event's full row set.
///
/// # Example
///
/// ```
/// use femtoderived::batch::{DerivedTables, EventBuilder};
/// use femtoderived::mixing::MixingBinning;
/// use femtoderived::selection::CutContainer;
/// use femtoderived::tables::{Collision, ExtParticle, Particle, ParticleType};
///
/// let collision = Collision {
///     pos_z: 1.2, mult_v0m: 35.0, mult_ntr: 27, sphericity: 0.6, mag_field: 0.5,
/// };
/// let mut event = EventBuilder::new(collision).downsample(true);
/// event.add_particle(
///     Particle {
///         collision_id: 0, pt: 1.1, eta: 0.2, phi: 2.3,
///         part_type: ParticleType::Track,
///         cut: CutContainer::from_bits(0b11), pid_cut: CutContainer::from_bits(0b1),
///         temp_fit_var: 0.01, children: Vec::new(),
///         m_lambda: 0.0, m_anti_lambda: 0.0, m_kaon: 0.0,
///     },
///     ExtParticle::default(),
///     1042,
///     &[],
/// )?;
///
/// let mut tables = DerivedTables::new();
/// let id = tables.commit(event, &MixingBinning::default())?;
/// assert_eq!(id, 0);
/// assert_eq!(tables.particles().len(), 1);
/// # Ok::<(), femtoderived::batch::CommitError>(())
/// ```
#[derive(Debug)]
pub struct EventBuilder {
    id: u64,
    collision: Collision,
    mask: CollisionMask,
    downsample: bool,
    particles: Vec<Particle>,
    ext_particles: Vec<ExtParticle>,
    track_ids: Vec<i32>,
    labels: Vec<Option<usize>>,
    ext_labels: Vec<Option<usize>>,
    mc_particles: Vec<McParticle>,
    ext_mc_particles: Vec<ExtMcParticle>,
    hf_candidates: Vec<HfCandidate>,
    hf_candidate_mc: Vec<Option<HfCandidateMc>>,
    hf_mc_gen: Vec<HfCandidateMcGen>,
}

impl EventBuilder {
    /// Starts an event around its collision row.
    pub fn new(collision: Collision) -> Self {
        Self {
            id: NEXT_BUILDER_ID.fetch_add(1, Ordering::Relaxed),
            collision,
            mask: CollisionMask::default(),
            downsample: false,
            particles: Vec::new(),
            ext_particles: Vec::new(),
            track_ids: Vec::new(),
            labels: Vec::new(),
            ext_labels: Vec::new(),
            mc_particles: Vec::new(),
            ext_mc_particles: Vec::new(),
            hf_candidates: Vec::new(),
            hf_candidate_mc: Vec::new(),
            hf_mc_gen: Vec::new(),
        }
    }

    /// Sets the mixing-pool eligibility masks of the collision.
    pub fn mask(mut self, mask: CollisionMask) -> Self {
        self.mask = mask;
        self
    }

    /// Sets the downsampling flag of the collision.
    pub fn downsample(mut self, keep: bool) -> Self {
        self.downsample = keep;
        self
    }

    /// Appends a particle row together with its 1:1 companions.
    ///
    /// `children` lists the daughter rows for auto-correlation removal; every
    /// handle must come from an earlier `add_particle` call on this builder.
    /// The `collision_id` of the passed row is assigned at commit time and
    /// any pre-set value is overwritten; the `children` field must be empty.
    pub fn add_particle(
        &mut self,
        particle: Particle,
        ext: ExtParticle,
        track_id: i32,
        children: &[ParticleHandle],
    ) -> Result<ParticleHandle, CommitError> {
        let index = self.particles.len();
        if !particle.children.is_empty() {
            return Err(CommitError::PrefilledChildren { index });
        }
        if children.len() > 2 {
            return Err(CommitError::TooManyChildren {
                index,
                count: children.len(),
            });
        }
        for child in children {
            if child.builder != self.id || child.local >= index {
                return Err(CommitError::StaleParticleHandle { index: child.local });
            }
        }

        let mut particle = particle;
        particle.children = children.iter().map(|c| c.local as u32).collect();
        self.particles.push(particle);
        self.ext_particles.push(ext);
        self.track_ids.push(track_id);
        self.labels.push(None);
        self.ext_labels.push(None);
        Ok(ParticleHandle {
            builder: self.id,
            local: index,
        })
    }

    /// Appends a truth row; `ext` is optional because extended truth output
    /// is a debug-level setting of the producer.
    pub fn add_mc_particle(&mut self, mc: McParticle, ext: Option<ExtMcParticle>) -> McHandle {
        let local = self.mc_particles.len();
        self.mc_particles.push(mc);
        let ext_local = ext.map(|row| {
            self.ext_mc_particles.push(row);
            self.ext_mc_particles.len() - 1
        });
        McHandle {
            builder: self.id,
            local,
            ext_local,
        }
    }

    /// Matches a particle to exactly one truth row. The label is decided once
    /// here and immutable after commit; unlabeled particles stay unmatched.
    ///
    /// A `Fake` or `WrongCollision` truth row is a legal target: the debug
    /// label pointing at the nearest-truth candidate is a representable state.
    pub fn label_particle(
        &mut self,
        particle: ParticleHandle,
        mc: McHandle,
    ) -> Result<(), CommitError> {
        if particle.builder != self.id || particle.local >= self.particles.len() {
            return Err(CommitError::StaleParticleHandle {
                index: particle.local,
            });
        }
        if mc.builder != self.id || mc.local >= self.mc_particles.len() {
            return Err(CommitError::StaleMcHandle { index: mc.local });
        }
        self.labels[particle.local] = Some(mc.local);
        self.ext_labels[particle.local] = mc.ext_local;
        Ok(())
    }

    /// Appends a heavy-flavor candidate with its optional MC companion. The
    /// `collision_id` of the passed row is assigned at commit time.
    pub fn add_hf_candidate(
        &mut self,
        candidate: HfCandidate,
        mc: Option<HfCandidateMc>,
    ) -> Result<(), CommitError> {
        if !candidate.third_prong_consistent() {
            return Err(CommitError::ThirdProngMismatch {
                index: self.hf_candidates.len(),
            });
        }
        self.hf_candidates.push(candidate);
        self.hf_candidate_mc.push(mc);
        Ok(())
    }

    /// Appends a generator-level heavy-flavor row. The `collision_id` of the
    /// passed row is assigned at commit time.
    pub fn add_hf_mc_gen(&mut self, generated: HfCandidateMcGen) {
        self.hf_mc_gen.push(generated);
    }

    /// Number of particle rows buffered so far.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Re-checks every invariant on the raw buffered data. The builder API
    /// cannot produce violations, but commit trusts nothing it did not check.
    fn validate(&self) -> Result<(), CommitError> {
        for (index, particle) in self.particles.iter().enumerate() {
            if particle.children.len() > 2 {
                return Err(CommitError::TooManyChildren {
                    index,
                    count: particle.children.len(),
                });
            }
            for &child in &particle.children {
                let child = child as usize;
                if child >= self.particles.len() {
                    return Err(CommitError::ChildOutOfRange {
                        parent: index,
                        child,
                    });
                }
                if child == index {
                    return Err(CommitError::SelfReference { index });
                }
                if child > index {
                    return Err(CommitError::ForwardChildReference {
                        parent: index,
                        child,
                    });
                }
            }
        }
        for (particle, label) in self.labels.iter().enumerate() {
            if let Some(label) = *label {
                if label >= self.mc_particles.len() {
                    return Err(CommitError::LabelOutOfRange {
                        particle,
                        label,
                        rows: self.mc_particles.len(),
                    });
                }
            }
        }
        for (index, candidate) in self.hf_candidates.iter().enumerate() {
            if !candidate.third_prong_consistent() {
                return Err(CommitError::ThirdProngMismatch { index });
            }
        }
        Ok(())
    }
}

/// The committed, read-only store of derived tables.
///
/// Row indices are dense and production-ordered: the value returned by
/// [`commit`](DerivedTables::commit) is the collision id every row of that
/// event references. All accessors hand out plain slices; the store has no
/// interior mutability, so shared read-side scans are lock-free.
#[derive(Debug, Default)]
pub struct DerivedTables {
    collisions: Vec<Collision>,
    masks: Vec<CollisionMask>,
    downsample: Vec<bool>,
    hash_bins: Vec<i32>,
    particles: Vec<Particle>,
    ext_particles: Vec<ExtParticle>,
    track_ids: Vec<i32>,
    labels: Vec<McLabel>,
    ext_labels: Vec<McLabel>,
    mc_particles: Vec<McParticle>,
    ext_mc_particles: Vec<ExtMcParticle>,
    hf_candidates: Vec<HfCandidate>,
    hf_candidate_mc: Vec<Option<HfCandidateMc>>,
    hf_mc_gen: Vec<HfCandidateMcGen>,
}

impl DerivedTables {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits one event: validates the binning configuration and the
    /// buffered rows, computes the mixing bin from `binning`, rewrites local
    /// references to final global indices and appends everything. Returns
    /// the collision id.
    ///
    /// On error nothing is appended; the event is discarded with the builder.
    pub fn commit(
        &mut self,
        event: EventBuilder,
        binning: &MixingBinning,
    ) -> Result<u32, CommitError> {
        binning.validate()?;
        event.validate()?;

        let collision_id = self.collisions.len() as u32;
        let particle_base = self.particles.len() as u32;
        let mc_base = self.mc_particles.len() as u32;
        let ext_mc_base = self.ext_mc_particles.len() as u32;

        let bin = binning.hash_bin(&event.collision);

        log::debug!(
            "committing collision {collision_id}: {} particles, {} mc rows, {} hf candidates, bin {bin}",
            event.particles.len(),
            event.mc_particles.len(),
            event.hf_candidates.len(),
        );

        self.collisions.push(event.collision);
        self.masks.push(event.mask);
        self.downsample.push(event.downsample);
        self.hash_bins.push(bin);

        for mut particle in event.particles {
            particle.collision_id = collision_id;
            for child in &mut particle.children {
                *child += particle_base;
            }
            self.particles.push(particle);
        }
        self.ext_particles.extend(event.ext_particles);
        self.track_ids.extend(event.track_ids);
        self.labels.extend(
            event
                .labels
                .iter()
                .map(|l| l.map_or(McLabel::NONE, |i| McLabel::matched(mc_base + i as u32))),
        );
        self.ext_labels.extend(
            event
                .ext_labels
                .iter()
                .map(|l| l.map_or(McLabel::NONE, |i| McLabel::matched(ext_mc_base + i as u32))),
        );
        self.mc_particles.extend(event.mc_particles);
        self.ext_mc_particles.extend(event.ext_mc_particles);

        for mut candidate in event.hf_candidates {
            candidate.collision_id = collision_id;
            self.hf_candidates.push(candidate);
        }
        self.hf_candidate_mc.extend(event.hf_candidate_mc);
        for mut generated in event.hf_mc_gen {
            generated.collision_id = collision_id;
            self.hf_mc_gen.push(generated);
        }

        Ok(collision_id)
    }

    /// Committed collision rows.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// 1:1 mixing-pool eligibility masks.
    pub fn masks(&self) -> &[CollisionMask] {
        &self.masks
    }

    /// 1:1 downsampling flags.
    pub fn downsample(&self) -> &[bool] {
        &self.downsample
    }

    /// 1:1 event-mixing bins.
    pub fn hash_bins(&self) -> &[i32] {
        &self.hash_bins
    }

    /// Committed particle rows.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// 1:1 detector-level debug attributes.
    pub fn ext_particles(&self) -> &[ExtParticle] {
        &self.ext_particles
    }

    /// 1:1 raw external track ids.
    pub fn track_ids(&self) -> &[i32] {
        &self.track_ids
    }

    /// 1:1 nullable truth links.
    pub fn labels(&self) -> &[McLabel] {
        &self.labels
    }

    /// 1:1 nullable extended-truth links.
    pub fn ext_labels(&self) -> &[McLabel] {
        &self.ext_labels
    }

    /// Committed truth rows.
    pub fn mc_particles(&self) -> &[McParticle] {
        &self.mc_particles
    }

    /// Extended truth rows (own indexing, linked via
    /// [`ext_labels`](Self::ext_labels)).
    pub fn ext_mc_particles(&self) -> &[ExtMcParticle] {
        &self.ext_mc_particles
    }

    /// Committed heavy-flavor candidates.
    pub fn hf_candidates(&self) -> &[HfCandidate] {
        &self.hf_candidates
    }

    /// 1:1 nullable heavy-flavor MC companions.
    pub fn hf_candidate_mc(&self) -> &[Option<HfCandidateMc>] {
        &self.hf_candidate_mc
    }

    /// Generator-level heavy-flavor rows.
    pub fn hf_mc_gen(&self) -> &[HfCandidateMcGen] {
        &self.hf_mc_gen
    }

    /// Particles of one collision, with their global row indices.
    pub fn particles_for_collision(
        &self,
        collision_id: u32,
    ) -> impl Iterator<Item = (u32, &Particle)> {
        self.particles
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.collision_id == collision_id)
            .map(|(i, p)| (i as u32, p))
    }

    /// Current row counts across the store.
    pub fn stats(&self) -> TableStats {
        TableStats {
            collisions: self.collisions.len(),
            particles: self.particles.len(),
            mc_particles: self.mc_particles.len(),
            hf_candidates: self.hf_candidates.len(),
            hf_mc_gen: self.hf_mc_gen.len(),
        }
    }
}

/// Row counts of a committed store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Number of committed collisions.
    pub collisions: usize,
    /// Number of committed particles.
    pub particles: usize,
    /// Number of committed truth rows.
    pub mc_particles: usize,
    /// Number of committed heavy-flavor candidates.
    pub hf_candidates: usize,
    /// Number of generator-level heavy-flavor rows.
    pub hf_mc_gen: usize,
}

impl std::fmt::Display for TableStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} collisions, {} particles, {} mc particles, {} hf candidates ({} generated)",
            self.collisions, self.particles, self.mc_particles, self.hf_candidates, self.hf_mc_gen
        )
    }
}

/// Append-only sink for pair observables.
///
/// The analysis emits one row per analyzed pair per event; rows are never
/// updated or deleted.
#[derive(Debug, Default)]
pub struct PairResults {
    rows: Vec<HfPairResult>,
}

impl PairResults {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one pair row.
    pub fn push(&mut self, row: HfPairResult) {
        self.rows.push(row);
    }

    /// All rows appended so far.
    pub fn rows(&self) -> &[HfPairResult] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row was appended yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
