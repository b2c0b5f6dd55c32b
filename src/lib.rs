//! # femtoderived - Columnar Derived Tables for Femtoscopic Pair Analyses
//!
//! `femtoderived` implements the derived data model sitting between event
//! reconstruction and femtoscopic (particle-pair correlation) analyses: a set
//! of related columnar tables that a producer writes once per event batch and
//! downstream analyses consume read-only.
//!
//! ## Key Features
//!
//! - **Narrow primary tables, 1:1 companions**: each entity family splits
//!   into a lean analysis table plus optional companion tables (mixing masks,
//!   debug attributes, truth links) sharing its row indices, so the common
//!   path never pays for debug columns.
//!
//! - **Bit-packed selections**: per-particle selection and PID criteria live
//!   in 32-bit containers; a whole selection configuration is one
//!   `(mask & required) == required` test per row.
//!
//! - **Derived kinematics**: only the canonical `pt`/`eta`/`phi` triple is
//!   stored; theta, px, py, pz and p are computed on access and never
//!   persisted.
//!
//! - **Atomic per-event commits**: an event is buffered locally and merged
//!   into the store in one validated step; a failed commit changes nothing.
//!
//! - **Deterministic event-mixing bins**: each collision gets an integer
//!   mixing bin, a pure function of its vertex and multiplicities under a
//!   configured binning.
//!
//! - **Arrow export**: every table converts to an Apache Arrow `RecordBatch`
//!   with a versioned, metadata-annotated schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use femtoderived::batch::{DerivedTables, EventBuilder};
//! use femtoderived::mixing::MixingBinning;
//! use femtoderived::selection::CutContainer;
//! use femtoderived::tables::{Collision, ExtParticle, Particle, ParticleType};
//!
//! let mut tables = DerivedTables::new();
//! let binning = MixingBinning::default();
//!
//! let mut event = EventBuilder::new(Collision {
//!     pos_z: 1.2,
//!     mult_v0m: 35.0,
//!     mult_ntr: 27,
//!     sphericity: 0.6,
//!     mag_field: 0.5,
//! });
//! event.add_particle(
//!     Particle {
//!         collision_id: 0,
//!         pt: 1.1,
//!         eta: 0.2,
//!         phi: 2.3,
//!         part_type: ParticleType::Track,
//!         cut: CutContainer::from_bits(0b0110),
//!         pid_cut: CutContainer::from_bits(0b0001),
//!         temp_fit_var: 0.01,
//!         children: Vec::new(),
//!         m_lambda: 0.0,
//!         m_anti_lambda: 0.0,
//!         m_kaon: 0.0,
//!     },
//!     ExtParticle::default(),
//!     1042,
//!     &[],
//! )?;
//!
//! let collision_id = tables.commit(event, &binning)?;
//!
//! // select particles passing a required-bit mask
//! let required = CutContainer::from_bits(0b0010);
//! let selected = tables
//!     .particles_for_collision(collision_id)
//!     .filter(|(_, p)| p.cut.matches(required))
//!     .count();
//! assert_eq!(selected, 1);
//!
//! // export to Arrow
//! let batch = tables.particle_batch()?;
//! assert_eq!(batch.num_rows(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`tables`]: row types of every table family (collision, particle, MC
//!   truth, heavy flavor, pair results)
//! - [`selection`]: bit-packed cut containers and versioned cut layouts
//! - [`kinematics`]: derived momentum-frame quantities
//! - [`mixing`]: deterministic event-mixing bin assignment
//! - [`batch`]: per-event building, atomic commit, the committed store and
//!   Arrow export
//! - [`schema`]: Arrow schema definitions and compatibility validation
//! - [`conventions`]: externally versioned naming and layout conventions
//! - [`quality`]: post-production integrity audit
//!
//! ## Data Model
//!
//! | Table | Cardinality | Contents |
//! |-------|-------------|----------|
//! | collisions | 1/event | vertex, multiplicities, sphericity, field |
//! | collision_masks | 1:1 | mixing-pool eligibility bitmasks |
//! | downsample | 1:1 | downsampling flag |
//! | hashes | 1:1 | event-mixing bin |
//! | particles | n/collision | kinematic triple, type tag, cut containers, children |
//! | ext_particles | 1:1 | detector-level debug attributes |
//! | track_refs | 1:1 | raw external track id |
//! | mc_particles | n/batch | truth origin, PDG code, truth triple |
//! | mc_labels | 1:1 particles | nullable truth link |
//! | hf_candidates | n/collision | 2-3 prong heavy-flavor candidates |
//! | hf_mc_gen | n/collision | generator-level heavy-flavor rows |
//! | pair_results | O(n^2)/event | flat pair observables |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod conventions;
pub mod kinematics;
pub mod mixing;
pub mod quality;
pub mod schema;
pub mod selection;
pub mod tables;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::batch::{
        CommitError, DerivedTables, EventBuilder, McHandle, PairResults, ParticleHandle,
        TableStats,
    };
    pub use crate::conventions::ConventionManifest;
    pub use crate::kinematics::Kinematics;
    pub use crate::mixing::{CollisionBinning, InvalidBinning, MixingBinning};
    pub use crate::quality::{audit, CheckStatus, QualityReport};
    pub use crate::schema::{validate_table_schema, SchemaValidationError, TableKind};
    pub use crate::selection::{BitMaskType, CutContainer, CutLayout, CUT_CONTAINER_BITS};
    pub use crate::tables::{
        Collision, CollisionMask, ExtMcParticle, ExtParticle, HfCandidate, HfCandidateMc,
        HfCandidateMcGen, HfPairResult, McLabel, McParticle, McType, MomentumType, Particle,
        ParticleOriginMcTruth, ParticleType, TrackType,
    };
}
