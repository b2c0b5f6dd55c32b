//! # Derived-Table Schema Definitions
//!
//! This module defines the Apache Arrow schemas for every table of the
//! derived data model. The schemas are the interface boundary of the format:
//! an upstream producer fills record batches that satisfy them, downstream
//! analyses read them back, and nothing else is shared.
//!
//! ## Design rationale
//!
//! Each entity family is split into a narrow primary table and optional 1:1
//! companion tables (masks, debug attributes, truth links). Companions share
//! row indices with their primary table instead of carrying foreign-key
//! columns, so an analysis that ignores them pays nothing. Dense ids are row
//! positions in production order and are never materialized.
//!
//! ## Tables
//!
//! | Table | Cardinality | Contents |
//! |-------|-------------|----------|
//! | collisions | 1/event | vertex, multiplicities, sphericity, field |
//! | collision_masks | 1:1 collisions | mixing-pool eligibility bitmasks |
//! | downsample | 1:1 collisions | downsampling flag |
//! | hashes | 1:1 collisions | event-mixing bin |
//! | particles | n/collision | canonical triple, type tag, cut containers, children |
//! | ext_particles | 1:1 particles | cluster counts, DCA, PID separations, V0 geometry |
//! | track_refs | 1:1 particles | raw external track id |
//! | mc_particles | n/batch | truth origin, PDG, truth triple |
//! | ext_mc_particles | 1:1 mc_particles | mother PDG |
//! | mc_labels | 1:1 particles | nullable truth link |
//! | ext_mc_labels | 1:1 particles | nullable extended-truth link |
//! | hf_candidates | n/collision | prong ids/kinematics, ML scores, candidate kinematics |
//! | hf_candidates_mc | 1:1 hf_candidates | nullable MC flags |
//! | hf_mc_gen | n/collision | generator-level candidates |
//! | pair_results | O(n^2)/event | flat pair observables |
//!
//! Every schema carries the format version and its table name in the schema
//! metadata; fields carry human-readable descriptions and units.

mod builders;
/// Column name constants.
pub mod columns;
mod constants;
mod validation;

#[cfg(test)]
mod tests;

pub(crate) use builders::children_item_field;
pub use builders::{
    create_collision_mask_schema, create_collision_mask_schema_arc, create_collision_schema,
    create_collision_schema_arc, create_downsample_schema, create_downsample_schema_arc,
    create_ext_mc_label_schema, create_ext_mc_label_schema_arc, create_ext_mc_particle_schema,
    create_ext_mc_particle_schema_arc, create_ext_particle_schema, create_ext_particle_schema_arc,
    create_hash_schema, create_hash_schema_arc, create_hf_candidate_mc_schema,
    create_hf_candidate_mc_schema_arc, create_hf_candidate_schema, create_hf_candidate_schema_arc,
    create_hf_mc_gen_schema, create_hf_mc_gen_schema_arc, create_mc_label_schema,
    create_mc_label_schema_arc, create_mc_particle_schema, create_mc_particle_schema_arc,
    create_pair_result_schema, create_pair_result_schema_arc, create_particle_schema,
    create_particle_schema_arc, create_track_ref_schema, create_track_ref_schema_arc,
};
pub use constants::*;
pub use validation::{validate_table_schema, SchemaValidationError, TableKind};
