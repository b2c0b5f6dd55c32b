use arrow::datatypes::Schema;

use super::builders;

/// The tables of the derived data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Per-event collision rows.
    Collisions,
    /// 1:1 mixing-pool eligibility masks.
    CollisionMasks,
    /// 1:1 downsampling flags.
    Downsample,
    /// 1:1 event-mixing hash bins.
    HashBins,
    /// Selected particles.
    Particles,
    /// 1:1 detector-level debug attributes.
    ExtParticles,
    /// 1:1 raw external track ids.
    TrackRefs,
    /// Truth-level particles.
    McParticles,
    /// 1:1 truth debug attributes.
    ExtMcParticles,
    /// Nullable particle → truth links.
    McLabels,
    /// Nullable particle → extended-truth links.
    ExtMcLabels,
    /// Heavy-flavor candidates.
    HfCandidates,
    /// Nullable 1:1 heavy-flavor MC companions.
    HfCandidatesMc,
    /// Generator-level heavy-flavor rows.
    HfMcGen,
    /// Append-only pair observables.
    PairResults,
}

impl TableKind {
    /// Table name as stored in the schema metadata.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Collisions => "collisions",
            TableKind::CollisionMasks => "collision_masks",
            TableKind::Downsample => "downsample",
            TableKind::HashBins => "hashes",
            TableKind::Particles => "particles",
            TableKind::ExtParticles => "ext_particles",
            TableKind::TrackRefs => "track_refs",
            TableKind::McParticles => "mc_particles",
            TableKind::ExtMcParticles => "ext_mc_particles",
            TableKind::McLabels => "mc_labels",
            TableKind::ExtMcLabels => "ext_mc_labels",
            TableKind::HfCandidates => "hf_candidates",
            TableKind::HfCandidatesMc => "hf_candidates_mc",
            TableKind::HfMcGen => "hf_mc_gen",
            TableKind::PairResults => "pair_results",
        }
    }

    /// Reference schema of this table.
    pub fn schema(self) -> Schema {
        match self {
            TableKind::Collisions => builders::create_collision_schema(),
            TableKind::CollisionMasks => builders::create_collision_mask_schema(),
            TableKind::Downsample => builders::create_downsample_schema(),
            TableKind::HashBins => builders::create_hash_schema(),
            TableKind::Particles => builders::create_particle_schema(),
            TableKind::ExtParticles => builders::create_ext_particle_schema(),
            TableKind::TrackRefs => builders::create_track_ref_schema(),
            TableKind::McParticles => builders::create_mc_particle_schema(),
            TableKind::ExtMcParticles => builders::create_ext_mc_particle_schema(),
            TableKind::McLabels => builders::create_mc_label_schema(),
            TableKind::ExtMcLabels => builders::create_ext_mc_label_schema(),
            TableKind::HfCandidates => builders::create_hf_candidate_schema(),
            TableKind::HfCandidatesMc => builders::create_hf_candidate_mc_schema(),
            TableKind::HfMcGen => builders::create_hf_mc_gen_schema(),
            TableKind::PairResults => builders::create_pair_result_schema(),
        }
    }
}

/// Validates that a schema is compatible with one of the derived tables.
///
/// Returns `Ok(())` if the schema contains all required columns of the table
/// with the expected types, or an error describing the incompatibility.
/// Extra columns are tolerated so productions can append debug columns
/// without breaking older readers.
pub fn validate_table_schema(schema: &Schema, table: TableKind) -> Result<(), SchemaValidationError> {
    let reference = table.schema();

    for expected in reference.fields() {
        match schema.field_with_name(expected.name()) {
            Ok(found) => {
                if found.data_type() != expected.data_type() {
                    return Err(SchemaValidationError::TypeMismatch {
                        table: table.name(),
                        column: expected.name().to_string(),
                        expected: format!("{:?}", expected.data_type()),
                        found: format!("{:?}", found.data_type()),
                    });
                }
            }
            Err(_) => {
                return Err(SchemaValidationError::MissingColumn {
                    table: table.name(),
                    column: expected.name().to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Errors that can occur during schema validation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    /// A required column is missing from the schema.
    #[error("table '{table}': missing required column: {column}")]
    MissingColumn {
        /// Table the schema was validated against.
        table: &'static str,
        /// Name of the missing column.
        column: String,
    },

    /// A column has an incorrect data type.
    #[error("table '{table}': type mismatch for column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Table the schema was validated against.
        table: &'static str,
        /// Name of the column with the type mismatch.
        column: String,
        /// Expected data type.
        expected: String,
        /// Actual data type found.
        found: String,
    },
}
