use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

use super::columns;
use super::constants::{FEMTO_FORMAT_VERSION, KEY_DESCRIPTION, KEY_FORMAT_VERSION, KEY_TABLE_NAME, KEY_UNIT};

/// Creates a Field annotated with a human-readable description.
fn field(name: &str, data_type: DataType, nullable: bool, description: &str) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert(KEY_DESCRIPTION.to_string(), description.to_string());
    Field::new(name, data_type, nullable).with_metadata(metadata)
}

/// Creates a Field annotated with a description and a physical unit.
fn field_with_unit(
    name: &str,
    data_type: DataType,
    nullable: bool,
    unit: &str,
    description: &str,
) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert(KEY_DESCRIPTION.to_string(), description.to_string());
    metadata.insert(KEY_UNIT.to_string(), unit.to_string());
    Field::new(name, data_type, nullable).with_metadata(metadata)
}

/// Wraps fields into a schema tagged with the format version and table name.
fn table_schema(table: &str, fields: Vec<Field>) -> Schema {
    let mut metadata = HashMap::new();
    metadata.insert(KEY_FORMAT_VERSION.to_string(), FEMTO_FORMAT_VERSION.to_string());
    metadata.insert(KEY_TABLE_NAME.to_string(), table.to_string());
    Schema::new(fields).with_metadata(metadata)
}

/// Element field of the `children` list column.
///
/// Kept in one place because the Arrow list builder and the schema must agree
/// on the element name and nullability exactly.
pub(crate) fn children_item_field() -> Arc<Field> {
    Arc::new(Field::new("item", DataType::UInt32, true))
}

/// Creates the collision-table schema.
///
/// The dense collision id is the row index in production order and is not
/// materialized as a column.
///
/// # Example
///
/// ```
/// use femtoderived::schema::create_collision_schema;
///
/// let schema = create_collision_schema();
/// assert_eq!(schema.fields().len(), 5);
/// ```
pub fn create_collision_schema() -> Schema {
    table_schema(
        "collisions",
        vec![
            field_with_unit(columns::POS_Z, DataType::Float32, false, "cm", "primary-vertex z position"),
            field(columns::MULT_V0M, DataType::Float32, false, "V0M multiplicity estimate"),
            field(columns::MULT_NTR, DataType::Int32, false, "charged-track multiplicity"),
            field(columns::SPHERICITY, DataType::Float32, false, "transverse sphericity"),
            field_with_unit(columns::MAG_FIELD, DataType::Float32, false, "kG", "magnetic field"),
        ],
    )
}

/// Returns an Arc-wrapped collision schema for shared ownership.
pub fn create_collision_schema_arc() -> Arc<Schema> {
    Arc::new(create_collision_schema())
}

/// Creates the schema of the 1:1 collision-mask companion table.
pub fn create_collision_mask_schema() -> Schema {
    table_schema(
        "collision_masks",
        vec![
            field(columns::BITMASK_TRACK_ONE, DataType::UInt32, false, "mixing-pool mask, first role"),
            field(columns::BITMASK_TRACK_TWO, DataType::UInt32, false, "mixing-pool mask, second role"),
            field(columns::BITMASK_TRACK_THREE, DataType::UInt32, false, "mixing-pool mask, third role"),
        ],
    )
}

/// Returns an Arc-wrapped collision-mask schema for shared ownership.
pub fn create_collision_mask_schema_arc() -> Arc<Schema> {
    Arc::new(create_collision_mask_schema())
}

/// Creates the schema of the 1:1 downsampling-flag companion table.
pub fn create_downsample_schema() -> Schema {
    table_schema(
        "downsample",
        vec![field(columns::DOWNSAMPLE, DataType::Boolean, false, "downsampling flag")],
    )
}

/// Returns an Arc-wrapped downsample schema for shared ownership.
pub fn create_downsample_schema_arc() -> Arc<Schema> {
    Arc::new(create_downsample_schema())
}

/// Creates the schema of the 1:1 event-mixing hash table.
pub fn create_hash_schema() -> Schema {
    table_schema(
        "hashes",
        vec![field(columns::BIN, DataType::Int32, false, "event-mixing bin")],
    )
}

/// Returns an Arc-wrapped hash schema for shared ownership.
pub fn create_hash_schema_arc() -> Arc<Schema> {
    Arc::new(create_hash_schema())
}

/// Creates the particle-table schema.
///
/// Only the canonical kinematic triple is stored; theta, px, py, pz and p are
/// dynamic columns derived on access (see [`crate::kinematics`]).
pub fn create_particle_schema() -> Schema {
    table_schema(
        "particles",
        vec![
            field(columns::COLLISION_ID, DataType::UInt32, false, "owning collision row"),
            field_with_unit(columns::PT, DataType::Float32, false, "GeV/c", "transverse momentum"),
            field(columns::ETA, DataType::Float32, false, "pseudorapidity"),
            field_with_unit(columns::PHI, DataType::Float32, false, "rad", "azimuthal angle"),
            field(columns::PART_TYPE, DataType::UInt8, false, "particle-type tag"),
            field(columns::CUT, DataType::UInt32, false, "selection bit container"),
            field(columns::PID_CUT, DataType::UInt32, false, "PID selection bit container"),
            field(columns::TEMP_FIT_VAR, DataType::Float32, false, "template-fit observable"),
            field(
                columns::CHILDREN,
                DataType::List(children_item_field()),
                false,
                "daughter row indices for auto-correlation removal",
            ),
            field_with_unit(columns::M_LAMBDA, DataType::Float32, false, "GeV/c^2", "mass, Lambda hypothesis"),
            field_with_unit(columns::M_ANTI_LAMBDA, DataType::Float32, false, "GeV/c^2", "mass, anti-Lambda hypothesis"),
            field_with_unit(columns::M_KAON, DataType::Float32, false, "GeV/c^2", "mass, K0s hypothesis"),
        ],
    )
}

/// Returns an Arc-wrapped particle schema for shared ownership.
pub fn create_particle_schema_arc() -> Arc<Schema> {
    Arc::new(create_particle_schema())
}

/// Creates the schema of the 1:1 extended (debug) particle table.
pub fn create_ext_particle_schema() -> Schema {
    table_schema(
        "ext_particles",
        vec![
            field(columns::SIGN, DataType::Int8, false, "track charge sign"),
            field(columns::TPC_N_CLS_FOUND, DataType::UInt8, false, "TPC clusters found"),
            field(columns::TPC_N_CLS_FINDABLE, DataType::UInt8, false, "findable TPC clusters"),
            field(columns::TPC_N_CLS_CROSSED_ROWS, DataType::UInt8, false, "crossed TPC rows"),
            field(columns::TPC_N_CLS_SHARED, DataType::UInt8, false, "shared TPC clusters"),
            field_with_unit(columns::TPC_INNER_PARAM, DataType::Float32, false, "GeV/c", "momentum at TPC inner wall"),
            field(columns::ITS_N_CLS, DataType::UInt8, false, "ITS clusters"),
            field(columns::ITS_N_CLS_INNER_BARREL, DataType::UInt8, false, "ITS inner-barrel clusters"),
            field_with_unit(columns::DCA_XY, DataType::Float32, false, "cm", "transverse DCA"),
            field_with_unit(columns::DCA_Z, DataType::Float32, false, "cm", "longitudinal DCA"),
            field(columns::TPC_SIGNAL, DataType::Float32, false, "TPC dE/dx signal"),
            field(columns::TPC_N_SIGMA_EL, DataType::Float32, false, "TPC n-sigma, electron"),
            field(columns::TPC_N_SIGMA_PI, DataType::Float32, false, "TPC n-sigma, pion"),
            field(columns::TPC_N_SIGMA_KA, DataType::Float32, false, "TPC n-sigma, kaon"),
            field(columns::TPC_N_SIGMA_PR, DataType::Float32, false, "TPC n-sigma, proton"),
            field(columns::TPC_N_SIGMA_DE, DataType::Float32, false, "TPC n-sigma, deuteron"),
            field(columns::TOF_N_SIGMA_EL, DataType::Float32, false, "TOF n-sigma, electron"),
            field(columns::TOF_N_SIGMA_PI, DataType::Float32, false, "TOF n-sigma, pion"),
            field(columns::TOF_N_SIGMA_KA, DataType::Float32, false, "TOF n-sigma, kaon"),
            field(columns::TOF_N_SIGMA_PR, DataType::Float32, false, "TOF n-sigma, proton"),
            field(columns::TOF_N_SIGMA_DE, DataType::Float32, false, "TOF n-sigma, deuteron"),
            field_with_unit(columns::DAUGH_DCA, DataType::Float32, false, "cm", "DCA between daughters"),
            field_with_unit(columns::TRANS_RADIUS, DataType::Float32, false, "cm", "decay-vertex transverse radius"),
            field_with_unit(columns::DECAY_VTX_X, DataType::Float32, false, "cm", "decay-vertex x"),
            field_with_unit(columns::DECAY_VTX_Y, DataType::Float32, false, "cm", "decay-vertex y"),
            field_with_unit(columns::DECAY_VTX_Z, DataType::Float32, false, "cm", "decay-vertex z"),
        ],
    )
}

/// Returns an Arc-wrapped extended-particle schema for shared ownership.
pub fn create_ext_particle_schema_arc() -> Arc<Schema> {
    Arc::new(create_ext_particle_schema())
}

/// Creates the schema of the 1:1 track-reference table mapping each particle
/// row to its raw external track id.
pub fn create_track_ref_schema() -> Schema {
    table_schema(
        "track_refs",
        vec![field(columns::TRACK_ID, DataType::Int32, false, "raw external track id")],
    )
}

/// Returns an Arc-wrapped track-reference schema for shared ownership.
pub fn create_track_ref_schema_arc() -> Arc<Schema> {
    Arc::new(create_track_ref_schema())
}

/// Creates the MC-particle-table schema.
pub fn create_mc_particle_schema() -> Schema {
    table_schema(
        "mc_particles",
        vec![
            field(columns::ORIGIN, DataType::UInt8, false, "MC-origin classification tag"),
            field(columns::PDG_CODE, DataType::Int32, false, "signed PDG code"),
            field_with_unit(columns::PT, DataType::Float32, false, "GeV/c", "truth transverse momentum"),
            field(columns::ETA, DataType::Float32, false, "truth pseudorapidity"),
            field_with_unit(columns::PHI, DataType::Float32, false, "rad", "truth azimuthal angle"),
        ],
    )
}

/// Returns an Arc-wrapped MC-particle schema for shared ownership.
pub fn create_mc_particle_schema_arc() -> Arc<Schema> {
    Arc::new(create_mc_particle_schema())
}

/// Creates the schema of the 1:1 extended MC-particle table.
pub fn create_ext_mc_particle_schema() -> Schema {
    table_schema(
        "ext_mc_particles",
        vec![field(columns::MOTHER_PDG, DataType::Int32, false, "PDG code of the primary mother")],
    )
}

/// Returns an Arc-wrapped extended-MC-particle schema for shared ownership.
pub fn create_ext_mc_particle_schema_arc() -> Arc<Schema> {
    Arc::new(create_ext_mc_particle_schema())
}

/// Creates the schema of the nullable particle → MC-particle label table.
pub fn create_mc_label_schema() -> Schema {
    table_schema(
        "mc_labels",
        vec![field(columns::MC_PARTICLE_ID, DataType::UInt32, true, "matched truth row, null if unmatched")],
    )
}

/// Returns an Arc-wrapped MC-label schema for shared ownership.
pub fn create_mc_label_schema_arc() -> Arc<Schema> {
    Arc::new(create_mc_label_schema())
}

/// Creates the schema of the nullable particle → extended-MC-particle label
/// table.
pub fn create_ext_mc_label_schema() -> Schema {
    table_schema(
        "ext_mc_labels",
        vec![field(columns::EXT_MC_PARTICLE_ID, DataType::UInt32, true, "matched extended truth row, null if unmatched")],
    )
}

/// Returns an Arc-wrapped extended-MC-label schema for shared ownership.
pub fn create_ext_mc_label_schema_arc() -> Arc<Schema> {
    Arc::new(create_ext_mc_label_schema())
}

/// Creates the heavy-flavor candidate-table schema.
///
/// Third-prong columns are nullable: a 2-prong candidate stores null for all
/// four of them.
pub fn create_hf_candidate_schema() -> Schema {
    table_schema(
        "hf_candidates",
        vec![
            field(columns::COLLISION_ID, DataType::UInt32, false, "owning collision row"),
            field(columns::CHARGE, DataType::Int8, false, "candidate charge"),
            field(columns::PRONG0_ID, DataType::Int32, false, "external track id, prong 0"),
            field(columns::PRONG1_ID, DataType::Int32, false, "external track id, prong 1"),
            field(columns::PRONG2_ID, DataType::Int32, true, "external track id, prong 2"),
            field_with_unit(columns::PRONG0_PT, DataType::Float32, false, "GeV/c", "pt, prong 0"),
            field_with_unit(columns::PRONG1_PT, DataType::Float32, false, "GeV/c", "pt, prong 1"),
            field_with_unit(columns::PRONG2_PT, DataType::Float32, true, "GeV/c", "pt, prong 2"),
            field(columns::PRONG0_ETA, DataType::Float32, false, "eta, prong 0"),
            field(columns::PRONG1_ETA, DataType::Float32, false, "eta, prong 1"),
            field(columns::PRONG2_ETA, DataType::Float32, true, "eta, prong 2"),
            field_with_unit(columns::PRONG0_PHI, DataType::Float32, false, "rad", "phi, prong 0"),
            field_with_unit(columns::PRONG1_PHI, DataType::Float32, false, "rad", "phi, prong 1"),
            field_with_unit(columns::PRONG2_PHI, DataType::Float32, true, "rad", "phi, prong 2"),
            field(columns::CANDIDATE_SEL_FLAG, DataType::Int8, false, "candidate selection flag"),
            field(columns::BDT_BKG, DataType::Float32, false, "ML background score"),
            field(columns::BDT_PROMPT, DataType::Float32, false, "ML prompt score"),
            field(columns::BDT_FD, DataType::Float32, false, "ML feed-down score"),
            field_with_unit(columns::M, DataType::Float32, false, "GeV/c^2", "invariant mass"),
            field_with_unit(columns::PT, DataType::Float32, false, "GeV/c", "transverse momentum"),
            field_with_unit(columns::P, DataType::Float32, false, "GeV/c", "total momentum"),
            field(columns::ETA, DataType::Float32, false, "pseudorapidity"),
            field_with_unit(columns::PHI, DataType::Float32, false, "rad", "azimuthal angle"),
            field(columns::Y, DataType::Float32, false, "rapidity"),
        ],
    )
}

/// Returns an Arc-wrapped heavy-flavor candidate schema for shared ownership.
pub fn create_hf_candidate_schema_arc() -> Arc<Schema> {
    Arc::new(create_hf_candidate_schema())
}

/// Creates the schema of the nullable 1:1 heavy-flavor MC companion table.
pub fn create_hf_candidate_mc_schema() -> Schema {
    table_schema(
        "hf_candidates_mc",
        vec![
            field(columns::FLAG_MC, DataType::Int8, true, "decay-channel flag, null if unmatched"),
            field(columns::ORIGIN_MC_REC, DataType::Int8, true, "prompt/non-prompt origin, null if unmatched"),
        ],
    )
}

/// Returns an Arc-wrapped heavy-flavor MC schema for shared ownership.
pub fn create_hf_candidate_mc_schema_arc() -> Arc<Schema> {
    Arc::new(create_hf_candidate_mc_schema())
}

/// Creates the generator-level heavy-flavor table schema.
pub fn create_hf_mc_gen_schema() -> Schema {
    table_schema(
        "hf_mc_gen",
        vec![
            field(columns::COLLISION_ID, DataType::UInt32, false, "owning collision row"),
            field_with_unit(columns::PT, DataType::Float32, false, "GeV/c", "generated transverse momentum"),
            field(columns::ETA, DataType::Float32, false, "generated pseudorapidity"),
            field_with_unit(columns::PHI, DataType::Float32, false, "rad", "generated azimuthal angle"),
            field(columns::Y, DataType::Float32, false, "generated rapidity"),
            field(columns::FLAG_MC, DataType::Int8, false, "decay-channel flag"),
            field(columns::ORIGIN_MC_GEN, DataType::Int8, false, "prompt/non-prompt origin"),
        ],
    )
}

/// Returns an Arc-wrapped generator-level heavy-flavor schema for shared
/// ownership.
pub fn create_hf_mc_gen_schema_arc() -> Arc<Schema> {
    Arc::new(create_hf_mc_gen_schema())
}

/// Creates the pair-result-table schema.
///
/// The layout is deliberately flat: scalars only, no list or index columns,
/// because this table grows with the square of the particle count per event.
pub fn create_pair_result_schema() -> Schema {
    table_schema(
        "pair_results",
        vec![
            field_with_unit(columns::M, DataType::Float32, false, "GeV/c^2", "candidate invariant mass"),
            field_with_unit(columns::PT, DataType::Float32, false, "GeV/c", "candidate transverse momentum"),
            field_with_unit(columns::PT_ASSOC, DataType::Float32, false, "GeV/c", "associated-particle transverse momentum"),
            field(columns::BDT_BKG, DataType::Float32, false, "ML background score"),
            field(columns::BDT_PROMPT, DataType::Float32, false, "ML prompt score"),
            field(columns::BDT_FD, DataType::Float32, false, "ML feed-down score"),
            field_with_unit(columns::K_STAR, DataType::Float32, false, "GeV/c", "pair relative momentum"),
            field_with_unit(columns::K_T, DataType::Float32, false, "GeV/c", "pair average transverse momentum"),
            field_with_unit(columns::M_T, DataType::Float32, false, "GeV/c^2", "pair transverse mass"),
            field(columns::MULT, DataType::Int32, false, "charged-track multiplicity"),
            field(columns::MULT_PERCENTILE, DataType::Float32, false, "multiplicity percentile"),
            field(columns::PAIR_SIGN, DataType::Int8, false, "pair sign combination"),
            field(columns::PROCESS_TYPE, DataType::Int64, false, "process-type tag"),
        ],
    )
}

/// Returns an Arc-wrapped pair-result schema for shared ownership.
pub fn create_pair_result_schema_arc() -> Arc<Schema> {
    Arc::new(create_pair_result_schema())
}
