use super::*;
use arrow::datatypes::DataType;

#[test]
fn test_collision_schema_creation() {
    let schema = create_collision_schema();
    assert_eq!(schema.fields().len(), 5);

    assert!(schema.field_with_name(columns::POS_Z).is_ok());
    assert!(schema.field_with_name(columns::MULT_NTR).is_ok());
    assert!(schema.field_with_name(columns::MAG_FIELD).is_ok());
}

#[test]
fn test_particle_schema_creation() {
    let schema = create_particle_schema();
    assert_eq!(schema.fields().len(), 12);

    // canonical triple plus tags and containers
    assert!(schema.field_with_name(columns::PT).is_ok());
    assert!(schema.field_with_name(columns::ETA).is_ok());
    assert!(schema.field_with_name(columns::PHI).is_ok());
    assert!(schema.field_with_name(columns::CUT).is_ok());
    assert!(schema.field_with_name(columns::PID_CUT).is_ok());

    // derived quantities must NOT be persisted
    assert!(schema.field_with_name("theta").is_err());
    assert!(schema.field_with_name("px").is_err());
    assert!(schema.field_with_name("p").is_err());

    let children = schema.field_with_name(columns::CHILDREN).expect("children");
    assert!(matches!(children.data_type(), DataType::List(_)));
}

#[test]
fn test_fixed_representations() {
    // fixed widths: u32 masks, u8 tags, i8 signs
    let particles = create_particle_schema();
    assert_eq!(
        particles.field_with_name(columns::CUT).expect("cut").data_type(),
        &DataType::UInt32
    );
    assert_eq!(
        particles
            .field_with_name(columns::PART_TYPE)
            .expect("part_type")
            .data_type(),
        &DataType::UInt8
    );

    let ext = create_ext_particle_schema();
    assert_eq!(
        ext.field_with_name(columns::SIGN).expect("sign").data_type(),
        &DataType::Int8
    );

    let masks = create_collision_mask_schema();
    for name in [
        columns::BITMASK_TRACK_ONE,
        columns::BITMASK_TRACK_TWO,
        columns::BITMASK_TRACK_THREE,
    ] {
        assert_eq!(
            masks.field_with_name(name).expect("mask").data_type(),
            &DataType::UInt32
        );
    }
}

#[test]
fn test_nullable_columns() {
    let labels = create_mc_label_schema();
    assert!(labels
        .field_with_name(columns::MC_PARTICLE_ID)
        .expect("label")
        .is_nullable());

    let hf = create_hf_candidate_schema();
    assert!(hf.field_with_name(columns::PRONG2_ID).expect("prong2").is_nullable());
    assert!(!hf.field_with_name(columns::PRONG0_ID).expect("prong0").is_nullable());
    assert!(hf.field_with_name(columns::PRONG2_PT).expect("prong2 pt").is_nullable());
}

#[test]
fn test_pair_result_schema_is_flat() {
    let schema = create_pair_result_schema();
    assert_eq!(schema.fields().len(), 13);
    for field in schema.fields() {
        assert!(
            !matches!(field.data_type(), DataType::List(_) | DataType::Struct(_)),
            "pair-result column '{}' must be a flat scalar",
            field.name()
        );
    }
}

#[test]
fn test_schema_metadata() {
    let schema = create_particle_schema();
    assert_eq!(
        schema.metadata().get(KEY_FORMAT_VERSION).map(String::as_str),
        Some(FEMTO_FORMAT_VERSION)
    );
    assert_eq!(
        schema.metadata().get(KEY_TABLE_NAME).map(String::as_str),
        Some("particles")
    );

    let pt = schema.field_with_name(columns::PT).expect("pt");
    assert_eq!(pt.metadata().get(KEY_UNIT).map(String::as_str), Some("GeV/c"));
    assert!(pt.metadata().contains_key(KEY_DESCRIPTION));
}

#[test]
fn test_every_table_validates_against_itself() {
    let tables = [
        TableKind::Collisions,
        TableKind::CollisionMasks,
        TableKind::Downsample,
        TableKind::HashBins,
        TableKind::Particles,
        TableKind::ExtParticles,
        TableKind::TrackRefs,
        TableKind::McParticles,
        TableKind::ExtMcParticles,
        TableKind::McLabels,
        TableKind::ExtMcLabels,
        TableKind::HfCandidates,
        TableKind::HfCandidatesMc,
        TableKind::HfMcGen,
        TableKind::PairResults,
    ];
    for table in tables {
        let schema = table.schema();
        assert!(
            validate_table_schema(&schema, table).is_ok(),
            "table '{}' failed its own validation",
            table.name()
        );
        assert_eq!(
            schema.metadata().get(KEY_TABLE_NAME).map(String::as_str),
            Some(table.name())
        );
    }
}

#[test]
fn test_validation_rejects_missing_column() {
    let schema = create_collision_schema();
    let err = validate_table_schema(&schema, TableKind::Particles).expect_err("wrong table");
    assert!(matches!(err, SchemaValidationError::MissingColumn { .. }));
}

#[test]
fn test_validation_rejects_type_mismatch() {
    use arrow::datatypes::{Field, Schema};

    let reference = create_hash_schema();
    let wrong: Vec<Field> = reference
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Float64, f.is_nullable()))
        .collect();
    let err = validate_table_schema(&Schema::new(wrong), TableKind::HashBins)
        .expect_err("float bin column");
    assert!(matches!(err, SchemaValidationError::TypeMismatch { .. }));
}
