use crate::{CONFIG_FILE_NAME, ConfigError, SummaConfig};
use std::io::Write as _;
use summa_core::{
    container::{ConstructionError, MappingKind, SequenceKind},
    materialize::{KeySource, OutputSpec},
    number::AdditionPolicy,
    sizing::SizingPolicy,
};

#[test]
fn empty_document_uses_defaults() {
    let config = SummaConfig::from_toml_str("").expect("empty config");

    assert_eq!(config, SummaConfig::default());
    assert_eq!(config.engine_options().addition, AdditionPolicy::TrailingKind);
    assert_eq!(config.engine_options().sizing, SizingPolicy::Padded);
    assert_eq!(config.sequence_kind().expect("sequence"), SequenceKind::List);
    assert_eq!(config.mapping_kind().expect("mapping"), MappingKind::Insertion);
}

#[test]
fn full_document_parses() {
    let config = SummaConfig::from_toml_str(
        r#"
        [engine]
        addition = "widening"
        sizing = "exact"

        [output]
        sequence = "sorted-set"
        mapping = "hashed"
        "#,
    )
    .expect("full config");

    assert_eq!(config.engine().options().addition, AdditionPolicy::Widening);
    assert_eq!(config.engine().options().sizing, SizingPolicy::Exact);
    assert_eq!(
        config.output_spec(None).expect("sequence spec"),
        OutputSpec::Sequence(SequenceKind::SortedSet)
    );
    assert_eq!(
        config
            .output_spec(Some(KeySource::Positional))
            .expect("mapping spec"),
        OutputSpec::mapping(MappingKind::Hashed, KeySource::Positional)
    );
}

#[test]
fn unknown_descriptor_is_rejected_at_parse_time() {
    let err = SummaConfig::from_toml_str("[output]\nsequence = \"ring\"\n")
        .expect_err("unknown descriptor");

    assert!(matches!(
        err,
        ConfigError::Descriptor(ConstructionError::UnknownDescriptor { ref name, .. }) if name == "ring"
    ));
}

#[test]
fn unknown_policy_is_a_parse_error() {
    let err = SummaConfig::from_toml_str("[engine]\naddition = \"saturating\"\n")
        .expect_err("unknown policy");

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = SummaConfig::from_toml_str("[engine]\nmode = \"fast\"\n").expect_err("unknown key");

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file_from_disk() {
    let dir = std::env::temp_dir().join(format!("summa-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(CONFIG_FILE_NAME);
    let mut file = std::fs::File::create(&path).expect("create temp config");
    file.write_all(b"[engine]\nsizing = \"exact\"\n")
        .expect("write temp config");
    drop(file);

    let config = SummaConfig::load(&path).expect("load config");
    std::fs::remove_dir_all(&dir).expect("remove temp dir");

    assert_eq!(config.engine.sizing, SizingPolicy::Exact);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = SummaConfig::load("/nonexistent/summa.toml").expect_err("missing file");

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/summa.toml"));
}
