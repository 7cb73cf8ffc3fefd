use pretty_assertions::assert_eq;
use roster_synth::{ConfigError, DateWindow, SynthConfig, Synthesizer};
use std::io::Write;

#[test]
fn test_load_from_file_drives_synthesizer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
member_count = 12
application_count = 3
membership_id_prefix = "PHX"
seed = 99

[renewal_dates]
start = "2025-03-01"
end = "2025-03-31"
"#
    )
    .unwrap();

    let config = SynthConfig::load(file.path()).unwrap();
    assert_eq!(config.membership_id_prefix, "PHX");

    let mut synth = Synthesizer::from_config(config.clone());
    let members = synth.default_members();
    assert_eq!(members.len(), 12);
    assert_eq!(members[11].membership_id, "PHX-000012");
    let window = DateWindow::ymd((2025, 3, 1), (2025, 3, 31));
    assert!(members.iter().all(|m| window.contains(m.renewal_date)));
    assert_eq!(synth.default_applications().len(), 3);

    let again = Synthesizer::from_config(config).default_members();
    assert_eq!(members, again);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SynthConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
