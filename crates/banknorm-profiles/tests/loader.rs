//! Tests for TOML profile files and directory resolution.

use std::fs;

use banknorm_model::{DecimalConvention, HeaderRule, Role};
use banknorm_profiles::{ProfileError, ProfileRegistry, load_profile};

const SANTANDER: &str = r#"
name = "santander"
description = "Santander online banking export"
decimal = "comma"
date_formats = ["%d/%m/%Y"]

[header]
mode = "markers"
tokens = ["fecha operación"]

[aliases]
date = ["fecha operación"]
payee = ["concepto"]
amount = ["importe"]
"#;

#[test]
fn loads_profile_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("santander.toml");
    fs::write(&path, SANTANDER).expect("write profile");

    let profile = load_profile(&path).expect("load profile");
    assert_eq!(profile.name, "santander");
    assert_eq!(profile.decimal, DecimalConvention::Comma);
    assert_eq!(
        profile.header,
        HeaderRule::Markers {
            tokens: vec!["fecha operación".to_string()]
        }
    );
    assert_eq!(profile.aliases.for_role(Role::Payee), ["concepto"]);
}

#[test]
fn registry_falls_back_to_profile_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("santander.toml"), SANTANDER).expect("write profile");

    let registry = ProfileRegistry::builtin();
    let profile = registry
        .resolve_in(dir.path(), "Santander")
        .expect("resolve from dir");
    assert_eq!(profile.name, "santander");

    let builtin = registry
        .resolve_in(dir.path(), "bankinter")
        .expect("builtin wins");
    assert_eq!(builtin.header, HeaderRule::FixedOffset { skip: 3 });
}

#[test]
fn malformed_toml_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = \"broken\"\n[header]\nmode = \"sideways\"\n").expect("write profile");

    let err = load_profile(&path).unwrap_err();
    assert!(matches!(err, ProfileError::Toml { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn invalid_profile_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(
        &path,
        "name = \"empty\"\ndate_formats = []\n[header]\nmode = \"fixed_offset\"\nskip = 1\n[aliases]\n",
    )
    .expect("write profile");

    let err = load_profile(&path).unwrap_err();
    assert!(matches!(err, ProfileError::Invalid { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_profile(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ProfileError::Io { .. }));
}
