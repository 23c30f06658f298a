//! Tests for YAML settings and command-line overrides

#[cfg(test)]
mod tests {
    use serde_yaml::Value;
    use std::path::PathBuf;
    use tomotile::TilingError;
    use tomotile::io::configuration::{DEFAULT_PATCH_SIZE, DEFAULT_SEED};
    use tomotile::io::settings::{Settings, apply_overrides, load_config};
    use tomotile::training::checkpoint::SelectionTarget;

    fn overrides(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    // Tests file values are read and missing keys keep defaults
    // Verified by dropping the serde default attribute
    #[test]
    fn test_load_with_defaults() {
        let (_dir, path) = write_config("seed: 7\nvolume_shape: [92, 315, 315]\nlr: 0.001\n");
        let settings = Settings::load(&path, &[]).unwrap();

        assert_eq!(settings.seed, 7);
        assert_eq!(settings.volume_shape, [92, 315, 315]);
        assert_eq!(settings.patch_size, DEFAULT_PATCH_SIZE);
        assert_eq!(settings.checkpoint_target, SelectionTarget::DiceScore);
    }

    // Tests overrides win over file values and take YAML types
    // Verified by applying overrides before reading the file
    #[test]
    fn test_overrides_replace_file_values() {
        let (_dir, path) = write_config("seed: 7\npatch_size: [96, 96, 96]\n");
        let settings = Settings::load(
            &path,
            &overrides(&[
                "seed=11",
                "patch_size=[64, 32, 32]",
                "checkpoint_target=val_loss",
            ]),
        )
        .unwrap();

        assert_eq!(settings.seed, 11);
        assert_eq!(settings.patch_size, [64, 32, 32]);
        assert_eq!(settings.checkpoint_target, SelectionTarget::ValLoss);
    }

    // Tests an empty file behaves like an empty mapping
    // Verified by deserialising the null document directly
    #[test]
    fn test_empty_file() {
        let (_dir, path) = write_config("");
        assert_eq!(Settings::load(&path, &[]).unwrap(), Settings::default());
    }

    // Tests overrides without a file start from the defaults
    // Verified by starting from an empty tree
    #[test]
    fn test_from_overrides() {
        let settings =
            Settings::from_overrides(&overrides(&["copick_config_path=out/copick.json"])).unwrap();

        assert_eq!(settings.seed, DEFAULT_SEED);
        assert_eq!(settings.copick_config_path, PathBuf::from("out/copick.json"));
    }

    // Tests dotted keys create nested mappings
    // Verified by treating the whole key path as one key
    #[test]
    fn test_nested_override() {
        let mut root = Value::Null;
        apply_overrides(
            &mut root,
            &overrides(&["trainer.max_epochs=30", "trainer.devices=[0, 1]"]),
        )
        .unwrap();

        let expected: Value =
            serde_yaml::from_str("trainer:\n  max_epochs: 30\n  devices: [0, 1]\n").unwrap();
        assert_eq!(root, expected);
    }

    // Tests malformed overrides are rejected
    // Verified by ignoring overrides without '='
    #[test]
    fn test_malformed_overrides() {
        for bad in ["seed", "=3", "a..b=1", "seed=[1, 2"] {
            let mut root = Value::Null;
            assert!(
                matches!(
                    apply_overrides(&mut root, &overrides(&[bad])),
                    Err(TilingError::Configuration { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    // Tests descending into a scalar is rejected
    // Verified by overwriting the scalar with a mapping
    #[test]
    fn test_override_through_scalar() {
        let mut root: Value = serde_yaml::from_str("seed: 3\n").unwrap();
        assert!(apply_overrides(&mut root, &overrides(&["seed.inner=1"])).is_err());
    }

    // Tests schema mismatches and unreadable files map to distinct errors
    // Verified by collapsing both into one variant
    #[test]
    fn test_load_errors() {
        let (dir, path) = write_config("seed: many\n");
        assert!(matches!(
            Settings::load(&path, &[]),
            Err(TilingError::Configuration { .. })
        ));
        assert!(matches!(
            load_config::<Settings>(&dir.path().join("absent.yaml"), &[]),
            Err(TilingError::FileSystem { .. })
        ));
    }
}
