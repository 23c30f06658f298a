//! YAML configuration with command-line overrides
//!
//! A config file is read into a YAML value tree, `key.path=value` overrides
//! are merged on top, and the result is deserialised into a typed struct.
//! Override values are parsed as YAML, so `seed=7`, `patch_size=[64,64,64]`
//! and `checkpoint_target=val_loss` all take their natural types.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::io::configuration::{
    DEFAULT_COPICK_CONFIG_PATH, DEFAULT_PATCH_SIZE, DEFAULT_SEED, DEFAULT_VOLUME_SHAPE,
    KEY_PATH_SEPARATOR, OVERRIDE_SEPARATOR,
};
use crate::io::error::{Result, configuration_error, file_system_error};
use crate::training::checkpoint::SelectionTarget;

/// Workflow settings
///
/// Keys missing from the config file fall back to their defaults; keys the
/// struct doesn't know are ignored so one file can also carry training options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for every random number generator
    pub seed: u64,
    /// Tomogram shape (x, y, z) to plan patches for
    pub volume_shape: [usize; 3],
    /// Patch size (x, y, z)
    pub patch_size: [usize; 3],
    /// Metric used when choosing a checkpoint
    pub checkpoint_target: SelectionTarget,
    /// Destination of the copick project config
    pub copick_config_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            volume_shape: DEFAULT_VOLUME_SHAPE,
            patch_size: DEFAULT_PATCH_SIZE,
            checkpoint_target: SelectionTarget::default(),
            copick_config_path: PathBuf::from(DEFAULT_COPICK_CONFIG_PATH),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file and apply overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, an
    /// override is malformed, or the merged tree doesn't fit the schema
    pub fn load(path: &Path, overrides: &[String]) -> Result<Self> {
        load_config(path, overrides)
    }

    /// Apply overrides on top of the defaults, without a config file
    ///
    /// # Errors
    ///
    /// Returns an error if an override is malformed or produces a value that
    /// doesn't fit the schema
    pub fn from_overrides(overrides: &[String]) -> Result<Self> {
        let mut root = serde_yaml::to_value(Self::default())
            .map_err(|e| configuration_error(&"defaults", &e))?;
        apply_overrides(&mut root, overrides)?;
        serde_yaml::from_value(root).map_err(|e| configuration_error(&"overrides", &e))
    }
}

/// Read a YAML file, merge overrides, and deserialise into `T`
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, an
/// override is malformed, or the merged tree doesn't fit `T`
pub fn load_config<T: DeserializeOwned>(path: &Path, overrides: &[String]) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(file_system_error(path, "read"))?;
    let origin = path.display();

    let mut root: Value =
        serde_yaml::from_str(&contents).map_err(|e| configuration_error(&origin, &e))?;
    if root.is_null() {
        root = Value::Mapping(Mapping::new());
    }
    apply_overrides(&mut root, overrides)?;

    tracing::debug!(path = %origin, overrides = overrides.len(), "loaded configuration");

    serde_yaml::from_value(root).map_err(|e| configuration_error(&origin, &e))
}

/// Merge `key.path=value` overrides into a YAML tree, in order
///
/// Intermediate mappings are created as needed and a null root is treated as
/// an empty mapping.
///
/// # Errors
///
/// Returns an error if an override has no `=`, has an empty key segment, has
/// a value that isn't valid YAML, or descends into a non-mapping value
pub fn apply_overrides(root: &mut Value, overrides: &[String]) -> Result<()> {
    for raw in overrides {
        apply_override(root, raw)?;
    }
    Ok(())
}

fn apply_override(root: &mut Value, raw: &str) -> Result<()> {
    let origin = format!("override '{raw}'");
    let (key_path, raw_value) = raw
        .split_once(OVERRIDE_SEPARATOR)
        .ok_or_else(|| configuration_error(&origin, &"expected KEY=VALUE"))?;

    let segments: Vec<&str> = key_path.trim().split(KEY_PATH_SEPARATOR).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(configuration_error(&origin, &"key path has an empty segment"));
    }
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(configuration_error(&origin, &"missing key"));
    };

    let value: Value =
        serde_yaml::from_str(raw_value.trim()).map_err(|e| configuration_error(&origin, &e))?;

    let mut node = root;
    for &segment in parents {
        let mapping = as_mapping(node, &origin)?;
        let key = Value::String(segment.to_string());
        if !mapping.contains_key(&key) {
            mapping.insert(key.clone(), Value::Mapping(Mapping::new()));
        }
        node = mapping
            .get_mut(&key)
            .ok_or_else(|| configuration_error(&origin, &"failed to create key"))?;
    }

    as_mapping(node, &origin)?.insert(Value::String((*leaf).to_string()), value);
    Ok(())
}

fn as_mapping<'a>(node: &'a mut Value, origin: &str) -> Result<&'a mut Mapping> {
    if node.is_null() {
        *node = Value::Mapping(Mapping::new());
    }
    match node {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(configuration_error(
            &origin,
            &format!("cannot set a key inside non-mapping value {other:?}"),
        )),
    }
}
