//! Checkpoint selection from explicit validation metrics
//!
//! Checkpoint paths are opaque. Metrics come from a manifest rather than
//! being parsed out of file names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, TilingError, file_system_error};

/// A saved model checkpoint and its validation metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    /// Location of the checkpoint file
    pub path: PathBuf,
    /// Mean Dice score on the validation set (higher is better)
    pub val_dice_mean: f64,
    /// Loss on the validation set (lower is better)
    pub val_loss: f64,
}

/// Metric used to rank checkpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTarget {
    /// Highest mean validation Dice score
    #[default]
    DiceScore,
    /// Lowest validation loss
    ValLoss,
}

impl SelectionTarget {
    // NaN scores map to -inf so they never win
    fn score(self, record: &CheckpointRecord) -> f64 {
        let score = match self {
            Self::DiceScore => record.val_dice_mean,
            Self::ValLoss => -record.val_loss,
        };
        if score.is_nan() { f64::NEG_INFINITY } else { score }
    }
}

/// Pick the best checkpoint for `target`
///
/// Ties go to the record listed first.
///
/// # Errors
///
/// Returns an error if `records` is empty
pub fn select_checkpoint(
    records: &[CheckpointRecord],
    target: SelectionTarget,
) -> Result<&CheckpointRecord> {
    let mut iter = records.iter();
    let first = iter.next().ok_or_else(|| TilingError::InvalidSourceData {
        reason: "No checkpoints to select from".to_string(),
    })?;

    let best = iter.fold(first, |best, candidate| {
        if target.score(candidate) > target.score(best) {
            candidate
        } else {
            best
        }
    });

    tracing::info!(
        path = %best.path.display(),
        val_dice_mean = best.val_dice_mean,
        val_loss = best.val_loss,
        ?target,
        "selected checkpoint"
    );

    Ok(best)
}

/// Read checkpoint records from a JSON array
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// records
pub fn load_manifest(path: &Path) -> Result<Vec<CheckpointRecord>> {
    let contents = std::fs::read_to_string(path).map_err(file_system_error(path, "read"))?;
    serde_json::from_str(&contents).map_err(|source| TilingError::Serialization {
        subject: "checkpoint manifest",
        source,
    })
}
