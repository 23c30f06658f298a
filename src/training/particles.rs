//! Flat particle tables built from per-label coordinate lists

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::io::configuration::PARTICLE_CSV_HEADER;
use crate::io::error::{Result, TilingError};

/// One picked particle in an experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    /// Experiment (tomogram run) the particle was picked in
    pub experiment: String,
    /// Particle type label
    pub particle_type: String,
    /// Position along x
    pub x: f64,
    /// Position along y
    pub y: f64,
    /// Position along z
    pub z: f64,
}

/// Table of particle records, one row per coordinate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleTable {
    records: Vec<ParticleRecord>,
}

impl ParticleTable {
    /// Flatten labelled coordinate lists into rows for one experiment
    ///
    /// Rows keep label order, then coordinate order within a label. Labels
    /// with no coordinates add no rows.
    ///
    /// # Errors
    ///
    /// Returns an error if no labels are given at all
    pub fn from_coordinates<I, L>(experiment: &str, labelled_coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, Vec<[f64; 3]>)>,
        L: Into<String>,
    {
        let mut records = Vec::new();
        let mut label_count = 0;

        for (label, coordinates) in labelled_coordinates {
            label_count += 1;
            let particle_type = label.into();
            records.extend(coordinates.into_iter().map(|[x, y, z]| ParticleRecord {
                experiment: experiment.to_string(),
                particle_type: particle_type.clone(),
                x,
                y,
                z,
            }));
        }

        if label_count == 0 {
            return Err(TilingError::InvalidSourceData {
                reason: format!("No particle coordinates given for experiment '{experiment}'"),
            });
        }

        Ok(Self { records })
    }

    /// Append the rows of another table
    pub fn extend(&mut self, other: Self) {
        self.records.extend(other.records);
    }

    /// All rows in insertion order
    pub fn records(&self) -> &[ParticleRecord] {
        &self.records
    }

    /// Number of rows
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the table as CSV with a header row
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{PARTICLE_CSV_HEADER}")?;
        for record in &self.records {
            writeln!(
                writer,
                "{},{},{},{},{}",
                record.experiment, record.particle_type, record.x, record.y, record.z
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}
