use std::fs;
use std::hash::Hash;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::count::PackedCount;
use crate::ledger::Ledger;
use crate::ranking::{RankConfig, RankedEntry, Ranker};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Report fingerprint mismatch: report says {recorded}, content hashes to {computed}")]
    FingerprintMismatch { recorded: String, computed: String },
}

/// A ranking frozen for the reporting side of the pipeline.
///
/// `fingerprint` covers the configuration, the lower limit, the maximum,
/// the entry count and the ranked entries. Two reports over equal ledgers
/// with the same configuration carry the same fingerprint whatever their
/// `generated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport<K> {
    pub fingerprint: String,
    pub config: RankConfig,
    pub generated_at: DateTime<Utc>, // informational only
    pub lower_limit: PackedCount,
    pub maximum: PackedCount,
    pub entry_count: usize,
    pub entries: Vec<RankedEntry<K>>,
}

impl<K> RankingReport<K>
where
    K: Serialize,
{
    pub fn build(
        ranker: &Ranker,
        ledger: &Ledger<K>,
        lower_limit: PackedCount,
    ) -> Result<Self, ReportError>
    where
        K: Hash + Eq + Clone,
    {
        let entries = ranker.descending_and_above(ledger, lower_limit);
        let maximum = ranker.maximum(ledger);
        let fingerprint = fingerprint(
            ranker.config(),
            lower_limit,
            maximum,
            entries.len(),
            &entries,
        )?;

        Ok(RankingReport {
            fingerprint,
            config: ranker.config().clone(),
            generated_at: Utc::now(),
            lower_limit,
            maximum,
            entry_count: entries.len(),
            entries,
        })
    }

    /// Recomputes the fingerprint from the report's own content.
    pub fn verify(&self) -> Result<(), ReportError> {
        let computed = fingerprint(
            &self.config,
            self.lower_limit,
            self.maximum,
            self.entry_count,
            &self.entries,
        )?;
        if computed != self.fingerprint || self.entry_count != self.entries.len() {
            return Err(ReportError::FingerprintMismatch {
                recorded: self.fingerprint.clone(),
                computed,
            });
        }
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Writes the report as pretty JSON next to `path`, then renames it into
    /// place so readers never see a partial file.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let temp_suffix = format!("tmp.{}", fingerprint_stem(&self.fingerprint));
        let temp_path = path.with_extension(temp_suffix);

        let f = fs::File::create(&temp_path)?;
        let written = self
            .write_to(&f)
            .and_then(|()| f.sync_all().map_err(ReportError::from));
        drop(f);

        // Leave nothing behind on failure.
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl<K> RankingReport<K>
where
    K: Serialize + DeserializeOwned,
{
    /// Reads a saved report and checks its fingerprint.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let f = fs::File::open(path)?;
        let report: RankingReport<K> = serde_json::from_reader(f)?;
        report.verify()?;
        Ok(report)
    }
}

fn fingerprint<K: Serialize>(
    config: &RankConfig,
    lower_limit: PackedCount,
    maximum: PackedCount,
    entry_count: usize,
    entries: &[RankedEntry<K>],
) -> Result<String, ReportError> {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_vec(config)?;
    hasher.update(&config_json);
    hasher.update(lower_limit.raw().to_be_bytes());
    hasher.update(maximum.raw().to_be_bytes());
    hasher.update((entry_count as u64).to_be_bytes());

    for entry in entries {
        let line = serde_json::to_vec(entry)?;
        hasher.update(&line);
    }

    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}

// First 12 hex chars, without the algorithm prefix.
fn fingerprint_stem(fingerprint: &str) -> &str {
    let hex = fingerprint.strip_prefix("sha256:").unwrap_or(fingerprint);
    hex.get(..12).unwrap_or(hex)
}
