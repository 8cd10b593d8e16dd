//! Validate → pack → audit, driven by a [`TrainConfig`].

use crate::config::{OutputFormat, TrainConfig};
use crate::render::{render_json, render_text};
use anyhow::{Context, Result};
use packing::{
    audit, partition_records, validate_batch, AnimalRecord, AuditReport, Packer, PackingOutcome,
    RejectedRecord,
};
use tracing::{info, warn};

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct TrainRun {
    pub outcome: PackingOutcome,
    /// Records skipped in lenient mode (always empty in strict mode).
    pub rejected: Vec<RejectedRecord>,
    /// Present when the audit was requested.
    pub audit: Option<AuditReport>,
}

impl TrainRun {
    /// Report in the configured format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let stats = &self.outcome.stats;
        match format {
            OutputFormat::Text => Ok(render_text(
                &self.outcome.wagons,
                stats,
                &self.rejected,
                self.audit.as_ref(),
            )),
            OutputFormat::Json => {
                let value = render_json(
                    &self.outcome.wagons,
                    stats,
                    &self.rejected,
                    self.audit.as_ref(),
                );
                serde_json::to_string_pretty(&value).context("Failed to serialize report")
            }
        }
    }

    /// False only when an audit ran and found violations.
    pub fn passed_audit(&self) -> bool {
        self.audit.as_ref().is_none_or(AuditReport::is_clean)
    }
}

/// Run the whole pipeline over raw records.
pub fn run(config: &TrainConfig, records: &[AnimalRecord], with_audit: bool) -> Result<TrainRun> {
    let packer = Packer::new(config.packer_config()).context("Invalid packer configuration")?;

    let (animals, rejected) = if config.strict {
        let animals = validate_batch(records).context("Manifest rejected")?;
        (animals, Vec::new())
    } else {
        let (animals, rejected) = partition_records(records);
        for r in &rejected {
            warn!(index = r.index, error = %r.error, "Skipping malformed animal record");
        }
        (animals, rejected)
    };

    let outcome = packer.pack_with_stats(&animals);
    info!(
        animals = outcome.stats.animals,
        wagons = outcome.stats.wagons,
        lower_bound = outcome.stats.lower_bound,
        skipped = rejected.len(),
        "Train assembled"
    );

    let audit_report = with_audit.then(|| {
        let report = audit(&animals, &outcome.wagons, packer.config());
        for violation in &report.violations {
            warn!(%violation, "Audit violation");
        }
        report
    });

    Ok(TrainRun {
        outcome,
        rejected,
        audit: audit_report,
    })
}
