use crate::commands::update::{UpdateCommand, print_report};
use crate::config::JdkPinConfig;
use crate::error::{JdkPinError, Result};
use crate::updater::UpdateOutcome;

/// Fails when any managed entry is behind the latest release. Never writes.
pub struct CheckCommand<'a> {
    update: UpdateCommand<'a>,
}

impl<'a> CheckCommand<'a> {
    pub fn new(config: &'a JdkPinConfig) -> Result<Self> {
        Ok(Self {
            update: UpdateCommand::new(config)?,
        })
    }

    pub fn execute(&self) -> Result<()> {
        let report = self.update.run(true)?;
        print_report(&report);

        match report.outcome {
            UpdateOutcome::Stale => Err(JdkPinError::StaleManifest(report.changes.len())),
            UpdateOutcome::Unchanged | UpdateOutcome::Written => Ok(()),
        }
    }
}
