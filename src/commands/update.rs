use crate::api::ApiClient;
use crate::config::JdkPinConfig;
use crate::error::Result;
use crate::updater::{EntryChange, ManifestUpdater, UpdateOutcome, UpdateReport};
use colored::*;

pub struct UpdateCommand<'a> {
    config: &'a JdkPinConfig,
}

impl<'a> UpdateCommand<'a> {
    pub fn new(config: &'a JdkPinConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, dry_run: bool) -> Result<()> {
        let report = self.run(dry_run)?;
        print_report(&report);
        Ok(())
    }

    pub(crate) fn run(&self, dry_run: bool) -> Result<UpdateReport> {
        let client = ApiClient::new().with_base_url(self.config.api.base_url.clone());
        ManifestUpdater::new(client, &self.config.manifest_path)
            .dry_run(dry_run)
            .run()
    }
}

pub(crate) fn print_report(report: &UpdateReport) {
    let manifest = report.manifest_path.display();

    match report.outcome {
        UpdateOutcome::Unchanged => {
            println!(
                "{} {manifest} is up to date ({} checked, {} skipped)",
                "✓".green().bold(),
                report.checked,
                report.skipped
            );
        }
        UpdateOutcome::Written => {
            println!(
                "{} Updated {} of {} pinned JDK(s) in {manifest}",
                "✓".green().bold(),
                report.changes.len(),
                report.checked
            );
            print_changes(&report.changes);
        }
        UpdateOutcome::Stale => {
            println!(
                "{} {} of {} pinned JDK(s) in {manifest} are out of date",
                "!".yellow().bold(),
                report.changes.len(),
                report.checked
            );
            print_changes(&report.changes);
        }
    }
}

fn print_changes(changes: &[EntryChange]) {
    for change in changes {
        println!(
            "  {}/{}: {} → {}",
            change.platform,
            change.architecture,
            change.previous.version.dimmed(),
            change.current.version.cyan()
        );
    }
}
