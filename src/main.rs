// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use jdkpin::commands::check::CheckCommand;
use jdkpin::commands::update::UpdateCommand;
use jdkpin::config::JdkPinConfig;
use jdkpin::error::{Result, format_error_with_color, get_exit_code};
use jdkpin::logging;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jdkpin")]
#[command(author, version, about = "Keep pinned Adoptium JDKs up to date", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./jdkpin.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Manifest file listing the pinned JDKs
    #[arg(short, long, value_name = "FILE", global = true)]
    manifest: Option<PathBuf>,

    /// Base URL of the Adoptium API
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite stale version/checksum pairs with the latest releases
    #[command(visible_alias = "u")]
    Update {
        /// Show what would change without writing the manifest
        #[arg(long)]
        dry_run: bool,
    },

    /// Exit with a non-zero status when any pinned JDK is out of date
    #[command(visible_alias = "c")]
    Check,
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let result: Result<()> = (|| {
        let config = JdkPinConfig::load(cli.config.as_deref())?
            .with_overrides(cli.manifest.clone(), cli.api_url.clone())?;

        match cli.command {
            Commands::Update { dry_run } => {
                let command = UpdateCommand::new(&config)?;
                command.execute(dry_run)
            }
            Commands::Check => {
                let command = CheckCommand::new(&config)?;
                command.execute()
            }
        }
    })();

    if let Err(e) = result {
        eprint!(
            "{}",
            format_error_with_color(&e, std::io::stderr().is_terminal())
        );
        std::process::exit(get_exit_code(&e));
    }
}
