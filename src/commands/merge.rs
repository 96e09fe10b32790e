//! The parse -> apply -> serialize -> write pipeline.
//!
//! Every step that can fail runs before anything is written: the config is
//! loaded and every override validated before the profile is even read.

use crate::cli::Cli;
use crate::config::{Config, WriteMode};
use crate::error::{MergeError, Result};
use crate::fs::{atomic_write_file, backup_file, read_profile, write_in_place};
use crate::overrides::{self, Override};
use crate::profile::{self, Profile};
use std::path::PathBuf;

/// Resolved inputs for one merge.
#[derive(Debug)]
pub(crate) struct MergePlan {
    pub profile_path: PathBuf,
    pub target: PathBuf,
    pub overrides: Vec<Override>,
    pub write_mode: WriteMode,
    pub backup: bool,
}

impl MergePlan {
    /// Combine command-line arguments with the optional config file.
    ///
    /// Config overrides come first, so the command line wins on conflicts.
    pub(crate) fn resolve(cli: &Cli) -> Result<Self> {
        let profile_path = cli
            .profile
            .clone()
            .ok_or_else(|| MergeError::Usage("no profile path provided".to_string()))?;

        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let directives: Vec<&str> = config
            .overrides
            .iter()
            .chain(cli.overrides.iter())
            .map(String::as_str)
            .collect();
        let overrides = overrides::parse_all(&directives)?;

        let target = cli.output.clone().unwrap_or_else(|| profile_path.clone());

        Ok(Self {
            profile_path,
            target,
            overrides,
            write_mode: config.write_mode,
            backup: cli.backup || config.backup,
        })
    }
}

/// Read, parse and apply. Nothing touches the disk but the read.
pub(crate) fn merge(plan: &MergePlan) -> Result<Profile> {
    let text = read_profile(&plan.profile_path)?;
    let mut profile = profile::parse(&text);
    overrides::apply(&mut profile, &plan.overrides);
    Ok(profile)
}

/// Write the merged text to the plan's target.
pub(crate) fn write(plan: &MergePlan, merged: &str) -> Result<Option<PathBuf>> {
    let backup = if plan.backup && plan.target.exists() {
        Some(backup_file(&plan.target)?)
    } else {
        None
    };

    match plan.write_mode {
        WriteMode::Atomic => atomic_write_file(&plan.target, merged)?,
        WriteMode::InPlace => write_in_place(&plan.target, merged)?,
    }

    Ok(backup)
}

/// Execute the merge described by the command line.
pub fn run(cli: Cli) -> Result<()> {
    let plan = MergePlan::resolve(&cli)?;
    let status = |msg: String| {
        if !cli.quiet {
            eprintln!("{}", msg);
        }
    };

    status(format!("Merging profile: {}", plan.profile_path.display()));
    let profile = merge(&plan)?;

    if cli.dry_run {
        if cli.json {
            let json = serde_json::to_string_pretty(&profile).map_err(|e| {
                MergeError::Io(format!("failed to serialize profile to JSON: {}", e))
            })?;
            println!("{}", json);
        } else {
            print!("{}", profile);
        }
        status(format!(
            "Dry run: {} override(s) applied across {} section(s), nothing written",
            plan.overrides.len(),
            profile.len()
        ));
        return Ok(());
    }

    let merged = profile::serialize(&profile);
    let backup = write(&plan, &merged)?;

    if let Some(backup) = backup {
        status(format!("  Backup:    {}", backup.display()));
    }
    status(format!("  Overrides: {}", plan.overrides.len()));
    status(format!("  Written:   {}", plan.target.display()));

    Ok(())
}
