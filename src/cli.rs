//! Command-line interface for inspecting versions, ranges and digests

use std::cmp::Ordering;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::config::Config;
use crate::digest::ManifestDigest;
use crate::requirements::Requirements;
use crate::version::candidates::{newest_matching, sort_newest_first};
use crate::version::{ImplementationVersion, VersionRange};

#[derive(Parser)]
#[command(name = "zeroinstall-model")]
#[command(version, about = "Inspect Zero Install versions, version ranges and manifest digests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two versions
    Compare {
        left: ImplementationVersion,
        right: ImplementationVersion,
    },
    /// Print versions from newest to oldest
    Sort {
        #[arg(required = true)]
        versions: Vec<ImplementationVersion>,
    },
    /// Check which versions a range matches
    Match {
        range: VersionRange,
        #[arg(required = true)]
        versions: Vec<ImplementationVersion>,
    },
    /// Intersect two version ranges
    Intersect { left: VersionRange, right: VersionRange },
    /// Inspect a manifest digest ID
    Digest(DigestArgs),
    /// Pick the newest version of an interface allowed by the restrictions
    Select(SelectArgs),
}

#[derive(Args)]
pub struct DigestArgs {
    /// Comma-separated digest IDs, e.g. `sha1new=abc,sha256new_XYZ`
    pub id: ManifestDigest,
    /// Print only the strongest digest
    #[arg(long)]
    pub best: bool,
    /// Check partial equality against another digest
    #[arg(long, value_name = "OTHER")]
    pub partial_eq: Option<ManifestDigest>,
}

#[derive(Args)]
pub struct SelectArgs {
    pub interface_uri: String,
    #[arg(required = true)]
    pub versions: Vec<ImplementationVersion>,
    /// Restrict the versions of an interface
    #[arg(long, num_args = 2, value_names = ["URI", "RANGE"])]
    pub version_for: Vec<String>,
}

/// Run `command` and return the text to print
pub fn run(command: Command, config: &Config) -> anyhow::Result<String> {
    match command {
        Command::Compare { left, right } => Ok(compare(&left, &right).to_string()),
        Command::Sort { mut versions } => {
            sort_newest_first(&mut versions);
            Ok(join_lines(versions.iter().map(ToString::to_string)))
        }
        Command::Match { range, versions } => Ok(join_lines(
            versions
                .iter()
                .map(|v| format!("{} {}", v, range.matches(v))),
        )),
        Command::Intersect { left, right } => Ok(left.intersect(&right)?.to_string()),
        Command::Digest(args) => Ok(digest(args)),
        Command::Select(args) => select(args, config),
    }
}

fn compare(left: &ImplementationVersion, right: &ImplementationVersion) -> &'static str {
    match left.cmp(right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn digest(args: DigestArgs) -> String {
    if let Some(other) = args.partial_eq {
        return args.id.partial_equals(&other).to_string();
    }
    if args.best {
        return args.id.best().unwrap_or_default();
    }
    join_lines(args.id.available_digests().into_iter())
}

fn select(args: SelectArgs, config: &Config) -> anyhow::Result<String> {
    let mut requirements = Requirements::new(&args.interface_uri);
    config
        .apply_to(&mut requirements)
        .context("Persisted version restrictions conflict")?;

    for pair in args.version_for.chunks(2) {
        let [uri, range] = pair else {
            anyhow::bail!("--version-for expects an interface URI and a range");
        };
        let range: VersionRange = range
            .parse()
            .with_context(|| format!("Invalid range for {uri}"))?;
        requirements.add_restriction(uri.clone(), range)?;
    }
    debug!("Selecting with {:?}", requirements);

    let range = requirements
        .restriction_for(&args.interface_uri)
        .cloned()
        .unwrap_or_default();
    let selected = newest_matching(&range, &args.versions).with_context(|| {
        format!(
            "No version of {} matches '{}'",
            args.interface_uri, range
        )
    })?;

    info!("Selected {} {}", args.interface_uri, selected);
    Ok(selected.to_string())
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}
