use std::path::PathBuf;

use clap::Parser;

use version_bump::error::Result;
use version_bump::git::Git2Repository;
use version_bump::inputs::{EnvSource, Inputs};
use version_bump::manifest::Manifest;
use version_bump::orchestrate::{self, WorkflowArgs};
use version_bump::resolver::resolve;
use version_bump::rules::{apply_template, load_override, resolve_author, RuleSet};
use version_bump::{ui, version};

#[derive(clap::Parser)]
#[command(
    name = "version-bump",
    about = "Bump a package version from pull request keywords and labels, then commit and push"
)]
struct Args {
    #[arg(
        short,
        long,
        help = "Match against this text instead of the pull request title"
    )]
    search_target: Option<String>,

    #[arg(short, long, help = "Path to the package manifest")]
    manifest: Option<PathBuf>,

    #[arg(short, long, default_value = "origin", help = "Remote to push to")]
    remote: String,

    #[arg(long, help = "Resolve and report the bump without writing or committing")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl Args {
    fn workflow(&self) -> WorkflowArgs {
        WorkflowArgs {
            search_target: self.search_target.clone(),
            manifest: self.manifest.clone(),
            remote: self.remote.clone(),
            dry_run: self.dry_run,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(e) = run(&args.workflow()) {
        ui::display_error(&e.to_string());
        eprintln!("{}", console::style("✖ failure - exiting").red());
        std::process::exit(1);
    }

    println!("{}", console::style("✔ success - exiting").green());
    Ok(())
}

fn run(args: &WorkflowArgs) -> Result<()> {
    let inputs = Inputs::from_env();

    let override_config = match inputs.configuration.as_deref() {
        Some(path) => Some(load_override(path)?),
        None => None,
    };

    let rule_set = RuleSet::build(&inputs, override_config.as_ref())?;
    let author = resolve_author(&inputs, override_config.as_ref());

    let signal = orchestrate::gather_signal(args, &inputs, &EnvSource)?;

    let manifest_path = orchestrate::manifest_path(args, &EnvSource);
    let mut manifest = Manifest::load(&manifest_path)?;
    let current_version = manifest.version().to_string();

    let resolution = resolve(&rule_set, &signal);
    ui::display_resolution(&resolution);

    let bumped_version = version::increment(&current_version, resolution.kind())?;

    if args.dry_run {
        ui::display_status(&format!(
            "Dry run: would bump {} -> {} and commit \"{}\"",
            current_version,
            bumped_version,
            apply_template(&rule_set.commit_message, &bumped_version)
        ));
        return Ok(());
    }

    manifest.set_version(&bumped_version);
    manifest.save()?;

    let repo = Git2Repository::open(&manifest_path)?;
    ui::display_status(&format!("Committing and pushing to {}", args.remote));
    let message = orchestrate::publish(
        &repo,
        &manifest_path,
        &rule_set.commit_message,
        &bumped_version,
        &author,
        &args.remote,
    )?;
    ui::display_success(&format!("Committed: {}", message));

    orchestrate::emit_output(&EnvSource, "bumped_version", &bumped_version)?;
    ui::display_success(&format!(
        "Bumped version {} -> {}",
        current_version, bumped_version
    ));

    Ok(())
}
