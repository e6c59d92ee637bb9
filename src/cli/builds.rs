//! Build commands.

use crate::cli::{output, Context};
use crate::core::builds;
use crate::core::types::BuildRecord;
use crate::error::{Error, Result};

const NO_BUILDS: &str = "No builds found in GameLift.";

/// List builds.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let plane = ctx.plane()?;
    let builds = builds::list(&plane)?;

    if json {
        let rendered = serde_json::to_string_pretty(&builds)
            .map_err(|e| Error::Other(format!("failed to serialize builds: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if builds.is_empty() {
        output::dimmed(NO_BUILDS);
        return Ok(());
    }

    output::section("Builds");
    for build in &builds {
        output::list_item(&build.id, &detail(build));
    }
    Ok(())
}

/// Delete every build after confirmation.
///
/// Without `--yes` a terminal is required, checked before any remote call.
pub fn purge(ctx: &Context, yes: bool) -> Result<()> {
    if !yes && !atty::is(atty::Stream::Stdin) {
        return Err(Error::Other(
            "refusing to purge builds without --yes in a non-interactive session".into(),
        ));
    }

    let plane = ctx.plane()?;
    let builds = builds::list(&plane).map_err(purge_failed)?;

    if builds.is_empty() {
        println!("{}", NO_BUILDS);
        return Ok(());
    }

    if !yes && !confirm_purge(&builds)? {
        output::warn("purge cancelled");
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    builds::purge(&plane, &builds, &mut console).map_err(purge_failed)?;

    output::success("All builds have been deleted.");
    Ok(())
}

fn purge_failed(e: Error) -> Error {
    match e {
        Error::Remote(remote) => Error::Other(format!("Error deleting builds: {}", remote)),
        other => other,
    }
}

fn detail(build: &BuildRecord) -> String {
    [&build.name, &build.version, &build.status]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Confirm deletion with the operator
fn confirm_purge(builds: &[BuildRecord]) -> Result<bool> {
    use dialoguer::Confirm;

    println!();
    println!("The following builds will be deleted:");
    for build in builds {
        output::list_item(&build.id, &detail(build));
    }
    println!();

    Confirm::new()
        .with_prompt(format!(
            "Delete {} build{}?",
            builds.len(),
            if builds.len() == 1 { "" } else { "s" }
        ))
        .default(false)
        .interact()
        .map_err(Into::into)
}
