//! Connect command.
//!
//! Resolves the fleet's first instance and writes its compute credentials to
//! the environment script. Empty results and remote failures are reported on
//! the console and still exit 0.

use tracing::debug;

use crate::cli::Context;
use crate::core::connect;
use crate::core::env_script::EnvScript;
use crate::core::types::FleetId;
use crate::error::Result;

pub fn execute(ctx: &Context, fleet_id: &str) -> Result<()> {
    let plane = ctx.plane()?;
    let script = EnvScript::from_config(&ctx.config.env);
    let fleet = FleetId::new(fleet_id);

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let outcome = connect::run(&plane, &fleet, &script, &ctx.config.env.file, &mut console)?;

    debug!(?outcome, "connect finished");
    Ok(())
}
