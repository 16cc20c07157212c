use finratio_core::{build_dashboard, Period, SnapshotSource, Symbol};

use crate::cli::ReportArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ReportArgs, source: &SnapshotSource) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let start = Period::parse(&args.start)?;
    let end = Period::parse(&args.end)?;

    let mut dashboard = build_dashboard(
        source,
        &symbol,
        start,
        end,
        args.periods,
        &args.ma_windows,
    )?;

    // Notices travel in the envelope meta, not the payload.
    let warnings = std::mem::take(&mut dashboard.warnings);
    let data = serde_json::to_value(&dashboard)?;

    Ok(CommandResult::ok(data).with_warnings(warnings))
}
