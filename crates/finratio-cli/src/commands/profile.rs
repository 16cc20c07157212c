use serde::Serialize;

use finratio_core::{FieldValue, MarketDataSource, ProfileField, SnapshotSource, Symbol};

use crate::cli::ProfileArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ProfileFieldRow {
    field: ProfileField,
    label: &'static str,
    /// `null` means the provider did not report the field.
    value: Option<FieldValue>,
}

#[derive(Debug, Serialize)]
struct ProfileResponseData {
    symbol: Symbol,
    fields: Vec<ProfileFieldRow>,
}

pub fn run(args: &ProfileArgs, source: &SnapshotSource) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let profile = source.company_profile(&symbol)?;

    let fields = ProfileField::ALL
        .iter()
        .map(|&field| ProfileFieldRow {
            field,
            label: field.label(),
            value: profile.field(field).cloned(),
        })
        .collect();

    let mut result = CommandResult::ok(serde_json::to_value(ProfileResponseData {
        symbol: symbol.clone(),
        fields,
    })?);

    if profile.is_empty() {
        result = result.with_warning(format!("no profile fields reported for {symbol}"));
    }

    Ok(result)
}
