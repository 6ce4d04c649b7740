//! Semantic checks run after parsing.

use crate::{Config, Result, error::SourceContext};

/// Access modifiers Swift accepts on a declaration.
pub const SWIFT_ACCESS_MODIFIERS: &[&str] = &[
    "open",
    "public",
    "package",
    "internal",
    "fileprivate",
    "private",
];

pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if let Some(access) = &config.swift.access
        && !SWIFT_ACCESS_MODIFIERS.contains(&access.get_ref().as_str())
    {
        return Err(ctx.invalid_access_error(access.get_ref().as_str(), access.span()));
    }

    if let Some(raw_value) = &config.swift.raw_value
        && raw_value.get_ref().trim().is_empty()
    {
        return Err(ctx.validation_error_at("raw_value must not be empty", raw_value.span()));
    }

    if let Some(holder) = &config.license.holder
        && holder.trim().is_empty()
    {
        return Err(ctx.validation_error("license holder must not be empty"));
    }

    if let Some(since) = &config.license.since
        && *since.get_ref() > config.license.year()
    {
        return Err(ctx.validation_error_at(
            "license since must not be later than year",
            since.span(),
        ));
    }

    Ok(())
}
