//! Probes command implementation
//!
//! Searches probes by country, ASN or id.

use crate::api::{AtlasApi, AtlasClient};
use crate::cli::args::{OutputFormat, ProbesArgs};
use crate::cli::fields::ProbeField;
use crate::cli::output::{print_output, ProbeListing, RenderConfig};
use crate::config::Config;
use crate::domain::Filters;
use crate::error::Result;

/// Execute the probes command
pub fn run_probes(args: &ProbesArgs, format: OutputFormat, config: &Config) -> Result<()> {
    let client = AtlasClient::new(&config.api)?;
    let listing = search(&client, args, config)?;

    print_output(&listing, format)?;

    Ok(())
}

/// Fetch matching probes and prepare them for display
pub fn search<A: AtlasApi + ?Sized>(
    api: &A,
    args: &ProbesArgs,
    config: &Config,
) -> Result<ProbeListing<ProbeField>> {
    let filters = build_filters(args);
    let limit = args
        .limit
        .map(|l| l as usize)
        .unwrap_or(config.output.limit);

    log::debug!("probe filters: {} (limit {})", filters, limit);

    let page = api.probes(&filters, limit)?;

    let fields = if args.fields.is_empty() {
        ProbeField::DEFAULTS.to_vec()
    } else {
        args.fields.clone()
    };
    let render = RenderConfig {
        fields,
        colorize: config.output.color.enabled(),
        ids_only: args.ids_only,
        web_url: config.api.web_url.clone(),
    };

    Ok(ProbeListing::new(page, render))
}

/// Build the API filter mapping from the parsed options
pub fn build_filters(args: &ProbesArgs) -> Filters {
    let mut filters = Filters::new();

    filters.insert_opt("country_code", args.country.clone());
    filters.insert_opt("asn", args.asn.map(i64::from));
    filters.insert_opt("asn_v4", args.asnv4.map(i64::from));
    filters.insert_opt("asn_v6", args.asnv6.map(i64::from));
    filters.insert_opt("id__in", args.ids.clone());

    filters
}
