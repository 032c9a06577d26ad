//! Measurements command implementation
//!
//! Searches measurements and prints them as a table.

use crate::api::{AtlasApi, AtlasClient};
use crate::cli::args::{MeasurementsArgs, OutputFormat};
use crate::cli::fields::MeasurementField;
use crate::cli::output::{print_output, MeasurementListing, RenderConfig};
use crate::config::Config;
use crate::domain::Filters;
use crate::error::Result;

/// Execute the measurements command
pub fn run_measurements(args: &MeasurementsArgs, format: OutputFormat, config: &Config) -> Result<()> {
    let client = AtlasClient::new(&config.api)?;
    let listing = search(&client, args, config)?;

    print_output(&listing, format)?;

    Ok(())
}

/// Fetch matching measurements and prepare them for display
pub fn search<A: AtlasApi + ?Sized>(
    api: &A,
    args: &MeasurementsArgs,
    config: &Config,
) -> Result<MeasurementListing<MeasurementField>> {
    let filters = build_filters(args);
    let limit = args
        .limit
        .map(|l| l as usize)
        .unwrap_or(config.output.limit);

    log::debug!("measurement filters: {} (limit {})", filters, limit);

    let page = api.measurements(&filters, limit)?;
    Ok(MeasurementListing::new(page, render_config(args, config)))
}

/// Build the API filter mapping from the parsed options
pub fn build_filters(args: &MeasurementsArgs) -> Filters {
    let mut filters = Filters::new();

    filters.insert_opt("search", args.search.clone());
    filters.insert_opt("status__in", args.status.map(|s| s.status_ids()));
    filters.insert_opt("af", args.af.map(|af| af.as_number()));
    filters.insert_opt("type", args.kind.map(|k| k.as_str()));
    filters.insert_opt("start_time__lt", args.started_before);
    filters.insert_opt("start_time__gt", args.started_after);
    filters.insert_opt("stop_time__lt", args.stopped_before);
    filters.insert_opt("stop_time__gt", args.stopped_after);
    filters.insert_opt("id__in", args.ids.clone());

    filters
}

/// Rendering options for this invocation
pub fn render_config(args: &MeasurementsArgs, config: &Config) -> RenderConfig<MeasurementField> {
    let fields = if args.fields.is_empty() {
        MeasurementField::DEFAULTS.to_vec()
    } else {
        args.fields.clone()
    };

    RenderConfig {
        fields,
        colorize: config.output.color.enabled(),
        ids_only: args.ids_only,
        web_url: config.api.web_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{AddressFamilyArg, MeasurementTypeArg, StatusArg};
    use crate::cli::output::TableDisplay;
    use crate::config::ColorMode;
    use crate::domain::{FilterValue, Measurement};
    use crate::error::AppError;
    use crate::mock::MockApi;
    use chrono::{NaiveDate, NaiveDateTime};

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn plain_config() -> Config {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;
        config
    }

    fn fake_measurements() -> Vec<Measurement> {
        (1..=5)
            .map(|i| {
                Measurement::new(i, "ping", "Ongoing", 2)
                    .with_description(format!("Description {}", i))
                    .with_destination(format!("Name {}", i))
            })
            .collect()
    }

    #[test]
    fn test_get_filters() {
        let args = MeasurementsArgs {
            search: Some("the force is strong with this one".to_string()),
            status: Some(StatusArg::Ongoing),
            af: Some(AddressFamilyArg::V6),
            kind: Some(MeasurementTypeArg::Ping),
            started_before: Some(midnight(2015, 1, 1)),
            started_after: Some(midnight(2014, 1, 1)),
            stopped_before: Some(midnight(2015, 1, 1)),
            stopped_after: Some(midnight(2014, 1, 1)),
            ..Default::default()
        };

        let expected = Filters::new()
            .with("search", "the force is strong with this one")
            .with("status__in", vec![2i64])
            .with("af", 6i64)
            .with("type", "ping")
            .with("start_time__lt", midnight(2015, 1, 1))
            .with("start_time__gt", midnight(2014, 1, 1))
            .with("stop_time__lt", midnight(2015, 1, 1))
            .with("stop_time__gt", midnight(2014, 1, 1));

        assert_eq!(build_filters(&args), expected);
    }

    #[test]
    fn test_empty_args_build_no_filters() {
        assert!(build_filters(&MeasurementsArgs::default()).is_empty());
    }

    #[test]
    fn test_ids_filter() {
        let args = MeasurementsArgs {
            ids: Some(vec![10, 20]),
            ..Default::default()
        };
        assert_eq!(
            build_filters(&args).get("id__in"),
            Some(&FilterValue::IntegerList(vec![10, 20]))
        );
    }

    #[test]
    fn test_default_fields() {
        let cfg = render_config(&MeasurementsArgs::default(), &plain_config());
        assert_eq!(cfg.fields, MeasurementField::DEFAULTS.to_vec());
        assert!(!cfg.colorize);
        assert_eq!(cfg.web_url, "https://atlas.ripe.net");
    }

    #[test]
    fn test_search_with_empty_args() {
        let api = MockApi::new().with_measurements(fake_measurements());
        let listing = search(&api, &MeasurementsArgs::default(), &plain_config()).unwrap();

        let table = listing.to_table();
        for i in 1..=5 {
            assert!(table.contains(&format!("Description {}", i)));
        }
        assert!(table.contains("Showing 5 of 5 total measurements"));

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.is_empty());
        assert_eq!(calls[0].1, 25);
    }

    #[test]
    fn test_search_preserves_api_order() {
        let mut records = fake_measurements();
        records.reverse();
        let api = MockApi::new().with_measurements(records);

        let listing = search(&api, &MeasurementsArgs::default(), &plain_config()).unwrap();
        let ids: Vec<u64> = listing.measurements.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_search_limit_and_total() {
        let api = MockApi::new()
            .with_measurements(fake_measurements())
            .with_total_count(4000);
        let args = MeasurementsArgs {
            limit: Some(2),
            ..Default::default()
        };

        let listing = search(&api, &args, &plain_config()).unwrap();
        assert_eq!(api.calls()[0].1, 2);
        assert!(listing
            .to_table()
            .contains("Showing 2 of 4000 total measurements"));
    }

    #[test]
    fn test_search_uses_configured_limit() {
        let api = MockApi::new();
        let mut config = plain_config();
        config.output.limit = 100;

        search(&api, &MeasurementsArgs::default(), &config).unwrap();
        assert_eq!(api.calls()[0].1, 100);
    }

    #[test]
    fn test_search_propagates_api_error() {
        let api = MockApi::new().failing(500);
        let result = search(&api, &MeasurementsArgs::default(), &plain_config());
        assert!(matches!(result, Err(AppError::Api(_))));
    }

    #[test]
    fn test_url_field_uses_configured_site() {
        let api = MockApi::new().with_measurements(fake_measurements());
        let mut config = plain_config();
        config.api.web_url = "https://atlas.example.org".to_string();
        let args = MeasurementsArgs {
            fields: vec![MeasurementField::Url],
            ..Default::default()
        };

        let listing = search(&api, &args, &config).unwrap();
        assert!(listing
            .to_table()
            .contains("https://atlas.example.org/measurements/1/"));
    }
}
