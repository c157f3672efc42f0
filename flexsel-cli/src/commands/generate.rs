#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use chrono::{Local, NaiveDate};
use clap::{Arg, Command};
use flexsel_cli::extensions::generate::{CatalogPrototype, generate_catalog};
use flexsel_cli::format::serialize_catalog;

pub const ASSETS_SIZE_ARG_NAME: &str = "assets-size";
pub const TOTAL_VOLUME_ARG_NAME: &str = "total-volume";
pub const SEED_ARG_NAME: &str = "seed";
pub const PRICE_FACTOR_ARG_NAME: &str = "price-factor";
pub const BASE_DATE_ARG_NAME: &str = "base-date";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_command() -> Command {
    Command::new("generate")
        .about("Provides the way to generate meaningful synthetic asset catalogs for testing")
        .arg(
            Arg::new(ASSETS_SIZE_ARG_NAME)
                .help("Amount of assets in the generated catalog")
                .short('a')
                .long(ASSETS_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TOTAL_VOLUME_ARG_NAME)
                .help("Total volume which the generated catalog should approximate")
                .short('t')
                .long(TOTAL_VOLUME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Seed to get a reproducible catalog")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PRICE_FACTOR_ARG_NAME)
                .help("Base price factor applied to scaled asset volumes")
                .short('p')
                .long(PRICE_FACTOR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BASE_DATE_ARG_NAME)
                .help("Base date in YYYY-MM-DD format used to spread availability, today if not set")
                .short('b')
                .long(BASE_DATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let prototype = get_prototype_from_args(matches)?;
    let catalog = generate_catalog(&prototype);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = create_write_buffer(out_result);

    serialize_catalog(out_buffer, &catalog).map_err(|err| err.to_string())
}

fn get_prototype_from_args(matches: &ArgMatches) -> Result<CatalogPrototype, String> {
    let count = parse_int_value::<usize>(matches, ASSETS_SIZE_ARG_NAME, "assets size")?.unwrap_or(1500);
    let total_volume_target =
        parse_int_value::<usize>(matches, TOTAL_VOLUME_ARG_NAME, "total volume")?.unwrap_or(1_000_000);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?.unwrap_or(0);
    let base_price_factor = parse_float_value::<f64>(matches, PRICE_FACTOR_ARG_NAME, "price factor")?.unwrap_or(2.);

    let today = matches
        .get_one::<String>(BASE_DATE_ARG_NAME)
        .map(|date| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|err| format!("cannot parse base date: '{err}'"))
        })
        .transpose()?
        .unwrap_or_else(|| Local::now().date_naive());

    Ok(CatalogPrototype { count, today, total_volume_target, seed, base_price_factor })
}
