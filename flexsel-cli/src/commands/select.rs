#[cfg(test)]
#[path = "../../tests/unit/commands/select_test.rs"]
mod select_test;

use super::*;
use chrono::NaiveDate;
use clap::{Arg, Command};
use flexsel_cli::extensions::select::{SelectionService, create_engine, read_config};
use flexsel_cli::format::{SelectionRequest, deserialize_catalog, serialize_selection_result};
use flexsel_core::utils::Environment;
use std::io::BufReader;
use std::sync::Arc;

pub const CATALOG_ARG_NAME: &str = "CATALOG";
pub const DATE_ARG_NAME: &str = "date";
pub const VOLUME_ARG_NAME: &str = "volume";
pub const CONFIG_ARG_NAME: &str = "config";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_select_command() -> Command {
    Command::new("select")
        .about("Selects a minimum cost subset of catalog assets covering the requested volume at the requested date")
        .arg(Arg::new(CATALOG_ARG_NAME).help("Sets the catalog file to use").required(true).index(1))
        .arg(
            Arg::new(DATE_ARG_NAME)
                .help("Specifies the activation date in YYYY-MM-DD format")
                .short('d')
                .long(DATE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(VOLUME_ARG_NAME)
                .help("Specifies the target volume to be covered")
                .short('v')
                .long(VOLUME_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the file with the engine configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
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

pub fn run_select(matches: &ArgMatches) -> Result<(), String> {
    let catalog_path = matches.get_one::<String>(CATALOG_ARG_NAME).unwrap();
    let catalog = deserialize_catalog(BufReader::new(open_file(catalog_path, "catalog")))
        .map_err(|err| format!("cannot read catalog: '{err}'"))?;

    let request = parse_request(matches)?;

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()
        .map_err(|err| format!("cannot read config: '{err}'"))?
        .unwrap_or_default();

    let environment = Arc::new(Environment::default());
    let service = SelectionService::new(catalog, create_engine(&config, environment));

    let result = service.find_assets(request.date, request.volume);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = create_write_buffer(out_result);

    serialize_selection_result(out_buffer, &result).map_err(|err| err.to_string())
}

fn parse_request(matches: &ArgMatches) -> Result<SelectionRequest, String> {
    let date = matches.get_one::<String>(DATE_ARG_NAME).unwrap();
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|err| format!("cannot parse date: '{err}'"))?;

    let volume = parse_int_value::<i64>(matches, VOLUME_ARG_NAME, "target volume")?.unwrap();

    Ok(SelectionRequest { date, volume })
}
