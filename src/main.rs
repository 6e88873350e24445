pub mod catalog;
pub mod console;
pub mod constants;
pub mod drink;
pub mod errors;
pub mod ingredient;
pub mod machine;

use std::env;
use std::io;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use catalog::{build_machine, default_catalog, read_catalog_from_file};
use console::run_machine;

fn main() {
    if SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .is_err()
    {
        eprintln!("Logger could not be initialized");
    }

    let catalog = match env::args().nth(1) {
        Some(path) => match read_catalog_from_file(&path) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("Could not read catalog file {}: {:?}", path, err);
                return;
            }
        },
        None => default_catalog(),
    };

    let mut machine = match build_machine(&catalog) {
        Ok(machine) => machine,
        Err(err) => {
            error!("Could not build the machine: {:?}", err);
            return;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = run_machine(&mut machine, stdin.lock(), &mut stdout) {
        error!("The machine stopped with an error: {:?}", err);
    }
}
