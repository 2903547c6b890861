pub mod args;
pub mod logger;
pub mod utils;

use clap::{CommandFactory, Parser};

fn main() {
    let args = args::Args::parse();

    logger::init_logger(args.verbose).expect("Failed to initialize logger");

    let mut cmd = args::Args::command();

    if args.flavour.is_some() && args.arch.is_none() {
        utils::arg_fail(&mut cmd, "Error: --flavour requires --arch", true);
    }

    if let Some(value) = &args.write {
        if args.config.is_none() {
            utils::arg_fail(&mut cmd, "Error: --write requires --config", true);
        }
        if value.is_empty() {
            // Usage banner would not help here, the message says it all
            utils::arg_fail(&mut cmd, "Error: --write requires a non-empty value", false);
        }
    }

    let file = args.file.unwrap_or_else(|| utils::autodetect_annotations().to_owned());
    log::info!("Using annotations file: {}", file);

    if let Some(arch) = &args.arch {
        match &args.flavour {
            Some(flavour) => log::debug!("Restricting to arch {} flavour {}", arch, flavour),
            None => log::debug!("Restricting to arch {}", arch),
        }
    }

    if let Some(config) = &args.config {
        match &args.write {
            Some(value) => log::info!("Selected {} for update to '{}'", config, value),
            None => log::info!("Selected {} for query", config),
        }
    }
}
