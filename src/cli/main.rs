use std::path::PathBuf;

use otter_simplify::{context::Context, reports::{Report, Statistics}};

mod misc;
mod parse;

use misc::{load_dimacs, simplify};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(config);

    if let Some(paths) = matches.get_many::<PathBuf>("paths") {
        for path in paths {
            println!("c Reading DIMACS file from {path:?}");
            if let Err(e) = load_dimacs(&mut the_context, path) {
                println!("c {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = simplify(&mut the_context) {
        println!("c Simplification error: {e}");
        std::process::exit(2);
    }

    if matches.get_flag("stats") {
        let mut statistics = Statistics::default();
        the_context.collect_statistics(&mut statistics);
        print!("{statistics}");
    }

    match the_context.report() {
        Report::Satisfiable => println!("s SATISFIABLE"),
        Report::Unsatisfiable => println!("s UNSATISFIABLE"),
        Report::Unknown => println!("s UNKNOWN"),
    }

    if matches.get_flag("formula") {
        print!("{}", the_context.simplified_dimacs());
    }
}
