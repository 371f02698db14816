use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use otter_simplify::config::probing::ProbingConfig;

pub fn cli() -> Command {
    let defaults = ProbingConfig::default();

    Command::new("otter_simplify")
        .about("Simplifies a formula by cleaning and failed literal probing")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(true)
            .trailing_var_arg(true)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to parse (as a single formula)."))

        .arg(Arg::new("no_probing")
            .long("no-probing")
            .action(ArgAction::SetTrue)
            .help("Skip failed literal probing."))

        .arg(Arg::new("probing_limit")
            .long("probing-limit")
            .value_name("COST")
            .value_parser(value_parser!(u32))
            .num_args(1)
            .help(format!("The cost limit of a probing pass.
Default: {}

Each propagation within a scope costs one unit.", defaults.limit.value)))

        .arg(Arg::new("no_probing_cache")
            .long("no-probing-cache")
            .action(ArgAction::SetTrue)
            .help("Do not cache the literals implied by a probed literal."))

        .arg(Arg::new("no_probing_binary")
            .long("no-probing-binary")
            .action(ArgAction::SetTrue)
            .help("Do not probe the binary neighbours of a probed literal."))

        .arg(Arg::new("probing_cache_limit")
            .long("probing-cache-limit")
            .value_name("MEGABYTES")
            .value_parser(value_parser!(u32))
            .num_args(1)
            .help(format!("The size of the probing cache at which the cache is cleared.
Default: {}", defaults.cache_limit.value)))

        .arg(Arg::new("option")
            .long("option")
            .short('o')
            .value_name("NAME=VALUE")
            .action(ArgAction::Append)
            .help("Set a configuration option by name, e.g. 'probing_limit=1000'."))

        .arg(Arg::new("stats")
            .long("stats")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Display statistics on the simplification."))

        .arg(Arg::new("formula")
            .long("formula")
            .short('f')
            .action(ArgAction::SetTrue)
            .help("Display the simplified formula, in DIMACS form."))
}
