use clap::ArgMatches;

use otter_simplify::{config::Config, types::err::ConfigError};

pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    if args.get_flag("no_probing") {
        the_config.probing.enabled.value = false;
    }

    if let Some(limit) = args.get_one::<u32>("probing_limit") {
        the_config.probing.limit.set(*limit)?;
    }

    if args.get_flag("no_probing_cache") {
        the_config.probing.cache.value = false;
    }

    if args.get_flag("no_probing_binary") {
        the_config.probing.binary.value = false;
    }

    if let Some(limit) = args.get_one::<u32>("probing_cache_limit") {
        the_config.probing.cache_limit.set(*limit)?;
    }

    if let Some(options) = args.get_many::<String>("option") {
        for option in options {
            match option.split_once('=') {
                Some((name, value)) => the_config.set(name.trim(), value.trim())?,
                None => return Err(ConfigError::UnreadableValue(option.to_string())),
            }
        }
    }

    Ok(the_config)
}
