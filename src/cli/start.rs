use crate::cli::{Invocation, actions::Action, args, commands, dispatch};
use crate::cloud::AwsProvider;
use anyhow::Result;

/// Parses the command line, sets up logging and returns the client factory
/// together with the actions to run.
///
/// # Errors
/// Will return an error if the command line can not be parsed; `--help` and
/// `--version` are returned as errors too, see `clap::Error::exit`
pub fn start() -> Result<(AwsProvider, Vec<Action>), clap::Error> {
    let matches = commands::new().try_get_matches_from(args::normalize(std::env::args_os()))?;

    let verbosity_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(verbosity_level)
        .init();

    let invocation = Invocation::from_matches(&matches);

    log::debug!("invocation: {invocation:#?}");

    let provider = AwsProvider::new(invocation.region.clone());

    Ok((provider, dispatch::dispatch(&invocation)))
}

/// Same as `start` for an explicit argument list, without touching the logger.
///
/// # Errors
/// Will return an error if the arguments can not be parsed
pub fn actions_from<I, T>(argv: I) -> Result<Vec<Action>>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString>,
{
    let matches = commands::new().try_get_matches_from(args::normalize(argv))?;
    Ok(dispatch::dispatch(&Invocation::from_matches(&matches)))
}
