// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

//==============================================================================
// Imports
//==============================================================================

use ::anyhow::Result;
use ::clap::{
    Arg,
    ArgMatches,
    Command,
};
use ::dot3gen::{
    config::Config,
    runtime::logging,
    Dispatcher,
    Dot3IncrLen,
};
use ::std::{
    env,
    io,
    sync::Arc,
};

//==============================================================================
// Program Arguments
//==============================================================================

/// Program Arguments
#[derive(Debug)]
pub struct ProgramArguments {
    /// Path to the YAML configuration file.
    config_path: Option<String>,
    /// Log specification overriding the configuration file.
    log_spec: Option<String>,
}

/// Associate functions for Program Arguments
impl ProgramArguments {
    /// Environment variable consulted when `--config` is not given.
    const CONFIG_PATH_VAR: &'static str = "CONFIG_PATH";

    /// Parses the program arguments from the command line interface.
    pub fn new(app_name: &'static str, app_about: &'static str) -> Result<Self> {
        let matches: ArgMatches = Command::new(app_name)
            .about(app_about)
            .arg(
                Arg::new("config")
                    .long("config")
                    .value_parser(clap::value_parser!(String))
                    .required(false)
                    .value_name("PATH")
                    .help("Sets the configuration file"),
            )
            .arg(
                Arg::new("log")
                    .long("log")
                    .value_parser(clap::value_parser!(String))
                    .required(false)
                    .value_name("SPEC")
                    .help("Sets the log specification (e.g. info, debug, trace)"),
            )
            .get_matches();

        let mut args: ProgramArguments = ProgramArguments {
            config_path: env::var(Self::CONFIG_PATH_VAR).ok(),
            log_spec: None,
        };

        // Configuration file.
        if let Some(path) = matches.get_one::<String>("config") {
            args.set_config_path(path)?;
        }

        // Log specification.
        if let Some(spec) = matches.get_one::<String>("log") {
            args.set_log_spec(spec)?;
        }

        Ok(args)
    }

    /// Returns the configuration file path stored in the target program arguments.
    pub fn get_config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// Returns the log specification stored in the target program arguments.
    pub fn get_log_spec(&self) -> Option<&str> {
        self.log_spec.as_deref()
    }

    /// Sets the configuration file path in the target program arguments.
    fn set_config_path(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            anyhow::bail!("invalid configuration path")
        }
        self.config_path = Some(path.to_string());
        Ok(())
    }

    /// Sets the log specification in the target program arguments.
    fn set_log_spec(&mut self, spec: &str) -> Result<()> {
        if spec.trim().is_empty() {
            anyhow::bail!("invalid log specification")
        }
        self.log_spec = Some(spec.to_string());
        Ok(())
    }
}

//==============================================================================
// Main
//==============================================================================

fn main() -> Result<()> {
    let args: ProgramArguments = ProgramArguments::new(
        "dot3gen-server",
        "Serves 802.3 frames of incrementing length, one JSON response line per request line.",
    )?;

    let config: Config = match args.get_config_path() {
        Some(path) => Config::new(path)?,
        None => Config::empty(),
    };

    let log_spec: String = match args.get_log_spec() {
        Some(spec) => spec.to_string(),
        None => config.log_spec()?,
    };
    logging::initialize(&log_spec);

    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(Dot3IncrLen::with_name(&config.handler_name()?)))?;
    log::info!("serving handlers {:?}", dispatcher.handlers());

    let stdin: io::Stdin = io::stdin();
    let stdout: io::Stdout = io::stdout();
    let served: usize = dispatcher.serve(stdin.lock(), stdout.lock())?;
    log::info!("served {} requests", served);

    Ok(())
}
