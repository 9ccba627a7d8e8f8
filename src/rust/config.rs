// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    generator::DOT3_INCR_LEN_NAME,
    runtime::{
        fail::Fail,
        logging::DEFAULT_LOG_SPEC,
    },
};
use ::libc::EINVAL;
use ::std::{
    fs,
    ops::Index,
    str::FromStr,
};
use ::yaml_rust::{
    yaml::Hash,
    Yaml,
    YamlLoader,
};

//======================================================================================================================
// Constants
//======================================================================================================================

mod server_config {
    pub const SECTION_NAME: &str = "dot3gen";
    // Prefix of environment variables that override file options.
    pub const ENV_PREFIX: &str = "DOT3GEN_";
    // flexi_logger specification, e.g. "info" or "warn,dot3gen=trace".
    pub const LOG_SPEC: &str = "log_spec";
    // Name the frame generator registers under.
    pub const HANDLER_NAME: &str = "handler_name";
}

//======================================================================================================================
// Structures
//======================================================================================================================

/// Server configuration. Every option is optional and environment variables (`DOT3GEN_<OPTION>`) win over the file.
#[derive(Clone, Debug)]
pub struct Config(pub Yaml);

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Config {
    /// Reads a configuration file into a [Config] object.
    pub fn new(config_path: &str) -> Result<Self, Fail> {
        let config_s: String = match fs::read_to_string(config_path) {
            Ok(config_s) => config_s,
            Err(e) => {
                let cause: String = format!("failed to read configuration file {:?} ({})", config_path, e);
                error!("new(): {}", cause);
                return Err(Fail::new(EINVAL, &cause));
            },
        };
        Self::from_str(&config_s)
    }

    /// Configuration with every option left at its default.
    pub fn empty() -> Self {
        Self(Yaml::Hash(Hash::new()))
    }

    /// Reads the log specification from the environment first and then the configuration file.
    pub fn log_spec(&self) -> Result<String, Fail> {
        self.get_str_option_or(server_config::LOG_SPEC, DEFAULT_LOG_SPEC)
    }

    /// Reads the name to register the generator under from the environment first and then the configuration file.
    pub fn handler_name(&self) -> Result<String, Fail> {
        let name: String = self.get_str_option_or(server_config::HANDLER_NAME, DOT3_INCR_LEN_NAME)?;
        if name.is_empty() {
            return Err(Fail::new(EINVAL, "handler name cannot be empty"));
        }
        Ok(name)
    }

    fn get_str_option_or(&self, index: &str, default: &str) -> Result<String, Fail> {
        if let Some(value) = Self::get_typed_env_option::<String>(index)? {
            return Ok(value);
        }
        let section: &Yaml = match self.get_server_config()? {
            Some(section) => section,
            None => return Ok(default.to_string()),
        };
        match section.index(index) {
            Yaml::BadValue => Ok(default.to_string()),
            Yaml::String(value) => Ok(value.clone()),
            _ => {
                let message: String = format!("parameter \"{}\" has unexpected type", index);
                Err(Fail::new(EINVAL, message.as_str()))
            },
        }
    }

    /// The server section, if present.
    fn get_server_config(&self) -> Result<Option<&Yaml>, Fail> {
        let section: &Yaml = self.0.index(server_config::SECTION_NAME);
        match section {
            Yaml::BadValue => Ok(None),
            Yaml::Hash(_) => Ok(Some(section)),
            _ => {
                let message: String = format!("parameter \"{}\" has unexpected type", server_config::SECTION_NAME);
                Err(Fail::new(EINVAL, message.as_str()))
            },
        }
    }

    /// Get value where the environment value overrides the config file if it exists.
    fn get_typed_env_option<T: FromStr>(index: &str) -> Result<Option<T>, Fail> {
        let var_name: String = format!("{}{}", server_config::ENV_PREFIX, index.to_uppercase());
        if let Ok(var) = ::std::env::var(var_name.as_str()) {
            if let Ok(value) = var.as_str().parse() {
                return Ok(Some(value));
            } else {
                let message: String = format!("environment variable {} has unexpected type", var_name);
                return Err(Fail::new(EINVAL, message.as_str()));
            }
        }
        Ok(None)
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl FromStr for Config {
    type Err = Fail;

    /// Parses a configuration document. An empty document yields [Config::empty].
    fn from_str(config_s: &str) -> Result<Self, Self::Err> {
        let config: Vec<Yaml> = match YamlLoader::load_from_str(config_s) {
            Ok(config) => config,
            Err(e) => {
                let cause: String = format!("malformed configuration ({})", e);
                return Err(Fail::new(EINVAL, &cause));
            },
        };
        match &config[..] {
            [] => Ok(Self::empty()),
            [c] => Ok(Self(c.clone())),
            _ => Err(Fail::new(EINVAL, "Wrong number of config objects")),
        }
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
