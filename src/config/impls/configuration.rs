use std::fs::File;
use std::io::Write;
use url::Url;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::agent_config::AgentConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::tracker_server_config::TrackerServerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            agent: AgentConfig::default(),
            tracker: TrackerServerConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &Configuration) -> Result<(), CustomError> {
        if parse_log_level(&config.log_level).is_none() {
            return Err(CustomError::new(&format!("[VALIDATE] Unknown log level '{}'", config.log_level)));
        }

        if let Some(server_url) = config.agent.server_url() {
            if Url::parse(server_url).is_err() {
                return Err(CustomError::new(&format!("[VALIDATE] agent.server_url '{}' is not a valid URL", server_url)));
            }
        }
        if config.agent.rpc_timeout == 0 {
            return Err(CustomError::new("[VALIDATE] agent.rpc_timeout must be greater than 0"));
        }

        let tracker = &config.tracker;
        if tracker.enabled && Url::parse(tracker.server_root_url.trim_end_matches('/')).is_err() {
            return Err(CustomError::new(&format!("[VALIDATE] tracker.server_root_url '{}' is not a valid URL", tracker.server_root_url)));
        }
        if tracker.threads == 0 {
            return Err(CustomError::new("[VALIDATE] tracker.threads must be greater than 0"));
        }
        if tracker.cleanup_interval == 0 {
            return Err(CustomError::new("[VALIDATE] tracker.cleanup_interval must be greater than 0"));
        }
        if tracker.announce_interval_minimum > tracker.announce_interval {
            return Err(CustomError::new("[VALIDATE] tracker.announce_interval_minimum exceeds tracker.announce_interval"));
        }
        Ok(())
    }
}
