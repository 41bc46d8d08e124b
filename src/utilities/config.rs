use std::env;

use log::error;

use super::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: String,
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: DEFAULT_INPUT_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        if let Ok(input_file) = env::var("SCRYFALL_INPUT_FILE") {
            if std::path::Path::new(&input_file).is_file() && input_file.ends_with(".json") {
                self.input_file = input_file;
            } else if !input_file.is_empty() {
                error!("Supplied incorrect path to scryfall bulk card file");
            }
        }
        if let Ok(output_file) = env::var("TRIMMED_OUTPUT_FILE") {
            if !output_file.is_empty() {
                self.output_file = output_file;
            }
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
