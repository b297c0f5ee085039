use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no input image specified")]
    MissingInput,
}

/// Resolved run configuration, built once from the CLI arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub invert: bool,
}

impl Config {
    pub fn new(
        input: Option<PathBuf>,
        mut output: PathBuf,
        invert: bool,
    ) -> Result<Self, ConfigError> {
        let input = input.ok_or(ConfigError::MissingInput)?;
        // a bare output name inherits the input extension, so `-o out`
        // next to foo.png writes out.png
        if output.extension().is_none() {
            if let Some(ext) = input.extension() {
                output.set_extension(ext);
            }
        }
        Ok(Config {
            input,
            output,
            invert,
        })
    }
}
