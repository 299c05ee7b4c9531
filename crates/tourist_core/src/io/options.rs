use std::{env, path::Path};

use log::LevelFilter;
use tourist_derive::{CliOptions, CliValue, KvDisplay};

use crate::{Error, Result, demo::Example};

/// Runtime options for a tour search run.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct TouristOptions {
    /// Dataset JSON file. Empty means stdin.
    #[cli(long = "input")]
    #[kv(fmt = "or_dash")]
    pub input: String,
    /// Built-in dataset used instead of `input`.
    #[cli(long = "example", parse_with = "Example::parse")]
    #[kv(fmt = "opt")]
    pub example: Option<Example>,
    /// Output file for the tour and its edges. Empty means stdout.
    #[cli(long = "output")]
    #[kv(fmt = "or_dash")]
    pub output: String,
    #[cli(long = "format", parse_with = "OutputFormat::parse")]
    pub format: OutputFormat,
    /// Dequeued journeys allowed before the search gives up. 0 means unlimited.
    #[cli(long = "max-expansions")]
    pub max_expansions: usize,
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    pub log_timestamp: bool,
    /// Log file. Empty means stderr.
    #[cli(long = "log-output")]
    #[kv(fmt = "or_dash")]
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "format")]
pub enum OutputFormat {
    #[cli(alias = "txt")]
    Text,
    Json,
}

impl Default for TouristOptions {
    fn default() -> Self {
        Self {
            input: String::new(),
            example: None,
            output: String::new(),
            format: OutputFormat::Text,
            max_expansions: 0,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
        }
    }
}

impl TouristOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };
            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);
            if options.apply_cli_option(&name, value.clone())? {
                continue;
            }

            match name.as_str() {
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        if options.example.is_some() && options.input_path().is_some() {
            return Err(Error::invalid_input(
                "--example and --input are mutually exclusive",
            ));
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tourist [options] [--input dataset.json]\n",
            "  tourist [options] < dataset.json\n",
            "  tourist [options] --example europe\n\n",
            "Options:\n",
            "  --input <path>\n",
            "  --example <europe>\n",
            "  --output <path>\n",
            "  --format <text|json>\n",
            "  --max-expansions <usize>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tourist --example europe --log-level info\n",
            "  tourist --input dataset.json --format json --output tour.json\n",
            "  tourist --max-expansions 100000 < dataset.json\n",
        )
    }

    pub fn input_path(&self) -> Option<&Path> {
        non_dash_path(&self.input)
    }

    pub fn output_path(&self) -> Option<&Path> {
        non_dash_path(&self.output)
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        non_dash_path(&self.log_output)
    }
}

fn non_dash_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}
