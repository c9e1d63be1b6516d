use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;


pub const USAGE: &str = "Usage: timed-quiz [-f path] [-t seconds] [-s] [-seed n]
  -f string
        name of the CSV file that contains questions and answers (default \"program.csv\")
  -t int
        timer in seconds (default 30)
  -s    shuffle questions
  -seed uint
        seed used to shuffle questions (default: current time)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for flag -{flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
    #[error("help requested")]
    HelpRequested,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub quiz_path: PathBuf,
    pub time_limit_seconds: i64,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            quiz_path: PathBuf::from("program.csv"),
            time_limit_seconds: 30,
            shuffle: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parses flags in the `-name value`, `-name=value` or `--name value` forms.
    /// Parsing stops at the first argument that is not a flag, or after `--`.
    pub fn from_args<I, S>(args: I) -> Result<Settings, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut settings = Settings::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            if arg == "--" || !arg.starts_with('-') || arg == "-" {
                break;
            }
            let flag = arg
                .strip_prefix("--")
                .or_else(|| arg.strip_prefix('-'))
                .unwrap_or(arg.as_str());
            if flag.is_empty() || flag.starts_with('-') || flag.starts_with('=') {
                return Err(SettingsError::BadSyntax(arg.clone()));
            }
            let (name, inline_value) = match flag.find('=') {
                Some(index) => (&flag[..index], Some(flag[index + 1..].to_owned())),
                None => (flag, None),
            };

            match name {
                "h" | "help" => return Err(SettingsError::HelpRequested),
                "s" => {
                    settings.shuffle = match inline_value {
                        Some(value) => parse_bool(name, &value)?,
                        None => true,
                    };
                }
                "f" => {
                    let value = require_value(name, inline_value, &mut args)?;
                    settings.quiz_path = PathBuf::from(value);
                }
                "t" => {
                    let value = require_value(name, inline_value, &mut args)?;
                    settings.time_limit_seconds =
                        value.parse::<i64>().map_err(|e| SettingsError::InvalidValue {
                            flag: name.to_owned(),
                            value: value.clone(),
                            reason: format!("{}", e),
                        })?;
                }
                "seed" => {
                    let value = require_value(name, inline_value, &mut args)?;
                    let seed = value.parse::<u64>().map_err(|e| SettingsError::InvalidValue {
                        flag: name.to_owned(),
                        value: value.clone(),
                        reason: format!("{}", e),
                    })?;
                    settings.seed = Some(seed);
                }
                _ => return Err(SettingsError::UnknownFlag(name.to_owned())),
            }
        }

        Ok(settings)
    }

    /// Negative limits behave like a zero limit: the session is over before it starts.
    pub fn time_limit(&self) -> Duration {
        if self.time_limit_seconds <= 0 {
            Duration::from_secs(0)
        } else {
            Duration::from_secs(self.time_limit_seconds as u64)
        }
    }
}

fn require_value<I: Iterator<Item = String>>(
    name: &str,
    inline_value: Option<String>,
    args: &mut I,
) -> Result<String, SettingsError> {
    inline_value
        .or_else(|| args.next())
        .ok_or_else(|| SettingsError::MissingValue(name.to_owned()))
}

fn parse_bool(name: &str, value: &str) -> Result<bool, SettingsError> {
    match value.to_lowercase().as_ref() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            flag: name.to_owned(),
            value: value.to_owned(),
            reason: "expected true or false".to_owned(),
        }),
    }
}
