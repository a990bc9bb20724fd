use std::collections::HashMap;

use thiserror::Error;

use crate::printer::{P_ASCII_ONLY, P_CYCLE_PLACEHOLDER, P_MAX_DEPTH, P_QUOTE};

/// Every option understood by the printer
pub(crate) static FLAGS: &[&Flag] = &[&P_QUOTE, &P_ASCII_ONLY, &P_CYCLE_PLACEHOLDER, &P_MAX_DEPTH];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Option `{flag}` takes {expected}, found `{found}`")]
    InvalidValue {
        flag: &'static str,
        expected: String,
        found: String,
    },

    #[error("Option `{flag}` takes {expected}, it cannot be set to {found}")]
    WrongKind {
        flag: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Global configuration options
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Configuration {
    options: HashMap<Flag, FlagKind>,
}

impl Configuration {
    /// Create the default configuration settings
    pub fn new() -> Self {
        Self {
            options: HashMap::new(),
        }
    }

    /// Get a boolean configuration option
    pub fn bool(&self, value: Flag) -> Option<bool> {
        self.options
            .get(&value)
            .and_then(|kind| match kind {
                FlagKind::Boolean(val) => Some(*val),
                _ => None,
            })
            .or_else(|| match value.default {
                StaticFlagKind::Boolean(default) => Some(default),
                _ => None,
            })
    }

    /// Get a string configuration option
    pub fn string(&self, value: Flag) -> Option<&str> {
        self.options
            .get(&value)
            .and_then(|kind| match kind {
                FlagKind::String(val) => Some(val.as_str()),
                _ => None,
            })
            .or_else(|| match value.default {
                StaticFlagKind::String(default, _) => Some(default),
                _ => None,
            })
    }

    /// Get an integer configuration option
    pub fn integer(&self, value: Flag) -> Option<usize> {
        self.options
            .get(&value)
            .and_then(|kind| match kind {
                FlagKind::Integer(val) => Some(*val),
                _ => None,
            })
            .or_else(|| match value.default {
                StaticFlagKind::Integer(default) => Some(default),
                _ => None,
            })
    }

    /// Sets a boolean flag
    pub fn set_bool(&mut self, flag: Flag, value: bool) -> Result<(), ConfigError> {
        match flag.default {
            StaticFlagKind::Boolean(_) => {
                self.options.insert(flag, FlagKind::Boolean(value));
                Ok(())
            }
            _ => Err(flag.wrong_kind("a boolean")),
        }
    }

    /// Sets a string flag.  If the flag only accepts some values, anything
    /// else is rejected and the previous value is kept.
    pub fn set_string(&mut self, flag: Flag, value: String) -> Result<(), ConfigError> {
        match flag.default {
            StaticFlagKind::String(_, choices) => {
                if !choices.is_empty() && !choices.contains(&value.as_str()) {
                    return Err(ConfigError::InvalidValue {
                        flag: flag.name,
                        expected: flag.kind_description(),
                        found: value,
                    });
                }

                self.options.insert(flag, FlagKind::String(value));
                Ok(())
            }
            _ => Err(flag.wrong_kind("a string")),
        }
    }

    /// Sets an integer flag
    pub fn set_integer(&mut self, flag: Flag, value: usize) -> Result<(), ConfigError> {
        match flag.default {
            StaticFlagKind::Integer(_) => {
                self.options.insert(flag, FlagKind::Integer(value));
                Ok(())
            }
            _ => Err(flag.wrong_kind("an integer")),
        }
    }

    /// Sets a flag from its textual form, as given on a command line.
    /// Booleans accept `true`, `false`, `yes`, `no`, `on`, `off`, `1`, `0`.
    pub fn set_from_str(&mut self, flag: Flag, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            flag: flag.name,
            expected: flag.kind_description(),
            found: value.to_string(),
        };

        match flag.default {
            StaticFlagKind::Boolean(_) => {
                let value = match &value.to_ascii_lowercase()[..] {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
                self.set_bool(flag, value)
            }
            StaticFlagKind::Integer(_) => {
                let value = value.parse().map_err(|_| invalid())?;
                self.set_integer(flag, value)
            }
            StaticFlagKind::String(..) => self.set_string(flag, value.to_string()),
        }
    }

    /// Get all of the flags known to the printer, in a fixed order
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        FLAGS.iter().copied()
    }

    /// Attempts to lookup a flag based on its name and category, useful
    /// to convert a string option into something that can be passed to a
    /// setter or getter.
    pub fn lookup(&self, category: ConfigurationCategory, name: &str) -> Option<Flag> {
        self.iter()
            .find(|flag| flag.category == category && flag.name == name)
            .copied()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

/// The type of a configuration option, options with different categories
/// can have the same name, so this is needed to differentiate between them
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum ConfigurationCategory {
    Printer,
}

/// An optional configuration option that can be passed to the printer
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Flag {
    category: ConfigurationCategory,
    name: &'static str,
    default: StaticFlagKind,
    help: &'static str,
}

impl Flag {
    /// Create a new configuration option
    pub const fn new(category: ConfigurationCategory, name: &'static str) -> Self {
        Self {
            category,
            name,
            default: StaticFlagKind::Boolean(false),
            help: "",
        }
    }

    /// Set an option to take a boolean value that has a default value
    pub const fn bool(self, value: bool) -> Self {
        Self {
            default: StaticFlagKind::Boolean(value),
            ..self
        }
    }

    /// Set an option to take a single string value.  If `choices` is not
    /// empty, only those strings are accepted.
    pub const fn string(self, value: &'static str, choices: &'static [&'static str]) -> Self {
        Self {
            default: StaticFlagKind::String(value, choices),
            ..self
        }
    }

    /// Set an option to take a non-negative integer
    pub const fn integer(self, value: usize) -> Self {
        Self {
            default: StaticFlagKind::Integer(value),
            ..self
        }
    }

    /// Set the help text for a configuration option
    pub const fn help(self, help: &'static str) -> Self {
        Self { help, ..self }
    }

    pub fn category(&self) -> ConfigurationCategory {
        self.category
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help_text(&self) -> &'static str {
        self.help
    }

    /// The default value, formatted the way [`Configuration::set_from_str`]
    /// would accept it
    pub fn default_value(&self) -> String {
        match self.default {
            StaticFlagKind::String(value, _) => value.to_string(),
            StaticFlagKind::Boolean(value) => value.to_string(),
            StaticFlagKind::Integer(value) => value.to_string(),
        }
    }

    /// Description of the accepted values, e.g. "a boolean"
    pub fn kind_description(&self) -> String {
        match self.default {
            StaticFlagKind::String(_, []) => String::from("a string"),
            StaticFlagKind::String(_, choices) => format!("one of {}", choices.join(", ")),
            StaticFlagKind::Boolean(_) => String::from("a boolean"),
            StaticFlagKind::Integer(_) => String::from("an integer"),
        }
    }

    fn wrong_kind(&self, found: &'static str) -> ConfigError {
        let expected = match self.default {
            StaticFlagKind::String(..) => "a string",
            StaticFlagKind::Boolean(_) => "a boolean",
            StaticFlagKind::Integer(_) => "an integer",
        };

        ConfigError::WrongKind {
            flag: self.name,
            expected,
            found,
        }
    }
}

/// The type of data that can be received in an option
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
enum StaticFlagKind {
    String(&'static str, &'static [&'static str]),
    Boolean(bool),
    Integer(usize),
}

/// The data stored inside a flag value
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
enum FlagKind {
    String(String),
    Boolean(bool),
    Integer(usize),
}
