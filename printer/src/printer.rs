//! Conversion of values into their literal form: text that the reader turns
//! back into an equal value.
//!
//! Every shape has one fixed rule:
//!
//! | shape       | example                   |
//! |-------------|---------------------------|
//! | boolean     | `true`                    |
//! | number      | `44`, `-3/4`, `0.5`, `nan`, `1.5f32` |
//! | complex     | `1+2i`                    |
//! | string      | `'it\'s'`                 |
//! | symbol      | `:name`, `:'two words'`   |
//! | list        | `['a', 44]`               |
//! | tuple       | `()`, `(1,)`, `(1, 2)`    |
//! | map         | `{:a: 1, 'b': 2}`         |
//! | constructor | `None`, `Some(1)`         |
//!
//! Native values are printed by the rule registered for their type in
//! [`PrintHooks`], native functions have no literal form.

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    config::{Configuration, ConfigurationCategory, Flag},
    hooks::PrintHooks,
    memory::Heap,
    value::{Value, ValueContents},
};

pub mod escape;
pub mod path;

use escape::{Delimiter, LiteralStyle};
use path::{PathSegment, ValuePath};

pub static P_QUOTE: Flag = Flag::new(ConfigurationCategory::Printer, "quote")
    .string("single", &["single", "double"])
    .help("Delimiter used around strings and quoted symbols");

pub static P_ASCII_ONLY: Flag = Flag::new(ConfigurationCategory::Printer, "ascii-only")
    .bool(false)
    .help("Escape every character outside of ASCII");

pub static P_CYCLE_PLACEHOLDER: Flag =
    Flag::new(ConfigurationCategory::Printer, "cycle-placeholder")
        .bool(false)
        .help("Print `...` inside a container that contains itself instead of failing");

pub static P_MAX_DEPTH: Flag = Flag::new(ConfigurationCategory::Printer, "max-depth")
    .integer(256)
    .help("Maximum number of nested containers");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("Value of shape `{shape}` at `{path}` has no literal form")]
    Unprintable { shape: String, path: ValuePath },

    #[error("Value at `{path}` contains itself")]
    CyclicValue { path: ValuePath },

    #[error("Value at `{path}` is nested deeper than the limit of {limit}")]
    DepthExceeded { limit: usize, path: ValuePath },
}

/// What to do when a container is reached again while it is being printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CyclePolicy {
    Error,
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrintOptions {
    pub style: LiteralStyle,
    pub cycles: CyclePolicy,
    pub max_depth: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::from(&Configuration::new())
    }
}

impl From<&Configuration> for PrintOptions {
    fn from(config: &Configuration) -> Self {
        let delimiter = match config.string(P_QUOTE) {
            Some("double") => Delimiter::Double,
            _ => Delimiter::Single,
        };
        let ascii_only = config.bool(P_ASCII_ONLY).unwrap_or(false);

        let cycles = if config.bool(P_CYCLE_PLACEHOLDER).unwrap_or(false) {
            CyclePolicy::Placeholder
        } else {
            CyclePolicy::Error
        };

        Self {
            style: LiteralStyle::new(delimiter, ascii_only),
            cycles,
            max_depth: config.integer(P_MAX_DEPTH).unwrap_or(256),
        }
    }
}

/// Print a value with the default options and no native value rules
pub fn show(heap: &Heap, value: Value) -> Result<String, PrintError> {
    let options = PrintOptions::default();
    let hooks = PrintHooks::new();
    ValuePrinter::new(heap, &options, &hooks).show(value)
}

/// Identity of a container, two handles to the same heap slot are the same
/// container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Sequence(usize),
    Map(usize),
    Constructor(usize),
}

/// Prints values found on a heap.  Takes into account that values can be
/// recursively defined, the containers currently being printed are kept so
/// that a container reached from inside itself is detected.
pub struct ValuePrinter<'a> {
    heap: &'a Heap,
    options: &'a PrintOptions,
    hooks: &'a PrintHooks,
    containers: Vec<Container>,
    path: ValuePath,
}

impl<'a> ValuePrinter<'a> {
    pub fn new(heap: &'a Heap, options: &'a PrintOptions, hooks: &'a PrintHooks) -> Self {
        Self {
            heap,
            options,
            hooks,
            containers: vec![],
            path: ValuePath::new(),
        }
    }

    /// Get the literal form of a value, either all of it or an error
    pub fn show(&mut self, value: Value) -> Result<String, PrintError> {
        self.containers.clear();
        self.path = ValuePath::new();

        let mut out = String::new();
        self.print(&mut out, value)?;
        Ok(out)
    }

    fn print(&mut self, out: &mut String, value: Value) -> Result<(), PrintError> {
        let heap = self.heap;

        match value.0 {
            ValueContents::Boolean(val) => out.push_str(if val { "true" } else { "false" }),
            ValueContents::String(id) => self.options.style.quote_into(out, heap.get_string(id)),
            ValueContents::Symbol(sym) => self.options.style.symbol_into(out, heap.resolve(&sym)),
            ValueContents::Number(val) => val.print(out, heap),
            ValueContents::Complex(val) => val.print(out, heap),

            ValueContents::List(id) => {
                self.print_nested(out, Container::Sequence(id), heap.get_vec(id), "[", "]")?
            }
            ValueContents::Tuple(id) => self.print_tuple(out, id)?,
            ValueContents::Map(id) => self.print_map(out, id)?,
            ValueContents::Constructor(id) => self.print_constructor(out, id)?,

            ValueContents::NativeFunction(_) => {
                return Err(self.unprintable(value.shape().to_string()))
            }
            ValueContents::NativeValue(id) => {
                let native = heap.get_native(id);

                match self.hooks.apply(native, &self.options.style) {
                    Some(literal) => {
                        trace!(type_name = native.type_name(), "applied print hook");
                        out.push_str(&literal)
                    }
                    None => return Err(self.unprintable(native.type_name().to_string())),
                }
            }
        }

        Ok(())
    }

    /// Print each value between the delimiters, separated by commas
    fn print_nested(
        &mut self,
        out: &mut String,
        container: Container,
        values: &[Value],
        start: &str,
        end: &str,
    ) -> Result<(), PrintError> {
        if !self.enter(out, container, start, end)? {
            return Ok(());
        }

        out.push_str(start);
        for (idx, value) in values.iter().enumerate() {
            if idx != 0 {
                out.push_str(", ");
            }

            self.path.push(PathSegment::Index(idx));
            self.print(out, *value)?;
            self.path.pop();
        }
        out.push_str(end);

        self.containers.pop();
        Ok(())
    }

    /// Tuples of one element keep a trailing comma, `(1)` would be read as
    /// a parenthesised expression
    fn print_tuple(&mut self, out: &mut String, id: usize) -> Result<(), PrintError> {
        let heap = self.heap;
        let values = heap.get_vec(id);

        if values.len() == 1 {
            self.print_nested(out, Container::Sequence(id), values, "(", ",)")
        } else {
            self.print_nested(out, Container::Sequence(id), values, "(", ")")
        }
    }

    fn print_map(&mut self, out: &mut String, id: usize) -> Result<(), PrintError> {
        if !self.enter(out, Container::Map(id), "{", "}")? {
            return Ok(());
        }

        let heap = self.heap;

        out.push('{');
        for (idx, (key, value)) in heap.get_map(id).iter().enumerate() {
            if idx != 0 {
                out.push_str(", ");
            }

            let key_start = out.len();
            self.path.push(PathSegment::Key(idx));
            self.print(out, *key)?;
            self.path.pop();

            let key_literal = out[key_start..].to_string();
            out.push_str(": ");

            self.path.push(PathSegment::Value(key_literal));
            self.print(out, *value)?;
            self.path.pop();
        }
        out.push('}');

        self.containers.pop();
        Ok(())
    }

    fn print_constructor(&mut self, out: &mut String, id: usize) -> Result<(), PrintError> {
        let heap = self.heap;
        let (name, fields) = heap.get_constructor(id);

        let style = &self.options.style;
        if !style.is_identifier(name) || style.is_reserved(name) {
            return Err(self.unprintable(format!("constructor {}", style.quote(name))));
        }

        if fields.is_empty() {
            out.push_str(name);
            return Ok(());
        }

        out.push_str(name);
        self.print_nested(out, Container::Constructor(id), fields, "(", ")")
    }

    /// Start printing a container.  Returns false if the container is
    /// already being printed and a placeholder was written instead.
    fn enter(
        &mut self,
        out: &mut String,
        container: Container,
        start: &str,
        end: &str,
    ) -> Result<bool, PrintError> {
        if self.containers.contains(&container) {
            debug!(path = %self.path, "value contains itself");

            return match self.options.cycles {
                CyclePolicy::Error => Err(PrintError::CyclicValue {
                    path: self.path.clone(),
                }),
                CyclePolicy::Placeholder => {
                    out.push_str(start);
                    out.push_str("...");
                    out.push_str(end.trim_start_matches(','));
                    Ok(false)
                }
            };
        }

        if self.containers.len() >= self.options.max_depth {
            debug!(path = %self.path, limit = self.options.max_depth, "nesting limit reached");

            return Err(PrintError::DepthExceeded {
                limit: self.options.max_depth,
                path: self.path.clone(),
            });
        }

        self.containers.push(container);
        Ok(true)
    }

    fn unprintable(&self, shape: String) -> PrintError {
        debug!(path = %self.path, %shape, "value has no literal form");

        PrintError::Unprintable {
            shape,
            path: self.path.clone(),
        }
    }
}
