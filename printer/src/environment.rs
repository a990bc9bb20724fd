use crate::{
    config::Configuration,
    hooks::PrintHooks,
    memory::Heap,
    printer::{PrintError, PrintOptions, ValuePrinter},
    value::Value,
};

/// Everything needed to print values: the heap they live on, the printer
/// options, and the rules for native values
#[derive(Debug)]
pub struct Environment {
    config: Configuration,
    heap: Heap,
    hooks: PrintHooks,
}

impl Environment {
    pub fn new(config: impl Into<Configuration>) -> Self {
        Self {
            config: config.into(),
            heap: Heap::new(),
            hooks: PrintHooks::new(),
        }
    }

    /// Get the literal form of a value allocated on this environment's heap
    pub fn show(&self, value: Value) -> Result<String, PrintError> {
        let options = PrintOptions::from(&self.config);
        ValuePrinter::new(&self.heap, &options, &self.hooks).show(value)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub fn hooks(&self) -> &PrintHooks {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut PrintHooks {
        &mut self.hooks
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Configuration::new())
    }
}
