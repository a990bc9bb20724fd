use std::{any::TypeId, collections::HashMap, fmt};

use crate::{printer::escape::LiteralStyle, value::CustomValue};

type Rule = Box<dyn Fn(&dyn CustomValue, &LiteralStyle) -> Option<String> + Send + Sync>;

/// Printing rules for native values, looked up by the rust type of the
/// stored value.  Rules must be pure: the same value and style always give
/// the same text, and any text they embed should be quoted with the style
/// passed in.
#[derive(Default)]
pub struct PrintHooks {
    rules: HashMap<TypeId, Rule>,
}

impl PrintHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rule used to print native values of type `T`, replacing
    /// any rule registered before for the same type
    pub fn register<T, F>(&mut self, rule: F)
    where
        T: CustomValue,
        F: Fn(&T, &LiteralStyle) -> String + Send + Sync + 'static,
    {
        self.rules.insert(
            TypeId::of::<T>(),
            Box::new(move |value: &dyn CustomValue, style: &LiteralStyle| {
                value
                    .as_any()
                    .downcast_ref::<T>()
                    .map(|value| rule(value, style))
            }),
        );
    }

    pub fn is_registered<T: CustomValue>(&self) -> bool {
        self.rules.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rule for a native value, `None` if its type has no rule
    pub(crate) fn apply(&self, value: &dyn CustomValue, style: &LiteralStyle) -> Option<String> {
        let rule = self.rules.get(&value.as_any().type_id())?;
        rule(value, style)
    }
}

impl fmt::Debug for PrintHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintHooks")
            .field("rules", &self.rules.len())
            .finish()
    }
}
