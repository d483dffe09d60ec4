//! Per-parse option values, kept apart from the immutable definitions so one
//! parser can run any number of parses.

use crate::option::{OptionId, Value};
use crate::registry::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    values: Vec<Option<Value>>,
}

impl Resolution {
    /// Every option at its post-registration default.
    pub fn initial(registry: &Registry) -> Self {
        Self {
            values: registry
                .iter()
                .map(|(_, definition)| definition.initial_value())
                .collect(),
        }
    }

    pub fn get(&self, id: OptionId) -> Option<&Value> {
        self.values.get(id.0).and_then(Option::as_ref)
    }

    pub fn set(&mut self, id: OptionId, value: Value) {
        if let Some(slot) = self.values.get_mut(id.0) {
            *slot = Some(value);
        }
    }

    /// Whether the option currently holds a passed value.
    pub fn is_set(&self, id: OptionId) -> bool {
        self.get(id).is_some_and(Value::is_set)
    }
}
