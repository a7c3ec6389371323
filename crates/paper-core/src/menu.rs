//! # Menu Selection Controller
//!
//! The parent menu owns the selected value; items ask it whether they are
//! selected and report activations back to it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuController { selected: "b" }                                       │
//! │        ▲            │                                                   │
//! │        │ activate   │ is_selected("a") = false                          │
//! │        │            │ is_selected("b") = true                           │
//! │  ┌─────┴────┐  ┌────▼─────┐  ┌──────────┐                               │
//! │  │ item "a" │  │ item "b" │  │ item "c" │  (disabled)                   │
//! │  └──────────┘  └──────────┘  └──────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry registered with a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl MenuItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        MenuItem {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(self) -> Self {
        MenuItem {
            disabled: true,
            ..self
        }
    }
}

/// Result of activating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Activation {
    /// The item is now the selected value.
    Selected(String),
    /// The item exists but is disabled.
    Disabled,
    /// No item with that value is registered.
    Unknown,
}

/// Selection state shared between a menu and its items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuController {
    items: Vec<MenuItem>,
    selected: Option<String>,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `value` selected.
    pub fn with_selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Adds an item, replacing any earlier item with the same value.
    pub fn register(&mut self, item: MenuItem) {
        match self.items.iter_mut().find(|existing| existing.value == item.value) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }

    /// Selects the item with `value` unless it is disabled or unknown.
    pub fn activate(&mut self, value: &str) -> Activation {
        match self.items.iter().find(|item| item.value == value) {
            None => Activation::Unknown,
            Some(item) if item.disabled => Activation::Disabled,
            Some(item) => {
                self.selected = Some(item.value.clone());
                Activation::Selected(item.value.clone())
            }
        }
    }
}
