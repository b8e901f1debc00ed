//! The owned preference cell.
//!
//! DESIGN
//! ======
//! One `ThemeCell` exists per mounted shell. Observers are called with the
//! current value as they subscribe and then once per committed transition,
//! in subscription order, before `toggle` returns.

use std::fmt;

use crate::Theme;

#[cfg(test)]
#[path = "cell_test.rs"]
mod tests;

type Observer = Box<dyn FnMut(Theme) + Send + Sync>;

pub struct ThemeCell {
    current: Theme,
    observers: Vec<Observer>,
}

impl ThemeCell {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self { current: initial, observers: Vec::new() }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.current
    }

    /// Register `observer` and immediately deliver the current value to it.
    pub fn subscribe(&mut self, mut observer: impl FnMut(Theme) + Send + Sync + 'static) {
        observer(self.current);
        self.observers.push(Box::new(observer));
    }

    /// Flip the preference and notify every observer. Returns the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        let current = self.current;
        for observer in &mut self.observers {
            observer(current);
        }
        current
    }
}

impl fmt::Debug for ThemeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeCell")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}
