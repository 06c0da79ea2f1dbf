//! Menu contents: entries, options and the builder that collects them.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

use crate::core::app::AppCtx;
use crate::core::surface::Surface;
use crate::ui::menu::Menu;

/// Row height used when none is configured.
pub const DEFAULT_FONT_HEIGHT: u32 = 21;

/// Callback run when an action row is selected. It receives the menu it
/// lives in, so it may redraw, move, or request a transition.
pub type Action = Box<dyn FnMut(&mut Menu, &mut AppCtx<'_>)>;

/// Hook run before the rows are drawn.
pub type Predraw = Box<dyn FnMut(&mut dyn Surface)>;

/// One row of a menu.
pub enum Entry {
    Action(Action),
    Number(NumberField),
    Toggle(ToggleField),
    /// A row with no value that does nothing when selected.
    Label,
}

impl Entry {
    /// The value column for this row, if it has one.
    pub fn formatted(&self) -> Option<String> {
        match self {
            Entry::Number(field) => Some(field.formatted()),
            Entry::Toggle(field) => Some(field.formatted()),
            Entry::Action(_) | Entry::Label => None,
        }
    }
}

impl core::fmt::Debug for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Entry::Action(_) => f.write_str("Action"),
            Entry::Number(field) => f.debug_tuple("Number").field(&field.value).finish(),
            Entry::Toggle(field) => f.debug_tuple("Toggle").field(&field.value).finish(),
            Entry::Label => f.write_str("Label"),
        }
    }
}

/// A numeric value adjusted in edit mode.
pub struct NumberField {
    pub value: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
    /// Leaving the range jumps to the opposite bound instead of stopping.
    pub wrap: bool,
    on_change: Option<Box<dyn FnMut(f64)>>,
    format: Option<Box<dyn Fn(f64) -> String>>,
}

impl NumberField {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            min: None,
            max: None,
            step: 1.0,
            wrap: false,
            on_change: None,
            format: None,
        }
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn format(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.format = Some(Box::new(f));
        self
    }

    pub fn formatted(&self) -> String {
        match &self.format {
            Some(format) => format(self.value),
            None => format!("{}", self.value),
        }
    }

    /// Step the value by `direction` steps, then wrap or clamp it into range
    /// and report the result.
    pub(crate) fn adjust(&mut self, direction: i32) {
        self.value += f64::from(direction) * self.step;
        if let Some(min) = self.min {
            if self.value < min {
                self.value = match (self.wrap, self.max) {
                    (true, Some(max)) => max,
                    _ => min,
                };
            }
        }
        if let Some(max) = self.max {
            if self.value > max {
                self.value = match (self.wrap, self.min) {
                    (true, Some(min)) => min,
                    _ => max,
                };
            }
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.value);
        }
    }
}

/// An on/off value flipped by select.
pub struct ToggleField {
    pub value: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
    format: Option<Box<dyn Fn(bool) -> String>>,
}

impl ToggleField {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            on_change: None,
            format: None,
        }
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn format(mut self, f: impl Fn(bool) -> String + 'static) -> Self {
        self.format = Some(Box::new(f));
        self
    }

    pub fn formatted(&self) -> String {
        match &self.format {
            Some(format) => format(self.value),
            None if self.value => String::from("On"),
            None => String::from("Off"),
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.value = !self.value;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.value);
        }
    }
}

/// Menu-wide settings.
#[derive(Deserialize)]
#[serde(default)]
pub struct MenuOptions {
    /// Heading drawn above the rows.
    pub title: Option<String>,
    /// Row height in pixels.
    pub font_height: u32,
    /// Index of the cursor row.
    pub selected: usize,
    #[serde(skip)]
    pub predraw: Option<Predraw>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            title: None,
            font_height: DEFAULT_FONT_HEIGHT,
            selected: 0,
            predraw: None,
        }
    }
}

impl core::fmt::Debug for MenuOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuOptions")
            .field("title", &self.title)
            .field("font_height", &self.font_height)
            .field("selected", &self.selected)
            .field("predraw", &self.predraw.is_some())
            .finish()
    }
}

/// The ordered contents of a menu. Labels are unique: adding a label that is
/// already present replaces its entry without moving it.
#[derive(Debug, Default)]
pub struct MenuSpec {
    pub(crate) entries: Vec<(String, Entry)>,
    pub(crate) options: MenuOptions,
}

impl MenuSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: MenuOptions) -> Self {
        self.options = options;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.options.selected = selected;
        self
    }

    pub fn predraw(mut self, f: impl FnMut(&mut dyn Surface) + 'static) -> Self {
        self.options.predraw = Some(Box::new(f));
        self
    }

    pub fn entry(mut self, label: impl Into<String>, entry: Entry) -> Self {
        let label = label.into();
        match self.entries.iter_mut().find(|(name, _)| *name == label) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((label, entry)),
        }
        self
    }

    pub fn action<F>(self, label: impl Into<String>, f: F) -> Self
    where
        F: FnMut(&mut Menu, &mut AppCtx<'_>) + 'static,
    {
        self.entry(label, Entry::Action(Box::new(f)))
    }

    pub fn number(self, label: impl Into<String>, field: NumberField) -> Self {
        self.entry(label, Entry::Number(field))
    }

    pub fn toggle(self, label: impl Into<String>, field: ToggleField) -> Self {
        self.entry(label, Entry::Toggle(field))
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        self.entry(label, Entry::Label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
}
