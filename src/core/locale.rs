//! Label translation.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::Deserialize;

/// Maps a menu label to the string shown on screen.
pub trait Locale {
    fn translate<'a>(&'a self, label: &'a str) -> Cow<'a, str>;
}

/// Shows every label as written.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Locale for Passthrough {
    fn translate<'a>(&'a self, label: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(label)
    }
}

/// A fixed translation table, usually the `[translations]` table of the
/// configuration file. Labels without an entry are shown as written.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<String, String>);

impl Dictionary {
    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.0.insert(label.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Locale for Dictionary {
    fn translate<'a>(&'a self, label: &'a str) -> Cow<'a, str> {
        match self.0.get(label) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(label),
        }
    }
}
