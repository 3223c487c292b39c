//! Reference-parity oracle for the widget library.
//!
//! The fixture under `fixtures/` records the class and attribute output of
//! the reference implementation per widget kind. The integration suite in
//! `tests/` renders each widget to markup and compares against this oracle,
//! so a styling or attribute drift in either implementation fails loudly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// Recorded reference output for one widget kind.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceWidget {
    /// Expected `data-slot` tag.
    pub slot: String,
    /// Base class fragment shared by every rendering of the kind.
    pub base: String,
    /// Class fragment per enumerated variant token.
    #[serde(default)]
    pub variants: BTreeMap<String, String>,
    /// Class fragment per enumerated size token.
    #[serde(default)]
    pub sizes: BTreeMap<String, String>,
}

/// The full reference oracle, keyed by widget kind.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceOracle {
    widgets: BTreeMap<String, ReferenceWidget>,
}

impl ReferenceOracle {
    /// Loads the bundled reference fixture.
    pub fn load() -> Self {
        serde_json::from_str(include_str!("../fixtures/reference_render.json"))
            .expect("reference fixture parses")
    }

    /// Looks up the recorded output for a widget kind.
    pub fn widget(&self, kind: &str) -> Option<&ReferenceWidget> {
        self.widgets.get(kind)
    }

    /// All recorded widget kinds, in stable order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }
}

/// Splits a class string into its set of class tokens.
pub fn class_set(class: &str) -> BTreeSet<&str> {
    class.split_whitespace().collect()
}

/// Extracts an attribute value from the first rendered element carrying the
/// given `data-slot` tag. Returns `None` when the slot or attribute is
/// absent.
pub fn slot_attr<'a>(markup: &'a str, slot: &str, attr: &str) -> Option<&'a str> {
    let tag = slot_tag(markup, slot)?;
    attr_value(tag, attr)
}

/// Whether the markup contains an element with the given `data-slot` tag.
pub fn has_slot(markup: &str, slot: &str) -> bool {
    slot_tag(markup, slot).is_some()
}

fn slot_tag<'a>(markup: &'a str, slot: &str) -> Option<&'a str> {
    let needle = format!("data-slot=\"{slot}\"");
    let at = markup.find(&needle)?;
    let open = markup[..at].rfind('<')?;
    let close = at + markup[at..].find('>')?;
    Some(&markup[open..close])
}

fn attr_value<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let needle = format!(" {attr}=\"");
    let at = tag.find(&needle)?;
    let start = at + needle.len();
    let end = start + tag[start..].find('"')?;
    Some(&tag[start..end])
}
