//! Facet toggle groups.
//!
//! A [`FilterState`] is a value: toggling a flag produces a new state and the
//! active sets are always recomputed from the full set of flags, never patched.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::types::{Category, FacetKind};

/// Type names emitted by the corpus generator.
pub const DEFAULT_TYPES: [&str; 3] = ["html", "Guides", "ts"];

/// A named set of boolean flags for one facet dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    kind: FacetKind,
    flags: BTreeMap<String, bool>,
}

impl FacetGroup {
    pub fn new<I, S>(kind: FacetKind, names: I, initial: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flags = names.into_iter().map(|n| (n.into(), initial)).collect();
        Self { kind, flags }
    }

    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.flags.iter().map(|(name, on)| (name.as_str(), *on))
    }

    pub fn is_on(&self, name: &str) -> Option<bool> { self.flags.get(name).copied() }

    /// Copy of this group with `name` set to `value`.
    pub fn toggled(&self, name: &str, value: bool) -> Result<Self> {
        if !self.flags.contains_key(name) {
            return Err(Error::UnknownFacet { group: self.kind.to_string(), name: name.to_string() });
        }
        let mut next = self.clone();
        next.flags.insert(name.to_string(), value);
        Ok(next)
    }

    /// Names whose flag is currently on.
    pub fn active(&self) -> BTreeSet<String> {
        self.flags.iter().filter(|(_, on)| **on).map(|(name, _)| name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    categories: FacetGroup,
    types: FacetGroup,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Category::ALL.iter().map(|c| c.as_str()), DEFAULT_TYPES)
    }
}

impl FilterState {
    /// Every category starts on, every type starts off.
    pub fn new<C, T, S1, S2>(categories: C, types: T) -> Self
    where
        C: IntoIterator<Item = S1>,
        T: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            categories: FacetGroup::new(FacetKind::Category, categories, true),
            types: FacetGroup::new(FacetKind::Type, types, false),
        }
    }

    pub fn group(&self, kind: FacetKind) -> &FacetGroup {
        match kind {
            FacetKind::Category => &self.categories,
            FacetKind::Type => &self.types,
        }
    }

    pub fn toggled(&self, kind: FacetKind, name: &str, value: bool) -> Result<Self> {
        let mut next = self.clone();
        match kind {
            FacetKind::Category => next.categories = self.categories.toggled(name, value)?,
            FacetKind::Type => next.types = self.types.toggled(name, value)?,
        }
        Ok(next)
    }

    pub fn active_categories(&self) -> BTreeSet<String> { self.categories.active() }

    pub fn active_types(&self) -> BTreeSet<String> { self.types.active() }
}
