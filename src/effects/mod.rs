//! Grouping of moves by shared effect.
//!
//! An [`EffectIndex`] keeps two views of the moves table:
//!
//! - every identifier seen for each effect id, and
//! - the sole identifier for effect ids that have been seen exactly once.
//!
//! An effect id drops out of the second view the moment it is observed a
//! second time, even when the repeat carries the same identifier. It never
//! comes back.

use crate::error::Result;
use crate::moves::MoveRow;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace};

#[derive(Debug, Default, Clone)]
pub struct EffectIndex {
    groups: HashMap<i64, HashSet<String>>,
    unique: BTreeMap<i64, String>,
}

impl EffectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a stream of rows, stopping at the first error.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<MoveRow>>,
    {
        let mut index = Self::new();
        let mut count = 0usize;
        for row in rows {
            index.observe(row?);
            count += 1;
        }
        debug!(
            "Grouped {} moves into {} effects ({} unique)",
            count,
            index.group_count(),
            index.unique_count()
        );
        Ok(index)
    }

    /// Record one row.
    pub fn observe(&mut self, row: MoveRow) {
        let MoveRow {
            identifier,
            effect_id,
        } = row;

        match self.groups.get_mut(&effect_id) {
            None => {
                self.groups
                    .insert(effect_id, HashSet::from([identifier.clone()]));
                self.unique.insert(effect_id, identifier);
            }
            Some(group) => {
                group.insert(identifier);
                if let Some(previous) = self.unique.remove(&effect_id) {
                    trace!("Effect {} is shared, dropping {}", effect_id, previous);
                }
            }
        }
    }

    pub fn is_unique(&self, effect_id: i64) -> bool {
        self.unique.contains_key(&effect_id)
    }

    /// Every identifier observed with `effect_id`.
    pub fn group(&self, effect_id: i64) -> Option<&HashSet<String>> {
        self.groups.get(&effect_id)
    }

    pub fn unique_move(&self, effect_id: i64) -> Option<&str> {
        self.unique.get(&effect_id).map(String::as_str)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn unique_count(&self) -> usize {
        self.unique.len()
    }

    /// Unique effects in ascending effect id order.
    pub fn unique_effects(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        self.unique.iter().map(|(&id, name)| (id, name.as_str()))
    }
}

impl FromIterator<MoveRow> for EffectIndex {
    fn from_iter<I: IntoIterator<Item = MoveRow>>(iter: I) -> Self {
        let mut index = Self::new();
        for row in iter {
            index.observe(row);
        }
        index
    }
}
