//! Ordered yoga registry with grouped evaluation.
//!
//! Rules are evaluated in registration order. A group evaluator computes a
//! whole family in one pass; its members are still exposed as separate
//! entries and share the cached group result within one `compute_all`.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{trace, warn};

use crate::context::YogaContext;
use crate::error::YogaError;
use crate::result::{Outcome, Polarity, YogaResult, slugify};

/// Single-yoga rule.
pub type RuleFn = fn(&YogaContext<'_>) -> Result<Outcome, YogaError>;

/// Family rule returning one outcome per registered member, in member order.
pub type GroupFn = fn(&YogaContext<'_>) -> Result<Vec<Outcome>, YogaError>;

#[derive(Debug, Clone, Copy)]
enum Evaluator {
    Single(RuleFn),
    Member { group: usize, slot: usize },
}

#[derive(Debug)]
struct RuleEntry {
    name: &'static str,
    polarity: Polarity,
    eval: Evaluator,
}

#[derive(Debug)]
struct GroupEntry {
    name: &'static str,
    eval: GroupFn,
    width: usize,
}

type GroupCache = Vec<Option<Result<Vec<Outcome>, YogaError>>>;

/// Named yoga rules in insertion order.
#[derive(Debug, Default)]
pub struct YogaRegistry {
    entries: Vec<RuleEntry>,
    groups: Vec<GroupEntry>,
    by_id: HashMap<String, usize>,
}

impl YogaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full built-in catalog.
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        crate::catalog::register_all(&mut registry);
        registry
    }

    /// Register a single rule. A name already taken keeps its first rule.
    pub fn register(&mut self, name: &'static str, polarity: Polarity, rule: RuleFn) -> bool {
        self.insert(name, polarity, Evaluator::Single(rule))
    }

    /// Register a family evaluated by one function.
    ///
    /// Members whose name is already taken are skipped; the group still
    /// reserves their slot so the evaluator's output order stays fixed.
    pub fn register_group(
        &mut self,
        group: &'static str,
        members: &[(&'static str, Polarity)],
        eval: GroupFn,
    ) {
        let id = self.groups.len();
        self.groups.push(GroupEntry {
            name: group,
            eval,
            width: members.len(),
        });
        for (slot, &(name, polarity)) in members.iter().enumerate() {
            self.insert(name, polarity, Evaluator::Member { group: id, slot });
        }
    }

    fn insert(&mut self, name: &'static str, polarity: Polarity, eval: Evaluator) -> bool {
        let id = slugify(name);
        if self.by_id.contains_key(&id) {
            warn!(yoga = name, "duplicate yoga registration ignored");
            return false;
        }
        self.by_id.insert(id, self.entries.len());
        self.entries.push(RuleEntry {
            name,
            polarity,
            eval,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Group names in registration order.
    pub fn group_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().map(|g| g.name)
    }

    /// Members of a group, in slot order.
    pub fn group_members(&self, group: &str) -> Vec<&'static str> {
        let Some(id) = self.groups.iter().position(|g| g.name.eq_ignore_ascii_case(group)) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| matches!(e.eval, Evaluator::Member { group, .. } if group == id))
            .map(|e| e.name)
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_id.contains_key(&slugify(name))
    }

    pub fn polarity(&self, name: &str) -> Option<Polarity> {
        self.lookup(name).ok().map(|i| self.entries[i].polarity)
    }

    /// Case-insensitive lookup by display name or slug.
    fn lookup(&self, name: &str) -> Result<usize, YogaError> {
        self.by_id
            .get(&slugify(name))
            .copied()
            .ok_or_else(|| YogaError::UnknownYoga(name.to_string()))
    }

    /// Evaluate one yoga by name.
    pub fn evaluate(&self, ctx: &YogaContext<'_>, name: &str) -> Result<YogaResult, YogaError> {
        let idx = self.lookup(name)?;
        let mut cache = self.empty_cache();
        Ok(self.run(idx, ctx, &mut cache))
    }

    /// Evaluate every registered yoga in registration order.
    pub fn compute_all(&self, ctx: &YogaContext<'_>) -> Vec<YogaResult> {
        let mut cache = self.empty_cache();
        (0..self.entries.len())
            .map(|i| self.run(i, ctx, &mut cache))
            .collect()
    }

    /// Evaluate the named yogas, in the order given.
    pub fn compute_selected<S: AsRef<str>>(
        &self,
        ctx: &YogaContext<'_>,
        names: &[S],
    ) -> Result<Vec<YogaResult>, YogaError> {
        let indices = names
            .iter()
            .map(|n| self.lookup(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let mut cache = self.empty_cache();
        Ok(indices
            .into_iter()
            .map(|i| self.run(i, ctx, &mut cache))
            .collect())
    }

    fn empty_cache(&self) -> GroupCache {
        vec![None; self.groups.len()]
    }

    fn run(&self, idx: usize, ctx: &YogaContext<'_>, cache: &mut GroupCache) -> YogaResult {
        let entry = &self.entries[idx];
        let outcome = match entry.eval {
            Evaluator::Single(rule) => rule(ctx),
            Evaluator::Member { group, slot } => self.member_outcome(group, slot, ctx, cache),
        };
        let result = match outcome {
            Ok(o) => YogaResult::from_outcome(entry.name, entry.polarity, o),
            Err(e) => {
                warn!(yoga = entry.name, error = %e, "yoga rule failed; reporting absent");
                YogaResult::from_outcome(entry.name, entry.polarity, Outcome::absent(e.to_string()))
            }
        };
        trace!(
            yoga = result.name.as_str(),
            present = result.present,
            strength = result.strength,
            "yoga evaluated"
        );
        result
    }

    fn member_outcome(
        &self,
        group: usize,
        slot: usize,
        ctx: &YogaContext<'_>,
        cache: &mut GroupCache,
    ) -> Result<Outcome, YogaError> {
        let g = &self.groups[group];
        let cached = cache[group].get_or_insert_with(|| {
            let out = (g.eval)(ctx)?;
            if out.len() != g.width {
                return Err(YogaError::GroupShape {
                    group: g.name,
                    expected: g.width,
                    got: out.len(),
                });
            }
            Ok(out)
        });
        match cached {
            Ok(outcomes) => Ok(outcomes[slot].clone()),
            Err(e) => Err(e.clone()),
        }
    }
}

static CATALOG: LazyLock<YogaRegistry> = LazyLock::new(YogaRegistry::with_catalog);

/// Process-wide registry of the built-in catalog, built on first use.
pub fn catalog() -> &'static YogaRegistry {
    &CATALOG
}
