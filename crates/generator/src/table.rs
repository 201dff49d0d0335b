//! Arity table for the callback generator.
//!
//! The table maps an exec-time argument count to the set of bind-time
//! argument counts an adapter is generated for. It is the only input of a
//! generation run: nothing is emitted for a pair absent from the table, and
//! iteration order (ascending on both levels) fixes the output order.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::TableError;

/// Largest supported exec-time argument count.
pub const MAX_EXEC_COUNT: usize = 4;

/// Largest supported bind-time argument count.
pub const MAX_BIND_COUNT: usize = 3;

// =========================================================================
// Arity pairs and callback variants
// =========================================================================

/// Identifies one generated adapter: `bind_count` arguments captured at
/// construction, `exec_count` arguments supplied on each run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArityPair {
    bind_count: usize,
    exec_count: usize,
}

impl ArityPair {
    pub fn new(bind_count: usize, exec_count: usize) -> Self {
        Self {
            bind_count,
            exec_count,
        }
    }

    pub fn bind_count(&self) -> usize {
        self.bind_count
    }

    pub fn exec_count(&self) -> usize {
        self.exec_count
    }
}

impl fmt::Display for ArityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(bind={}, exec={})", self.bind_count, self.exec_count)
    }
}

/// Lifetime policy of a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lifetime {
    /// Runs any number of times; dropped by its owner.
    Reusable,
    /// Consumed by its single run.
    SingleUse,
    /// Consumed by its single run, which yields no value.
    SingleUseNoValue,
}

impl Lifetime {
    /// Variants emitted for every exec-time count, in emission order.
    pub const ALL: [Lifetime; 3] = [
        Lifetime::Reusable,
        Lifetime::SingleUse,
        Lifetime::SingleUseNoValue,
    ];

    /// Lifetimes a factory function exists for, in emission order.
    pub const FACTORIES: [Lifetime; 2] = [Lifetime::SingleUse, Lifetime::Reusable];
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lifetime::Reusable => "reusable",
            Lifetime::SingleUse => "single-use",
            Lifetime::SingleUseNoValue => "single-use-no-value",
        };
        f.write_str(s)
    }
}

/// A binding-independent callback type: one per `(exec_count, lifetime)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallbackVariant {
    exec_count: usize,
    lifetime: Lifetime,
}

impl CallbackVariant {
    pub fn new(exec_count: usize, lifetime: Lifetime) -> Self {
        Self {
            exec_count,
            lifetime,
        }
    }

    pub fn exec_count(&self) -> usize {
        self.exec_count
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

// =========================================================================
// Arity table
// =========================================================================

/// Ordered mapping `exec_count -> {bind_count}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArityTable {
    entries: BTreeMap<usize, BTreeSet<usize>>,
}

impl ArityTable {
    /// Build a table, rejecting counts outside the supported ranges and
    /// exec-time counts listed more than once.
    pub fn new<I, B>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (usize, B)>,
        B: IntoIterator<Item = usize>,
    {
        let mut table = BTreeMap::new();
        for (exec, binds) in entries {
            if !(1..=MAX_EXEC_COUNT).contains(&exec) {
                return Err(TableError::ExecCountOutOfRange(exec));
            }
            let binds = binds
                .into_iter()
                .map(|bind| {
                    if bind > MAX_BIND_COUNT {
                        Err(TableError::BindCountOutOfRange { exec, bind })
                    } else {
                        Ok(bind)
                    }
                })
                .collect::<Result<BTreeSet<_>, _>>()?;
            if table.insert(exec, binds).is_some() {
                return Err(TableError::DuplicateExecCount(exec));
            }
        }
        Ok(Self { entries: table })
    }

    /// Exec-time counts, ascending.
    pub fn exec_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Bind-time counts permitted for `exec_count`, ascending. Empty when
    /// the exec-time count is not configured.
    pub fn bind_counts(&self, exec_count: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries.get(&exec_count).into_iter().flatten().copied()
    }

    /// Every configured pair, exec-time count major, bind-time count minor.
    pub fn pairs(&self) -> impl Iterator<Item = ArityPair> + '_ {
        self.entries.iter().flat_map(|(&exec, binds)| {
            binds.iter().map(move |&bind| ArityPair::new(bind, exec))
        })
    }

    pub fn contains(&self, pair: ArityPair) -> bool {
        self.entries
            .get(&pair.exec_count())
            .is_some_and(|binds| binds.contains(&pair.bind_count()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ArityTable {
    /// exec=1 binds up to three arguments; exec=2..=4 bind at most one.
    fn default() -> Self {
        let entries = [
            (1, BTreeSet::from([0, 1, 2, 3])),
            (2, BTreeSet::from([0, 1])),
            (3, BTreeSet::from([0, 1])),
            (4, BTreeSet::from([0, 1])),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

/// Textual form: `;`-separated `<exec>:<bind>,<bind>,...` entries, e.g.
/// `"1:0,1,2,3;2:0,1"`. An entry with nothing after the colon configures
/// the callback variants without any adapter.
impl FromStr for ArityTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        for entry in s.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let malformed = || TableError::Malformed(entry.to_string());
            let (exec, binds) = entry.split_once(':').ok_or_else(malformed)?;
            let exec = exec.trim().parse::<usize>().map_err(|_| malformed())?;
            let binds = binds
                .split(',')
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(|b| b.parse::<usize>().map_err(|_| malformed()))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((exec, binds));
        }
        Self::new(entries)
    }
}

impl fmt::Display for ArityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|(exec, binds)| {
                let binds: Vec<String> = binds.iter().map(|b| b.to_string()).collect();
                format!("{}:{}", exec, binds.join(","))
            })
            .collect();
        f.write_str(&entries.join(";"))
    }
}
