//! A scripted tour of a [`Tree`]: insert some keys, then remove keys one at a time, reporting the
//! level order and minimum depth after every stage.
//!
//! # Examples
//!
//! ```
//! use keytree::walkthrough::Walkthrough;
//!
//! let walkthrough = Walkthrough::from_args(["3", "1", "4", "--", "3"]).unwrap();
//! let steps = walkthrough.run();
//!
//! assert_eq!(steps[0].level_order, vec![3, 1, 4]);
//! assert_eq!(steps[1].level_order, vec![4, 1]);
//! ```

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

use crate::Tree;

/// Keys inserted by the default walkthrough. 10 appears twice on purpose.
const DEFAULT_INSERTS: [i64; 10] = [10, 1, 99, -5, 8, 43, 10, 6, 77, 1000];

/// Keys removed, in order, by the default walkthrough.
const DEFAULT_REMOVALS: [i64; 2] = [1, 6];

/// Separates keys to insert from keys to remove on the command line.
const REMOVALS_MARKER: &str = "--";

/// Errors raised while reading a walkthrough from the command line.
#[derive(Error, Debug)]
pub enum WalkthroughError {
    /// A key to insert or remove is not an integer.
    #[error("invalid key {input:?}")]
    InvalidKey {
        /// The offending argument.
        input: String,
        /// Why it failed to parse.
        #[source]
        source: ParseIntError,
    },
}

/// The keys a walkthrough inserts and then removes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walkthrough {
    /// Keys inserted before the first report, in order.
    pub inserts: Vec<i64>,
    /// Keys removed one at a time after the first report.
    pub removals: Vec<i64>,
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self {
            inserts: DEFAULT_INSERTS.to_vec(),
            removals: DEFAULT_REMOVALS.to_vec(),
        }
    }
}

/// The state of the tree after one stage of a walkthrough.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// What happened in this stage.
    pub label: String,
    /// Keys of the tree in level order.
    pub level_order: Vec<i64>,
    /// Minimum depth of the tree.
    pub minimum_depth: usize,
}

impl Step {
    fn capture(label: String, tree: &Tree<i64>) -> Self {
        Self {
            label,
            level_order: tree.level_order(),
            minimum_depth: tree.minimum_depth(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label)?;
        writeln!(f, "Breadth-first traversal of binary search tree:")?;
        let keys = self
            .level_order
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>();
        writeln!(f, "{}", keys.join(" "))?;
        writeln!(f, "The minimum depth of this tree is: {}", self.minimum_depth)
    }
}

impl Walkthrough {
    /// Reads a walkthrough from command line arguments (without the program name). Arguments
    /// before `--` are keys to insert, arguments after it are keys to remove. No arguments at all
    /// selects the default walkthrough.
    pub fn from_args<I, S>(args: I) -> Result<Self, WalkthroughError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .collect::<Vec<_>>();
        if args.is_empty() {
            return Ok(Self::default());
        }

        let (inserts, removals) = match args.iter().position(|arg| arg == REMOVALS_MARKER) {
            Some(marker) => (&args[..marker], &args[marker + 1..]),
            None => (&args[..], &[][..]),
        };

        Ok(Self {
            inserts: parse_keys(inserts)?,
            removals: parse_keys(removals)?,
        })
    }

    /// Runs the walkthrough on a fresh tree. The first step reports the tree after every insert,
    /// each following step the tree after one removal.
    pub fn run(&self) -> Vec<Step> {
        let mut tree = self.inserts.iter().copied().collect::<Tree<i64>>();
        debug!(inserted = tree.len(), "built walkthrough tree");

        let mut steps = Vec::with_capacity(self.removals.len() + 1);
        steps.push(Step::capture("Initial binary search tree".to_owned(), &tree));

        for key in &self.removals {
            tree.delete(key);
            steps.push(Step::capture(format!("Removing node with key {key}"), &tree));
        }

        tree.clear();
        steps
    }
}

fn parse_keys(args: &[String]) -> Result<Vec<i64>, WalkthroughError> {
    args.iter()
        .map(|input| {
            input
                .parse()
                .map_err(|source| WalkthroughError::InvalidKey {
                    input: input.clone(),
                    source,
                })
        })
        .collect()
}
