//! Input source types

use std::fmt;
use std::path::PathBuf;

/// Where one object sample is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectSource {
    /// A file on disk
    File(PathBuf),
    /// The process standard input
    Stdin,
}

impl fmt::Display for ObjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Every input of one run, resolved into merge order
///
/// `schemas` merge first, in the order given; `objects` follow, explicit
/// paths before glob matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// Schema fragment files, in command-line order
    pub schemas: Vec<PathBuf>,
    /// Object sample sources, explicit paths then glob matches
    pub objects: Vec<ObjectSource>,
}

impl ResolvedInputs {
    /// Total number of sources to merge
    pub fn len(&self) -> usize {
        self.schemas.len() + self.objects.len()
    }

    /// True when nothing resolved at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
