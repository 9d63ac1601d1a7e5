//! Known BIDS acquisition modalities.
//!
//! A modality is the name of a data-type directory sitting directly under a
//! subject (or session) directory, e.g. `sub-01/func`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Acquisition modality directory recognized by the inventory.
///
/// Ordering follows the lowercase tag, so sets of modalities list
/// alphabetically (`anat`, `beh`, `dwi`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Anat,
    Dwi,
    Func,
    Perf,
    Fmap,
    Beh,
    Meg,
    Eeg,
    Ieeg,
    Pet,
    Micr,
    Nirs,
    Motion,
}

impl Modality {
    /// Every known modality, in vocabulary order.
    pub const ALL: [Modality; 13] = [
        Modality::Anat,
        Modality::Dwi,
        Modality::Func,
        Modality::Perf,
        Modality::Fmap,
        Modality::Beh,
        Modality::Meg,
        Modality::Eeg,
        Modality::Ieeg,
        Modality::Pet,
        Modality::Micr,
        Modality::Nirs,
        Modality::Motion,
    ];

    /// Returns the directory tag for this modality.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Anat => "anat",
            Modality::Dwi => "dwi",
            Modality::Func => "func",
            Modality::Perf => "perf",
            Modality::Fmap => "fmap",
            Modality::Beh => "beh",
            Modality::Meg => "meg",
            Modality::Eeg => "eeg",
            Modality::Ieeg => "ieeg",
            Modality::Pet => "pet",
            Modality::Micr => "micr",
            Modality::Nirs => "nirs",
            Modality::Motion => "motion",
        }
    }

    /// Matches a directory name against the vocabulary (exact, case-sensitive).
    pub fn parse(dir_name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|modality| modality.as_str() == dir_name)
    }

    /// Modalities whose file names may carry a `task-<label>` entity.
    ///
    /// Task extraction only runs when one of these is present.
    pub fn supports_tasks(&self) -> bool {
        matches!(
            self,
            Modality::Func
                | Modality::Eeg
                | Modality::Ieeg
                | Modality::Meg
                | Modality::Beh
                | Modality::Perf
                | Modality::Pet
                | Modality::Motion
        )
    }

    /// Modalities for which a missing task label is reported.
    ///
    /// Narrower than [`Modality::supports_tasks`]: `perf` and `pet` are
    /// scanned for tasks but never warned about.
    pub fn requires_tasks(&self) -> bool {
        matches!(
            self,
            Modality::Func
                | Modality::Eeg
                | Modality::Ieeg
                | Modality::Meg
                | Modality::Beh
                | Modality::Motion
        )
    }
}

impl PartialOrd for Modality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Modality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown modality: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn parses_known_tags_only() {
        assert_eq!(Modality::parse("func"), Some(Modality::Func));
        assert_eq!(Modality::parse("motion"), Some(Modality::Motion));
        assert_eq!(Modality::parse("FUNC"), None);
        assert_eq!(Modality::parse("derivatives"), None);
        assert_eq!(Modality::parse(""), None);
    }

    #[test]
    fn vocabulary_round_trips_through_text() {
        for modality in Modality::ALL {
            assert_eq!(modality.as_str().parse::<Modality>(), Ok(modality));
        }
    }

    #[test]
    fn task_subsets_differ_on_perf_and_pet() {
        let supports: Vec<_> = Modality::ALL.iter().filter(|m| m.supports_tasks()).collect();
        let requires: Vec<_> = Modality::ALL.iter().filter(|m| m.requires_tasks()).collect();
        assert_eq!(supports.len(), 8);
        assert_eq!(requires.len(), 6);
        assert!(Modality::Perf.supports_tasks() && !Modality::Perf.requires_tasks());
        assert!(Modality::Pet.supports_tasks() && !Modality::Pet.requires_tasks());
        assert!(requires.iter().all(|m| m.supports_tasks()));
        assert!(!Modality::Anat.supports_tasks());
    }

    #[test]
    fn sets_sort_alphabetically() {
        let set: BTreeSet<Modality> = [Modality::Func, Modality::Anat, Modality::Beh, Modality::Dwi]
            .into_iter()
            .collect();
        let tags: Vec<&str> = set.iter().map(Modality::as_str).collect();
        assert_eq!(tags, vec!["anat", "beh", "dwi", "func"]);
    }
}
