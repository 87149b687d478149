//! # Delivery priority for handlers.
//!
//! [`Priority`] decides where a handler sits inside its category's bucket.
//! Buckets are ordered highest priority first; handlers sharing a priority
//! keep their registration order.
//!
//! ```text
//! register(A: Default), register(B: VeryImportant), register(C: Important), register(D: Default)
//!
//! bucket  ─►  B (VeryImportant) ─► C (Important) ─► A (Default) ─► D (Default)
//! ```

use std::fmt;

/// Ordered delivery tag: `Default < Important < VeryImportant`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    /// Regular handlers (default).
    #[default]
    Default = 0,
    /// Delivered before every `Default` handler.
    Important = 1,
    /// Delivered first.
    VeryImportant = 2,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [
        Priority::Default,
        Priority::Important,
        Priority::VeryImportant,
    ];

    /// Numeric level (`0..=2`).
    #[inline]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Priority::Default => "default",
            Priority::Important => "important",
            Priority::VeryImportant => "very_important",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Priority::Default < Priority::Important);
        assert!(Priority::Important < Priority::VeryImportant);
        assert_eq!(Priority::default(), Priority::Default);
    }

    #[test]
    fn test_levels_match_declaration() {
        let levels: Vec<u8> = Priority::ALL.iter().map(|p| p.level()).collect();
        assert_eq!(levels, vec![0, 1, 2]);
    }

    #[test]
    fn test_descending_sort_is_stable() {
        let mut tagged = vec![
            (Priority::Default, 'a'),
            (Priority::VeryImportant, 'b'),
            (Priority::Default, 'c'),
            (Priority::Important, 'd'),
            (Priority::VeryImportant, 'e'),
        ];
        tagged.sort_by(|l, r| r.0.cmp(&l.0));
        let order: String = tagged.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, "bedac");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Priority::VeryImportant.to_string(), "very_important");
        assert_eq!(Priority::Important.as_label(), "important");
    }
}
