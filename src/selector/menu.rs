//! Renumbered attribute menu.
//!
//! Options are listed in ascending id order with the excluded attribute
//! skipped, then numbered 1..=N. Position `p` maps back to `options[p - 1]`.

use std::io::{self, Write};

use smallvec::SmallVec;

use crate::cards::AttributeId;

/// Menu of selectable attributes for one prompt iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    options: SmallVec<[AttributeId; AttributeId::COUNT]>,
}

impl Menu {
    /// Build the menu, leaving out `excluded` if given.
    #[must_use]
    pub fn build(excluded: Option<AttributeId>) -> Self {
        let options = AttributeId::ALL
            .iter()
            .copied()
            .filter(|&attr| Some(attr) != excluded)
            .collect();
        Self { options }
    }

    /// Number of displayed options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Is the menu empty? Never true for a menu built from the full set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Map a 1-based display position to its attribute.
    #[must_use]
    pub fn resolve(&self, position: i64) -> Option<AttributeId> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.options.get(index).copied()
    }

    /// Iterate `(position, attribute)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (usize, AttributeId)> + '_ {
        self.options.iter().enumerate().map(|(i, &attr)| (i + 1, attr))
    }

    /// Write the numbered options and the choice prompt.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (position, attr) in self.entries() {
            writeln!(out, "{position}. {attr}")?;
        }
        write!(out, "Escolha uma opcao (1-{}): ", self.len())?;
        out.flush()
    }
}
