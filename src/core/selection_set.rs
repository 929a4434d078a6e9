//! Geordnete Selektionsmenge mit deterministischer Ereignis-Reihenfolge.

use indexmap::IndexSet;

use crate::core::host::ElementId;

/// Geordnete Menge selektierter Elemente.
///
/// Einfüge-Reihenfolge (bei Evaluations-Ergebnissen die Dokument-Reihenfolge)
/// bleibt erhalten, Mitgliedschaft ist eindeutig.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: IndexSet<ElementId>,
}

impl SelectionSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self {
            ids: IndexSet::new(),
        }
    }

    /// Anzahl der Elemente.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// `true`, wenn kein Element selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Mitgliedschaftstest.
    pub fn contains(&self, id: ElementId) -> bool {
        self.ids.contains(&id)
    }

    /// Fügt ein Element am Ende hinzu (No-op bei bestehender Mitgliedschaft).
    pub fn insert(&mut self, id: ElementId) -> bool {
        self.ids.insert(id)
    }

    /// Iteriert in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.ids.iter().copied()
    }

    /// Kopie als `Vec` in Einfüge-Reihenfolge.
    pub fn to_vec(&self) -> Vec<ElementId> {
        self.ids.iter().copied().collect()
    }

    /// Kürzt auf die ersten `cap` Elemente.
    pub fn truncate(&mut self, cap: usize) {
        self.ids.truncate(cap);
    }

    /// Symmetrische Differenz: erst Neuzugänge (`other` ∖ `self`, in
    /// `other`-Reihenfolge), dann Abgänge (`self` ∖ `other`, in
    /// `self`-Reihenfolge).
    pub fn symmetric_difference(&self, other: &SelectionSet) -> Vec<ElementId> {
        let added = other.iter().filter(|id| !self.contains(*id));
        let removed = self.iter().filter(|id| !other.contains(*id));
        added.chain(removed).collect()
    }
}

impl FromIterator<ElementId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
