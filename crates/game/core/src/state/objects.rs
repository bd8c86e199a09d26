use super::{ObjectId, Position};

/// Entry of the object table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// No live object: id 0, or an id retired after consumption.
    #[default]
    Vacant,
    Occupied(Position),
}

impl Slot {
    pub const fn position(self) -> Option<Position> {
        match self {
            Slot::Vacant => None,
            Slot::Occupied(position) => Some(position),
        }
    }
}

/// Ordered id → position table.
///
/// Ids are indices into the table and are never reused within an episode.
/// Invariant kept by the simulator: for every occupied slot `k`, the grid cell
/// at that position holds `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectTable {
    slots: Vec<Slot>,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::Vacant],
        }
    }

    /// Drops every object; the next insertion receives the player id.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.slots.push(Slot::Vacant);
    }

    /// Registers a new object at `position` and returns its id.
    ///
    /// Returns `None` once the id space is exhausted.
    pub fn insert(&mut self, position: Position) -> Option<ObjectId> {
        let id = ObjectId(u32::try_from(self.slots.len()).ok()?);
        self.slots.push(Slot::Occupied(position));
        Some(id)
    }

    pub fn slot(&self, id: ObjectId) -> Slot {
        self.slots.get(id.0 as usize).copied().unwrap_or_default()
    }

    pub fn position(&self, id: ObjectId) -> Option<Position> {
        self.slot(id).position()
    }

    /// Updates the position of a live object. Returns false for vacant ids.
    pub fn relocate(&mut self, id: ObjectId, position: Position) -> bool {
        match self.slots.get_mut(id.0 as usize) {
            Some(slot) if slot.position().is_some() => {
                *slot = Slot::Occupied(position);
                true
            }
            _ => false,
        }
    }

    /// Permanently vacates `id`, returning its last position.
    pub fn retire(&mut self, id: ObjectId) -> Option<Position> {
        let slot = self.slots.get_mut(id.0 as usize)?;
        std::mem::take(slot).position()
    }

    /// Number of ids handed out, including vacant ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live().next().is_none()
    }

    /// Live objects in id order.
    pub fn live(&self) -> impl Iterator<Item = (ObjectId, Position)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let id = ObjectId(u32::try_from(index).ok()?);
                slot.position().map(|p| (id, p))
            })
    }
}

impl Default for ObjectTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_is_the_player() {
        let mut table = ObjectTable::new();
        assert!(table.is_empty());
        let id = table.insert(Position::new(1, 1));
        assert_eq!(id, Some(ObjectId::PLAYER));
        assert_eq!(table.insert(Position::new(1, 3)), Some(ObjectId(2)));
        assert_eq!(table.slot(ObjectId(0)), Slot::Vacant);
    }

    #[test]
    fn retired_ids_stay_vacant() {
        let mut table = ObjectTable::new();
        table.insert(Position::new(1, 1));
        let target = table.insert(Position::new(3, 3)).unwrap();

        assert_eq!(table.retire(target), Some(Position::new(3, 3)));
        assert_eq!(table.position(target), None);
        assert!(!table.relocate(target, Position::new(1, 3)));

        // ids are not recycled
        assert_eq!(table.insert(Position::new(5, 5)), Some(ObjectId(3)));
        assert_eq!(table.live().count(), 2);
    }

    #[test]
    fn clear_restarts_numbering() {
        let mut table = ObjectTable::new();
        table.insert(Position::new(1, 1));
        table.insert(Position::new(1, 3));
        table.clear();
        assert_eq!(table.len(), 1);
        assert_eq!(table.insert(Position::new(3, 3)), Some(ObjectId::PLAYER));
    }

    #[test]
    fn unknown_ids_are_vacant() {
        let table = ObjectTable::new();
        assert_eq!(table.slot(ObjectId(42)), Slot::Vacant);
    }
}
