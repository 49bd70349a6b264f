/// Linear undo/redo stack of full snapshots.
///
/// Always holds at least one entry; `index` points at the current one.
#[derive(Clone, Debug)]
pub struct History<T> {
    snapshots: Vec<T>,
    index: usize,
}

impl<T> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Drops any redo entries and appends `snapshot` as the new current entry.
    pub fn push(&mut self, snapshot: T) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        self.index += 1;
    }

    /// Truncates to a single entry.
    pub fn reset(&mut self, initial: T) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.index = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        true
    }
}
