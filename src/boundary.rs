/// Polygon boundary stored as a circular slot array. Each slot holds a vertex
/// reference into the run's point buffer, or `None` once the slot has been
/// collapsed out of the boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Boundary {
    slots: Vec<Option<usize>>,
}

impl Boundary {
    /// A fresh boundary where slot `k` references vertex `k`.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(Some).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Walks the boundary from `start`, collecting vertex references until the
    /// walk wraps around or the next slot is collapsed. The start slot is
    /// always included, collapsed or not, so the chain is never empty. A start
    /// past the end wraps, matching the modular advance.
    pub(crate) fn walk(&self, start: usize) -> Chain {
        let len = self.slots.len();
        let start = start % len;
        let mut refs = vec![self.slots[start]];
        let mut position = (start + 1) % len;
        while position != start {
            match self.slots[position] {
                Some(reference) => refs.push(Some(reference)),
                None => break,
            }
            position = (position + 1) % len;
        }
        Chain { refs }
    }

    /// Marks the slot currently holding `vertex` as collapsed. Returns false
    /// when no slot holds that reference (the boundary has already been
    /// relinked past it).
    pub(crate) fn collapse(&mut self, vertex: usize) -> bool {
        match self.slots.iter().position(|slot| *slot == Some(vertex)) {
            Some(position) => {
                self.slots[position] = None;
                true
            }
            None => false,
        }
    }

    /// Splices `vertex` out of the boundary: slots referencing `opposite` are
    /// redirected to `vertex`, and every other reference greater than `vertex`
    /// is decremented so the surviving references stay consistent with the
    /// next compaction. A slot matching `opposite` is redirected, never
    /// renumbered.
    pub(crate) fn relink(&mut self, vertex: usize, opposite: usize) {
        for slot in self.slots.iter_mut() {
            match *slot {
                Some(reference) if reference == opposite => *slot = Some(vertex),
                Some(reference) if reference > vertex => *slot = Some(reference - 1),
                _ => {}
            }
        }
    }

    /// Copies the non-collapsed slots, in order, into an independent boundary
    /// for the next refinement generation. The source is left untouched.
    pub(crate) fn compact(&self) -> Boundary {
        Boundary {
            slots: self.slots.iter().filter(|slot| slot.is_some()).copied().collect(),
        }
    }
}

/// Ordered vertex references produced by a walk. Only the first element can be
/// the collapsed sentinel; the walker stops before appending any other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Chain {
    refs: Vec<Option<usize>>,
}

impl Chain {
    /// The fixed three-vertex neighborhood seed used by the driver.
    pub(crate) fn local(prev: usize, position: usize, next: usize) -> Self {
        Self {
            refs: vec![Some(prev), Some(position), Some(next)],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.refs.len()
    }

    pub(crate) fn pop(&mut self) {
        self.refs.pop();
    }

    pub(crate) fn head(&self) -> Option<usize> {
        self.refs.first().copied().flatten()
    }

    /// First reference after the head that differs from it.
    pub(crate) fn opposite(&self, head: usize) -> Option<usize> {
        self.refs[1..]
            .iter()
            .flatten()
            .copied()
            .find(|reference| *reference != head)
    }

    /// The three vertex references of a ready triangle, or `None` when the
    /// chain is not exactly three resolvable references.
    pub(crate) fn resolve(&self) -> Option<[usize; 3]> {
        match self.refs.as_slice() {
            [Some(a), Some(b), Some(c)] => Some([*a, *b, *c]),
            _ => None,
        }
    }
}
