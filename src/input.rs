use glam::Vec2;
use smallvec::SmallVec;
use zerog_core::ObjectId;

/// A pointer currently holding an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeldPointer {
    pub pointer_id: i32,
    pub object: ObjectId,
    pub last: Vec2,
}

/// Maps live pointers to the objects they hold and turns absolute client
/// positions into per-event deltas.
#[derive(Default, Debug)]
pub struct PointerTracker {
    held: SmallVec<[HeldPointer; 2]>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking. Refuses a pointer that already holds something and an
    /// object that is already held by another pointer.
    pub fn begin(&mut self, pointer_id: i32, object: ObjectId, at: Vec2) -> bool {
        if self
            .held
            .iter()
            .any(|h| h.pointer_id == pointer_id || h.object == object)
        {
            return false;
        }
        self.held.push(HeldPointer {
            pointer_id,
            object,
            last: at,
        });
        true
    }

    /// Delta since the previous position of `pointer_id`, or `None` when the
    /// pointer holds nothing.
    pub fn move_to(&mut self, pointer_id: i32, at: Vec2) -> Option<(ObjectId, Vec2)> {
        let h = self.held.iter_mut().find(|h| h.pointer_id == pointer_id)?;
        let delta = at - h.last;
        h.last = at;
        Some((h.object, delta))
    }

    pub fn end(&mut self, pointer_id: i32) -> Option<ObjectId> {
        let i = self.held.iter().position(|h| h.pointer_id == pointer_id)?;
        Some(self.held.remove(i).object)
    }

    pub fn is_held(&self, object: ObjectId) -> bool {
        self.held.iter().any(|h| h.object == object)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Forget every pointer and return the objects that were held.
    pub fn clear(&mut self) -> SmallVec<[ObjectId; 2]> {
        self.held.drain(..).map(|h| h.object).collect()
    }
}
