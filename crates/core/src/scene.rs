//! Ordered render set, the default `Renderer`.

use slotmap::SlotMap;

use crate::ports::{Entity, Renderer};
use crate::types::DisplayHandle;

#[derive(Clone, Debug, Default)]
pub struct Scene {
    entities: SlotMap<DisplayHandle, Entity>,
    /// Back to front.
    order: Vec<DisplayHandle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, handle: DisplayHandle) -> Option<&Entity> {
        self.entities.get(handle)
    }

    pub fn contains(&self, handle: DisplayHandle) -> bool {
        self.entities.contains_key(handle)
    }

    /// Entities in draw order, back to front.
    pub fn iter(&self) -> impl Iterator<Item = (DisplayHandle, &Entity)> {
        self.order.iter().filter_map(|&handle| self.entities.get(handle).map(|e| (handle, e)))
    }

    pub fn topmost(&self) -> Option<&Entity> {
        self.order.last().and_then(|&handle| self.entities.get(handle))
    }
}

impl Renderer for Scene {
    fn render(&mut self, entity: &Entity) -> DisplayHandle {
        let handle = self.entities.insert(entity.clone());
        self.order.push(handle);
        handle
    }

    fn remove(&mut self, handle: DisplayHandle) {
        if self.entities.remove(handle).is_some() {
            self.order.retain(|&h| h != handle);
        }
    }

    fn bring_to_front(&mut self, handle: DisplayHandle) {
        if let Some(idx) = self.order.iter().position(|&h| h == handle) {
            let handle = self.order.remove(idx);
            self.order.push(handle);
        }
    }

    fn clear(&mut self) {
        self.entities.clear();
        self.order.clear();
    }
}
