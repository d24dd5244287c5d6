//! The capability shared by every gauge part, plus change notification.

use tracing::debug;

use crate::basics::RectD;
use crate::paint::DrawOp;
use crate::region::Region;

/// What a property assignment affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// Geometry is stale; paths must be recomputed before the next render.
    Layout,
    /// Only colors or draw order changed; existing paths stay valid.
    Appearance,
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(Change) + Send>;

/// Callbacks told about every accepted property assignment.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    callbacks: Vec<(ObserverId, Callback)>,
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

impl Observers {
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(Change) + Send + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        debug!(observer = id.0, total = self.callbacks.len(), "observer registered");
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(i, _)| *i != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, change: Change) {
        for (_, cb) in &mut self.callbacks {
            cb(change);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// A part of a gauge that owns its geometry and can describe how to draw
/// it.
///
/// A host calls [`Drawable::ensure_paths`] with the current container
/// before each render, draws [`Drawable::draw_ops`] in order, and limits
/// repainting to [`Drawable::redraw_region`].
pub trait Drawable {
    /// Rebuild every path for `container`, releasing the previous ones.
    fn calculate_paths(&mut self, container: &RectD);

    /// Recompute only if a layout property or the container changed since
    /// the last computation. Returns `true` if paths were rebuilt.
    fn ensure_paths(&mut self, container: &RectD) -> bool;

    /// Union of the current paths, or `None` before the first computation
    /// and after [`Drawable::release`].
    fn redraw_region(&self) -> Option<&Region>;

    /// Render order for the current paths. Empty when nothing is computed.
    fn draw_ops(&self) -> Vec<DrawOp<'_>>;

    /// Drop all computed paths and the region. Calling it again does nothing.
    fn release(&mut self);
}
