//! One running background per canvas
//!
//! The page-load start and any later `start_background` call share this
//! registry, so a canvas never ends up with two frame loops drawing over
//! each other.

use std::collections::HashMap;

/// Running loops keyed by canvas id
#[derive(Debug)]
pub struct LoopRegistry<T> {
    loops: HashMap<String, T>,
}

impl<T> Default for LoopRegistry<T> {
    fn default() -> Self {
        Self {
            loops: HashMap::new(),
        }
    }
}

impl<T: Clone> LoopRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loop still running on `canvas_id`, if any.
    ///
    /// A registered loop that has since stopped is dropped, so the canvas
    /// can be started again.
    pub fn running(&mut self, canvas_id: &str, is_running: impl Fn(&T) -> bool) -> Option<T> {
        match self.loops.get(canvas_id) {
            Some(existing) if is_running(existing) => Some(existing.clone()),
            Some(_) => {
                self.loops.remove(canvas_id);
                None
            }
            None => None,
        }
    }

    /// Record the loop now driving `canvas_id`
    pub fn register(&mut self, canvas_id: &str, running: T) {
        self.loops.insert(canvas_id.to_string(), running);
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}
