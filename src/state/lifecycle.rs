use std::cell::Cell;
use std::rc::Rc;

/// Identifies the live instance of a screen. Async work captures the
/// generation when it starts and drops its result if the screen has been
/// disposed in the meantime.
#[derive(Clone, Debug, Default)]
pub struct MountGeneration(Rc<Cell<u64>>);

impl MountGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.0.get()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.get() == generation
    }

    /// Every generation handed out so far becomes stale
    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_makes_old_generations_stale() {
        let generation = MountGeneration::new();
        let started = generation.current();
        assert!(generation.is_current(started));

        generation.clone().invalidate();
        assert!(!generation.is_current(started));
        assert!(generation.is_current(generation.current()));
    }
}
