// Mouse draw gesture: idle until pressed, drawing until released or the
// pointer leaves the surface.
#[derive(Default, Debug, Clone)]
pub struct PointerState {
    drawing: bool,
}

impl PointerState {
    pub fn press(&mut self) {
        self.drawing = true;
    }

    pub fn release(&mut self) {
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert!(!PointerState::default().is_drawing());
    }

    #[test]
    fn press_arms_release_disarms() {
        let mut p = PointerState::default();
        p.press();
        assert!(p.is_drawing());
        p.release();
        assert!(!p.is_drawing());
        // Moves after release must not paint; a second release stays idle.
        p.release();
        assert!(!p.is_drawing());
    }
}
