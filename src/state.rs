use druid::Data;

/// Demo application state
#[derive(Clone, Data)]
pub struct AppState {
    /// Whether the indicator is expected to be animating
    pub running: bool,
    /// How many times the animation has been toggled
    pub toggles: u32,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            running: true,
            toggles: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
        self.toggles += 1;
    }

    pub fn status(&self) -> String {
        let state = if self.running { "Running" } else { "Paused" };
        format!("{state} ({} toggles)", self.toggles)
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_twice_returns_to_running() {
        let mut state = AppState::new();
        state.toggle();
        assert_eq!(state.status(), "Paused (1 toggles)");
        state.toggle();
        assert!(state.running);
        assert_eq!(state.status(), "Running (2 toggles)");
    }
}
