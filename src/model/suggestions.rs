//! Autocomplete state - debounce phase, generation and the live list

/// Where the autocomplete cycle currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuggestionPhase {
    /// Nothing scheduled or in flight
    #[default]
    Idle,
    /// Debounce timer armed for the current generation
    Scheduled,
    /// Request sent for the current generation, awaiting the response
    InFlight,
}

/// Single owner of the suggestion pipeline's state
///
/// Every text change or toggle starts a new generation. Timers and responses
/// carry the generation they were created for; anything older than
/// `generation` is stale and must not touch the UI.
#[derive(Debug, Clone)]
pub struct SuggestionState {
    pub enabled: bool,
    pub phase: SuggestionPhase,
    generation: u64,
    live: Option<Vec<String>>,
}

impl SuggestionState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            phase: SuggestionPhase::Idle,
            generation: 0,
            live: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new generation, invalidating every pending timer and request
    pub fn advance(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = SuggestionPhase::Idle;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Replace the live list wholesale
    pub fn show(&mut self, suggestions: Vec<String>) {
        self.live = Some(suggestions);
    }

    pub fn hide(&mut self) {
        self.live = None;
    }

    /// The visible list, if any
    pub fn live(&self) -> Option<&[String]> {
        self.live.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.live.is_some()
    }
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_invalidates_previous_generation() {
        let mut state = SuggestionState::new(true);
        let first = state.advance();
        let second = state.advance();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_show_replaces_whole_list() {
        let mut state = SuggestionState::default();
        state.show(vec!["aho".into(), "ianao".into()]);
        state.show(vec!["izy".into()]);
        assert_eq!(state.live(), Some(&["izy".to_string()][..]));
        state.hide();
        assert!(!state.is_visible());
    }
}
