//! Type-then-delete cycling of the hero title phrases.

pub const START_DELAY_MS: u32 = 1_000;
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_FULL_MS: u32 = 2_000;
pub const NEXT_PHRASE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub index: usize,
    /// Characters currently shown, counted in `char`s.
    pub chars: usize,
    pub deleting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

impl TypingState {
    /// Advances one keystroke. `None` when there is nothing to type.
    pub fn step(&mut self, phrases: &[String]) -> Option<TypingFrame> {
        if phrases.is_empty() {
            return None;
        }

        self.index %= phrases.len();
        let phrase = &phrases[self.index];
        let length = phrase.chars().count();

        let mut delay_ms = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.chars = (self.chars + 1).min(length);
            TYPE_DELAY_MS
        };
        let text: String = phrase.chars().take(self.chars).collect();

        if !self.deleting && self.chars == length {
            self.deleting = true;
            delay_ms = HOLD_FULL_MS;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % phrases.len();
            delay_ms = NEXT_PHRASE_MS;
        }

        Some(TypingFrame { text, delay_ms })
    }
}

/// What the typing component renders and when it ticks next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    pub state: TypingState,
    pub text: String,
    pub delay_ms: u32,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            state: TypingState::default(),
            text: String::new(),
            delay_ms: START_DELAY_MS,
        }
    }
}

impl Typewriter {
    pub fn advanced(&self, phrases: &[String]) -> Option<Self> {
        let mut state = self.state;
        let frame = state.step(phrases)?;

        Some(Self {
            state,
            text: frame.text,
            delay_ms: frame.delay_ms,
        })
    }
}
