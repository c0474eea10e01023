//! Code entry state machine
//!
//! One [`EntrySession`] backs the keypad modal. Every mutation goes through
//! [`EntrySession::step`], a single `match` over `(state, event)`:
//!
//! | State            | Event    | Next                                  |
//! |------------------|----------|---------------------------------------|
//! | any              | Open     | Entering (fresh buffer)               |
//! | Closed           | other    | Closed (ignored)                      |
//! | Entering / Error | Digit    | Entering, or Ready once 4 are entered |
//! | Ready            | Digit    | Ready (buffer full, ignored)          |
//! | any open         | Clear    | Entering (empty buffer)               |
//! | any open         | Dismiss  | Closed                                |
//! | any open         | Validate | Closed + submit, or Error             |
//!
//! [`EntrySession::handle`] runs `Validate` automatically whenever a step
//! lands in `Ready`, so the keypad never needs a submit key.

use tracing::trace;

use crate::code::{Digit, DigitBuffer, PinCode};

/// Modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Modal hidden; initial and terminal state
    #[default]
    Closed,
    /// Fewer digits than a full code have been entered
    Entering,
    /// Buffer is full and waiting for validation
    Ready,
    /// Last validation was rejected for its length
    Error,
}

impl EntryState {
    pub fn is_open(self) -> bool {
        !matches!(self, EntryState::Closed)
    }
}

/// Input to the state machine
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EntryEvent {
    /// The gate requires a code
    Open,
    /// A keypad digit was pressed
    Digit(Digit),
    /// The clear key was pressed
    Clear,
    /// The modal was closed without submitting
    Dismiss,
    /// Check the buffer and submit it if complete
    Validate,
}

impl EntryEvent {
    /// Event name without its payload, for logs
    pub fn name(&self) -> &'static str {
        match self {
            EntryEvent::Open => "open",
            EntryEvent::Digit(_) => "digit",
            EntryEvent::Clear => "clear",
            EntryEvent::Dismiss => "dismiss",
            EntryEvent::Validate => "validate",
        }
    }
}

impl std::fmt::Debug for EntryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send "unlock with code" to the command executor
    Submit(PinCode),
}

/// Result of one table step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: EntryState,
    pub to: EntryState,
    pub effect: Option<Effect>,
}

impl Transition {
    /// Whether the step moved to a different state
    ///
    /// Buffer edits inside one state (a clear while `Entering`) don't count.
    pub fn state_changed(&self) -> bool {
        self.from != self.to
    }
}

/// Live state of the keypad modal
#[derive(Debug, Default)]
pub struct EntrySession {
    state: EntryState,
    buffer: DigitBuffer,
}

impl EntrySession {
    /// Create a closed session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    /// Whether the modal is displayed
    pub fn visible(&self) -> bool {
        self.state.is_open()
    }

    /// Digits entered so far
    pub fn buffer(&self) -> &DigitBuffer {
        &self.buffer
    }

    /// Whether the modal should show its rejection indication
    pub fn error_flag(&self) -> bool {
        self.state == EntryState::Error
    }

    /// Apply an event, running validation automatically once the buffer fills
    pub fn handle(&mut self, event: EntryEvent) -> Transition {
        let first = self.step(event);
        if first.to != EntryState::Ready {
            return first;
        }

        let validated = self.step(EntryEvent::Validate);
        Transition {
            from: first.from,
            to: validated.to,
            effect: validated.effect,
        }
    }

    /// Apply exactly one row of the transition table
    pub fn step(&mut self, event: EntryEvent) -> Transition {
        use EntryEvent as Ev;
        use EntryState as St;

        let from = self.state;
        let mut effect = None;

        let to = match (from, event) {
            (_, Ev::Open) => {
                self.reset();
                St::Entering
            }
            (St::Closed, _) => St::Closed,
            (St::Ready, Ev::Digit(_)) => St::Ready,
            (St::Entering | St::Error, Ev::Digit(digit)) => {
                self.buffer.push(digit);
                if self.buffer.is_full() {
                    St::Ready
                } else {
                    St::Entering
                }
            }
            (_, Ev::Clear) => {
                self.buffer.clear();
                St::Entering
            }
            (_, Ev::Dismiss) => {
                self.reset();
                St::Closed
            }
            (_, Ev::Validate) => match self.buffer.to_code() {
                Ok(code) => {
                    effect = Some(Effect::Submit(code));
                    self.reset();
                    St::Closed
                }
                Err(_) => St::Error,
            },
        };

        self.state = to;
        trace!(?from, ?to, event = event.name(), "entry transition");

        Transition { from, to, effect }
    }

    /// Convenience for [`EntryEvent::Open`]
    pub fn open(&mut self) -> Transition {
        self.handle(EntryEvent::Open)
    }

    /// Convenience for [`EntryEvent::Digit`]
    pub fn press(&mut self, digit: Digit) -> Transition {
        self.handle(EntryEvent::Digit(digit))
    }

    /// Convenience for [`EntryEvent::Clear`]
    pub fn clear(&mut self) -> Transition {
        self.handle(EntryEvent::Clear)
    }

    /// Convenience for [`EntryEvent::Dismiss`]
    pub fn dismiss(&mut self) -> Transition {
        self.handle(EntryEvent::Dismiss)
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.state = EntryState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CODE_LENGTH;

    fn d(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    fn chars(session: &EntrySession) -> String {
        session.buffer().digits().iter().map(|d| d.as_char()).collect()
    }

    fn open_with(digits: &str) -> EntrySession {
        let mut session = EntrySession::new();
        session.open();
        for c in digits.chars() {
            session.press(d(c));
        }
        session
    }

    #[test]
    fn test_new_session_is_closed() {
        let session = EntrySession::new();
        assert_eq!(session.state(), EntryState::Closed);
        assert!(!session.visible());
        assert!(session.buffer().is_empty());
        assert!(!session.error_flag());
    }

    #[test]
    fn test_open_shows_empty_modal() {
        let mut session = EntrySession::new();
        let t = session.open();
        assert_eq!(t.from, EntryState::Closed);
        assert_eq!(t.to, EntryState::Entering);
        assert!(t.effect.is_none());
        assert!(session.visible());
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn test_digits_accumulate_in_order() {
        let session = open_with("271");
        assert_eq!(chars(&session), "271");
        assert_eq!(session.state(), EntryState::Entering);
    }

    #[test]
    fn test_fourth_digit_submits_and_closes() {
        let mut session = open_with("123");
        let t = session.press(d('4'));
        assert_eq!(t.from, EntryState::Entering);
        assert_eq!(t.to, EntryState::Closed);
        assert_eq!(t.effect, Some(Effect::Submit(PinCode::parse("1234").unwrap())));
        assert!(!session.visible());
        assert!(session.buffer().is_empty());
        assert!(!session.error_flag());
    }

    #[test]
    fn test_step_stops_in_ready() {
        let mut session = open_with("123");
        let t = session.step(EntryEvent::Digit(d('4')));
        assert_eq!(t.to, EntryState::Ready);
        assert!(t.effect.is_none());
        assert_eq!(session.buffer().len(), CODE_LENGTH);

        // A fifth digit before validation is ignored
        let t = session.step(EntryEvent::Digit(d('5')));
        assert!(!t.state_changed());
        assert_eq!(chars(&session), "1234");

        let t = session.step(EntryEvent::Validate);
        assert_eq!(t.to, EntryState::Closed);
        assert!(matches!(t.effect, Some(Effect::Submit(ref code)) if code == "1234"));
    }

    #[test]
    fn test_short_validation_raises_error_flag() {
        let mut session = open_with("12");
        let t = session.step(EntryEvent::Validate);
        assert_eq!(t.to, EntryState::Error);
        assert!(t.effect.is_none());
        assert!(session.visible());
        assert!(session.error_flag());
        assert_eq!(chars(&session), "12");
    }

    #[test]
    fn test_digit_after_error_clears_flag() {
        let mut session = open_with("12");
        session.step(EntryEvent::Validate);
        session.press(d('3'));
        assert!(!session.error_flag());
        assert_eq!(session.state(), EntryState::Entering);
        assert_eq!(chars(&session), "123");
    }

    #[test]
    fn test_completing_after_error_submits() {
        let mut session = open_with("123");
        session.step(EntryEvent::Validate);
        assert!(session.error_flag());
        let t = session.press(d('9'));
        assert!(matches!(t.effect, Some(Effect::Submit(ref code)) if code == "1239"));
        assert_eq!(session.state(), EntryState::Closed);
    }

    #[test]
    fn test_clear_from_error() {
        let mut session = open_with("1");
        session.step(EntryEvent::Validate);
        let t = session.clear();
        assert_eq!(t.to, EntryState::Entering);
        assert!(session.buffer().is_empty());
        assert!(!session.error_flag());
    }

    #[test]
    fn test_clear_on_empty_buffer_is_noop() {
        let mut session = open_with("");
        let t = session.clear();
        assert!(!t.state_changed());
        assert!(session.buffer().is_empty());
        assert!(session.visible());
    }

    #[test]
    fn test_clear_empties_buffer_without_leaving_entering() {
        let mut session = open_with("56");
        let t = session.clear();
        assert!(!t.state_changed());
        assert_eq!(t.to, EntryState::Entering);
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn test_dismiss_discards_entry() {
        let mut session = open_with("98");
        let t = session.dismiss();
        assert_eq!(t.to, EntryState::Closed);
        assert!(t.effect.is_none());
        assert!(!session.visible());
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn test_events_while_closed_are_ignored() {
        let mut session = EntrySession::new();
        for event in [
            EntryEvent::Digit(d('1')),
            EntryEvent::Clear,
            EntryEvent::Dismiss,
            EntryEvent::Validate,
        ] {
            let t = session.step(event);
            assert_eq!(t.to, EntryState::Closed);
            assert!(t.effect.is_none());
        }
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn test_reopen_discards_previous_entry() {
        let mut session = open_with("55");
        session.step(EntryEvent::Validate);
        session.open();
        assert_eq!(session.state(), EntryState::Entering);
        assert!(session.buffer().is_empty());
        assert!(!session.error_flag());
    }

    #[test]
    fn test_event_debug_hides_digit() {
        assert_eq!(format!("{:?}", EntryEvent::Digit(d('7'))), "digit");
    }
}
