//! Line-based player input.
use std::str::FromStr;

use discomaze_core::Action;

/// One decoded line of player input.
///
/// Control flags are explicit fields rather than shared state, so the play
/// loop can be driven from any source of lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputEvent {
    /// Action to apply. `None` still advances the episode with
    /// [`Action::Stay`].
    pub action: Option<Action>,
    /// Abandon the current episode and start a new one.
    pub restart: bool,
    /// Leave the play loop.
    pub quit: bool,
}

impl InputEvent {
    pub const QUIT: Self = Self {
        action: None,
        restart: false,
        quit: true,
    };

    pub const RESTART: Self = Self {
        action: None,
        restart: true,
        quit: false,
    };

    pub const fn act(action: Action) -> Self {
        Self {
            action: Some(action),
            restart: false,
            quit: false,
        }
    }

    /// Decodes a line.
    ///
    /// Single keys follow the `asdw` layout (`a` west, `s` south, `d` east,
    /// `w` north), `.` stays, `r` restarts and `q` quits. Full action names
    /// such as `north` are accepted too. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let token = line.trim();
        let event = match token {
            "" => Self::default(),
            "a" | "A" => Self::act(Action::West),
            "s" | "S" => Self::act(Action::South),
            "d" | "D" => Self::act(Action::East),
            "w" | "W" => Self::act(Action::North),
            "." => Self::act(Action::Stay),
            "r" | "R" => Self::RESTART,
            "q" | "Q" => Self::QUIT,
            other => Self::act(Action::from_str(other).ok()?),
        };
        Some(event)
    }

    /// Action to feed the simulator for this event.
    pub fn action_or_stay(&self) -> Action {
        self.action.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_onto_actions() {
        assert_eq!(InputEvent::parse("a"), Some(InputEvent::act(Action::West)));
        assert_eq!(InputEvent::parse("s\n"), Some(InputEvent::act(Action::South)));
        assert_eq!(InputEvent::parse(" D "), Some(InputEvent::act(Action::East)));
        assert_eq!(InputEvent::parse("w"), Some(InputEvent::act(Action::North)));
        assert_eq!(InputEvent::parse("."), Some(InputEvent::act(Action::Stay)));
    }

    #[test]
    fn control_keys_set_flags() {
        assert_eq!(InputEvent::parse("r"), Some(InputEvent::RESTART));
        assert_eq!(InputEvent::parse("q"), Some(InputEvent::QUIT));
        assert!(InputEvent::parse("q").unwrap().quit);
    }

    #[test]
    fn blank_line_advances_with_stay() {
        let event = InputEvent::parse("").unwrap();
        assert_eq!(event.action, None);
        assert_eq!(event.action_or_stay(), Action::Stay);
        assert!(!event.restart && !event.quit);
    }

    #[test]
    fn accepts_action_names_and_rejects_noise() {
        assert_eq!(InputEvent::parse("north"), Some(InputEvent::act(Action::North)));
        assert_eq!(InputEvent::parse("x"), None);
        assert_eq!(InputEvent::parse("jump"), None);
    }
}
