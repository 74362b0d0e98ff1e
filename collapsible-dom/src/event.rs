use crate::element::ElementId;

/// Input events, each aimed at the element it originated on.
///
/// Dispatch walks from the target up through its ancestors, so a listener
/// on a container sees events from anything inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Generic pointer activation
    Click {
        target: ElementId,
        button: MouseButton,
    },
    /// Touch-optimized activation, only produced when a gesture provider
    /// is installed
    Tap { target: ElementId },
    /// Key press, targeted at the focused element
    Key {
        target: ElementId,
        key: Key,
        modifiers: Modifiers,
    },
}

impl Event {
    /// Primary-button click.
    pub fn click(target: ElementId) -> Self {
        Self::Click {
            target,
            button: MouseButton::Left,
        }
    }

    pub fn tap(target: ElementId) -> Self {
        Self::Tap { target }
    }

    /// Key press without modifiers.
    pub fn key(target: ElementId, key: Key) -> Self {
        Self::Key {
            target,
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn target(&self) -> ElementId {
        match self {
            Self::Click { target, .. } | Self::Tap { target } | Self::Key { target, .. } => {
                *target
            }
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::Tap { .. } => EventKind::Tap,
            Self::Key { .. } => EventKind::KeyDown,
        }
    }
}

/// What a listener is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Tap,
    KeyDown,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Click => "click",
            Self::Tap => "tap",
            Self::KeyDown => "keydown",
        };
        f.write_str(name)
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// Anything the terminal reports that has no mapping here
    Unidentified,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unidentified,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl Event {
    /// Translate a crossterm key event into a key press aimed at `target`.
    ///
    /// Only presses produce events; repeats and releases are dropped.
    pub fn from_crossterm_key(target: ElementId, event: crossterm::event::KeyEvent) -> Option<Self> {
        if event.kind != crossterm::event::KeyEventKind::Press {
            return None;
        }
        Some(Self::Key {
            target,
            key: event.code.into(),
            modifiers: event.modifiers.into(),
        })
    }
}
