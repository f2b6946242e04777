/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The document finished loading
    Load,
    /// Mouse click event, targeted at the element under the pointer
    Click {
        target: Option<String>,
        button: MouseButton,
    },
}

impl Event {
    /// Primary-button click on the element with the given ID.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
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
