use smallvec::SmallVec;

/// Face buttons on the two controllers (A/B right hand, X/Y left hand).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Clear,
    Undo,
}

impl Button {
    #[inline]
    pub fn action(self) -> ButtonAction {
        match self {
            Button::A | Button::X => ButtonAction::Clear,
            Button::B | Button::Y => ButtonAction::Undo,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn label(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    TriggerDown,
    TriggerUp,
    GripDown,
    GripUp,
    Button(Button),
    ThumbstickPress,
    ThumbstickMove { x: f32, y: f32 },
}

impl InputEvent {
    /// Store action for a face button press; `None` for every other event.
    pub fn action(self) -> Option<ButtonAction> {
        match self {
            InputEvent::Button(button) => Some(button.action()),
            _ => None,
        }
    }

    /// Stick axes clamped to [-1, 1]; non-finite readings count as centered.
    pub fn sanitized(self) -> Self {
        match self {
            InputEvent::ThumbstickMove { x, y } => InputEvent::ThumbstickMove {
                x: clamp_axis(x),
                y: clamp_axis(y),
            },
            other => other,
        }
    }
}

#[inline]
pub fn clamp_axis(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// FIFO of events received between frames.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: SmallVec<[InputEvent; 8]>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, oldest first.
    pub fn drain(&mut self) -> SmallVec<[InputEvent; 8]> {
        std::mem::take(&mut self.pending)
    }
}
