use crossbeam_channel::{Receiver, Sender};
use winit::event::ElementState;

/// Whether the pointer went up or down. The translation from the toolkit's
/// button state is exhaustive, so a new toolkit variant fails to compile
/// instead of being silently misread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Up,
    Down,
}

impl From<ElementState> for PointerPhase {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => PointerPhase::Down,
            ElementState::Released => PointerPhase::Up,
        }
    }
}

/// A discrete pointer event as forwarded by the window shell.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: i32,
    pub y: i32,
}

/// The last known pointer sample. Overwritten, never merged; the default
/// value is the neutral ("untapped") state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub tapped: bool,
    pub x: i32,
    pub y: i32,
}

impl InputState {
    /// Fold one pointer event into a fresh input sample. An up event
    /// discards the coordinates; only the press position matters.
    pub fn from_event(event: &PointerEvent) -> Self {
        match event.phase {
            PointerPhase::Up => InputState::default(),
            PointerPhase::Down => InputState {
                tapped: true,
                x: event.x,
                y: event.y,
            },
        }
    }
}

/// The input-forwarding task: translates pointer events into input samples
/// and hands them to the frame loop. Blocks on a full queue; returns once
/// either side hangs up.
pub fn forward(events: Receiver<PointerEvent>, states: Sender<InputState>) {
    for event in events.iter() {
        if states.send(InputState::from_event(&event)).is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn down_carries_position() {
        let state = InputState::from_event(&PointerEvent {
            phase: PointerPhase::Down,
            x: 17,
            y: 42,
        });
        assert_eq!(
            state,
            InputState {
                tapped: true,
                x: 17,
                y: 42
            }
        );
    }

    #[test]
    fn up_discards_position() {
        let state = InputState::from_event(&PointerEvent {
            phase: PointerPhase::Up,
            x: 17,
            y: 42,
        });
        assert_eq!(state, InputState::default());
    }

    #[test]
    fn forward_folds_events_in_order() {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let (state_tx, state_rx) = crossbeam_channel::unbounded();

        event_tx
            .send(PointerEvent {
                phase: PointerPhase::Down,
                x: 1,
                y: 2,
            })
            .unwrap();
        event_tx
            .send(PointerEvent {
                phase: PointerPhase::Up,
                x: 3,
                y: 4,
            })
            .unwrap();
        drop(event_tx);

        forward(event_rx, state_tx);

        let states: Vec<_> = state_rx.iter().collect();
        assert_eq!(
            states,
            vec![
                InputState {
                    tapped: true,
                    x: 1,
                    y: 2
                },
                InputState::default(),
            ]
        );
    }
}
