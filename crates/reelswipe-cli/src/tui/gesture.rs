//! Pointer gesture recognition for the movie card.
//!
//! A left-button press on the card followed by a mostly horizontal drag of at
//! least [`SWIPE_THRESHOLD_COLUMNS`] is a swipe. A press and release without
//! meaningful travel is a tap.

use ratatui::layout::Position;

use super::state::SwipeAction;

/// Minimum horizontal travel, in terminal columns, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD_COLUMNS: u16 = 6;

/// Maximum travel in either axis for a press/release pair to count as a tap.
const TAP_SLOP: u16 = 1;

/// Horizontal swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl SwipeDirection {
    /// Maps the direction to the action it triggers.
    #[must_use]
    pub const fn action(self) -> SwipeAction {
        match self {
            Self::Left => SwipeAction::Dislike,
            Self::Right => SwipeAction::Like,
        }
    }
}

/// A completed pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Drag that crossed the swipe threshold.
    Swipe {
        /// Which way the pointer travelled.
        direction: SwipeDirection,
        /// Where the press started.
        origin: Position,
    },
    /// Press and release in (nearly) the same cell.
    Tap(Position),
}

/// Tracks one press/drag/release sequence.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<Position>,
    last: Option<Position>,
}

impl SwipeTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: None,
            last: None,
        }
    }

    /// Starts tracking at `pos`, discarding any unfinished sequence.
    pub const fn press(&mut self, pos: Position) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Records pointer movement while the button is held.
    pub const fn drag(&mut self, pos: Position) {
        if self.origin.is_some() {
            self.last = Some(pos);
        }
    }

    /// Drops the current sequence without producing a gesture.
    pub const fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Direction the current drag would resolve to if released now.
    #[must_use]
    pub fn pending_direction(&self) -> Option<SwipeDirection> {
        let (origin, last) = (self.origin?, self.last?);
        classify_swipe(origin, last)
    }

    /// Finishes the sequence at `pos`.
    pub fn release(&mut self, pos: Position) -> Option<Gesture> {
        let origin = self.origin.take()?;
        self.last = None;

        if let Some(direction) = classify_swipe(origin, pos) {
            return Some(Gesture::Swipe { direction, origin });
        }

        let dx = origin.x.abs_diff(pos.x);
        let dy = origin.y.abs_diff(pos.y);
        (dx <= TAP_SLOP && dy <= TAP_SLOP).then_some(Gesture::Tap(origin))
    }
}

/// Classifies travel from `from` to `to`. Vertical drags never count.
fn classify_swipe(from: Position, to: Position) -> Option<SwipeDirection> {
    let dx = from.x.abs_diff(to.x);
    let dy = from.y.abs_diff(to.y);
    if dx < SWIPE_THRESHOLD_COLUMNS || dx <= dy {
        return None;
    }
    if to.x > from.x {
        Some(SwipeDirection::Right)
    } else {
        Some(SwipeDirection::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u16, y: u16) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_right_drag_past_threshold_is_like() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.press(pos(20, 10));
        tracker.drag(pos(24, 10));

        // Act
        let gesture = tracker.release(pos(26, 11));

        // Assert
        assert_eq!(
            gesture,
            Some(Gesture::Swipe {
                direction: SwipeDirection::Right,
                origin: pos(20, 10),
            })
        );
        assert_eq!(SwipeDirection::Right.action(), SwipeAction::Like);
        assert_eq!(tracker.pending_direction(), None);
    }

    #[test]
    fn test_left_drag_past_threshold_is_dislike() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.press(pos(30, 5));

        // Act
        let gesture = tracker.release(pos(10, 6));

        // Assert
        assert!(matches!(
            gesture,
            Some(Gesture::Swipe {
                direction: SwipeDirection::Left,
                ..
            })
        ));
        assert_eq!(SwipeDirection::Left.action(), SwipeAction::Dislike);
    }

    #[test]
    fn test_short_drag_is_neither_swipe_nor_tap() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.press(pos(20, 10));

        // Act
        let gesture = tracker.release(pos(25, 10));

        // Assert
        assert_eq!(gesture, None);
    }

    #[test]
    fn test_vertical_drag_is_not_a_swipe() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.press(pos(20, 2));
        tracker.drag(pos(28, 20));

        // Act
        let pending = tracker.pending_direction();
        let gesture = tracker.release(pos(28, 20));

        // Assert
        assert_eq!(pending, None);
        assert_eq!(gesture, None);
    }

    #[test]
    fn test_tap_within_slop() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.press(pos(7, 3));

        // Act
        let gesture = tracker.release(pos(8, 3));

        // Assert
        assert_eq!(gesture, Some(Gesture::Tap(pos(7, 3))));
    }

    #[test]
    fn test_pending_direction_follows_drag() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.press(pos(40, 10));

        // Act & Assert
        tracker.drag(pos(42, 10));
        assert_eq!(tracker.pending_direction(), None);
        tracker.drag(pos(30, 10));
        assert_eq!(tracker.pending_direction(), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.drag(pos(50, 10));

        // Act
        let gesture = tracker.release(pos(50, 10));

        // Assert
        assert_eq!(gesture, None);
    }

    #[test]
    fn test_cancel_discards_sequence() {
        // Arrange
        let mut tracker = SwipeTracker::new();
        tracker.press(pos(0, 0));

        // Act
        tracker.cancel();

        // Assert
        assert_eq!(tracker.release(pos(20, 0)), None);
    }
}
