//! Wheel, mouse-drag and touch-drag scrolling of a fixed-height panel

/// Mouse button that started a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Whether a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Offset and pointer coordinate captured when the drag began
    Dragging {
        origin_offset: f64,
        origin_pointer: f64,
    },
}

/// A single input event for the panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelInput {
    Press { button: PointerButton, y: f64 },
    TouchStart { y: f64 },
    Move { y: f64 },
    Release,
    Wheel { delta_y: f64 },
}

/// Scroll position of a panel plus its drag state
///
/// The offset always stays within `0..=max_offset`, where `max_offset` is
/// the content height minus the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragScroll {
    offset: f64,
    max_offset: f64,
    state: DragState,
}

impl DragScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub const fn max_offset(&self) -> f64 {
        self.max_offset
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Update the natural scroll bounds from measured heights
    pub fn set_bounds(&mut self, content_height: f64, viewport_height: f64) {
        self.max_offset = (content_height - viewport_height).max(0.0);
        self.offset = self.clamp(self.offset);
    }

    /// Primary-button press starts a drag; other buttons are ignored
    pub fn press(&mut self, button: PointerButton, y: f64) {
        if button == PointerButton::Primary {
            self.begin_drag(y);
        }
    }

    pub fn touch_start(&mut self, y: f64) {
        self.begin_drag(y);
    }

    /// Follow the pointer while dragging; no-op when idle
    pub fn drag_to(&mut self, y: f64) {
        if let DragState::Dragging {
            origin_offset,
            origin_pointer,
        } = self.state
        {
            self.offset = self.clamp(origin_offset - (y - origin_pointer));
        }
    }

    /// Pointer-up or touch-end: always back to idle
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// Wheel scrolling moves the offset without touching the drag state
    pub fn wheel(&mut self, delta_y: f64) {
        self.offset = self.clamp(self.offset + delta_y);
    }

    /// Dispatch an input event
    pub fn apply(&mut self, input: PanelInput) {
        match input {
            PanelInput::Press { button, y } => self.press(button, y),
            PanelInput::TouchStart { y } => self.touch_start(y),
            PanelInput::Move { y } => self.drag_to(y),
            PanelInput::Release => self.release(),
            PanelInput::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    fn begin_drag(&mut self, y: f64) {
        self.state = DragState::Dragging {
            origin_offset: self.offset,
            origin_pointer: y,
        };
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(content: f64, viewport: f64) -> DragScroll {
        let mut scroll = DragScroll::new();
        scroll.set_bounds(content, viewport);
        scroll
    }

    #[test]
    fn drag_moves_against_pointer() {
        let mut scroll = panel(1000.0, 200.0);
        scroll.wheel(300.0);

        scroll.press(PointerButton::Primary, 500.0);
        scroll.drag_to(450.0);
        scroll.drag_to(400.0);
        scroll.release();

        // 300 - (400 - 500)
        assert!((scroll.offset() - 400.0).abs() < f64::EPSILON);
        assert_eq!(scroll.state(), DragState::Idle);
    }

    #[test]
    fn final_offset_is_origin_minus_total_displacement_clamped() {
        let sequences: [&[f64]; 4] = [
            &[10.0, -30.0, 55.0],
            &[-500.0],
            &[900.0, 900.0],
            &[1.5, 2.5, -4.0, 0.25],
        ];

        for moves in sequences {
            let mut scroll = panel(600.0, 100.0);
            scroll.wheel(250.0);
            let initial = scroll.offset();

            let start = 300.0;
            scroll.touch_start(start);
            let mut pointer = start;
            for delta in moves {
                pointer += delta;
                scroll.drag_to(pointer);
            }
            scroll.release();

            let expected = (initial - (pointer - start)).clamp(0.0, 500.0);
            assert!(
                (scroll.offset() - expected).abs() < 1e-9,
                "moves {moves:?}: got {}, expected {expected}",
                scroll.offset()
            );
        }
    }

    #[test]
    fn release_always_returns_to_idle() {
        for moves in 0..5 {
            let mut scroll = panel(400.0, 100.0);
            scroll.press(PointerButton::Primary, 0.0);
            for step in 0..moves {
                scroll.drag_to(f64::from(step) * -10.0);
            }
            assert!(scroll.is_dragging());
            scroll.release();
            assert_eq!(scroll.state(), DragState::Idle);
        }

        let mut idle = panel(400.0, 100.0);
        idle.release();
        assert_eq!(idle.state(), DragState::Idle);
    }

    #[test]
    fn non_primary_press_does_not_drag() {
        let mut scroll = panel(400.0, 100.0);
        scroll.press(PointerButton::Secondary, 50.0);
        scroll.drag_to(0.0);
        assert!(!scroll.is_dragging());
        assert!(scroll.offset().abs() < f64::EPSILON);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut scroll = panel(400.0, 100.0);
        scroll.apply(PanelInput::Move { y: -80.0 });
        assert!(scroll.offset().abs() < f64::EPSILON);
    }

    #[test]
    fn wheel_adds_delta_without_state_change() {
        let mut scroll = panel(400.0, 100.0);
        scroll.apply(PanelInput::Wheel { delta_y: 120.0 });
        scroll.apply(PanelInput::Wheel { delta_y: 500.0 });
        assert!((scroll.offset() - 300.0).abs() < f64::EPSILON);
        assert_eq!(scroll.state(), DragState::Idle);

        scroll.apply(PanelInput::Wheel { delta_y: -1000.0 });
        assert!(scroll.offset().abs() < f64::EPSILON);
    }

    #[test]
    fn wheel_during_drag_keeps_dragging() {
        let mut scroll = panel(400.0, 100.0);
        scroll.apply(PanelInput::TouchStart { y: 10.0 });
        scroll.apply(PanelInput::Wheel { delta_y: 40.0 });
        assert!(scroll.is_dragging());
    }

    #[test]
    fn content_shorter_than_viewport_never_scrolls() {
        let mut scroll = panel(80.0, 100.0);
        scroll.wheel(50.0);
        assert!(scroll.max_offset().abs() < f64::EPSILON);
        assert!(scroll.offset().abs() < f64::EPSILON);
    }

    #[test]
    fn shrinking_bounds_reclamps_offset() {
        let mut scroll = panel(1000.0, 100.0);
        scroll.wheel(800.0);
        scroll.set_bounds(300.0, 100.0);
        assert!((scroll.offset() - 200.0).abs() < f64::EPSILON);
    }
}
