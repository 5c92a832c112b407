/// Scroll-through completion of something, always within `[0, 1]`.
///
/// The constructor is the only way in, so a `Progress` can never hold NaN,
/// infinity or an out-of-range value no matter what geometry produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Progress(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Remaining distance to completion, `1 - progress`.
    pub fn remaining(self) -> f64 {
        1.0 - self.0
    }

    pub fn is_partial(self) -> bool {
        self.0 > 0.0 && self.0 < 1.0
    }
}

/// Geometry of a tracked container relative to the viewport, sampled once
/// per scroll or resize tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Distance from the viewport top to the container top. Negative once
    /// the container has scrolled past the top edge.
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

impl ScrollFrame {
    pub fn new(container_top: f64, container_height: f64, viewport_height: f64) -> Self {
        Self {
            container_top,
            container_height,
            viewport_height,
        }
    }

    /// Re-expresses the frame so that progress starts when the container top
    /// crosses `fraction` of the viewport height and finishes when the
    /// container bottom crosses that same line.
    ///
    /// `anchored(0.5)` gives a "top center → bottom center" timeline.
    pub fn anchored(self, fraction: f64) -> Self {
        let line = self.viewport_height * fraction.clamp(0.0, 1.0);
        Self {
            container_top: self.container_top - line,
            container_height: self.container_height + self.viewport_height,
            viewport_height: self.viewport_height,
        }
    }

    fn is_finite(&self) -> bool {
        self.container_top.is_finite()
            && self.container_height.is_finite()
            && self.viewport_height.is_finite()
    }
}

/// Maps a frame to global progress.
///
/// Containers that fit in one screen cannot be scrolled through; they flip
/// from 0 to 1 once their top reaches the viewport top instead of dividing
/// by a zero or negative range.
pub fn normalize(frame: ScrollFrame) -> Progress {
    if !frame.is_finite() || frame.container_top > 0.0 {
        return Progress::START;
    }

    let scrollable = frame.container_height - frame.viewport_height;
    if scrollable <= 0.0 {
        return Progress::END;
    }

    Progress::new(-frame.container_top / scrollable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_below_viewport_top_has_not_started() {
        assert_eq!(normalize(ScrollFrame::new(0.0, 2000.0, 1000.0)), Progress::START);
        assert_eq!(normalize(ScrollFrame::new(350.0, 2000.0, 1000.0)), Progress::START);
    }

    #[test]
    fn halfway_through_scroll_range() {
        let progress = normalize(ScrollFrame::new(-500.0, 2000.0, 1000.0));
        assert!((progress.value() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn scrolled_past_range_clamps_to_end() {
        assert_eq!(normalize(ScrollFrame::new(-1200.0, 2000.0, 1000.0)), Progress::END);
    }

    #[test]
    fn degenerate_containers_resolve_to_an_extreme() {
        for height in [0.0, 400.0, 999.0, 1000.0] {
            for top in [-3000.0, -1.0, -0.0, 0.0, 1.0, 500.0] {
                let value = normalize(ScrollFrame::new(top, height, 1000.0)).value();
                assert!(value == 0.0 || value == 1.0, "top={top} height={height} gave {value}");
                if top <= 0.0 {
                    assert_eq!(value, 1.0);
                }
            }
        }
    }

    #[test]
    fn output_stays_in_unit_range() {
        let tops = [-1e9, -5000.0, -1000.0, -1.5, 0.0, 3.0, 1e9];
        let heights = [0.0, 10.0, 999.0, 1001.0, 4000.0, 1e9];
        for top in tops {
            for height in heights {
                let value = normalize(ScrollFrame::new(top, height, 1000.0)).value();
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn non_finite_geometry_reads_as_not_started() {
        assert_eq!(normalize(ScrollFrame::new(f64::NAN, 2000.0, 1000.0)), Progress::START);
        assert_eq!(normalize(ScrollFrame::new(-10.0, f64::INFINITY, 1000.0)), Progress::START);
    }

    #[test]
    fn progress_never_decreases_while_scrolling_down() {
        let mut previous = Progress::START;
        let mut top = 200.0;
        while top > -4000.0 {
            let current = normalize(ScrollFrame::new(top, 4000.0, 900.0));
            assert!(current >= previous, "regressed at top={top}");
            previous = current;
            top -= 37.5;
        }
        assert_eq!(previous, Progress::END);
    }

    #[test]
    fn anchored_frame_spans_center_to_center() {
        // 3000px section, 1000px viewport, line at the viewport middle.
        let at = |top: f64| normalize(ScrollFrame::new(top, 3000.0, 1000.0).anchored(0.5)).value();
        assert_eq!(at(600.0), 0.0);
        assert_eq!(at(500.0), 0.0);
        assert!((at(-1000.0) - 0.5).abs() < 1e-12);
        assert_eq!(at(-2500.0), 1.0);
    }

    #[test]
    fn progress_constructor_sanitises_input() {
        assert_eq!(Progress::new(f64::NAN), Progress::START);
        assert_eq!(Progress::new(-0.2), Progress::START);
        assert_eq!(Progress::new(7.0), Progress::END);
        assert!(Progress::new(0.3).is_partial());
        assert!(!Progress::END.is_partial());
    }
}
