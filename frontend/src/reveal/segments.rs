use super::progress::Progress;

/// The slice of global progress owned by one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Re-maps global progress into this segment's own `[0, 1]`.
    ///
    /// A global value sitting exactly on `start` is 0 and exactly on `end`
    /// is 1, so two contiguous segments never share a partial state at their
    /// common boundary.
    pub fn local(&self, global: Progress) -> Progress {
        let g = global.value();
        if g <= self.start {
            return Progress::START;
        }
        if g >= self.end {
            return Progress::END;
        }
        Progress::new((g - self.start) / self.width())
    }
}

/// Partition of `[0, 1]` into `count` segments, optionally staggered.
///
/// Segment `i` spans `[i/N * (1 - overlap), (i + 1)/N * (1 - overlap) + overlap]`,
/// so with `overlap == 0` the segments are equal and contiguous, and larger
/// values let the next panel start moving before the previous one settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentLayout {
    count: usize,
    overlap: f64,
}

impl SegmentLayout {
    pub fn new(count: usize, overlap: f64) -> Self {
        let overlap = if overlap.is_finite() {
            // An overlap of 1 would collapse every segment onto [0, 1].
            overlap.clamp(0.0, 0.95)
        } else {
            0.0
        };
        Self { count, overlap }
    }

    pub fn equal(count: usize) -> Self {
        Self::new(count, 0.0)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    fn boundary(&self, k: usize) -> f64 {
        k as f64 / self.count as f64 * (1.0 - self.overlap)
    }

    pub fn segment(&self, index: usize) -> Option<Segment> {
        if index >= self.count {
            return None;
        }
        let start = self.boundary(index).clamp(0.0, 1.0);
        let end = if index + 1 == self.count {
            1.0
        } else {
            (self.boundary(index + 1) + self.overlap).clamp(0.0, 1.0)
        };
        Some(Segment { index, start, end })
    }

    pub fn segments(&self) -> Vec<Segment> {
        (0..self.count).filter_map(|i| self.segment(i)).collect()
    }

    /// Local progress of every segment for one global progress value.
    pub fn allocate(&self, global: Progress) -> Vec<Progress> {
        allocate(global, &self.segments())
    }
}

pub fn allocate(global: Progress, segments: &[Segment]) -> Vec<Progress> {
    segments.iter().map(|segment| segment.local(global)).collect()
}
