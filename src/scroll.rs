/// Keeps the viewport scroll target in sync with the current index.
///
/// Every commit of the carousel state passes through [`ScrollSync::sync`], which bumps the
/// generation even if the offset didn't change, so the viewport knows to scroll again.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSync {
    stride: f32,
    index: usize,
    generation: u64,
}

impl ScrollSync {
    pub fn new(stride: f32) -> Self {
        Self {
            stride,
            index: 0,
            generation: 0,
        }
    }

    pub fn sync(&mut self, current_index: usize) {
        self.index = current_index;
        self.generation += 1;
        tracing::trace!(
            index = current_index,
            offset = self.target_offset(),
            "scroll target updated"
        );
    }

    /// Change the distance between two cards. Requests a new scroll if it differs.
    pub fn set_stride(&mut self, stride: f32) {
        if self.stride != stride {
            self.stride = stride;
            self.sync(self.index);
        }
    }

    pub fn offset_for(&self, index: usize) -> f32 {
        index as f32 * self.stride
    }

    /// Horizontal offset the viewport should end up at.
    pub fn target_offset(&self) -> f32 {
        self.offset_for(self.index)
    }

    /// Incremented on every sync.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// One smooth scroll of the viewport from wherever it was to a commit's target.
///
/// The start is the offset the viewport actually had when the commit was first seen, which may
/// differ from any earlier target if the user scrolled by hand in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScrollAnimation {
    from: f32,
    to: f32,
    start_time: f64,
}

impl ScrollAnimation {
    pub(crate) fn new(from: f32, to: f32, start_time: f64) -> Self {
        Self {
            from,
            to,
            start_time,
        }
    }

    /// Offset at `time`, eased out, and whether the animation has finished.
    pub(crate) fn offset_at(&self, time: f64, duration: f32) -> (f32, bool) {
        if duration <= 0.0 {
            return (self.to, true);
        }
        let t = ((time - self.start_time) / duration as f64).clamp(0.0, 1.0) as f32;
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_index_times_stride() {
        let mut scroll = ScrollSync::new(340.0);
        for index in 0..5 {
            scroll.sync(index);
            assert_eq!(scroll.target_offset(), index as f32 * 340.0);
        }
    }

    #[test]
    fn every_sync_is_a_new_generation() {
        let mut scroll = ScrollSync::new(340.0);
        scroll.sync(1);
        let first = scroll.generation();
        scroll.sync(1);
        assert_eq!(scroll.generation(), first + 1);
    }

    #[test]
    fn stride_change_resyncs() {
        let mut scroll = ScrollSync::new(340.0);
        scroll.sync(2);
        let generation = scroll.generation();

        scroll.set_stride(340.0);
        assert_eq!(scroll.generation(), generation);

        scroll.set_stride(220.0);
        assert_eq!(scroll.generation(), generation + 1);
        assert_eq!(scroll.target_offset(), 440.0);
    }

    #[test]
    fn zero_animation_time_jumps() {
        let animation = ScrollAnimation::new(0.0, 680.0, 1.0);
        assert_eq!(animation.offset_at(1.0, 0.0), (680.0, true));
    }

    #[test]
    fn animation_starts_where_the_viewport_was() {
        let animation = ScrollAnimation::new(680.0, 340.0, 2.0);
        assert_eq!(animation.offset_at(2.0, 0.3), (680.0, false));

        let (halfway, done) = animation.offset_at(2.15, 0.3);
        assert!(!done);
        assert!(halfway < 680.0 && halfway > 340.0, "{halfway}");

        assert_eq!(animation.offset_at(2.3, 0.3), (340.0, true));
        assert_eq!(animation.offset_at(9.0, 0.3), (340.0, true));
    }

    #[test]
    fn animation_never_overshoots() {
        let animation = ScrollAnimation::new(0.0, 340.0, 0.0);
        let mut previous = 0.0;
        for frame in 0..=20 {
            let (offset, _) = animation.offset_at(frame as f64 / 60.0, 0.3);
            assert!(offset >= previous && offset <= 340.0, "{offset}");
            previous = offset;
        }
    }
}
