use super::progress::Progress;

/// Concrete visual parameters for one panel in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationState {
    pub scale: f64,
    /// Vertical offset in percent of the viewport height.
    pub translate_y: f64,
    pub opacity: f64,
}

impl PresentationState {
    pub const SETTLED: PresentationState = PresentationState {
        scale: 1.0,
        translate_y: 0.0,
        opacity: 1.0,
    };

    /// Inline style fragment for the panel element.
    pub fn style(&self) -> String {
        format!(
            "transform: scale({:.4}) translateY({:.3}vh); opacity: {:.4};",
            self.scale, self.translate_y, self.opacity
        )
    }
}

/// How far one panel travels while its local progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelMotion {
    pub scale_amplitude: f64,
    pub translate_amplitude: f64,
    /// Anchored panels stay in place while the others slide over them.
    pub anchored: bool,
}

impl PanelMotion {
    pub const fn sliding(scale_amplitude: f64, translate_amplitude: f64) -> Self {
        Self {
            scale_amplitude,
            translate_amplitude,
            anchored: false,
        }
    }

    pub const fn anchored(scale_amplitude: f64) -> Self {
        Self {
            scale_amplitude,
            translate_amplitude: 0.0,
            anchored: true,
        }
    }

    pub fn present(&self, local: Progress) -> PresentationState {
        let remaining = local.remaining();
        PresentationState {
            scale: 1.0 - remaining * self.scale_amplitude,
            translate_y: if self.anchored {
                0.0
            } else {
                remaining * self.translate_amplitude
            },
            opacity: local.value(),
        }
    }
}

/// Per-panel motion table for one section.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionProfile {
    panels: Vec<PanelMotion>,
    fallback: PanelMotion,
}

impl MotionProfile {
    pub fn new(panels: Vec<PanelMotion>, fallback: PanelMotion) -> Self {
        Self { panels, fallback }
    }

    /// Every panel moves the same way.
    pub fn uniform(motion: PanelMotion) -> Self {
        Self::new(Vec::new(), motion)
    }

    pub fn motion(&self, panel_index: usize) -> PanelMotion {
        self.panels.get(panel_index).copied().unwrap_or(self.fallback)
    }

    pub fn present(&self, local: Progress, panel_index: usize) -> PresentationState {
        self.motion(panel_index).present(local)
    }

    pub fn present_all(&self, local: &[Progress]) -> Vec<PresentationState> {
        local
            .iter()
            .enumerate()
            .map(|(index, progress)| self.present(*progress, index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> MotionProfile {
        MotionProfile::new(
            vec![PanelMotion::anchored(0.05), PanelMotion::sliding(0.05, 100.0)],
            PanelMotion::sliding(0.05, 120.0),
        )
    }

    #[test]
    fn settled_at_full_progress() {
        let profile = stack();
        for index in 0..4 {
            assert_eq!(profile.present(Progress::END, index), PresentationState::SETTLED);
        }
    }

    #[test]
    fn hidden_state_at_zero_progress() {
        let state = stack().present(Progress::START, 1);
        assert!((state.scale - 0.95).abs() < 1e-12);
        assert_eq!(state.translate_y, 100.0);
        assert_eq!(state.opacity, 0.0);
    }

    #[test]
    fn anchored_panel_never_translates() {
        let profile = stack();
        for step in 0..=10 {
            let state = profile.present(Progress::new(step as f64 / 10.0), 0);
            assert_eq!(state.translate_y, 0.0);
        }
    }

    #[test]
    fn panels_past_the_table_use_fallback() {
        let state = stack().present(Progress::new(0.5), 5);
        assert!((state.translate_y - 60.0).abs() < 1e-12);
        assert!((state.scale - 0.975).abs() < 1e-12);
        assert_eq!(state.opacity, 0.5);
    }

    #[test]
    fn present_is_pure() {
        let profile = stack();
        let local = Progress::new(0.37);
        assert_eq!(profile.present(local, 1), profile.present(local, 1));
        assert_eq!(profile.present(local, 1).style(), profile.present(local, 1).style());
    }

    #[test]
    fn style_is_a_transform_and_opacity() {
        let style = PresentationState::SETTLED.style();
        assert_eq!(style, "transform: scale(1.0000) translateY(0.000vh); opacity: 1.0000;");
    }

    #[test]
    fn pending_card_travels_in_viewport_heights() {
        let state = stack().present(Progress::START, 1);
        assert!(state.style().contains("translateY(100.000vh)"));
        assert!(!state.style().contains('%'));
    }
}
