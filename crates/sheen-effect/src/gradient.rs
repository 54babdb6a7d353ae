use sheen_config::SurfacePreset;

/// Straight-alpha RGBA, each channel in [0, 1].
pub type Rgba = [f32; 4];

pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Rgba,
    /// Position along the gradient, 0.0 = center, 1.0 = end radius.
    pub location: f32,
}

/// Color ramp used for the highlight surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// Spread `colors` evenly from 0.0 to 1.0.
    pub fn evenly_spaced(colors: &[Rgba]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self {
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, &color)| ColorStop {
                    color,
                    location: i as f32 / last,
                })
                .collect(),
        }
    }

    /// Soft white glare fading out over five stops.
    pub fn highlight() -> Self {
        Self::evenly_spaced(&[white(0.4), white(0.2), white(0.1), white(0.08), white(0.0)])
    }

    /// Plain white-to-clear falloff.
    pub fn basic_highlight() -> Self {
        Self::evenly_spaced(&[white(0.4), white(0.0)])
    }

    pub fn from_preset(preset: SurfacePreset) -> Self {
        match preset {
            SurfacePreset::Highlight => Self::highlight(),
            SurfacePreset::BasicHighlight => Self::basic_highlight(),
        }
    }

    /// Color at `t`, linearly interpolated between neighbouring stops.
    pub fn color_at(&self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let Some(first) = self.stops.first() else {
            return TRANSPARENT;
        };
        if t <= first.location {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.location {
                let span = b.location - a.location;
                let f = if span > 0.0 { (t - a.location) / span } else { 1.0 };
                return lerp(a.color, b.color, f);
            }
        }

        self.stops[self.stops.len() - 1].color
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::highlight()
    }
}

fn white(opacity: f32) -> Rgba {
    [1.0, 1.0, 1.0, opacity]
}

fn lerp(a: Rgba, b: Rgba, f: f32) -> Rgba {
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * f)
}
