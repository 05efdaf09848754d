use crate::core::fractals::colour_mapping::scheme::{ChannelRamp, ColourRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourSchemeKind {
    MandelbrotLinear,
    NewtonLinear,
    FallbackLinear,
    Binary,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::FallbackLinear,
        Self::MandelbrotLinear,
        Self::NewtonLinear,
        Self::Binary,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MandelbrotLinear => "Mandelbrot linear",
            Self::NewtonLinear => "Newton linear",
            Self::FallbackLinear => "Default linear",
            Self::Binary => "Binary",
        }
    }

    /// `(scale, offset)` per channel for the linear presets.
    #[must_use]
    pub const fn rule(self) -> ColourRule {
        match self {
            Self::MandelbrotLinear => ColourRule::Linear {
                red: ChannelRamp::new(12, 0),
                green: ChannelRamp::new(24, 155),
                blue: ChannelRamp::new(0, 0),
            },
            Self::NewtonLinear => ColourRule::Linear {
                red: ChannelRamp::new(2, 155),
                green: ChannelRamp::new(24, 0),
                blue: ChannelRamp::new(0, 0),
            },
            Self::FallbackLinear => ColourRule::Linear {
                red: ChannelRamp::new(2, 155),
                green: ChannelRamp::new(0, 0),
                blue: ChannelRamp::new(24, 0),
            },
            Self::Binary => ColourRule::Binary,
        }
    }

    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Binary)
    }
}

impl Default for ColourSchemeKind {
    fn default() -> Self {
        Self::FallbackLinear
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
