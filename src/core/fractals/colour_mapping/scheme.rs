use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationCount;
use crate::core::fractals::colour_mapping::errors::ColourMapError;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelRamp {
    pub scale: i32,
    pub offset: i32,
}

impl ChannelRamp {
    #[must_use]
    pub const fn new(scale: i32, offset: i32) -> Self {
        Self { scale, offset }
    }

    /// `(iterations * scale + offset) mod 256`, wrapped into `0..=255` even for
    /// negative scales or offsets.
    #[must_use]
    pub fn channel(self, iterations: u32) -> u8 {
        let value = i64::from(iterations) * i64::from(self.scale) + i64::from(self.offset);
        value.rem_euclid(256) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourRule {
    Linear {
        red: ChannelRamp,
        green: ChannelRamp,
        blue: ChannelRamp,
    },
    /// Alternating black and white by iteration parity.
    Binary,
}

impl ColourRule {
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Binary)
    }

    fn colour_for(self, iterations: u32) -> Colour {
        match self {
            Self::Linear { red, green, blue } => Colour {
                r: red.channel(iterations),
                g: green.channel(iterations),
                b: blue.channel(iterations),
            },
            Self::Binary => {
                let level = if iterations % 2 == 1 { 255 } else { 0 };
                Colour {
                    r: level,
                    g: level,
                    b: level,
                }
            }
        }
    }
}

/// Maps iteration counts to colours through a table indexed
/// `0..max_iterations`.
///
/// Entries never depend on the bound itself, so raising the bound only appends
/// the new indices and lowering it keeps the table as is.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourScheme {
    kind: Option<ColourSchemeKind>,
    rule: ColourRule,
    max_iterations: u32,
    table: Vec<Colour>,
}

impl ColourScheme {
    #[must_use]
    pub fn new(rule: ColourRule, max_iterations: u32) -> Self {
        let mut scheme = Self {
            kind: None,
            rule,
            max_iterations: 0,
            table: Vec::new(),
        };
        scheme.set_max_iterations(max_iterations);
        scheme
    }

    #[must_use]
    pub fn from_kind(kind: ColourSchemeKind, max_iterations: u32) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(kind.rule(), max_iterations)
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<ColourSchemeKind> {
        self.kind
    }

    #[must_use]
    pub fn rule(&self) -> ColourRule {
        self.rule
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        let wanted = max_iterations as usize;

        if wanted > self.table.len() {
            let rule = self.rule;
            let start = self.table.len() as u32;
            self.table.reserve(wanted - self.table.len());
            self.table
                .extend((start..max_iterations).map(|iterations| rule.colour_for(iterations)));
        }

        self.max_iterations = max_iterations;
    }
}

impl ColourMap for ColourScheme {
    type Failure = ColourMapError;

    fn map(&self, iterations: IterationCount) -> Result<Colour, Self::Failure> {
        let Ok(count) = u32::try_from(iterations) else {
            return Ok(Colour::BLACK);
        };

        if count > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if count == self.max_iterations {
            return Ok(match self.rule {
                ColourRule::Linear { .. } => Colour::BLACK,
                ColourRule::Binary => self.rule.colour_for(count),
            });
        }

        Ok(self.table[count as usize])
    }}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot(max_iterations: u32) -> ColourScheme {
        ColourScheme::from_kind(ColourSchemeKind::MandelbrotLinear, max_iterations)
    }

    #[test]
    fn test_linear_channels_follow_scale_and_offset() {
        let scheme = mandelbrot(256);

        assert_eq!(scheme.map(0), Ok(Colour { r: 0, g: 155, b: 0 }));
        // r = 120, g = (240 + 155) mod 256 = 139
        assert_eq!(scheme.map(10), Ok(Colour { r: 120, g: 139, b: 0 }));
    }

    #[test]
    fn test_linear_in_set_is_black() {
        let scheme = mandelbrot(256);

        assert_eq!(scheme.map(256), Ok(Colour::BLACK));
    }

    #[test]
    fn test_negative_count_is_black() {
        let scheme = ColourScheme::from_kind(ColourSchemeKind::NewtonLinear, 128);

        assert_eq!(scheme.map(-1), Ok(Colour::BLACK));
        assert_eq!(scheme.map(i32::MIN), Ok(Colour::BLACK));
    }

    #[test]
    fn test_count_above_max_is_error() {
        let scheme = mandelbrot(64);

        assert_eq!(
            scheme.map(65),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 65,
                max_iterations: 64
            })
        );
    }

    #[test]
    fn test_binary_alternates_and_ignores_in_set_rule() {
        let scheme = ColourScheme::from_kind(ColourSchemeKind::Binary, 127);
        let white = Colour {
            r: 255,
            g: 255,
            b: 255,
        };

        assert_eq!(scheme.map(0), Ok(Colour::BLACK));
        assert_eq!(scheme.map(1), Ok(white));
        assert_eq!(scheme.map(126), Ok(Colour::BLACK));
        assert_eq!(scheme.map(127), Ok(white));
    }

    #[test]
    fn test_negative_ramp_wraps_into_range() {
        let ramp = ChannelRamp::new(-3, 1);

        assert_eq!(ramp.channel(1), 254);
        assert_eq!(ramp.channel(0), 1);
    }

    #[test]
    fn test_growing_bound_appends_entries() {
        let mut scheme = mandelbrot(64);
        let before: Vec<Colour> = (0..64).map(|i| scheme.map(i).unwrap()).collect();

        scheme.set_max_iterations(128);

        assert_eq!(scheme.table_len(), 128);
        for (i, colour) in before.iter().enumerate() {
            assert_eq!(scheme.map(i as i32).as_ref(), Ok(colour));
        }
        assert_eq!(scheme.map(100), Ok(mandelbrot(256).map(100).unwrap()));
    }

    #[test]
    fn test_shrinking_bound_keeps_table() {
        let mut scheme = mandelbrot(128);

        scheme.set_max_iterations(64);

        assert_eq!(scheme.table_len(), 128);
        assert_eq!(scheme.max_iterations(), 64);
        assert_eq!(scheme.map(64), Ok(Colour::BLACK));
        assert!(scheme.map(100).is_err());
    }

    #[test]
    fn test_previously_black_index_is_coloured_after_growth() {
        let mut scheme = mandelbrot(10);
        assert_eq!(scheme.map(10), Ok(Colour::BLACK));

        scheme.set_max_iterations(20);

        assert_eq!(scheme.map(10), Ok(Colour { r: 120, g: 139, b: 0 }));
    }

    #[test]
    fn test_custom_rule_has_no_kind() {
        let custom = ColourScheme::new(ColourSchemeKind::NewtonLinear.rule(), 16);

        assert_eq!(mandelbrot(16).kind(), Some(ColourSchemeKind::MandelbrotLinear));
        assert_eq!(custom.kind(), None);
        assert_eq!(custom.map(3), ColourScheme::from_kind(ColourSchemeKind::NewtonLinear, 16).map(3));
    }
}
