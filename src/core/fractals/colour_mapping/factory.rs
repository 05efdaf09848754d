use crate::core::fractals::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::colour_mapping::scheme::ColourScheme;

#[must_use]
pub fn colour_scheme_factory(kind: ColourSchemeKind, max_iterations: u32) -> ColourScheme {
    ColourScheme::from_kind(kind, max_iterations)
}
