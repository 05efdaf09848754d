pub mod errors;
pub mod factory;
pub mod kinds;
pub mod scheme;

pub use errors::ColourMapError;
pub use factory::colour_scheme_factory;
pub use kinds::ColourSchemeKind;
pub use scheme::{ChannelRamp, ColourRule, ColourScheme};
