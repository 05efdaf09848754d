//! Interactive exploration session.
//!
//! Holds the view, fractal parameters and colour scheme of one session and
//! turns discrete commands (pan, zoom, iteration bound, colour toggle, Julia
//! constant moves) into rendered pixel buffers. Window and input handling stay
//! outside; a front end only forwards [`ExplorerCommand`]s and draws the
//! returned buffer and legend.

pub mod command;
mod controller;
pub mod errors;

pub use command::ExplorerCommand;
pub use controller::ExplorerController;
pub use errors::ExplorerError;
