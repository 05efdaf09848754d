pub mod compute_frame;
pub mod errors;
pub mod frame_computer;
pub mod frame_request;

pub use compute_frame::compute_frame;
pub use errors::{FrameError, FrameRequestError};
pub use frame_computer::FrameComputer;
pub use frame_request::FrameRequest;
