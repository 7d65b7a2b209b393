mod pointer;
mod route;

pub use pointer::pointer_sample;
pub use route::{edit_key_for, route_frame_input};
