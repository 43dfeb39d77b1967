pub mod averager;
pub mod controller;
pub mod device;
pub mod error;
pub mod panel;
pub mod platform;
pub mod recording;
pub mod stream;

pub use averager::*;
pub use controller::*;
pub use device::*;
pub use error::*;
pub use panel::*;
pub use platform::*;
pub use recording::*;
pub use stream::*;
