//! Window management module
//!
//! Provides window lifecycle, focus/z-order, placement and hit testing.

mod manager;
mod placement;
mod record;
mod region;

pub use manager::{OpenOutcome, TaskbarAction, WindowManager};
pub use placement::Placement;
pub use record::WindowRecord;
pub use region::{FrameStyle, WindowRegion, FRAME_STYLE};
