mod controls;
mod display_mode;
mod errors;
mod pagination;
mod presenter;

pub use crate::controls::Controls;
pub use crate::display_mode::DisplayMode;
pub use crate::errors::{PresentError, UnknownDisplayMode};
pub use crate::pagination::{paginate, Pages, DEFAULT_WORDS_PER_PAGE};
pub use crate::presenter::{pick, DisplayOutcome, Presenter, ReplaySummary, BATCH_SIZE};
