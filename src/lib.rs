pub mod metadata;
pub mod response;
pub mod time_grain;
pub use options::{SelectOption, TextValue};

mod options;
