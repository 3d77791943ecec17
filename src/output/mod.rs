//! Output formatting for listings
//!
//! - `utils`: human-readable sizes, timestamps and long-format columns
//! - `ListingPrinter`: writes listing lines to the terminal

mod config;
mod printer;
mod utils;

pub use config::OutputConfig;
pub use printer::{ListingPrinter, write_line};
pub use utils::{format_size, format_time, format_time_in, long_details};
