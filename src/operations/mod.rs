pub mod interactive;
pub mod load_ops;

pub use interactive::run_interactive;
pub use load_ops::load_feed;
