mod schedule;
mod types;

pub use schedule::*;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
