//! Command implementations

pub mod unjumble;

pub use unjumble::{
    UnjumbleConfig, UnjumbleOutcome, UnjumbleResult, run_unjumble, unjumble_file,
};
