#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
mod player;
pub mod prelude;
mod session;
mod ship;
#[cfg(feature = "std")]
mod achievements;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod stats;
#[cfg(feature = "std")]
pub mod storage;
#[cfg(feature = "std")]
mod timer;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use achievements::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use stats::*;
#[cfg(feature = "std")]
pub use timer::*;
