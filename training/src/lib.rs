//! Workout statistics from raw tracker packages.
//!
//! A tracker emits sensor packages: an activity code (`SWM`, `RUN`, `WLK`)
//! plus a flat list of readings. [`read_package`] turns one package into a
//! [`Workout`], which derives three figures on demand:
//!
//! ```notrust
//! distance   = action * unit_length / 1000
//! mean speed = distance / duration
//! calories   = formula fixed by the workout kind
//! ```
//!
//! Where:
//!
//! - `action` - steps for running and walking, strokes for swimming
//! - `unit_length` - metres covered by one step (0.65) or stroke (1.38)
//! - `duration` - workout length in hours
//!
//! Swimming derives speed from the pool instead: pool length times lap
//! count over duration.
//!
//! [`Workout::report`] packs the figures into a [`Report`] whose `Display`
//! impl renders the summary line shown to the user.

mod message;
mod package;
mod workout;

pub use self::message::*;
pub use self::package::*;
pub use self::workout::*;
