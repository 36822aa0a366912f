//! Infrastructure layer for filesystem and environment interactions.
//!
//! Everything the core logic would otherwise reach for ambiently lives here
//! behind a small seam: the wall clock, the identifier source, and the sandbox
//! paths where the host filesystem is mounted under `/host`.

pub mod clock;
pub mod ids;
pub mod paths;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use paths::{expand_tilde, get_data_dir};
