pub mod fitness;
pub mod popcount;
pub mod report;
pub mod source;
#[cfg(target_arch = "x86_64")]
mod utils;

pub use fitness::{Fitness, evaluate, twomax};
pub use popcount::{Candidate, WIDTH, count};
pub use report::{run, write_score};
pub use source::{Constant, RandomSource, Replay, ValueSource};
