//! Wall-clock timing for scripts.

use std::fmt::{self, Debug, Formatter};
use std::time::{Duration, Instant};

use log::info;

/// A guard that reports how long it was alive for when dropped.
///
/// The report, `"{action} took {elapsed:?}"`, is printed to stdout and logged at info level.
///
/// # Examples
/// ```
/// # use toolkit::time::TimeIt;
/// fn solve() -> u64 {
///     let _timer = TimeIt::start("solve");
///     (1..=10).product()
/// } // Prints "solve took ..." here.
/// # assert_eq!(solve(), 3628800);
/// ```
#[must_use = "the time is reported when the guard is dropped"]
pub struct TimeIt {
    action: String,
    start: Instant,
}

impl TimeIt {
    pub fn start(action: impl Into<String>) -> TimeIt {
        TimeIt {
            action: action.into(),
            start: Instant::now(),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the time since the guard was started, without stopping it.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn report(&self) -> String {
        format!("{} took {:?}", self.action, self.elapsed())
    }
}

impl Debug for TimeIt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeIt")
            .field("action", &self.action)
            .field("elapsed", &self.elapsed())
            .finish()
    }
}

impl Drop for TimeIt {
    fn drop(&mut self) {
        let report = self.report();
        info!("{report}");
        println!("{report}");
    }
}
