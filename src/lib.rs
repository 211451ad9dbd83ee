//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logsplit

logsplit is a leveled logger that splits its output between a log file and the console.

# The problem

A long-running service usually wants two different views of its diagnostics.  The console
should stay readable: warnings and above, maybe info while someone is watching.  The log file
should keep more, or sometimes less, depending on what the operator is chasing.  A single
threshold can't express that.

# Levels

| Level    | Prefix  |
|----------|---------|
| TRACE    | `[T]: ` |
| DEBUG    | `[D]: ` |
| INFO     | `[I]: ` |
| WARN     | `[W]: ` |
| ERROR    | `[E]: ` |
| CRITICAL | `[C]: ` |
| FATAL    | `[F]: ` |

`NONE` sits above FATAL and exists only as a threshold name.

# Routing

A [Logger] has a *log threshold* and a *stdout threshold*, both [Level::Info] by default.
A message at level `L` goes

* nowhere, if `L` is below both thresholds,
* to the console and the log, if it is at or above both,
* to the console only, if it clears just the stdout threshold,
* to the log only, if it clears just the log threshold.

Messages that go nowhere are not formatted at all.

# The API

```rust
use logsplit::{Level, Logger};

let logger = Logger::new();
logger.set_stdout_threshold(Level::Warn);
logger.set_log_threshold(Level::Debug);

logsplit::info!(logger => "listening on {}", "0.0.0.0:8000");
logger.warn().println(&[&"slow client", &"10.0.0.7"]);
```

Every level's [Writer] offers `print`, `printf` and `println`, plus `fatal*` variants that exit
the process after writing and `abort*` variants that panic after writing.

A process-wide logger lives in [global_logger]; the level macros use it when no logger is
given.

# Output

Each line is `<prefix><timestamp><message>`, the timestamp controlled by [Flags]:

```text
[W]: 2024/03/09 14:02:11 slow client 10.0.0.7
```

# Multithreading

A [Logger] is `Send + Sync`.  Configuration lives behind a read/write spinlock; emit calls take
the read side just long enough to copy out their level's [Writer], setters take the write side
to rebuild all seven writers at once.
*/

mod config;
mod error;
mod file_sink;
mod flags;
mod level;
mod log_record;
mod logger;
mod macros;
mod memory_sink;
mod sink;
mod spinlock;
mod writer;
pub mod global_logger;

pub use config::{Config, ENV_FLAGS, ENV_LOG_FILE, ENV_LOG_THRESHOLD, ENV_STDOUT_THRESHOLD};
pub use error::{Error, Result};
pub use file_sink::FileSink;
pub use flags::Flags;
pub use level::Level;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use memory_sink::MemorySink;
pub use sink::{ConsoleSink, DiscardSink, Sink, TeeSink};
pub use writer::{Route, Writer};
pub use global_logger::global_logger;
