use std::fmt::Display;
use std::io::{self, Write};

/// Renders records as `[timestamp] LEVEL name: message`.
#[derive(Debug, Clone, Copy)]
pub struct RecordFormatter {
    timestamps: bool,
}

impl RecordFormatter {
    pub fn new(timestamps: bool) -> Self {
        Self { timestamps }
    }

    /// Writes one record into an `env_logger` buffer. Colouring follows the
    /// buffer's write style.
    pub fn write(
        &self,
        buf: &mut env_logger::fmt::Formatter,
        record: &log::Record<'_>,
    ) -> io::Result<()> {
        if self.timestamps {
            let ts = buf.timestamp();
            write!(buf, "[{}] ", ts)?;
        }

        let style = buf.default_level_style(record.level());
        writeln!(
            buf,
            "{style}{:<5}{style:#} {}",
            record.level().as_str(),
            Self::body(record.target(), record.args())
        )
    }

    pub fn plain_line(level: &str, logger: &str, message: impl Display) -> String {
        format!("{:<5} {}", level, Self::body(logger, message))
    }

    fn body(logger: &str, message: impl Display) -> String {
        format!("{}: {}", logger, message)
    }
}
