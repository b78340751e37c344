//! Output mode routing.

/// How a command formats its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Stable `key=value` text for scripts
    #[default]
    Plain,
    /// Colors and tables, TTY only
    Pretty,
}

impl OutputMode {
    /// Resolve the mode from flags and the terminal.
    ///
    /// `--json` always wins. `--format plain` and `TERM=dumb` force plain.
    /// Otherwise pretty on a TTY, plain when piped.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_beats_format() {
        let mode = OutputMode::resolve(true, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn plain_format_on_tty() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn dumb_terminal_is_plain() {
        assert_eq!(OutputMode::resolve(false, None, true, true), OutputMode::Plain);
    }

    #[test]
    fn tty_is_pretty_and_pipe_is_plain() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
        assert_eq!(OutputMode::resolve(false, None, false, false), OutputMode::Plain);
        assert_eq!(
            OutputMode::resolve(false, Some("table"), true, false),
            OutputMode::Pretty
        );
    }
}
