//! User-facing output

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Mutex;

use clap::ValueEnum;
use serde::Serialize;

/// Rendering of messages written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sink for the messages a command reports to the user
pub trait Ui: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Serialize)]
struct JsonMessage<'a> {
    status: &'a str,
    message: &'a str,
}

type Writer = Box<dyn Write + Send>;

/// Writes success lines to stdout and errors to stderr
pub struct ConsoleUi {
    format: OutputFormat,
    quiet: bool,
    out: Mutex<Writer>,
    err: Mutex<Writer>,
}

impl ConsoleUi {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self::with_writers(
            format,
            quiet,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    /// Same rendering, written to the given sinks instead of the terminal
    pub fn with_writers(format: OutputFormat, quiet: bool, out: Writer, err: Writer) -> Self {
        Self {
            format,
            quiet,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    fn render(&self, status: &str, message: &str) -> String {
        match self.format {
            OutputFormat::Text if status == "error" => format!("Error: {}", message),
            OutputFormat::Text => message.to_string(),
            OutputFormat::Json => serde_json::to_string(&JsonMessage { status, message })
                .unwrap_or_else(|_| message.to_string()),
        }
    }

    fn write_line(sink: &Mutex<Writer>, line: &str) {
        // Nothing sensible to do if the sink is gone (closed pipe).
        if let Ok(mut writer) = sink.lock() {
            let _ = writeln!(writer, "{}", line).and_then(|_| writer.flush());
        }
    }
}

impl Ui for ConsoleUi {
    fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        Self::write_line(&self.out, &self.render("success", message));
    }

    fn error(&self, message: &str) {
        Self::write_line(&self.err, &self.render("error", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn console(format: OutputFormat, quiet: bool) -> (ConsoleUi, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let ui = ConsoleUi::with_writers(
            format,
            quiet,
            Box::new(out.clone()),
            Box::new(err.clone()),
        );
        (ui, out, err)
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_text_success_goes_to_stdout() {
        let (ui, out, err) = console(OutputFormat::Text, false);

        ui.success("Execution exec-1 successfully re-ordered to UP");

        assert_eq!(out.contents(), "Execution exec-1 successfully re-ordered to UP\n");
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_text_error_goes_to_stderr() {
        let (ui, out, err) = console(OutputFormat::Text, false);

        ui.error("failed");

        assert!(out.contents().is_empty());
        assert_eq!(err.contents(), "Error: failed\n");
    }

    #[test]
    fn test_quiet_suppresses_success_only() {
        let (ui, out, err) = console(OutputFormat::Text, true);

        ui.success("Execution exec-1 successfully re-ordered to UP");
        ui.error("failed");

        assert!(out.contents().is_empty());
        assert_eq!(err.contents(), "Error: failed\n");
    }

    #[test]
    fn test_json_success_is_one_line() {
        let (ui, out, _err) = console(OutputFormat::Json, false);

        ui.success("Execution exec-1 successfully re-ordered to DOWN");

        let contents = out.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        let rendered: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(
            rendered,
            serde_json::json!({
                "status": "success",
                "message": "Execution exec-1 successfully re-ordered to DOWN"
            })
        );
    }

    #[test]
    fn test_json_error_goes_to_stderr() {
        let (ui, out, err) = console(OutputFormat::Json, false);

        ui.error("Connection failed: connection refused");

        assert!(out.contents().is_empty());
        let rendered: serde_json::Value = serde_json::from_str(err.contents().trim()).unwrap();
        assert_eq!(
            rendered,
            serde_json::json!({"status": "error", "message": "Connection failed: connection refused"})
        );
    }
}
