//! Logger builder implementation

// External dependencies
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter, writer::BoxMakeWriter},
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

// Internal crates
use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

type Filtered = Layered<EnvFilter, Registry>;
type BoxedFmtLayer = Box<dyn Layer<Filtered> + Send + Sync>;

/// Applies the display options shared by every format and boxes the layer.
macro_rules! boxed_fmt_layer {
    ($layer:expr, $display:expr, $writer:expr) => {{
        let layer = $layer
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source);
        if $display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Logger builder
pub struct LoggerBuilder {
    config: Config,
    writer: BoxMakeWriter,
}

/// Handle to the installed logger.
#[derive(Debug)]
#[must_use = "dropping the guard immediately discards the installed filter description"]
pub struct LoggerGuard {
    filter: String,
}

impl LoggerBuilder {
    /// Create builder from config. Output goes to stderr.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            writer: BoxMakeWriter::new(std::io::stderr),
        }
    }

    /// Replaces the output destination.
    #[must_use]
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        self.writer = BoxMakeWriter::new(writer);
        self
    }

    /// Assembles the subscriber without installing it.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] when the level is not a valid directive.
    pub fn build_subscriber(self) -> LogResult<impl Subscriber + Send + Sync + 'static> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(&self.config.level, e))?;

        let display = &self.config.display;
        let fmt_layer: BoxedFmtLayer = match self.config.format {
            Format::Pretty => boxed_fmt_layer!(fmt::layer().pretty(), display, self.writer),
            Format::Compact => boxed_fmt_layer!(fmt::layer().compact(), display, self.writer),
            Format::Json => boxed_fmt_layer!(fmt::layer().json(), display, self.writer),
        };

        Ok(Registry::default().with(filter).with(fmt_layer))
    }

    /// Build and install the logger as the global default.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] for an invalid level and
    /// [`LogError::AlreadyInitialized`] when a global subscriber exists.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.config.level.clone();
        self.build_subscriber()?
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(filter = %filter, "logger initialized");
        Ok(LoggerGuard { filter })
    }
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LoggerGuard {
    /// The filter directive the logger was installed with.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn emit(config: Config) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = LoggerBuilder::from_config(config)
            .with_writer(move || writer.clone())
            .build_subscriber()
            .unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(code = "empty", "validation failed");
            tracing::debug!("hidden at warn level");
        });
        capture.contents()
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = Config {
            level: "moji=loud".into(),
            ..Config::default()
        };
        let result = LoggerBuilder::from_config(config).build_subscriber();
        assert!(matches!(result, Err(LogError::Filter { filter, .. }) if filter == "moji=loud"));
    }

    #[test]
    fn test_compact_respects_level() {
        let output = emit(Config::quiet());
        assert!(output.contains("validation failed"));
        assert!(output.contains("code=\"empty\""));
        assert!(!output.contains("hidden at warn level"));
    }

    #[test]
    fn test_json_format() {
        let output = emit(Config {
            level: "warn".into(),
            format: Format::Json,
            display: DisplayConfig {
                time: false,
                ..DisplayConfig::default()
            },
        });
        assert!(output.contains(r#""message":"validation failed""#));
        assert!(output.contains(r#""level":"WARN""#));
    }

    #[test]
    fn test_pretty_format() {
        let output = emit(Config {
            level: "warn".into(),
            ..Config::development()
        });
        assert!(output.contains("validation failed"));
        assert!(!output.contains("hidden at warn level"));
    }
}
