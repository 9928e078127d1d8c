//! Tests for the error module.

use crate::error::config::ConfigError;
use crate::error::loader::LoaderError;
use crate::error::{ErrorContext, ErrorReporter, TracingErrorReporter, WordTrieError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = WordTrieError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

#[test]
fn test_loader_error_conversion() {
    let error: WordTrieError = LoaderError::FileNotFound(PathBuf::from("words.txt")).into();
    assert_eq!(error.to_string(), "Loader error: Word file not found: words.txt");
}

#[test]
fn test_config_error_conversion() {
    let error: WordTrieError = ConfigError::ValueOutOfRange {
        key: "loader.max_words".to_string(),
        message: "must be greater than 0 when set".to_string(),
    }
    .into();
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration value loader.max_words is out of valid range: must be greater than 0 when set"
    );
}

/// Test that nested errors keep the underlying message.
#[test]
fn test_read_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let error = LoaderError::Read {
        source_name: "words.txt".to_string(),
        source: io_error,
    };

    assert!(error.to_string().contains("access denied"));
    assert!(std::error::Error::source(&error).is_some());
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_reporter_trait_object() {
    let reporter = MockErrorReporter::default();
    {
        let dyn_reporter: &dyn ErrorReporter = &reporter;
        dyn_reporter.report(ErrorContext::new(
            WordTrieError::Custom("test error".to_string()),
            "test_component",
        ));
    }
    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = WordTrieError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(ErrorContext::new(error, "test_component"));
}
