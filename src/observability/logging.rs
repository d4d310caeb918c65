//! Persistent audit log.
//!
//! Everything at INFO and above (contact creation and deletion, filter
//! changes, session start and end) is appended to a rotating file, while the
//! terminal only sees what `LOG_LEVEL` lets through.

use std::path::Path;
use tracing::Subscriber;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::{Filtered, LevelFilter};
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// The file layer installed by [`audit_layer`].
pub type AuditLayer<S, W> = Filtered<fmt::Layer<S, DefaultFields, Format, W>, LevelFilter, S>;

/// File name prefix of audit log files.
pub const LOG_FILE_PREFIX: &str = "phone_book";

/// Rotated files kept on disk, including the current one.
pub const MAX_LOG_FILES: usize = 16;

/// Open the daily-rotated audit log in `dir`, creating the directory if
/// needed. Only the newest [`MAX_LOG_FILES`] files are kept.
pub fn audit_appender(dir: impl AsRef<Path>) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
}

/// Plain-text INFO layer writing to `writer`.
pub fn audit_layer<S, W>(writer: W) -> AuditLayer<S, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;
    use crate::phone_book::PhoneBook;
    use std::fs;
    use tracing_subscriber::layer::SubscriberExt;

    fn read_logs(dir: &Path) -> String {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
            })
            .map(|path| fs::read_to_string(path).unwrap())
            .collect()
    }

    #[test]
    fn test_audit_appender_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("logs");

        audit_appender(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_contact_changes_reach_audit_log() {
        let root = tempfile::tempdir().unwrap();
        let appender = audit_appender(root.path()).unwrap();
        let subscriber = tracing_subscriber::registry().with(audit_layer(appender));

        tracing::subscriber::with_default(subscriber, || {
            let mut phone_book = PhoneBook::new();
            let contact = Contact::new("Ada", "Lovelace", "(123) 456-7890").unwrap();
            phone_book.add_contact(contact.clone()).unwrap();
            phone_book.delete_contact(&contact).unwrap();
            tracing::debug!("below the audit level");
        });

        let logs = read_logs(root.path());
        assert!(logs.contains("Contact created"));
        assert!(logs.contains("Contact deleted"));
        assert!(logs.contains("Ada Lovelace"));
        assert!(!logs.contains("below the audit level"));
    }
}
