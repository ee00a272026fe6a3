//! CSV serialization of rows into a freshly created file

use std::borrow::Borrow;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ExportOptions;
use crate::error::{ExportError, Result};
use crate::file::LocalFile;
use crate::model::Row;
use crate::naming::{random_file_name, temp_file_path};

/// Counts from one write pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
    pub rows_written: usize,
    pub rows_skipped: usize,
}

/// Writes rows as comma-separated records
pub struct CsvWriter<'a> {
    options: &'a ExportOptions,
}

impl<'a> CsvWriter<'a> {
    pub fn new(options: &'a ExportOptions) -> Self {
        Self { options }
    }

    /// Write `rows` to a new uniquely named file and return a handle to it.
    ///
    /// The file is flushed and closed before returning.
    pub fn write_rows<I, R>(&self, rows: I) -> Result<LocalFile>
    where
        I: IntoIterator<Item = R>,
        R: Borrow<Row>,
    {
        let dir = self.options.output_dir();
        let file_name = random_file_name(&self.options.prefix, &self.options.extension);
        let path = temp_file_path(&dir, &file_name);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| ExportError::io(&path, e))?;

        let stats = self.write_file(&path, file, rows)?;

        debug!(
            path = %path.display(),
            written = stats.rows_written,
            skipped = stats.rows_skipped,
            "exported csv"
        );

        Ok(LocalFile::new(path))
    }

    /// Write `rows` into `writer`, an opened sink for `path`.
    /// On failure the partial file at `path` is removed.
    fn write_file<W, I, R>(&self, path: &Path, writer: W, rows: I) -> Result<WriteStats>
    where
        W: Write,
        I: IntoIterator<Item = R>,
        R: Borrow<Row>,
    {
        self.write_records(writer, rows).map_err(|err| {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "failed to remove partial export");
            }
            ExportError::from_csv(err, Some(path))
        })
    }

    /// Write `rows` as CSV into any writer, skipping blank rows
    pub fn write_to<W, I, R>(&self, writer: W, rows: I) -> Result<WriteStats>
    where
        W: Write,
        I: IntoIterator<Item = R>,
        R: Borrow<Row>,
    {
        self.write_records(writer, rows)
            .map_err(|err| ExportError::from_csv(err, None))
    }

    fn write_records<W, I, R>(&self, writer: W, rows: I) -> csv::Result<WriteStats>
    where
        W: Write,
        I: IntoIterator<Item = R>,
        R: Borrow<Row>,
    {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .double_quote(true)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(writer);

        let mut stats = WriteStats::default();
        for row in rows {
            let row: &Row = row.borrow();
            if row.is_blank(self.options.blank_rows) {
                stats.rows_skipped += 1;
                continue;
            }
            let record: Vec<String> = row.fields().collect();
            csv_writer.write_record(&record)?;
            stats.rows_written += 1;
        }

        csv_writer.flush()?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::BlankRowPolicy;
    use crate::file::ExportedFile;
    use crate::model::CellValue;

    /// Accepts `budget` bytes, then fails every write
    struct ShortWriter<W> {
        inner: W,
        budget: usize,
    }

    impl<W: Write> Write for ShortWriter<W> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::Error::other("no space left on device"));
            }
            let n = self.inner.write(&buf[..buf.len().min(self.budget)])?;
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.inner.flush()
        }
    }

    fn render(options: &ExportOptions, rows: &[Row]) -> (String, WriteStats) {
        let mut buffer = Vec::new();
        let stats = CsvWriter::new(options).write_to(&mut buffer, rows).unwrap();
        (String::from_utf8(buffer).unwrap(), stats)
    }

    #[test]
    fn test_quoting() {
        let rows = vec![Row::from(vec![
            "plain",
            "with,comma",
            "with \"quote\"",
            "two\nlines",
        ])];
        let (out, _) = render(&ExportOptions::default(), &rows);
        assert_eq!(
            out,
            "plain,\"with,comma\",\"with \"\"quote\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![
            Row::from(vec!["a"]),
            Row::from(vec!["b", "c", "d"]),
            Row::from(vec![CellValue::Int(1), CellValue::Null]),
        ];
        let (out, stats) = render(&ExportOptions::default(), &rows);
        assert_eq!(out, "a\nb,c,d\n1,\n");
        assert_eq!(stats.rows_written, 3);
    }

    #[test]
    fn test_skips_blank_rows() {
        let rows = vec![
            Row::from(vec!["", ""]),
            Row::from(vec!["x"]),
            Row::default(),
            Row::from(vec![CellValue::Int(0), CellValue::from("0")]),
        ];

        let (out, stats) = render(&ExportOptions::default(), &rows);
        assert_eq!(out, "x\n");
        assert_eq!(
            stats,
            WriteStats {
                rows_written: 1,
                rows_skipped: 3
            }
        );

        let options = ExportOptions::default().with_blank_rows(BlankRowPolicy::Empty);
        let (out, stats) = render(&options, &rows);
        assert_eq!(out, "x\n0,0\n");
        assert_eq!(stats.rows_skipped, 2);
    }

    #[test]
    fn test_write_rows_creates_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = ExportOptions::default()
            .with_directory(dir.path())
            .with_prefix("test-")
            .with_extension(".csv");
        let writer = CsvWriter::new(&options);
        let rows = vec![Row::from(vec!["a", "b"])];

        let first = writer.write_rows(&rows).unwrap();
        let second = writer.write_rows(&rows).unwrap();

        assert_ne!(first.path(), second.path());
        assert_eq!(first.base_path(), dir.path());
        assert!(first.file_name().starts_with("test-"));
        assert_eq!(first.content().unwrap(), "a,b\n");
        assert_eq!(second.content().unwrap(), "a,b\n");
    }

    #[test]
    fn test_write_rows_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let options = ExportOptions::default().with_directory(dir.path().join("missing"));
        let err = CsvWriter::new(&options)
            .write_rows(vec![Row::from(vec!["a"])])
            .unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn test_failing_writer_is_io_error() {
        let sink = ShortWriter {
            inner: Vec::new(),
            budget: 3,
        };
        let err = CsvWriter::new(&ExportOptions::default())
            .write_to(sink, &[Row::from(vec!["a", "b", "c"])])
            .unwrap_err();
        assert!(matches!(err, ExportError::Io { path: None, .. }), "{:?}", err);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_disk_full_is_io_error() {
        let sink = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let err = CsvWriter::new(&ExportOptions::default())
            .write_to(sink, &[Row::from(vec!["a", "b"])])
            .unwrap_err();
        match err {
            ExportError::Io { path: None, source } => assert_eq!(source.raw_os_error(), Some(28)),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = ExportOptions::default().with_directory(dir.path());
        let path = dir
            .path()
            .join(random_file_name(&options.prefix, &options.extension));
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .unwrap();
        let sink = ShortWriter {
            inner: file,
            budget: 4,
        };
        let rows = vec![
            Row::from(vec!["first", "row"]),
            Row::from(vec!["second", "row"]),
        ];

        let err = CsvWriter::new(&options)
            .write_file(&path, sink, &rows)
            .unwrap_err();

        match err {
            ExportError::Io {
                path: Some(failed), ..
            } => assert_eq!(failed, path),
            other => panic!("expected Io, got {:?}", other),
        }
        assert!(!path.exists());
        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("booknetic-"))
            .count();
        assert_eq!(leftovers, 0);
    }
}
