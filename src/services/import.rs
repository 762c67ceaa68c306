//! Report import service
//!
//! Loads the comma-separated project report produced by the external
//! bookkeeping software. Each record is
//! `name,projectCode,transactionCode,amount,description`.
//!
//! Malformed records are skipped and reported. An unparseable amount stops
//! the whole import; anything appended before that point stays in place.

use std::ops::Range;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{ImportError, PortfolioResult, RecordFormatReason};
use crate::models::{Money, ProjectKind, Transaction, TransactionKind};
use crate::services::Portfolio;

/// Minimum number of fields in a record; the description is the fifth
const MIN_FIELDS: usize = 5;

/// A record that was skipped during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number in the input
    pub line: usize,
    /// The record as it appeared in the input
    pub text: String,
    /// Why it was skipped
    pub error: ImportError,
}

/// Outcome of a completed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of lines read, blank lines included
    pub records_read: usize,
    /// Number of transactions appended to projects
    pub transactions_imported: usize,
    /// Number of projects created because no project had the record's name
    pub projects_created: usize,
    /// Records that were rejected
    pub skipped: Vec<SkippedRecord>,
}

/// A record that passed validation
#[derive(Debug)]
struct ParsedRecord<'r> {
    project_name: &'r str,
    project_kind: ProjectKind,
    kind: TransactionKind,
    amount: Money,
    description: &'r str,
}

/// Service for loading report files into a portfolio
///
/// Writes straight into the project list; the selection is never touched.
pub struct ImportService<'a> {
    portfolio: &'a mut Portfolio,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(portfolio: &'a mut Portfolio) -> Self {
        Self { portfolio }
    }

    /// Read an entire report file and import it
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> PortfolioResult<ImportReport> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ImportError::FileUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        self.import_content(&path.display().to_string(), &content)
    }

    /// Import report content that has already been read
    pub fn import_str(&mut self, content: &str) -> PortfolioResult<ImportReport> {
        self.import_content("<input>", content)
    }

    fn import_content(&mut self, source: &str, content: &str) -> PortfolioResult<ImportReport> {
        // Plain comma splitting: no header row, no quoting, ragged rows allowed
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::None)
            .from_reader(content.as_bytes());

        let mut report = ImportReport::default();
        // The reader drops empty lines; track gaps so they are reported too
        let mut next_line = 1;

        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| ImportError::FileUnavailable {
                path: source.to_string(),
                reason: e.to_string(),
            })?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(i + 1);
            skip_blank_lines(&mut report, next_line..line);
            next_line = line + 1;
            report.records_read += 1;

            let parsed = match parse_record(&record, line) {
                Ok(parsed) => parsed,
                Err(error @ ImportError::RecordFormat { .. }) => {
                    let text = record_text(&record);
                    warn!(line, record = %text, "skipping record: {}", error);
                    report.skipped.push(SkippedRecord { line, text, error });
                    continue;
                }
                Err(error) => {
                    warn!(
                        line,
                        imported = report.transactions_imported,
                        "aborting import: {}",
                        error
                    );
                    return Err(error.into());
                }
            };

            let (project, created) = self
                .portfolio
                .find_or_create(parsed.project_name, parsed.project_kind);
            project.add_transaction(Transaction::new(
                parsed.amount,
                parsed.description,
                parsed.kind,
            ));

            if created {
                report.projects_created += 1;
            }
            report.transactions_imported += 1;
        }
        skip_blank_lines(&mut report, next_line..content.lines().count() + 1);

        info!(
            source,
            records = report.records_read,
            imported = report.transactions_imported,
            created = report.projects_created,
            skipped = report.skipped.len(),
            "report imported"
        );

        Ok(report)
    }
}

/// Validate one record
///
/// Codes are checked before the amount, so a record with both a bad code
/// and a bad amount is skipped rather than aborting the import.
fn parse_record(record: &StringRecord, line: usize) -> Result<ParsedRecord<'_>, ImportError> {
    if record.len() < MIN_FIELDS {
        return Err(ImportError::RecordFormat {
            line,
            reason: RecordFormatReason::MissingFields {
                found: record.len(),
            },
        });
    }

    let project_code = &record[1];
    let project_kind =
        ProjectKind::from_import_code(project_code).ok_or_else(|| ImportError::RecordFormat {
            line,
            reason: RecordFormatReason::UnknownProjectType(project_code.to_string()),
        })?;

    let txn_code = &record[2];
    let kind =
        TransactionKind::from_import_code(txn_code).ok_or_else(|| ImportError::RecordFormat {
            line,
            reason: RecordFormatReason::UnknownTransactionType(txn_code.to_string()),
        })?;

    let amount = Money::parse(&record[3]).map_err(|_| ImportError::AmountParse {
        line,
        value: record[3].to_string(),
    })?;

    Ok(ParsedRecord {
        project_name: &record[0],
        project_kind,
        kind,
        amount,
        description: &record[4],
    })
}

fn skip_blank_lines(report: &mut ImportReport, lines: Range<usize>) {
    for line in lines {
        let error = ImportError::RecordFormat {
            line,
            reason: RecordFormatReason::MissingFields { found: 1 },
        };
        warn!(line, "skipping blank line");
        report.records_read += 1;
        report.skipped.push(SkippedRecord {
            line,
            text: String::new(),
            error,
        });
    }
}

fn record_text(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
