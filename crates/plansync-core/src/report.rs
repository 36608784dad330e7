//! JUnit-style report reading.
//!
//! Accepts either a `<testsuite>` root with `<testcase>` children or a
//! `<testsuites>` wrapper around one or more suites. Every `<testcase>`
//! below the root is collected in document order; a case is failed when it
//! carries a `<failure>` or `<error>` child.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::model::RawTestCase;

/// Errors reading or parsing the report file. Both are fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read report {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse report {path}: {message}")]
    Xml { path: String, message: String },
}

/// Read and parse the report at `path`.
///
/// A well-formed file without any `<testcase>` element yields an empty list;
/// the caller treats that as "nothing to do", not as an error.
pub fn parse_report(path: &Path) -> Result<Vec<RawTestCase>, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ReportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_str(&text).map_err(|e| ReportError::Xml {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn parse_str(xml: &str) -> Result<Vec<RawTestCase>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut cases = Vec::new();
    let mut current: Option<RawTestCase> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"testcase" => {
                    current = Some(RawTestCase {
                        name: case_name(&e)?,
                        failed: false,
                    });
                }
                b"failure" | b"error" => {
                    if let Some(case) = current.as_mut() {
                        case.failed = true;
                    }
                }
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"testcase" => {
                    cases.push(RawTestCase {
                        name: case_name(&e)?,
                        failed: false,
                    });
                }
                b"failure" | b"error" => {
                    if let Some(case) = current.as_mut() {
                        case.failed = true;
                    }
                }
                _ => {}
            },
            Event::End(e) => {
                if e.local_name().as_ref() == b"testcase" {
                    if let Some(case) = current.take() {
                        cases.push(case);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(cases)
}

/// The `name` attribute, entity-decoded. A nameless case is kept with an
/// empty name; it can never match an identifier and ends up skipped.
fn case_name(e: &quick_xml::events::BytesStart<'_>) -> Result<String, quick_xml::Error> {
    match e.try_get_attribute("name").map_err(quick_xml::Error::from)? {
        Some(attr) => Ok(attr.unescape_value()?.into_owned()),
        None => Ok(String::new()),
    }
}
