use super::loader::cell_text;
use super::types::RecordSet;
use crate::error::Result;

/// A window of raw rows, every source column included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawPage {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fixed-width table with a header rule. The leading unlabeled column is
    /// the row's position in the source file.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = std::iter::once(0)
            .chain(self.headers.iter().skip(1).map(|h| h.chars().count()))
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(&format_line(self.headers.iter().map(String::as_str), &widths));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&format_line(rule.iter().map(String::as_str), &widths));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_line(row.iter().map(String::as_str), &widths));
            out.push('\n');
        }
        out
    }
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_owned()
}

/// Rows `offset..offset + size` of `records`; partial or empty past the end.
///
/// # Errors
///
/// Returns an error if a column of the underlying frame cannot be read as text.
pub fn page(records: &RecordSet, offset: usize, size: usize) -> Result<RawPage> {
    let frame = records.frame();
    let mut headers = vec![String::new()];
    headers.extend(frame.get_columns().iter().map(|c| c.name().to_string()));

    if offset >= records.len() || size == 0 {
        return Ok(RawPage {
            headers,
            rows: Vec::new(),
        });
    }

    let start = i64::try_from(offset).unwrap_or(i64::MAX);
    let window = frame.slice(start, size);
    let columns = window
        .get_columns()
        .iter()
        .map(cell_text)
        .collect::<Result<Vec<_>>>()?;

    let rows = records
        .trips()
        .iter()
        .skip(offset)
        .take(size)
        .enumerate()
        .map(|(i, trip)| {
            std::iter::once(trip.row.to_string())
                .chain(columns.iter().map(|column| {
                    column
                        .get(i)
                        .cloned()
                        .flatten()
                        .unwrap_or_default()
                }))
                .collect()
        })
        .collect();

    Ok(RawPage { headers, rows })
}

/// Walks a record set one page at a time.
#[derive(Debug, Clone)]
pub struct Browser {
    offset: usize,
    page_size: usize,
}

impl Browser {
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the next page and advances the offset by the page size.
    ///
    /// # Errors
    ///
    /// See [`page`].
    pub fn next_page(&mut self, records: &RecordSet) -> Result<RawPage> {
        let page = page(records, self.offset, self.page_size)?;
        self.offset = self.offset.saturating_add(self.page_size);
        Ok(page)
    }
}
