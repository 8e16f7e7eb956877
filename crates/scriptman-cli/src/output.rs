//! Terminal output helpers

use chrono::Local;
use scriptman_core::{ExError, ExErrorKind, ListedScript};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MISSED_PREFIX: &str = "(missed)";

/// Print entries as an aligned table: id, name, path, local registration time
///
/// Stale entries get their name prefixed with `(missed)`.
pub fn print_table(entries: &[ListedScript]) {
    for line in render_table(entries) {
        println!("{}", line);
    }
}

fn render_table(entries: &[ListedScript]) -> Vec<String> {
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|entry| {
            let record = &entry.record;
            let name = if entry.stale {
                format!("{}{}", MISSED_PREFIX, record.name)
            } else {
                record.name.clone()
            };
            [
                record.id.to_string(),
                name,
                record.path.clone(),
                record
                    .registered_at
                    .with_timezone(&Local)
                    .format(TIME_FORMAT)
                    .to_string(),
            ]
        })
        .collect();

    let header = [
        "Id".to_string(),
        "Name".to_string(),
        "Path".to_string(),
        "Time".to_string(),
    ];
    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            format!(
                "{:>w0$}  {:<w1$}  {:<w2$}  {}",
                row[0],
                row[1],
                row[2],
                row[3],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            )
        })
        .collect()
}

/// Report a failed command on stderr
///
/// Duplicates also show the conflicting record so the user can see what is
/// already registered.
pub fn print_error(err: &ExError) {
    if err.kind() == ExErrorKind::DuplicateScript {
        if let Some(existing) = err.record() {
            print_table(&[ListedScript::observe(existing.clone())]);
        }
    }
    eprintln!("Error: {}", err);
}
