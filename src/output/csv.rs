//! Delimited text serialization.
//!
//! Every field is wrapped in double quotes after replacing `\r\n` with `", "`.
//! Embedded quotes and commas are left as they are; consumers of the output
//! rely on exactly this layout.

use std::fmt::Display;

pub fn to_delimited_text<R, F>(rows: &[R]) -> String
where
    R: AsRef<[F]>,
    F: Display,
{
    let mut out = String::new();
    for row in rows {
        let line = row
            .as_ref()
            .iter()
            .map(|field| format!("\"{}\"", field.to_string().replace("\r\n", ", ")))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
