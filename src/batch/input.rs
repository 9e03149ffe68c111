//! Wallet list input.

use std::path::Path;

use crate::error::InputReadError;

/// Read a newline-delimited wallet list.
///
/// Lines are returned as-is apart from a trailing `\r`; validation happens
/// later so bad lines can be reported individually. Invalid UTF-8 is
/// replaced rather than rejected, so it only spoils its own line.
pub async fn read_wallet_list(path: &Path) -> Result<Vec<String>, InputReadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| InputReadError {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_split_strips_crlf() {
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[tokio::test]
    async fn test_invalid_utf8_only_spoils_its_line() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"0xabc\n\xff\xfe-garbage\nlast").unwrap();

        let lines = read_wallet_list(file.path()).await.unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0xabc");
        assert_eq!(lines[1], "\u{FFFD}\u{FFFD}-garbage");
        assert_eq!(lines[2], "last");
    }

    #[tokio::test]
    async fn test_missing_file_is_input_error() {
        let err = read_wallet_list(Path::new("/no/such/wallets.txt")).await.unwrap_err();
        assert_eq!(err.path, Path::new("/no/such/wallets.txt"));
        assert!(err.to_string().starts_with("Error reading file /no/such/wallets.txt"));
    }
}
