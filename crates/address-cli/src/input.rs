//! Input source selection.

use std::path::{Path, PathBuf};

use address_ingest::is_csv_path;
use anyhow::{Result, bail};

/// Where address rows are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Picks the input source from the positional argument and stdin state.
///
/// An explicit filename wins over piped stdin. Filenames must end in `.csv`.
pub fn select_input(filename: Option<&Path>, stdin_piped: bool) -> Result<InputSource> {
    match filename {
        Some(path) if is_csv_path(path) => Ok(InputSource::File(path.to_path_buf())),
        Some(path) => bail!(
            "Invalid filename `{}`. Use --help for usage.",
            path.display()
        ),
        None if stdin_piped => Ok(InputSource::Stdin),
        None => bail!("No valid input provided. Use --help for usage."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_filename_selects_file() {
        let source = select_input(Some(Path::new("data/addresses.csv")), true).unwrap();
        assert_eq!(source, InputSource::File(PathBuf::from("data/addresses.csv")));
    }

    #[test]
    fn piped_stdin_without_filename() {
        assert_eq!(select_input(None, true).unwrap(), InputSource::Stdin);
    }

    #[test]
    fn non_csv_filename_is_rejected() {
        let err = select_input(Some(Path::new("addresses.txt")), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid filename `addresses.txt`. Use --help for usage."
        );
    }

    #[test]
    fn no_input_is_rejected() {
        let err = select_input(None, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No valid input provided. Use --help for usage."
        );
    }
}
