use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Which Isp column(s) of each record the user wants plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IspChoice {
    First,
    Last,
    Both,
}

impl IspChoice {
    /// Throat (first-column) series requested.
    pub fn uses_first(self) -> bool {
        matches!(self, IspChoice::First | IspChoice::Both)
    }

    /// Nozzle (last-column) series requested.
    pub fn uses_last(self) -> bool {
        matches!(self, IspChoice::Last | IspChoice::Both)
    }

    /// Capitalized form for the chart title.
    pub fn capitalized(self) -> &'static str {
        match self {
            IspChoice::First => "First",
            IspChoice::Last => "Last",
            IspChoice::Both => "Both",
        }
    }
}

/// Validate a raw answer. Whitespace-tolerant and case-insensitive.
pub fn parse_choice(input: &str) -> Option<IspChoice> {
    match input.trim().to_lowercase().as_str() {
        "first" => Some(IspChoice::First),
        "last" => Some(IspChoice::Last),
        "both" => Some(IspChoice::Both),
        _ => None,
    }
}

/// Check that `path` can be opened and read.
///
/// Opens the file and reads one line, so the answer predicts whether the
/// full read later in the pipeline will succeed rather than just whether
/// the path exists.
pub fn probe_openable(path: &Path) -> io::Result<()> {
    let file = File::open(path)?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line)?;
    Ok(())
}

/// Ask for the Isp variant until the answer is valid.
pub fn prompt_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<IspChoice> {
    loop {
        write!(
            out,
            "Do you want to use the 'first', 'last', or 'both' Isp values? "
        )?;
        out.flush()?;
        match parse_choice(&read_answer(input)?) {
            Some(choice) => return Ok(choice),
            None => writeln!(out, "Invalid choice! Please enter 'first', 'last', or 'both'.")?,
        }
    }
}

/// Ask for a CEA output file path until one can be opened for reading.
pub fn prompt_filepath<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<PathBuf> {
    loop {
        write!(out, "What is the name of the CEA file? ")?;
        out.flush()?;
        let answer = read_answer(input)?;
        let path = PathBuf::from(answer.trim());
        match probe_openable(&path) {
            Ok(()) => return Ok(path),
            Err(err) => writeln!(out, "{}", probe_message(&err))?,
        }
    }
}

/// User-facing message per probe failure class. Every class re-prompts; the
/// classification changes nothing downstream.
fn probe_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => {
            "File not found: please try a different file/path!".to_string()
        }
        io::ErrorKind::PermissionDenied => {
            "File exists but cannot be read: please try a different file/path!".to_string()
        }
        _ => format!("Could not read that file ({err}): try something else!"),
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed while awaiting an answer",
        ));
    }
    Ok(line)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn choice_parsing() {
        assert_eq!(parse_choice("first"), Some(IspChoice::First));
        assert_eq!(parse_choice("  LAST \n"), Some(IspChoice::Last));
        assert_eq!(parse_choice("Both"), Some(IspChoice::Both));
        assert_eq!(parse_choice("firsts"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn choice_column_selection() {
        assert!(IspChoice::First.uses_first() && !IspChoice::First.uses_last());
        assert!(!IspChoice::Last.uses_first() && IspChoice::Last.uses_last());
        assert!(IspChoice::Both.uses_first() && IspChoice::Both.uses_last());
    }

    #[test]
    fn prompt_choice_reprompts_until_valid() {
        let mut input = Cursor::new(b"maybe\nFIRST\n".to_vec());
        let mut out = Vec::new();
        let choice = prompt_choice(&mut input, &mut out).unwrap();
        assert_eq!(choice, IspChoice::First);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Invalid choice!"));
    }

    #[test]
    fn prompt_choice_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let err = prompt_choice(&mut input, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn probe_missing_file() {
        let err = probe_openable(Path::new("no/such/file.out")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn probe_readable_file() {
        assert!(probe_openable(Path::new("tests/fixtures/cea.out")).is_ok());
    }

    #[test]
    fn prompt_filepath_retries_then_succeeds() {
        let mut input = Cursor::new(b"no/such/file.out\ntests/fixtures/cea.out\n".to_vec());
        let mut out = Vec::new();
        let path = prompt_filepath(&mut input, &mut out).unwrap();
        assert_eq!(path, PathBuf::from("tests/fixtures/cea.out"));
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("File not found"));
    }
}
