use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    flags.length = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.number = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passpanel")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_yields_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help);
        assert!(!flags.clipboard);
        assert_eq!(flags.length, None);
        assert_eq!(flags.number, None);
    }

    #[test]
    fn length_and_number_values() {
        let flags = parse(&args(&["-l", "16", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn class_exclusions() {
        let flags = parse(&args(&["--no-upper", "--no-digits", "--no-symbols"])).unwrap();
        assert!(flags.no_upper);
        assert!(flags.no_digits);
        assert!(flags.no_symbols);
    }

    #[test]
    fn long_and_short_forms_agree() {
        let short = parse(&args(&["-b", "-q"])).unwrap();
        let long = parse(&args(&["--board", "--quiet"])).unwrap();
        assert_eq!(short.clipboard, long.clipboard);
        assert_eq!(short.quiet, long.quiet);
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let err = parse(&args(&["--bogus"])).unwrap_err();
        assert!(matches!(err, ParseError::UnknownArg(ref s) if s == "--bogus"));
    }

    #[test]
    fn malformed_number_is_an_error() {
        let err = parse(&args(&["-l", "twelve"])).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber(ref s) if s == "twelve"));
    }
}
