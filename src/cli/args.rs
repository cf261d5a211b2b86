//! Literal flag matching for the command line

use core::str::FromStr;

/// Recognized command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Flag {
    /// `--version` or `-v`
    Version,
    /// `--help` or `-h`
    Help,
}

impl FromStr for Flag {
    type Err = String;

    /// Tokens are matched exactly: no prefixes, no case folding, no `=value`
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--version" | "-v" => Ok(Self::Version),
            "--help" | "-h" => Ok(Self::Help),
            _ => Err(format!("Unrecognized flag: {s}")),
        }
    }
}

/// What a single invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    /// Print the version line
    ShowVersion,
    /// Print the usage block
    ShowHelp,
    /// Call the core function and print its result
    Run,
}

impl Action {
    /// Pick the action for a full argument list (program name first)
    ///
    /// Only the first argument after the program name is inspected. Anything
    /// that is not a recognized flag, including a missing argument, runs the
    /// core function.
    #[must_use]
    #[inline]
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args.get(1).map(|arg| arg.as_ref().parse::<Flag>()) {
            Some(Ok(flag)) => Self::from(flag),
            Some(Err(_)) | None => Self::Run,
        }
    }
}

impl From<Flag> for Action {
    #[inline]
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::Version => Self::ShowVersion,
            Flag::Help => Self::ShowHelp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        assert_eq!("--version".parse::<Flag>(), Ok(Flag::Version));
        assert_eq!("-v".parse::<Flag>(), Ok(Flag::Version));
        assert_eq!("--help".parse::<Flag>(), Ok(Flag::Help));
        assert_eq!("-h".parse::<Flag>(), Ok(Flag::Help));
    }

    #[test]
    fn test_parse_is_literal() {
        for token in ["--Version", "-V", "--ver", "--help=yes", "-vh", " -h", ""] {
            assert!(token.parse::<Flag>().is_err(), "{token:?} should not parse");
        }
    }

    #[test]
    fn test_action_without_arguments() {
        assert_eq!(Action::from_args(&["tool"]), Action::Run);
        assert_eq!(Action::from_args::<&str>(&[]), Action::Run);
    }

    #[test]
    fn test_action_from_first_argument() {
        assert_eq!(Action::from_args(&["tool", "-v"]), Action::ShowVersion);
        assert_eq!(Action::from_args(&["tool", "--help"]), Action::ShowHelp);
        assert_eq!(Action::from_args(&["tool", "--bogus"]), Action::Run);
    }

    #[test]
    fn test_action_ignores_later_arguments() {
        assert_eq!(Action::from_args(&["tool", "extra", "--version"]), Action::Run);
        assert_eq!(Action::from_args(&["tool", "-h", "--version"]), Action::ShowHelp);
    }

    #[test]
    fn test_action_ignores_program_name() {
        assert_eq!(Action::from_args(&["--version"]), Action::Run);
    }
}
