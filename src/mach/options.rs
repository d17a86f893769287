use super::RndMode;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Most arguments the command line accepts.
pub const MAX_ARGS: usize = 4;

/// ## Interpreter settings

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Print each line number as execution reaches it.
    pub trace: bool,
    /// Pause before the process exits.
    pub wait: bool,
    pub rnd: RndMode,
    /// Program file name or URL.
    pub source: String,
}

impl Options {
    /// Flags are case-insensitive and may start with `-` or `/`. Any
    /// other argument names the source; the last one wins.
    pub fn from_args<I, S>(args: I) -> Result<Options>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        let mut count = 0;
        let mut source = None;
        for arg in args {
            let arg = arg.as_ref();
            count += 1;
            let flag = arg.to_ascii_uppercase().replacen('/', "-", 1);
            match flag.as_str() {
                "-TRON" => options.trace = true,
                "-WAIT" => options.wait = true,
                "-ZERO_TO_ONE" => options.rnd = RndMode::ZeroToOne,
                "-ZERO_TO_ARG" => options.rnd = RndMode::ZeroToArg,
                _ => source = Some(arg.to_string()),
            }
        }
        if count > MAX_ARGS {
            return Err(error!(SyntaxError; format!("AT MOST {} ARGUMENTS", MAX_ARGS)));
        }
        match source {
            Some(source) if !source.is_empty() => {
                options.source = source;
                Ok(options)
            }
            _ => Err(error!(BadFileName; "SOURCE FILE REQUIRED")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let options = Options::from_args(&["/tron", "prog.bas", "-Zero_To_Arg"]).unwrap();
        assert!(options.trace);
        assert!(!options.wait);
        assert_eq!(options.rnd, RndMode::ZeroToArg);
        assert_eq!(options.source, "prog.bas");
    }

    #[test]
    fn test_source_required() {
        assert_eq!(
            Options::from_args(&["-WAIT"]).unwrap_err().to_string(),
            "BAD FILE NAME; SOURCE FILE REQUIRED"
        );
        let none: &[&str] = &[];
        assert!(Options::from_args(none).is_err());
    }

    #[test]
    fn test_too_many_arguments() {
        let args = ["-TRON", "-WAIT", "-ZERO_TO_ONE", "-ZERO_TO_ARG", "A.BAS"];
        assert!(Options::from_args(&args).is_err());
    }
}
