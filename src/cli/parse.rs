use clap::error::{ContextKind, ErrorKind};
use tagcast_core::error::TagcastError;
use tagcast_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Whether raw argv asks for JSON output.
///
/// Consulted only when clap itself fails, so `Cli.format` is unavailable.
pub fn json_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    args.iter().enumerate().any(|(i, arg)| match arg.as_ref() {
        "--format=json" => true,
        "--format" => args.get(i + 1).is_some_and(|v| v.as_ref() == "json"),
        _ => false,
    })
}

/// Map a clap failure onto a tagcast error; `None` for help and version output
pub fn parse_failure(err: &clap::Error) -> Option<TagcastError> {
    let error = match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        ErrorKind::ArgumentConflict if conflicts_on_format(err) => TagcastError::DuplicateFormat,
        ErrorKind::ArgumentConflict
        | ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => TagcastError::InvalidArgument(err.to_string()),
        _ => TagcastError::Other(err.to_string()),
    };
    Some(error)
}

fn conflicts_on_format(err: &clap::Error) -> bool {
    err.get(ContextKind::InvalidArg)
        .is_some_and(|arg| arg.to_string().starts_with("--format"))
}
