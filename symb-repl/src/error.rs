/// Utility enum to package errors that can occur while evaluating a line.
#[derive(Debug)]
pub enum Error {
    /// Errors found while validating the expression. Spans point into `source`.
    Parse {
        source: String,
        errors: Vec<symb_error::Error>,
    },

    /// The expression could not be differentiated. Spans point into `printed`, the printed form
    /// of the parsed expression.
    Derivative {
        printed: String,
        error: symb_error::Error,
    },

    /// A command was missing its arguments. Holds the expected usage.
    Usage(&'static str),

    /// A word starting with `:` that is not a command.
    UnknownCommand(String),
}

impl Error {
    /// Report the errors in this [`Error`] to stderr.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Parse { source, errors } => errors.iter()
                .for_each(|err| err.report_to_stderr("input", source)),
            Self::Derivative { printed, error } => error.report_to_stderr("expression", printed),
            Self::Usage(usage) => eprintln!("usage: {}", usage),
            Self::UnknownCommand(word) => {
                eprintln!("unknown command `{}`; try `:d`, `:steps`, or `:demo`", word);
            },
        }
    }
}
