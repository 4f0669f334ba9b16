mod error;

use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, IsTerminal, Read};
use symb_compute::symbolic::Expression;

/// The expressions run by `:demo`.
const DEMOS: [&str; 2] = ["5*x + 2*x", "5*x * 5*x"];

/// Validates and parses the expression.
fn parse(source: &str) -> Result<Expression, Error> {
    Expression::try_parse(source).map_err(|errors| Error::Parse {
        source: source.to_string(),
        errors,
    })
}

/// Prints the expression as parsed and as simplified.
fn simplify(source: &str) -> Result<(), Error> {
    let expr = parse(source)?;
    println!("{} = {}", expr, expr.simplify());
    Ok(())
}

/// Prints the simplified derivative of the expression. The input is `<variable> <expression>`.
fn derivative(input: &str) -> Result<(), Error> {
    let Some((var, source)) = input.trim().split_once(char::is_whitespace) else {
        return Err(Error::Usage(":d <variable> <expression>"));
    };

    let expr = parse(source)?;
    let (derived, steps) = expr.derivative_with_steps(var).map_err(|error| Error::Derivative {
        printed: expr.to_string(),
        error,
    })?;

    for step in steps {
        println!("  {}", step);
    }
    println!("d/d{} {} = {}", var, expr, derived);
    Ok(())
}

/// Prints every rewrite performed while simplifying the expression, then the result.
fn steps(source: &str) -> Result<(), Error> {
    let expr = parse(source)?;
    let (simplified, steps) = expr.simplify_with_steps();
    for step in steps {
        println!("  {}", step);
    }
    println!("{} = {}", expr, simplified);
    Ok(())
}

/// Runs the demo expressions, without validation.
fn demo() {
    for source in DEMOS {
        let mut expr = Expression::new();
        expr.parse_expression(source);
        println!("{} = {}", source, expr.simplify());
    }
}

/// A line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    /// A blank line.
    Empty,

    /// `:demo`.
    Demo,

    /// `:d <variable> <expression>`, holding everything after `:d`.
    Derivative(&'a str),

    /// `:steps <expression>`, holding everything after `:steps`.
    Steps(&'a str),

    /// A word starting with `:` that is not a command.
    Unknown(&'a str),

    /// An expression to simplify.
    Simplify(&'a str),
}

impl<'a> Command<'a> {
    /// Reads the command from a line. Commands are matched on the whole first word.
    fn parse(input: &'a str) -> Self {
        let input = input.trim();
        let (word, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        match word {
            "" => Self::Empty,
            ":demo" => Self::Demo,
            ":d" => Self::Derivative(rest),
            ":steps" => Self::Steps(rest),
            _ if word.starts_with(':') => Self::Unknown(word),
            _ => Self::Simplify(input),
        }
    }
}

/// Evaluates a single line of input, printing the result or reporting the error.
fn read_eval(input: &str) {
    let res = match Command::parse(input) {
        Command::Empty => Ok(()),
        Command::Demo => {
            demo();
            Ok(())
        },
        Command::Derivative(rest) => derivative(rest),
        Command::Steps(rest) => steps(rest),
        Command::Unknown(word) => Err(Error::UnknownCommand(word.to_string())),
        Command::Simplify(source) => simplify(source),
    };

    if let Err(err) = res {
        err.report_to_stderr();
    }
}

fn main() {
    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // evaluate each line of the source file
        match std::fs::read_to_string(&filename) {
            Ok(input) => input.lines().for_each(read_eval),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                std::process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // evaluate each line from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("could not read stdin: {}", err);
            std::process::exit(1);
        }
        input.lines().for_each(read_eval);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            read_eval(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse(":demo"), Command::Demo);
        assert_eq!(Command::parse(":d x x^2"), Command::Derivative("x x^2"));
        assert_eq!(Command::parse(":d\tx x^2"), Command::Derivative("x x^2"));
        assert_eq!(Command::parse(":d"), Command::Derivative(""));
        assert_eq!(Command::parse(":steps x+x"), Command::Steps("x+x"));
        assert_eq!(Command::parse(" x + 2 "), Command::Simplify("x + 2"));
    }

    #[test]
    fn commands_match_the_whole_word() {
        assert_eq!(Command::parse(":dx x^2"), Command::Unknown(":dx"));
        assert_eq!(Command::parse(":dem"), Command::Unknown(":dem"));
        assert_eq!(Command::parse(":stepsx+x"), Command::Unknown(":stepsx+x"));
    }
}
