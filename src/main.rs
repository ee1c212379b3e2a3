use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use exprkit::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::Evaluator,
        lexer::{Token, tokenize},
        parser::parse,
        session::Session,
    },
};
use log::LevelFilter;

/// exprkit evaluates mathematical expressions with variables, functions and
/// boolean logic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates each non-empty line of a file in one session.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<String>,

    /// Predefines a numeric variable, e.g. `-D x=3`. Repeatable.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_define)]
    defines: Vec<(String, f64)>,

    /// Starts without the constants `pi`, `e` and `tau`.
    #[arg(long)]
    no_constants: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed expression instead of evaluating.
    #[arg(long)]
    ast: bool,

    /// Raises log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Starts a REPL when omitted.
    expression: Option<String>,
}

/// What to do with each line.
#[derive(Debug, Clone, Copy)]
enum Mode {
    Tokens,
    Ast,
    Evaluate,
}

/// Parses a `-D NAME=VALUE` argument.
///
/// `NAME` has to lex as a single identifier and `VALUE` has to be a finite
/// number, so every definition can be read back by an expression.
fn parse_define(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;
    let name = name.trim();
    if !matches!(tokenize(name).as_deref(), Ok([(Token::Identifier(_), _)])) {
        return Err(format!("'{name}' is not a valid variable name"));
    }

    let value: f64 = value.trim()
                          .parse()
                          .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    if !value.is_finite() {
        return Err(format!("value for '{name}' must be a finite number"));
    }
    Ok((name.to_string(), value))
}

/// Handles one line and prints its output.
///
/// # Returns
/// `false` if the line failed; the error has already been printed.
fn run_line(session: &mut Session, mode: Mode, line: &str) -> bool {
    let result: Result<String, Error> = match mode {
        Mode::Tokens => tokenize(line).map(|tokens| {
                                          tokens.iter()
                                                .map(|(token, position)| format!("{position}:{token}"))
                                                .collect::<Vec<_>>()
                                                .join(" ")
                                      })
                                      .map_err(Into::into),
        Mode::Ast => tokenize(line).and_then(|tokens| parse(&tokens))
                                   .map(|expr| expr.to_string())
                                   .map_err(Into::into),
        Mode::Evaluate => session.run(line).map(|value| value.to_string()),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

/// Lines for the REPL's `vars` command: one `name = value` per binding, by
/// name.
fn variable_listing(session: &Session) -> Vec<String> {
    let mut bindings: Vec<_> = session.environment().iter().collect();
    bindings.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    bindings.into_iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect()
}

/// The REPL's `funcs` command.
fn function_listing(session: &Session) -> String {
    session.evaluator().functions().names().join(" ")
}

/// Reads lines until EOF or `quit`.
///
/// Besides expressions, `vars` lists the current bindings and `funcs` lists
/// the callable functions.
fn repl(session: &mut Session, mode: Mode) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut ok = true;
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input {
            "quit" => break,
            "vars" => variable_listing(session).iter().for_each(|line| println!("{line}")),
            "funcs" => println!("{}", function_listing(session)),
            "" => {},
            _ => ok &= run_line(session, mode, input),
        }
    }

    Ok(ok)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let environment = if args.no_constants {
        Environment::new()
    } else {
        Environment::with_constants()
    };
    let mut session = Session::with_environment(Evaluator::new(), environment);
    session.environment_mut().extend(args.defines);

    let mode = if args.tokens {
        Mode::Tokens
    } else if args.ast {
        Mode::Ast
    } else {
        Mode::Evaluate
    };

    let ok = if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .fold(true, |ok, line| run_line(&mut session, mode, line) && ok)
    } else if let Some(expression) = &args.expression {
        run_line(&mut session, mode, expression)
    } else {
        repl(&mut session, mode).unwrap_or_else(|e| {
                                    eprintln!("{e}");
                                    false
                                })
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
