use std::{
    cell::{Ref, RefCell},
    env,
    fs::read_to_string,
    io, process,
    rc::Rc,
    time::Instant,
};

use kaleidoscope::{
    display_error,
    lexer::{lexer::Lexer, source::ReaderChars},
    parser::{
        lookups::{parse_precedence_override, PrecedenceTable},
        parser::{parse_items, Parser},
    },
};

const USAGE: &str = "usage: kaleidoscope [--prec OP=N]... [<file> | -]";

const STDIN_NAME: &str = "<stdin>";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (precedence, file_path) = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let start = Instant::now();

    let failed = match file_path {
        Some(file_path) => {
            let source = match read_to_string(&file_path) {
                Ok(source) => source,
                Err(error) => {
                    eprintln!("Failed to read {}: {}", file_path, error);
                    process::exit(1);
                }
            };

            let lexer = Lexer::new(&source, Some(file_path.clone()));
            let mut parser = Parser::new(lexer, precedence);
            report_items(&mut parser, &file_path, || source.as_str())
        }
        None => {
            // Keeps what has been read so far, for rendering diagnostics.
            let seen = Rc::new(RefCell::new(String::new()));
            let recorder = Rc::clone(&seen);

            let stdin = io::stdin();
            let chars = ReaderChars::new(stdin.lock()).inspect(move |c| recorder.borrow_mut().push(*c));
            let lexer = Lexer::from_chars(chars, Some(STDIN_NAME.to_string()));
            let mut parser = Parser::new(lexer, precedence);
            report_items(&mut parser, STDIN_NAME, || Ref::map(seen.borrow(), String::as_str))
        }
    };

    println!("Parsed in {:?}", start.elapsed());

    if failed {
        process::exit(1);
    }
}

/// Prints every item or error as soon as it is parsed. Returns whether
/// anything failed to parse.
fn report_items<S>(parser: &mut Parser, file: &str, source: impl Fn() -> S) -> bool
where
    S: std::ops::Deref<Target = str>,
{
    let mut failed = false;

    parse_items(parser, |result| match result {
        Ok(item) => {
            eprintln!("Parsed {}.", item.describe());
            println!("{}", item);
        }
        Err(error) => {
            failed = true;
            display_error(&error, &source(), file);
        }
    });

    failed
}

/// Reads `--prec OP=N` overrides on top of the default table, then the input
/// path. No path, or `-`, means standard input.
fn parse_args(args: &[String]) -> Result<(PrecedenceTable, Option<String>), String> {
    let mut precedence = PrecedenceTable::default();
    let mut file = None;
    let mut seen_input = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--prec" {
            let entry = iter
                .next()
                .ok_or_else(|| String::from("--prec expects an OP=N argument"))?;
            let (op, value) = parse_precedence_override(entry).map_err(|error| error.to_string())?;
            precedence.insert(op, value);
        } else if seen_input {
            return Err(format!("unexpected argument {:?}", arg));
        } else {
            seen_input = true;
            if arg != "-" {
                file = Some(arg.clone());
            }
        }
    }

    Ok((precedence, file))
}
