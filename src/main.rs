mod cli;

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process,
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use frontend::{
    errors::errors::Error,
    format_error,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Command::Parse { file, format } => {
            let (source, tokens) = read_tokens(&file);

            let parse_start = Instant::now();
            let program = parse(tokens, Rc::new(file_name(&file)));
            log::info!("Parsed in {:?}", parse_start.elapsed());

            match program {
                Ok(program) => match format {
                    OutputFormat::Tree => println!("{}", program),
                    OutputFormat::Debug => println!("{}", pretty_print(format!("{:?}", program))),
                },
                Err(error) => fail(&error, &source, &file),
            }
        }
        Command::Tokens { file } => {
            let (_, tokens) = read_tokens(&file);

            for token in tokens {
                println!("{}", token);
            }
        }
    }
}

fn file_name(file: &Path) -> String {
    file.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("shell"))
}

fn read_tokens(file: &PathBuf) -> (String, Vec<Token>) {
    let source = match read_to_string(file) {
        Ok(source) => source,
        Err(why) => {
            eprintln!("Failed to read {}: {}", file.display(), why);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(file_name(file)));
    log::info!("Tokenized in {:?}", start.elapsed());

    match tokens {
        Ok(tokens) => (source, tokens),
        Err(error) => fail(&error, &source, file),
    }
}

fn fail(error: &Error, source: &str, file: &Path) -> ! {
    eprint!("{}", format_error(error, source, &file.to_string_lossy()));
    process::exit(1);
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;
    let mut in_string = false;
    let mut escaped = false;

    for c in string.chars() {
        if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result
}
