use std::{
    fs::read_to_string,
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::Parser as ClapParser;
use qur::{
    compiler::compiler::compile, display_error, init_subscriber, lexer::lexer::tokenize,
    parser::parser::parse,
};
use tracing::{info, Level};

/// Front end for the qur language: tokenizes and parses a source file.
#[derive(ClapParser, Debug)]
#[command(version, about)]
struct Args {
    /// The source file to read
    input: PathBuf,
    /// Print every token before parsing
    #[arg(long)]
    tokens: bool,
    /// Print the syntax tree after a successful parse
    #[arg(long)]
    ast: bool,
    /// Run code generation on the parsed program
    #[arg(long)]
    compile: bool,
    /// Where code generation writes its output
    #[arg(short, long, default_value = "out")]
    out: PathBuf,
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = init_subscriber(log_level(args.verbose)) {
        eprintln!("Failed to install logger: {}", error);
    }

    let source = match read_to_string(&args.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", args.input.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.to_string_lossy().into_owned());

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &args.input);
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("{}", token.describe());
        }
    }

    let parse_start = Instant::now();
    let (parser, result) = parse(tokens, Rc::new(file_name));

    info!("Parsed in {:?}", parse_start.elapsed());

    let program = match result {
        Ok(program) => program,
        Err(error) => {
            for diagnostic in parser.diagnostics() {
                display_error(diagnostic, &source, &args.input);
            }
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    if args.ast {
        print!("{}", program.print_tree());
    }

    if args.compile {
        let compile_start = Instant::now();
        match compile(&program, &args.out) {
            Ok(path) => info!("Compiled to {} in {:?}", path.display(), compile_start.elapsed()),
            Err(error) => {
                display_error(&error, &source, &args.input);
                return ExitCode::FAILURE;
            }
        }
    }

    info!("Total time: {:?}", start.elapsed());

    ExitCode::SUCCESS
}
