use clap::Parser;
use hiq::calculator::Engine;
use hiq::cli::args::Options;
use hiq::errors::Error;
use hiq::lexer::Operator;
use std::io::Write;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    let mut logger = env_logger::builder();
    logger.format_timestamp(None);
    if let Some(level) = options.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    let engine = Engine::with_config(options.config());

    if let Some(expression) = &options.expression {
        evaluate(&engine, expression, options.postfix)?;
        return Ok(());
    }

    if !options.quiet {
        println!();
        println!("-----------Welcome to HiQ Calculator-----------");
        println!("Signs");
        for op in Operator::ALL {
            println!("{} ({})", op, op.name());
        }
        println!();
        println!("Enter an empty line to exit.");
    }

    loop {
        let mut line = String::new();

        print!("Enter an expression: ");
        std::io::stdout().flush()?;

        // End-of-file quits just as an empty line does
        if std::io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match evaluate(&engine, &line, options.postfix) {
            Err(Error::EmptyInput) => break,
            Err(e) if e.is_invalid_expression() => {
                println!("Invalid Expression!!! ({e})");
            }
            Err(e) => {
                println!("Error: {e}");
            }
            Ok(_) => (),
        }
    }

    println!("Goodbye!");

    Ok(())
}

/// Evaluates an expression and prints the result, and the postfix form if
/// requested
fn evaluate(engine: &Engine, expression: &str, show_postfix: bool) -> hiq::errors::Result<()> {
    let postfix = engine.to_postfix(expression)?;
    if show_postfix {
        println!("Postfix: {postfix}");
    }

    let value = engine.evaluate_postfix(&postfix)?;
    println!("Result: {}", engine.format(&value));

    Ok(())
}
