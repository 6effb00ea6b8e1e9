mod common;

use common::{reference_eval, ExpressionGenerator, Stopped};
use hiq::calculator::{Config, Decimal, Engine, OverflowPolicy};
use hiq::errors::Error;

#[test]
fn test_engine() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();

    assert_eq!(engine.evaluate("3+4")?, Decimal::new("7")?);
    assert_eq!(engine.evaluate("(3+4)*5")?, Decimal::new("35")?);
    assert_eq!(engine.evaluate("3/4*8")?, Decimal::new("6")?);
    assert_eq!(engine.evaluate(" 1.25 * 4 ")?, Decimal::new("5")?);
    assert_eq!(engine.evaluate("2^3^2")?, Decimal::new("64")?);

    Ok(())
}

#[test]
fn test_postfix_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();

    let postfix = engine.to_postfix("3+4*2")?;
    assert_eq!(postfix.to_string(), "3 4 2 * +");
    assert_eq!(engine.evaluate_postfix(&postfix)?, Decimal::new("14")?);
    assert_eq!(
        engine.evaluate_postfix(&postfix.to_string().parse()?)?,
        Decimal::new("14")?
    );

    Ok(())
}

#[test]
fn test_outcomes() {
    let engine = Engine::new();

    assert_eq!(engine.evaluate("   "), Err(Error::EmptyInput));
    assert_eq!(engine.evaluate(""), Err(Error::EmptyInput));
    assert!(engine.evaluate("(1+2").unwrap_err().is_invalid_expression());
    assert!(engine.evaluate("1+a").unwrap_err().is_invalid_expression());
    assert_eq!(engine.evaluate("*5"), Err(Error::IncompleteExpression));
    assert_eq!(engine.evaluate("-5"), Ok(Decimal::from(-5)));
    assert_eq!(engine.evaluate("1/0"), Err(Error::DivideByZero));
}

#[test]
fn test_formatted_results() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();

    assert_eq!(engine.calculate("10/3")?, "3.333");
    assert_eq!(engine.calculate("2(3+4)")?, "14");
    assert_eq!(engine.calculate("5(3+4)")?, "35");
    assert_eq!(engine.calculate("(3+4)5")?, "35");
    assert_eq!(engine.calculate("1234567.891")?, "1,234,567.891");
    assert_eq!(engine.calculate("10^16")?, "1.00000000000000E16");

    let engine = Engine::with_config(Config {
        fraction_digits: 11,
        ..Config::default()
    });
    assert_eq!(engine.calculate("10/3")?, "3.33333333333");

    Ok(())
}

#[test]
fn test_power_overflow_policies() {
    let strict = Engine::with_config(Config {
        max_exponent: 10,
        ..Config::default()
    });
    assert_eq!(strict.evaluate("2^11"), Err(Error::ValueTooLarge));

    let legacy = Engine::with_config(Config {
        max_exponent: 10,
        overflow: OverflowPolicy::Legacy,
        ..Config::default()
    });
    assert_eq!(legacy.evaluate("2^11"), Ok(Decimal::from(2)));
}

#[test]
fn test_matches_standard_precedence() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let mut generator = ExpressionGenerator::new(0x5eed);
    let mut exact_divisions = 0;

    for _ in 0..1000 {
        let expression = generator.expression(4);

        match reference_eval(&expression) {
            Ok(want) => {
                let want = i64::try_from(want)?;
                assert_eq!(
                    engine.evaluate(&expression)?,
                    Decimal::from(want),
                    "expression {}",
                    expression
                );
                if expression.contains('/') {
                    exact_divisions += 1;
                }
            }
            Err(Stopped::DivideByZero) => {
                assert_eq!(
                    engine.evaluate(&expression),
                    Err(Error::DivideByZero),
                    "expression {}",
                    expression
                );
            }
            // A rounded quotient has no exact integer to compare against
            Err(Stopped::Inexact) => (),
        }
    }

    assert!(exact_divisions >= 50, "only {} exact divisions", exact_divisions);

    Ok(())
}

#[test]
fn test_division_precedence() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();

    for expression in ["8/4/2", "3*8/4", "2+6/3", "6/3*2", "(1+7)/2/2", "9-6/3-1"] {
        let want = reference_eval(expression).expect("exact expression");
        assert_eq!(
            engine.evaluate(expression)?,
            Decimal::from(i64::try_from(want)?),
            "expression {}",
            expression
        );
    }

    Ok(())
}
