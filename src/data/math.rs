// ============================================================
// Layer 4 — Math Pre-Filter
// ============================================================
// Cheap check that runs before the learned model: if the user
// typed an arithmetic expression, answer it directly.
//
// Two stages:
//   1. looks_like_math: an allow-list regex over the raw text.
//      Only digits, whitespace, `+ - * / % . ( ) , ^` and the
//      names below may appear.
//   2. evaluate: fasteval with a callback namespace that knows
//      nothing but the allow-listed bindings.
//
// Bindings:
//   functions  sqrt log sin cos tan pow deg rad abs round
//   constants  pi e
//
// fasteval has builtins of its own under several of these names
// (its `log` takes the base first, its `round` takes a modulus),
// so every allow-listed name is renamed into the `ns_` namespace
// before parsing. The callback is then the only thing an
// expression can reach.
//
// fasteval's parser caps both the expression length and the
// nesting depth, so pathological input such as 50 000 nested
// parentheses is a parse error rather than a stack overflow.

use std::f64::consts::{E, PI};
use std::sync::OnceLock;

use fasteval::{Compiler, Evaler, Parser, Slab};
use regex::Regex;

use crate::domain::error::{AssistantError, AssistantResult};

const NAMESPACE: &str = "ns_";

/// Largest |digits| accepted by round(x, digits); 10^308 is the
/// last finite power of ten
const MAX_ROUND_DIGITS: f64 = 308.0;

fn allow_list() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:[0-9\s+\-*/%.(),^]|sqrt|log|sin|cos|tan|pow|deg|rad|abs|round|pi|e)+$",
        )
        .expect("math allow-list pattern is valid")
    })
}

fn binding_names() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // `\b` keeps the exponent in `1e3` away from the constant `e`
        Regex::new(r"\b(?:sqrt|log|sin|cos|tan|pow|deg|rad|abs|round|pi|e)\b")
            .expect("binding name pattern is valid")
    })
}

/// True when `text` is made only of allow-listed characters and names
pub fn looks_like_math(text: &str) -> bool {
    let text = text.replace("**", "^");
    !text.trim().is_empty() && allow_list().is_match(&text)
}

/// Evaluate an expression and format the result.
/// Integral results print without a fractional part ("4"),
/// everything else as the shortest round-trip decimal ("2.5").
pub fn evaluate(expr: &str) -> AssistantResult<String> {
    let expr = expr.replace("**", "^");
    if !looks_like_math(&expr) {
        return Err(invalid("expression is outside the allowed grammar"));
    }
    let expr = binding_names().replace_all(&expr, format!("{NAMESPACE}$0").as_str());

    let mut bindings = |name: &str, args: Vec<f64>| -> Option<f64> {
        call(name.strip_prefix(NAMESPACE)?, &args)
    };

    let parser   = Parser::new();
    let mut slab = Slab::new();
    let parsed   = parser.parse(&expr, &mut slab.ps).map_err(fault)?;
    let compiled = parsed.from(&slab.ps).compile(&slab.ps, &mut slab.cs);
    let value    = compiled.eval(&slab, &mut bindings).map_err(fault)?;

    if !value.is_finite() {
        return Err(invalid("result is not a finite number"));
    }
    Ok(format_number(value))
}

/// Pre-filter and evaluator combined. A matching text whose
/// evaluation faults yields None so the caller can fall through.
pub fn evaluate_if_math(text: &str) -> Option<String> {
    if !looks_like_math(text) {
        return None;
    }
    match evaluate(text) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!("Math pre-filter matched but evaluation failed: {e}");
            None
        }
    }
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        // `+ 0.0` turns -0 into 0
        format!("{:.0}", v + 0.0)
    } else {
        format!("{v}")
    }
}

fn invalid(msg: impl Into<String>) -> AssistantError {
    AssistantError::InvalidExpression(msg.into())
}

fn fault(e: fasteval::Error) -> AssistantError {
    invalid(format!("{e:?}"))
}

/// The sandbox. Anything not matched here, including a domain
/// error such as sqrt(-1), is undefined for fasteval.
fn call(name: &str, args: &[f64]) -> Option<f64> {
    match (name, args) {
        ("pi", []) => Some(PI),
        ("e", []) => Some(E),
        ("sqrt", [x]) if *x >= 0.0 => Some(x.sqrt()),
        ("log", [x]) if *x > 0.0 => Some(x.ln()),
        ("log", [x, base]) if *x > 0.0 && *base > 0.0 && *base != 1.0 => Some(x.ln() / base.ln()),
        ("sin", [x]) => Some(x.sin()),
        ("cos", [x]) => Some(x.cos()),
        ("tan", [x]) => Some(x.tan()),
        ("deg", [x]) => Some(x.to_degrees()),
        ("rad", [x]) => Some(x.to_radians()),
        ("abs", [x]) => Some(x.abs()),
        ("pow", [x, y]) if !(*x == 0.0 && *y < 0.0) => Some(x.powf(*y)),
        ("round", [x]) => Some(x.round_ties_even()),
        ("round", [x, digits]) if digits.fract() == 0.0 => Some(round_to(*x, *digits)),
        _ => None,
    }
}

/// round(x, digits) with ties to even. Digits beyond the f64
/// range leave `x` as it is.
fn round_to(x: f64, digits: f64) -> f64 {
    let scale  = 10f64.powi(digits.clamp(-MAX_ROUND_DIGITS, MAX_ROUND_DIGITS) as i32);
    let scaled = x * scale;
    if !scaled.is_finite() || scale == 0.0 {
        return x;
    }
    scaled.round_ties_even() / scale
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate("2+2").unwrap(), "4");
        assert_eq!(evaluate("10/4").unwrap(), "2.5");
        assert_eq!(evaluate("2 * (3 + 4) - 1").unwrap(), "13");
        assert_eq!(evaluate("0.1 + 0.2").unwrap(), "0.30000000000000004");
    }

    #[test]
    fn test_functions_and_constants() {
        assert_eq!(evaluate("sqrt(16)").unwrap(), "4");
        assert_eq!(evaluate("pow(2, 10)").unwrap(), "1024");
        assert_eq!(evaluate("abs(-7)").unwrap(), "7");
        assert_eq!(evaluate("deg(0)").unwrap(), "0");
        assert_eq!(evaluate("log(1)").unwrap(), "0");
        assert_eq!(evaluate("round(2.5)").unwrap(), "2");
        assert_eq!(evaluate("round(3.14159, 2)").unwrap(), "3.14");
        assert_eq!(evaluate("cos(0)").unwrap(), "1");
    }

    #[test]
    fn test_inexact_results_are_close() {
        let close = |expr: &str, want: f64| {
            let got: f64 = evaluate(expr).unwrap().parse().unwrap();
            assert!((got - want).abs() < 1e-9, "{expr} = {got}, want {want}");
        };
        close("deg(pi)", 180.0);
        close("log(e)", 1.0);
        close("log(8, 2)", 3.0);
        close("sin(rad(30))", 0.5);
        close("2 * pi", 2.0 * PI);
    }

    #[test]
    fn test_power_forms() {
        assert_eq!(evaluate("2^10").unwrap(), "1024");
        assert_eq!(evaluate("2**3").unwrap(), "8");
        assert_eq!(evaluate("2^-1").unwrap(), "0.5");
    }

    #[test]
    fn test_modulo() {
        assert_eq!(evaluate("7 % 3").unwrap(), "1");
        assert_eq!(evaluate("7.5 % 2").unwrap(), "1.5");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(evaluate("1e3 + 1").unwrap(), "1001");
        assert_eq!(evaluate("2.5e-1").unwrap(), "0.25");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(evaluate("-0").unwrap(), "0");
    }

    #[test]
    fn test_round_with_extreme_digits_keeps_value() {
        assert_eq!(evaluate("round(3.14, 400)").unwrap(), "3.14");
        assert_eq!(evaluate("round(3.14, -400)").unwrap(), "0");
        assert_eq!(round_to(2.675, 1e10), 2.675);
    }

    #[test]
    fn test_faults_are_invalid_expression() {
        for bad in ["1/0", "5 % 0", "sqrt(-1)", "log(0)", "(1+2", "2 3", "sqrt", "pi(2)", "tan()", "", "e e"] {
            assert!(
                matches!(evaluate(bad), Err(AssistantError::InvalidExpression(_))),
                "expected InvalidExpression for {bad:?}"
            );
        }
    }

    #[test]
    fn test_names_outside_the_sandbox_are_rejected() {
        // fasteval builtins that are not allow-listed
        for bad in ["floor(2.5)", "max(1, 2)", "int(3.7)", "ns_sqrt(4)"] {
            assert!(
                matches!(evaluate(bad), Err(AssistantError::InvalidExpression(_))),
                "expected InvalidExpression for {bad:?}"
            );
        }
    }

    #[test]
    fn test_deep_nesting_is_rejected_not_overflowed() {
        let deep = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
        assert!(looks_like_math(&deep));
        assert_eq!(evaluate_if_math(&deep), None);

        let short_but_deep = format!("{}1{}", "(".repeat(1_000), ")".repeat(1_000));
        assert_eq!(evaluate_if_math(&short_but_deep), None);

        let minus_chain = format!("{}1", "-".repeat(50_000));
        assert_eq!(evaluate_if_math(&minus_chain), None);

        assert_eq!(evaluate_if_math("((((1 + 1))))"), Some("2".to_string()));
    }

    #[test]
    fn test_looks_like_math() {
        assert!(looks_like_math("2+2"));
        assert!(looks_like_math("sqrt(16) * pi"));
        assert!(looks_like_math("3 ** 2"));
        assert!(!looks_like_math("hello"));
        assert!(!looks_like_math("what is 2+2"));
        assert!(!looks_like_math("   "));
        assert!(!looks_like_math(""));
    }

    #[test]
    fn test_evaluate_if_math_falls_through_on_fault() {
        assert_eq!(evaluate_if_math("3*3"), Some("9".to_string()));
        assert_eq!(evaluate_if_math("1/0"), None);
        assert_eq!(evaluate_if_math("hello there"), None);
        // allow-listed letters that do not form a valid expression
        assert_eq!(evaluate_if_math("cos sin"), None);
    }
}
