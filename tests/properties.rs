//! Property-based tests for the lexer, parser and evaluator.

use proptest::prelude::*;
use sprout::{
    interpreter::{
        lexer::{TokenKind, render, tokenize},
        scope::Scope,
        value::core::Value,
    },
    run,
};

/// Generate a number lexeme as the lexer accepts it.
fn number_lexeme_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,9}(\\.[0-9]{0,6})?").expect("valid regex")
}

/// Generate the source text of a single token.
fn token_source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z_][a-z0-9_]{0,8}").expect("valid regex"),
        number_lexeme_strategy(),
        prop::string::string_regex("\"[a-z ']{0,8}\"").expect("valid regex"),
        prop::string::string_regex("'[a-z \"]{0,8}'").expect("valid regex"),
        prop::sample::select(vec!["+", "-", "*", "/", "!", "=", "<", ">", "<=", ">=", "==",
                                  "!=", "||", "&&", ",", ";", "(", ")", "{", "}", "[", "]"])
            .prop_map(str::to_string),
    ]
}

proptest! {
    #[test]
    fn number_lexeme_is_one_token(lexeme in number_lexeme_strategy()) {
        let tokens = tokenize(&lexeme).unwrap();

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &lexeme);
    }

    #[test]
    fn render_then_tokenize_is_identity(parts in prop::collection::vec(token_source_strategy(), 0..24)) {
        let tokens = tokenize(&parts.join(" ")).unwrap();

        prop_assert_eq!(tokenize(&render(&tokens)).unwrap(), tokens);
    }

    #[test]
    fn additive_chains_fold_left(first in 0u32..1000,
                                 rest in prop::collection::vec((any::<bool>(), 0u32..1000), 0..12)) {
        let mut source = format!("return {first}");
        let mut expected = f64::from(first);

        for (add, operand) in &rest {
            if *add {
                source.push_str(&format!(" + {operand}"));
                expected += f64::from(*operand);
            } else {
                source.push_str(&format!(" - {operand}"));
                expected -= f64::from(*operand);
            }
        }
        source.push(';');

        let result = run(&source, &Scope::new()).unwrap();
        prop_assert_eq!(result, Some(Value::Number(expected)));
    }

    #[test]
    fn multiplicative_chains_fold_left(first in 1u32..100,
                                       rest in prop::collection::vec((any::<bool>(), 1u32..100), 0..8)) {
        let mut source = format!("return {first}");
        let mut expected = f64::from(first);

        for (mul, operand) in &rest {
            if *mul {
                source.push_str(&format!(" * {operand}"));
                expected *= f64::from(*operand);
            } else {
                source.push_str(&format!(" / {operand}"));
                expected /= f64::from(*operand);
            }
        }
        source.push(';');

        let result = run(&source, &Scope::new()).unwrap();
        prop_assert_eq!(result, Some(Value::Number(expected)));
    }

    #[test]
    fn concatenation_preserves_text(left in "[a-z0-9 ]{0,12}", right in "[a-z0-9 ]{0,12}") {
        let source = format!("return '{left}' + '{right}';");

        let result = run(&source, &Scope::new()).unwrap();
        prop_assert_eq!(result, Some(Value::String(format!("{left}{right}"))));
    }
}
