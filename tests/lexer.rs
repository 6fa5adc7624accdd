use pretty_assertions::assert_eq;
use sprout::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, render, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn declaration_tokens() {
    let tokens = tokenize("let x = 5;").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Let, "let"),
                    Token::new(TokenKind::Identifier, "x"),
                    Token::new(TokenKind::Assign, "="),
                    Token::new(TokenKind::Number, "5"),
                    Token::new(TokenKind::Semicolon, ";")]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::{Elif, Else, False, Function, Identifier, If, Let, Return, True};

    assert_eq!(kinds("let function return if else elif true false"),
               vec![Let, Function, Return, If, Else, Elif, True, False]);
    assert_eq!(kinds("letter iffy returned _tmp x1"),
               vec![Identifier, Identifier, Identifier, Identifier, Identifier]);
}

#[test]
fn two_character_operators_win() {
    use TokenKind::{
        Assign, Bang, BangEqual, DoubleAmpersand, DoublePipe, EqualEqual, Greater, GreaterEqual,
        Less, LessEqual,
    };

    assert_eq!(kinds("<= >= == != || && < > = !"),
               vec![LessEqual,
                    GreaterEqual,
                    EqualEqual,
                    BangEqual,
                    DoublePipe,
                    DoubleAmpersand,
                    Less,
                    Greater,
                    Assign,
                    Bang]);
    assert_eq!(kinds("a<=b"), vec![TokenKind::Identifier, LessEqual, TokenKind::Identifier]);
}

#[test]
fn delimiters() {
    use TokenKind::{Comma, LBrace, LBracket, LParen, RBrace, RBracket, RParen, Semicolon};

    assert_eq!(kinds("( ) { } [ ] , ;"),
               vec![LParen, RParen, LBrace, RBrace, LBracket, RBracket, Comma, Semicolon]);
}

#[test]
fn number_lexemes_are_kept_verbatim() {
    let tokens = tokenize("42 3.14 7.").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Number, "42"),
                    Token::new(TokenKind::Number, "3.14"),
                    Token::new(TokenKind::Number, "7.")]);
}

#[test]
fn strings_lose_their_quotes() {
    let tokens = tokenize(r#""double" 'single' "it's" '"quoted"'"#).unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::String, "double"),
                    Token::new(TokenKind::String, "single"),
                    Token::new(TokenKind::String, "it's"),
                    Token::new(TokenKind::String, "\"quoted\"")]);
}

#[test]
fn unknown_characters_become_other_tokens() {
    let tokens = tokenize("a @ b").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Identifier, "a"),
                    Token::new(TokenKind::Other, "@"),
                    Token::new(TokenKind::Identifier, "b")]);
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(tokenize("let s = 'oops;"),
               Err(LexError::UnterminatedString { quote: '\'',
                                                  line:  1, }));
    assert!(tokenize("print(\"never closed)").is_err());
}

#[test]
fn lines_are_tracked() {
    let tokens = tokenize("let a = 1;\n\nlet b = 'two\nlines';\nb").unwrap();

    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 1, 3, 3, 3, 4, 4, 5]);
}

#[test]
fn whitespace_only_source_has_no_tokens() {
    assert_eq!(tokenize(" \t\r\n  \n").unwrap(), vec![]);
}

#[test]
fn render_round_trips() {
    let source = "function f(a, b) { return a + 'x' + \"y'z\"; } f(1.5, 2);";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokenize(&render(&tokens)).unwrap(), tokens);
}
