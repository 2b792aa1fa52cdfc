//! Printf-style interpolation of console arguments.
//!
//! Template mode applies when the first argument is a string. Tokens are
//! `%s`, `%d`, `%j` and `%%`. Every other `%` sequence is copied through.

use crate::console::stringify::{stringify, try_stringify};
use crate::console::value::{format_number, ScriptValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Str,
    Num,
    Json,
    Percent,
}

impl Token {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            's' => Some(Token::Str),
            'd' => Some(Token::Num),
            'j' => Some(Token::Json),
            '%' => Some(Token::Percent),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Token::Str => "%s",
            Token::Num => "%d",
            Token::Json => "%j",
            Token::Percent => "%%",
        }
    }
}

/// Format a full argument list into one line of log text.
pub fn format(args: &[ScriptValue]) -> String {
    let template = match args.first() {
        Some(ScriptValue::String(s)) => s,
        _ => {
            return args.iter().map(stringify).collect::<Vec<_>>().join(" ");
        }
    };

    let mut next = 1;
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let Some(token) = chars.peek().copied().and_then(Token::from_char) else {
            out.push('%');
            continue;
        };
        chars.next();

        if token == Token::Percent {
            out.push('%');
            continue;
        }

        // Out of arguments: the token stays as written.
        let Some(arg) = args.get(next) else {
            out.push_str(token.as_str());
            continue;
        };
        next += 1;

        match token {
            Token::Str => out.push_str(&arg.to_js_string()),
            Token::Num => out.push_str(&format_number(arg.to_number())),
            Token::Json => match try_stringify(arg) {
                Ok(text) => out.push_str(&text),
                Err(_) => out.push_str("[Circular]"),
            },
            Token::Percent => {}
        }
    }

    for arg in args.iter().skip(next) {
        out.push(' ');
        if arg.is_object_like() {
            out.push_str(&stringify(arg));
        } else {
            out.push_str(&arg.to_js_string());
        }
    }

    out
}
