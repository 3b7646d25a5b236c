//! Splitting text into tokens and joining them back.
//!
//! The engine treats tokenization as a collaborator: anything implementing
//! [`Tokenizer`] can be plugged into a [`Perturber`](crate::Perturber).
//! [`SimpleTokenizer`] covers plain English sentences; pre-tokenized input
//! can go through [`WhitespaceTokenizer`].

/// Splits text into ordered word/punctuation tokens and reassembles them.
pub trait Tokenizer {
    /// Split `text` into tokens. Order defines word positions.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Join tokens back into text with natural spacing.
    fn detokenize(&self, tokens: &[String]) -> String;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }

    fn detokenize(&self, tokens: &[String]) -> String {
        (**self).detokenize(tokens)
    }
}

/// Whitespace splitting with punctuation peeled off word edges.
///
/// `"Hello, world!"` becomes `["Hello", ",", "world", "!"]`. Punctuation
/// inside a word (`don't`, `e-mail`) stays in place, and runs of dots are
/// kept together as one token (`...`). Detokenizing puts no space before
/// closing punctuation and none after opening brackets or currency and tag
/// signs (`$`, `#`, `@`). Straight quotes alternate between opening and
/// closing, and a lone `'` after a plural attaches as a possessive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Create a tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let chars: Vec<char> = chunk.chars().collect();
            let start = chars.iter().take_while(|c| c.is_ascii_punctuation()).count();
            if start == chars.len() {
                push_punctuation(&chars, &mut tokens);
                continue;
            }
            let trailing = chars.iter().rev().take_while(|c| c.is_ascii_punctuation()).count();
            let end = chars.len() - trailing;

            push_punctuation(&chars[..start], &mut tokens);
            tokens.push(chars[start..end].iter().collect());
            push_punctuation(&chars[end..], &mut tokens);
        }

        tokens
    }

    fn detokenize(&self, tokens: &[String]) -> String {
        let mut text = String::new();
        let mut glue_next = true;
        let mut double_open = false;
        let mut single_open = false;

        for (i, token) in tokens.iter().enumerate() {
            let (left, right) = match token.as_str() {
                "\"" => {
                    double_open = !double_open;
                    (!double_open, double_open)
                }
                "'" => {
                    let opens = !single_open && opens_single_quote(tokens, i);
                    single_open = opens;
                    (!opens, opens)
                }
                other => (attaches_left(other), attaches_right(other)),
            };

            if !glue_next && !left {
                text.push(' ');
            }
            text.push_str(token);
            glue_next = right;
        }

        text
    }
}

/// Splits on whitespace and joins with single spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn detokenize(&self, tokens: &[String]) -> String {
        tokens.join(" ")
    }
}

// Each punctuation character is its own token, except runs of dots.
fn push_punctuation(chars: &[char], tokens: &mut Vec<String>) {
    let mut i = 0;
    while i < chars.len() {
        let run = if chars[i] == '.' {
            chars[i..].iter().take_while(|&&c| c == '.').count()
        } else {
            1
        };
        tokens.push(chars[i..i + run].iter().collect());
        i += run;
    }
}

fn attaches_left(token: &str) -> bool {
    const CLOSING: &[&str] = &[".", ",", ";", ":", "!", "?", ")", "]", "}", "%", "..."];
    CLOSING.contains(&token)
        || token == "n't"
        || (token.starts_with('\'') && token.chars().nth(1).is_some_and(char::is_alphabetic))
}

fn attaches_right(token: &str) -> bool {
    matches!(token, "(" | "[" | "{" | "$" | "#" | "@")
}

// A lone `'` opens a quote only when a closing one follows and it does not
// trail a plural (`students'`).
fn opens_single_quote(tokens: &[String], i: usize) -> bool {
    let closed_later = tokens[i + 1..].iter().any(|t| t == "'");
    let after_plural = i > 0 && tokens[i - 1].ends_with(['s', 'S']);
    closed_later && !after_plural
}
