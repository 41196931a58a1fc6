//! Tokenizer for the mixed text/markup content of `<proto>` and `<param>` declarations.

/// Prefix carried by every type keyword of the registry (`GLenum`, `GLchar`, ...).
pub const TYPE_PREFIX: &str = "GL";

/// One piece of a declaration after the `<name>` leaf has been taken out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclPart<'a> {
    /// Free text between elements, e.g. `"const "` or `" *const*"`.
    Text(&'a str),
    /// The text of a typed leaf such as `<ptype>GLchar</ptype>`.
    Leaf(&'a str),
}

/// One token of a declaration, with `*` and `const` kept apart from type words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Const,
    Star,
    Word {
        /// The word with the type prefix stripped, used for classification.
        keyword: String,
        /// The word as written in the document.
        raw: String,
    },
}

impl Token {
    fn word(raw: &str, from_leaf: bool) -> Self {
        let keyword = if from_leaf {
            raw.strip_prefix(TYPE_PREFIX).unwrap_or(raw)
        } else {
            raw
        };
        Token::Word {
            keyword: keyword.to_string(),
            raw: raw.to_string(),
        }
    }
}

/// Splits the normalized part list into tokens.
///
/// Whitespace separates tokens and `*` is always a token of its own, so `"*const*"`, `" * "`
/// and `"*"` followed by `"const"` all produce the same stream.
pub fn tokenize(parts: &[DeclPart]) -> Vec<Token> {
    let mut tokens = Vec::new();
    for part in parts {
        let (text, from_leaf) = match *part {
            DeclPart::Text(text) => (text, false),
            DeclPart::Leaf(text) => (text.trim(), true),
        };
        if from_leaf && !text.is_empty() {
            tokens.push(Token::word(text, true));
            continue;
        }

        for chunk in text.split_whitespace() {
            let mut rest = chunk;
            while !rest.is_empty() {
                if let Some(after) = rest.strip_prefix('*') {
                    tokens.push(Token::Star);
                    rest = after;
                    continue;
                }
                let end = rest.find('*').unwrap_or(rest.len());
                let word = &rest[..end];
                if word == "const" {
                    tokens.push(Token::Const);
                } else {
                    tokens.push(Token::word(word, false));
                }
                rest = &rest[end..];
            }
        }
    }
    tokens
}

/// Renders a token stream back into declaration text, for error messages.
pub fn render(tokens: &[Token]) -> String {
    let mut text = String::new();
    for token in tokens {
        match token {
            Token::Star => text.push('*'),
            Token::Const => {
                if !text.is_empty() && !text.ends_with('*') {
                    text.push(' ');
                }
                text.push_str("const");
            }
            Token::Word { raw, .. } => {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(raw);
            }
        }
    }
    text
}
