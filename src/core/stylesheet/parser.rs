//! Rule-tree parser for CSS-like source text.
//!
//! A single tolerant pass producing comments, declarations and nested rules
//! with 1-indexed positions and byte spans. The parser never fails: stray
//! braces and unterminated constructs end the enclosing item and the walk
//! continues, so one malformed file degrades instead of aborting a batch.

/// One node of a parsed stylesheet block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Comment(Comment),
    Declaration(Declaration),
    Rule(Rule),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Interior comment text, surrounding whitespace trimmed.
    pub text: String,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property or variable name, left of the first top-level colon.
    pub name: String,
    /// Right-hand side text, trimmed.
    pub value: String,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Selector or at-rule prelude preceding the block.
    pub prelude: String,
    pub items: Vec<Item>,
    /// Byte span covering prelude through closing brace, for verbatim
    /// slicing of keyframes rules.
    pub start: usize,
    pub end: usize,
}

pub fn parse(src: &str) -> Vec<Item> {
    let mut cursor = Cursor {
        src,
        pos: 0,
        line: 1,
        col: 1,
    };
    cursor.parse_items(false)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.src[self.pos..].starts_with(prefix)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn parse_items(&mut self, nested: bool) -> Vec<Item> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else { break };
            if c == '}' {
                self.bump();
                if nested {
                    break;
                }
                continue;
            }
            if self.starts_with("/*") {
                items.push(Item::Comment(self.block_comment()));
                continue;
            }
            if self.starts_with("//") {
                items.push(Item::Comment(self.line_comment()));
                continue;
            }
            if let Some(item) = self.statement() {
                items.push(item);
            }
        }
        items
    }

    fn block_comment(&mut self) -> Comment {
        let line = self.line;
        let col = self.col;
        self.bump();
        self.bump();
        let start = self.pos;
        let mut end = self.src.len();
        while self.peek().is_some() {
            if self.starts_with("*/") {
                end = self.pos;
                self.bump();
                self.bump();
                break;
            }
            self.bump();
        }
        Comment {
            text: self.src[start..end].trim().to_string(),
            line,
            col,
        }
    }

    fn line_comment(&mut self) -> Comment {
        let line = self.line;
        let col = self.col;
        self.bump();
        self.bump();
        let start = self.pos;
        while self.peek().is_some_and(|c| c != '\n') {
            self.bump();
        }
        Comment {
            text: self.src[start..self.pos].trim().to_string(),
            line,
            col,
        }
    }

    /// Read one statement: a rule when it opens a block, a declaration when
    /// it carries a top-level colon, otherwise ignored (e.g. `@import …;`).
    fn statement(&mut self) -> Option<Item> {
        let start = self.pos;
        let line = self.line;
        let col = self.col;
        let mut text = String::new();
        let mut colon: Option<usize> = None;
        let mut paren = 0usize;

        loop {
            let Some(c) = self.peek() else { break };
            match c {
                '{' if paren == 0 => {
                    self.bump();
                    let items = self.parse_items(true);
                    return Some(Item::Rule(Rule {
                        prelude: text.trim().to_string(),
                        items,
                        start,
                        end: self.pos,
                    }));
                }
                ';' if paren == 0 => {
                    self.bump();
                    break;
                }
                // Block end also terminates a trailing declaration; the
                // brace is left for the enclosing block.
                '}' if paren == 0 => break,
                '(' => {
                    paren += 1;
                    text.push('(');
                    self.bump();
                }
                ')' => {
                    paren = paren.saturating_sub(1);
                    text.push(')');
                    self.bump();
                }
                '"' | '\'' => self.string(c, &mut text),
                ':' if paren == 0 => {
                    if colon.is_none() {
                        colon = Some(text.len());
                    }
                    text.push(':');
                    self.bump();
                }
                '/' if self.starts_with("/*") => {
                    self.block_comment();
                }
                '/' if paren == 0 && self.starts_with("//") => {
                    self.line_comment();
                }
                _ => {
                    text.push(c);
                    self.bump();
                }
            }
        }

        let colon = colon?;
        let name = text[..colon].trim().to_string();
        let value = text[colon + 1..].trim().to_string();
        if name.is_empty() || value.is_empty() {
            return None;
        }
        Some(Item::Declaration(Declaration {
            name,
            value,
            line,
            col,
        }))
    }

    fn string(&mut self, quote: char, text: &mut String) {
        text.push(quote);
        self.bump();
        while let Some(c) = self.peek() {
            if c == '\\' {
                text.push(c);
                self.bump();
                if let Some(escaped) = self.peek() {
                    text.push(escaped);
                    self.bump();
                }
                continue;
            }
            text.push(c);
            self.bump();
            if c == quote {
                return;
            }
        }
    }
}
