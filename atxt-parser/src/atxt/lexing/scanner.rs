//! Scanner state machine for the atxt format.
//!
//!     The scanner walks the source one character at a time through five
//!     lexical states. Indentation handling runs before state dispatch at
//!     the start of every physical line (blank lines and comment lines are
//!     consumed whole there and never reach the content states).
//!
//!     State transitions:
//!         CONTENT --@--> TYPE
//!         TYPE --space--> PARAMS       TYPE --:--> CONTENT (same-line)
//!         TYPE --[--> INLINE_CONTENT   TYPE --(--> INLINE_PARAMS
//!         INLINE_PARAMS --)--> CONTENT or INLINE_CONTENT
//!         INLINE_CONTENT --]--> CONTENT (at bracket depth zero)
//!
//!     An `@@` in content opens an unparsed region: `@` keeps no meaning
//!     until a line returns to the indentation level the region started on
//!     (or, when the region opened inside same-line content, until the end
//!     of that line).
//!
//!     Indentation is tracked as a stack of absolute column counts starting
//!     at `[0]`. Step sizes are arbitrary; a dedent must land exactly on a
//!     level already on the stack. Emitted `Indent`/`Dedent` tokens carry
//!     the column delta of each push/pop, and the scanner emits closing
//!     `Dedent`s at end of input so the stack always returns to `[0]`.

use super::error::SyntaxError;
use crate::atxt::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Content,
    Type,
    Params,
    InlineParams,
    InlineContent,
}

/// Scan source text (must end with a newline) into tokens.
pub(crate) fn scan(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Scanner::new(source).run()
}

struct Scanner<'s> {
    source: &'s str,
    chars: Vec<(usize, char)>,
    pos: usize,
    line: usize,
    col: usize,
    state: State,
    tokens: Vec<Token>,
    buf: String,
    indent_stack: Vec<usize>,
    same_line_depth: usize,
    unparsed_level: Option<usize>,
    params_depth: usize,
    inline_depth: usize,
    at_line_start: bool,
}

impl<'s> Scanner<'s> {
    fn new(source: &'s str) -> Self {
        Scanner {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
            line: 0,
            col: 0,
            state: State::Content,
            tokens: Vec::new(),
            buf: String::new(),
            indent_stack: vec![0],
            same_line_depth: 0,
            unparsed_level: None,
            params_depth: 0,
            inline_depth: 0,
            at_line_start: true,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, SyntaxError> {
        while self.pos < self.chars.len() {
            if self.at_line_start && self.state == State::Content {
                self.scan_line_start()?;
                continue;
            }
            match self.state {
                State::Content => self.step_content(),
                State::Type => self.step_type(),
                State::Params => self.step_params(),
                State::InlineParams => self.step_inline_params(),
                State::InlineContent => self.step_inline_content(),
            }
        }
        self.finish()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).map(|&(_, c)| c)
    }

    fn bump(&mut self) {
        self.pos += 1;
        self.col += 1;
    }

    fn consume_newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.col = 0;
    }

    fn error(&self, message: &str) -> SyntaxError {
        let offset = self
            .chars
            .get(self.pos)
            .map(|&(o, _)| o)
            .unwrap_or(self.source.len());
        SyntaxError::at(self.source, self.line, self.col, offset, message)
    }

    fn top_level(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }

    /// Per-line indentation handling. Consumes blank lines and comment
    /// lines entirely; for content lines, compares the indent count against
    /// the indent stack and leaves the scanner positioned at the first
    /// content character.
    fn scan_line_start(&mut self) -> Result<(), SyntaxError> {
        loop {
            if self.pos >= self.chars.len() {
                return Ok(());
            }
            let mut count = 0usize;
            while self.peek() == Some(' ') {
                self.bump();
                count += 1;
            }
            match self.peek() {
                None => {
                    if count > 0 {
                        self.tokens.push(Token::EmptyContent(" ".repeat(count)));
                    }
                    return Ok(());
                }
                Some('\n') => {
                    self.tokens.push(Token::EmptyContent(" ".repeat(count)));
                    self.consume_newline();
                }
                Some('#') if self.unparsed_level.is_none() => {
                    self.bump();
                    let mut text = String::new();
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        text.push(c);
                        self.bump();
                    }
                    let text = text.strip_prefix(' ').unwrap_or(&text).to_string();
                    self.tokens.push(Token::Comment(text));
                    if self.peek() == Some('\n') {
                        self.consume_newline();
                    }
                }
                Some(_) => {
                    self.apply_indent(count)?;
                    // A backslash protecting a would-be comment marker is
                    // dropped; the `#` continues as ordinary content.
                    if self.peek() == Some('\\') && self.peek_at(1) == Some('#') {
                        self.bump();
                    }
                    self.at_line_start = false;
                    return Ok(());
                }
            }
        }
    }

    fn apply_indent(&mut self, count: usize) -> Result<(), SyntaxError> {
        let current = self.top_level();
        if count > current {
            self.indent_stack.push(count);
            self.tokens.push(Token::Indent(count - current));
        } else if count < current {
            while self.top_level() > count {
                let top = self.indent_stack.pop().unwrap_or(0);
                let next = self.top_level();
                self.tokens.push(Token::Dedent(top - next));
            }
            if self.top_level() != count {
                return Err(self.error("indentation mismatch"));
            }
        }
        if let Some(level) = self.unparsed_level {
            if count <= level {
                self.unparsed_level = None;
            }
        }
        Ok(())
    }

    fn flush_content(&mut self) {
        if !self.buf.is_empty() {
            let value = std::mem::take(&mut self.buf);
            self.tokens.push(Token::Content(value));
        }
    }

    /// Common newline handling once the current state has emitted its
    /// token: close any open same-line content, end a same-line unparsed
    /// region, and return to content scanning on the next line.
    fn end_of_line(&mut self) {
        if self.same_line_depth > 0 {
            for _ in 0..self.same_line_depth {
                self.tokens.push(Token::EndSameLineContent);
            }
            self.same_line_depth = 0;
            self.unparsed_level = None;
        }
        self.consume_newline();
        self.at_line_start = true;
        self.state = State::Content;
    }

    fn step_content(&mut self) {
        match self.peek() {
            Some('\n') => {
                self.flush_content();
                self.end_of_line();
            }
            Some('@') if self.unparsed_level.is_none() => {
                self.flush_content();
                self.bump();
                if self.peek() == Some('@') {
                    self.bump();
                    self.unparsed_level = Some(self.top_level());
                }
                self.state = State::Type;
            }
            Some(c) => {
                self.buf.push(c);
                self.bump();
            }
            None => {}
        }
    }

    fn emit_type(&mut self) {
        let value = std::mem::take(&mut self.buf);
        self.tokens.push(Token::Type(value));
    }

    fn step_type(&mut self) {
        match self.peek() {
            Some(' ') => {
                self.emit_type();
                self.bump();
                while self.peek() == Some(' ') {
                    self.bump();
                }
                self.params_depth = 0;
                self.state = State::Params;
            }
            Some(':') => {
                self.emit_type();
                self.bump();
                self.tokens.push(Token::StartSameLineContent);
                self.same_line_depth += 1;
                if self.peek() == Some(' ') {
                    self.bump();
                }
                self.state = State::Content;
            }
            Some('[') => {
                self.emit_type();
                self.bump();
                self.tokens.push(Token::StartInlineContent);
                self.inline_depth = 0;
                self.state = State::InlineContent;
            }
            Some('(') => {
                self.emit_type();
                self.bump();
                self.state = State::InlineParams;
            }
            Some('\n') => {
                self.emit_type();
                self.end_of_line();
            }
            Some(c) => {
                self.buf.push(c);
                self.bump();
            }
            None => {}
        }
    }

    fn emit_params(&mut self) {
        let value = std::mem::take(&mut self.buf);
        self.tokens.push(Token::Params(value));
    }

    fn step_params(&mut self) {
        match self.peek() {
            Some('[') => {
                self.params_depth += 1;
                self.buf.push('[');
                self.bump();
            }
            Some(']') => {
                self.params_depth = self.params_depth.saturating_sub(1);
                self.buf.push(']');
                self.bump();
            }
            Some(':') if self.params_depth == 0 => {
                self.emit_params();
                self.bump();
                self.tokens.push(Token::StartSameLineContent);
                self.same_line_depth += 1;
                if self.peek() == Some(' ') {
                    self.bump();
                }
                self.state = State::Content;
            }
            Some('\n') => {
                self.emit_params();
                self.end_of_line();
            }
            Some(c) => {
                self.buf.push(c);
                self.bump();
            }
            None => {}
        }
    }

    fn step_inline_params(&mut self) {
        match self.peek() {
            Some(')') => {
                self.emit_params();
                self.bump();
                if self.peek() == Some('[') {
                    self.bump();
                    self.tokens.push(Token::StartInlineContent);
                    self.inline_depth = 0;
                    self.state = State::InlineContent;
                } else {
                    self.state = State::Content;
                }
            }
            Some('\n') => {
                self.buf.push('\n');
                self.consume_newline();
            }
            Some(c) => {
                self.buf.push(c);
                self.bump();
            }
            None => {}
        }
    }

    fn step_inline_content(&mut self) {
        match self.peek() {
            Some('\\') => match self.peek_at(1) {
                Some('[') => {
                    self.buf.push('[');
                    self.bump();
                    self.bump();
                }
                Some(']') => {
                    self.buf.push(']');
                    self.bump();
                    self.bump();
                }
                _ => {
                    self.buf.push('\\');
                    self.bump();
                }
            },
            Some('[') => {
                self.inline_depth += 1;
                self.buf.push('[');
                self.bump();
            }
            Some(']') => {
                if self.inline_depth > 0 {
                    self.inline_depth -= 1;
                    self.buf.push(']');
                    self.bump();
                } else {
                    self.flush_content();
                    self.tokens.push(Token::EndInlineContent);
                    self.bump();
                    self.state = State::Content;
                }
            }
            Some('\n') => {
                // A line boundary inside brackets emits an intermediate
                // content piece; it is not a line boundary for indentation.
                self.flush_content();
                self.consume_newline();
                while self.peek() == Some(' ') {
                    self.bump();
                }
            }
            Some(c) => {
                self.buf.push(c);
                self.bump();
            }
            None => {}
        }
    }

    fn finish(mut self) -> Result<Vec<Token>, SyntaxError> {
        match self.state {
            State::Type => self.emit_type(),
            State::Params => self.emit_params(),
            State::InlineParams => return Err(self.error("unterminated parameter brackets")),
            State::InlineContent => return Err(self.error("unterminated inline content brackets")),
            State::Content => self.flush_content(),
        }
        for _ in 0..self.same_line_depth {
            self.tokens.push(Token::EndSameLineContent);
        }
        while self.indent_stack.len() > 1 {
            let top = self.indent_stack.pop().unwrap_or(0);
            let next = self.top_level();
            self.tokens.push(Token::Dedent(top - next));
        }
        Ok(self.tokens)
    }
}
