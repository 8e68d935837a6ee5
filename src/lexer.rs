use crate::token::Token;

/// Byte-oriented scanner with one character of lookahead.
///
/// `position` points at the byte currently held in `ch`, `read_position`
/// at the byte after it. Past the end of input `ch` is 0 and
/// [`Lexer::next_token`] yields `Token::Eof` forever.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    // No escape sequences: the string runs to the next quote or to the end
    // of input. The quotes themselves are not part of the literal.
    fn read_string(&mut self) -> String {
        let start = self.position + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    // Called with `ch` on the second `/`. Consumes up to, but not
    // including, the terminating newline.
    fn read_comment(&mut self) -> String {
        let start = self.position + 1;
        while self.peek_char() != b'\n' && self.peek_char() != 0 {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position + 1]).into_owned()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::Eq
                } else {
                    Token::Assign
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::NotEq
                } else {
                    Token::Bang
                }
            }
            b'/' => {
                if self.peek_char() == b'/' {
                    self.read_char();
                    Token::Comment(self.read_comment())
                } else {
                    Token::Slash
                }
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'<' => Token::Lt,
            b'>' => Token::Gt,
            b',' => Token::Comma,
            b';' => Token::Semicolon,
            b':' => Token::Colon,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b'[' => Token::LBracket,
            b']' => Token::RBracket,
            b'"' => Token::Str(self.read_string()),
            0 => Token::Eof,
            ch => {
                if is_letter(ch) {
                    // read_identifier leaves `ch` on the byte after the
                    // lexeme, so return without the trailing read_char
                    return Token::lookup_ident(&self.read_identifier());
                }
                if is_digit(ch) {
                    return Token::Int(self.read_number());
                }
                Token::Illegal(ch as char)
            }
        };

        self.read_char();
        token
    }
}

// Digits are deliberately not identifier characters.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
