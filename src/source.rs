// source.rs - Character stream and tokenizer feeding the outer interpreter

/// The source text, consumed one byte at a time. The machine appends the
/// bootstrap program first and any further program text after it; nothing is
/// ever pushed back.
pub struct Source {
    input: Vec<u8>,
    position: usize,
}

impl Default for Source {
    fn default() -> Self {
        Self::new()
    }
}

impl Source {
    pub fn new() -> Self {
        Source {
            input: Vec::new(),
            position: 0,
        }
    }

    pub fn from_str(text: &str) -> Self {
        let mut source = Self::new();
        source.feed(text);
        source
    }

    /// Append more program text to the stream.
    pub fn feed(&mut self, text: &str) {
        self.input.extend_from_slice(text.as_bytes());
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    /// One whitespace-delimited word, or None once the stream is exhausted.
    pub fn next_word(&mut self) -> Option<Vec<u8>> {
        self.token(b' ')
    }

    /// Skip leading delimiters (and newlines), then accumulate bytes up to
    /// the next delimiter, newline, or end of stream. The terminating
    /// delimiter is consumed. None means end of stream with no token.
    pub fn token(&mut self, delim: u8) -> Option<Vec<u8>> {
        while let Some(ch) = self.peek() {
            if !is_separator(ch, delim) {
                break;
            }
            self.advance();
        }

        if self.is_at_end() {
            return None;
        }

        let mut word = Vec::new();
        while let Some(ch) = self.peek() {
            if is_separator(ch, delim) {
                self.advance();
                break;
            }
            word.push(ch);
            self.advance();
        }
        Some(word)
    }
}

/// Newline always terminates a token. The blank delimiter also covers the
/// other ASCII whitespace so tab-indented source tokenizes normally.
fn is_separator(ch: u8, delim: u8) -> bool {
    ch == delim || ch == b'\n' || (delim == b' ' && matches!(ch, b'\t' | b'\r'))
}

/// Numeric literal syntax accepted by EVALUATE: decimal with an optional
/// leading minus, hexadecimal with 0x, binary with 0b. Hex and binary
/// literals may name any 32-bit pattern; decimal is range-checked.
pub fn number(token: &str) -> Option<i32> {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let (radix, digits) = if let Some(hex) = rest.strip_prefix("0x") {
        (16, hex)
    } else if let Some(bin) = rest.strip_prefix("0b") {
        (2, bin)
    } else {
        (10, rest)
    };

    // from_str_radix tolerates a sign of its own; only bare digits are a
    // numeric literal here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    if radix == 10 {
        i32::try_from(value).ok()
    } else if value >= i64::from(i32::MIN) && value <= i64::from(u32::MAX) {
        Some(value as i32)
    } else {
        None
    }
}
