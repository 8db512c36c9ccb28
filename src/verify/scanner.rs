//! Whitespace token scanning over buffered streams.
use std::io::{self, BufRead};

/// `scanf`-style token reader.
///
/// Tokens are maximal runs of non-whitespace bytes separated by arbitrary
/// ASCII whitespace; the layout of the separators carries no meaning.
pub struct TokenScanner<R> {
    inner: R,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(inner: R) -> Self {
        TokenScanner { inner }
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        loop {
            let (skip, at_token) = {
                let buf = self.inner.fill_buf()?;
                if buf.is_empty() {
                    return Ok(());
                }
                match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                    Some(index) => (index, true),
                    None => (buf.len(), false),
                }
            };
            self.inner.consume(skip);
            if at_token {
                return Ok(());
            }
        }
    }

    /// Read the next token, or `None` at end of stream.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        self.skip_whitespace()?;

        let mut token = Vec::new();
        loop {
            let (take, at_boundary) = {
                let buf = self.inner.fill_buf()?;
                if buf.is_empty() {
                    break;
                }
                match buf.iter().position(|b| b.is_ascii_whitespace()) {
                    Some(index) => {
                        token.extend_from_slice(&buf[..index]);
                        (index, true)
                    }
                    None => {
                        token.extend_from_slice(buf);
                        (buf.len(), false)
                    }
                }
            };
            self.inner.consume(take);
            if at_boundary {
                break;
            }
        }

        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&token).into_owned()))
        }
    }

    /// Whether any further token exists. Consumes leading whitespace only.
    pub fn has_trailing_token(&mut self) -> io::Result<bool> {
        self.skip_whitespace()?;
        Ok(!self.inner.fill_buf()?.is_empty())
    }
}
