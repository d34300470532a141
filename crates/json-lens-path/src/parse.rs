//! Parser for canonical bracket notation.

use thiserror::Error;

use crate::types::{NodePath, NodeSegment};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    #[error("Expected root identifier '$' at start")]
    ExpectedRoot,
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Unclosed key string")]
    UnclosedKey,
    #[error("Invalid array index")]
    InvalidIndex,
}

/// Parse canonical bracket notation into a [`NodePath`].
///
/// Accepts exactly what [`path_to_string`] produces for paths whose keys
/// contain no embedded double quotes: `$` followed by any number of
/// `["key"]` and `[0]` brackets.
///
/// [`path_to_string`]: crate::path_to_string
///
/// # Example
///
/// ```
/// use json_lens_path::{parse_node_path, NodeSegment};
///
/// let path = parse_node_path("$[\"a\"][0]").unwrap();
/// assert_eq!(path, vec![NodeSegment::key("a"), NodeSegment::index(0)]);
/// assert!(parse_node_path("$.a").is_err());
/// ```
pub fn parse_node_path(input: &str) -> Result<NodePath, PathParseError> {
    NodePathParser::parse(input)
}

/// Canonical notation parser.
pub struct NodePathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> NodePathParser<'a> {
    /// Parse a canonical-notation path.
    pub fn parse(input: &'a str) -> Result<NodePath, PathParseError> {
        let mut parser = Self { input, pos: 0 };
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<NodePath, PathParseError> {
        if self.peek() != Some('$') {
            return Err(PathParseError::ExpectedRoot);
        }
        self.advance();

        let mut path = Vec::new();
        while !self.is_at_end() {
            match self.peek() {
                Some('[') => {
                    self.advance();
                    path.push(self.parse_segment()?);
                }
                Some(c) => return Err(PathParseError::UnexpectedChar(c)),
                None => return Err(PathParseError::UnexpectedEnd),
            }
        }
        Ok(path)
    }

    fn parse_segment(&mut self) -> Result<NodeSegment, PathParseError> {
        let segment = match self.peek() {
            Some('"') => {
                self.advance();
                NodeSegment::Key(self.parse_key()?)
            }
            Some(c) if c.is_ascii_digit() => NodeSegment::Index(self.parse_index()?),
            Some(c) => return Err(PathParseError::UnexpectedChar(c)),
            None => return Err(PathParseError::UnexpectedEnd),
        };
        match self.peek() {
            Some(']') => {
                self.advance();
                Ok(segment)
            }
            Some(c) => Err(PathParseError::UnexpectedChar(c)),
            None => Err(PathParseError::UnexpectedEnd),
        }
    }

    fn parse_key(&mut self) -> Result<String, PathParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                let key = self.input[start..self.pos].to_string();
                self.advance();
                return Ok(key);
            }
            self.pos += c.len_utf8();
        }
        Err(PathParseError::UnclosedKey)
    }

    fn parse_index(&mut self) -> Result<usize, PathParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        self.input[start..self.pos]
            .parse()
            .map_err(|_| PathParseError::InvalidIndex)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
