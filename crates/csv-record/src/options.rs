//! Reader and writer options.

/// Options for reading records.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Quote character (default: `"`).
    pub quote: u8,
    /// Skip the first line as a header (default: false).
    pub has_header: bool,
    /// Trim whitespace around every token (default: false).
    pub trim: bool,
    /// Lines starting with this byte are skipped (default: none).
    pub comment: Option<u8>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: false,
            trim: false,
            comment: None,
        }
    }
}

impl ReaderOptions {
    /// Create reader options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Skip the first line.
    #[must_use]
    pub fn with_header(mut self) -> Self {
        self.has_header = true;
        self
    }

    /// Trim whitespace around tokens.
    #[must_use]
    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Skip lines starting with `comment`.
    #[must_use]
    pub fn with_comment(mut self, comment: u8) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Tokenizer builder for these options.
    ///
    /// The tokenizer accepts rows of any width; row shape is checked
    /// against the record type instead.
    #[must_use]
    pub fn builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(self.has_header)
            .comment(self.comment)
            .flexible(true)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });
        builder
    }
}

/// Options for writing records.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Quote character (default: `"`).
    pub quote: u8,
    /// Emit a header row before the data in [`write_csv`](crate::write_csv) (default: false).
    pub header: bool,
    /// Terminate lines with `\r\n` instead of `\n` (default: false).
    pub crlf: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            header: false,
            crlf: false,
        }
    }
}

impl WriterOptions {
    /// Create writer options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Write a header row first.
    #[must_use]
    pub fn with_header(mut self) -> Self {
        self.header = true;
        self
    }

    /// Use `\r\n` line endings.
    #[must_use]
    pub fn crlf(mut self) -> Self {
        self.crlf = true;
        self
    }

    /// Tokenizer builder for these options.
    #[must_use]
    pub fn builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(false)
            .terminator(if self.crlf {
                csv::Terminator::CRLF
            } else {
                csv::Terminator::Any(b'\n')
            });
        builder
    }
}
