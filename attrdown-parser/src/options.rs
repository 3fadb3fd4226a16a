/// Parse options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    /// Auto-link bare `http(s)://` URLs in inline text. Enabled by
    /// default.
    pub urls_linked: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { urls_linked: true }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `OptionsBuilder` for fluent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use attrdown_parser::Options;
    ///
    /// let options = Options::builder().with_urls_linked(false).build();
    /// assert!(!options.urls_linked);
    /// ```
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

/// Builder for [`Options`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    urls_linked: Option<bool>,
}

impl OptionsBuilder {
    #[must_use]
    pub fn with_urls_linked(mut self, urls_linked: bool) -> Self {
        self.urls_linked = Some(urls_linked);
        self
    }

    #[must_use]
    pub fn build(self) -> Options {
        let defaults = Options::default();
        Options {
            urls_linked: self.urls_linked.unwrap_or(defaults.urls_linked),
        }
    }
}
