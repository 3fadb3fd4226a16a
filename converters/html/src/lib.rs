use std::io::Write;

use attrdown_parser::{AttrExtension, BaseHooks, Document, EngineHooks, Options};

mod element;

use element::Render;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] attrdown_parser::Error),

    #[error(transparent)]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

/// Renders parsed documents as HTML. The processor carries the hook set
/// so serializer-level hooks, such as void-tag normalization, apply to
/// the output as well as the parse.
#[derive(Clone, Debug)]
pub struct Processor<H: EngineHooks = AttrExtension> {
    hooks: H,
    options: Options,
}

impl Processor<AttrExtension> {
    /// A processor with the attribute extension enabled.
    pub fn new(options: Options) -> Result<Self, Error> {
        let hooks = AttrExtension::for_engine(attrdown_parser::ENGINE_VERSION)?;
        Ok(Self { hooks, options })
    }
}

impl Processor<BaseHooks> {
    /// A processor with the engine's plain behavior, no extension.
    #[must_use]
    pub fn plain(options: Options) -> Self {
        Self {
            hooks: BaseHooks,
            options,
        }
    }
}

impl<H: EngineHooks> Processor<H> {
    pub fn with_hooks(hooks: H, options: Options) -> Self {
        Self { hooks, options }
    }

    /// Parse `source` with this processor's hooks and options.
    #[must_use]
    pub fn parse(&self, source: &str) -> Document {
        attrdown_parser::parse_with_hooks(source, &self.hooks, &self.options)
    }

    /// Render a parsed document as HTML, one top-level element per line.
    pub fn render<W: Write>(&self, document: &Document, w: &mut W) -> Result<(), Error> {
        for (i, element) in document.elements.iter().enumerate() {
            if i > 0 {
                w.write_all(b"\n")?;
            }
            element.render(w, &self.hooks)?;
        }
        tracing::debug!(elements = document.elements.len(), "rendered document");
        Ok(())
    }

    /// Parse and render in one step.
    pub fn render_str(&self, source: &str) -> Result<String, Error> {
        let document = self.parse(source);
        let mut buffer = Vec::new();
        self.render(&document, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
