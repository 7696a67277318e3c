//! The Open Graph record and its builder.

use serde::Serialize;
use url::Url;

use super::property::OgProperty;
use crate::utils::parse_absolute_url;

/// Open Graph metadata extracted from one document.
///
/// Every field is independently optional. A field is present only if a
/// matching declaration was found (and, for `url` and `image`, its content was
/// an absolute URL). Declared empty content is kept as `Some("")`.
///
/// Records are immutable: build one with [`OpenGraphBuilder`] or get one from
/// [`extract`](crate::extract).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    og_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl OpenGraph {
    /// Starts an empty builder.
    pub fn builder() -> OpenGraphBuilder {
        OpenGraphBuilder::default()
    }

    /// `og:title`
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// `og:type`
    pub fn og_type(&self) -> Option<&str> {
        self.og_type.as_deref()
    }

    /// `og:url`, parsed as an absolute URL
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// `og:image`, parsed as an absolute URL
    pub fn image(&self) -> Option<&Url> {
        self.image.as_ref()
    }

    /// `og:description`
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns true when no property was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.og_type.is_none()
            && self.url.is_none()
            && self.image.is_none()
            && self.description.is_none()
    }
}

/// Accumulator for an [`OpenGraph`] record.
///
/// All fields start absent. Each call overwrites the field it targets, so
/// folding declarations in document order gives last-one-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct OpenGraphBuilder {
    inner: OpenGraph,
}

impl OpenGraphBuilder {
    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    /// Sets the type.
    pub fn og_type(mut self, og_type: impl Into<String>) -> Self {
        self.inner.og_type = Some(og_type.into());
        self
    }

    /// Sets the canonical URL.
    pub fn url(mut self, url: Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    /// Sets the image URL.
    pub fn image(mut self, image: Url) -> Self {
        self.inner.image = Some(image);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    /// Folds one declaration into the record.
    ///
    /// Text properties take `content` verbatim. URL properties keep their
    /// previous value when `content` is not an absolute URL.
    ///
    /// # Returns
    ///
    /// `true` if a field was set, `false` if the content was rejected.
    pub fn apply(&mut self, property: OgProperty, content: &str) -> bool {
        if property.is_url_valued() {
            let Some(parsed) = parse_absolute_url(content) else {
                return false;
            };
            match property {
                OgProperty::Url => self.inner.url = Some(parsed),
                _ => self.inner.image = Some(parsed),
            }
            return true;
        }

        let content = Some(content.to_string());
        match property {
            OgProperty::Title => self.inner.title = content,
            OgProperty::Type => self.inner.og_type = content,
            _ => self.inner.description = content,
        }
        true
    }

    /// Freezes the accumulated fields.
    pub fn build(self) -> OpenGraph {
        self.inner
    }
}
