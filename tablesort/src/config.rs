//! Sortable table configuration

/// Configuration for table decoration and value extraction.
///
/// The defaults reproduce the plain HTML conventions: tables marked with the
/// `sortable` class, numeric overrides in `data-num`, and arrow glyphs.
///
/// # Example
///
/// ```ignore
/// use tablesort::SortableConfig;
///
/// let config = SortableConfig::default()
///     .with_marker_class("js-sort")
///     .with_glyphs("^", "v");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableConfig {
    /// Class that marks a table for decoration on load.
    ///
    /// Default: `sortable`
    pub marker_class: String,

    /// `data-*` key (without the prefix) holding a cell's numeric override.
    ///
    /// Default: `num`
    pub numeric_key: String,

    /// Text inserted between the header label and the controls.
    ///
    /// Default: a single space
    pub separator: String,

    /// Glyph of the ascending control.
    ///
    /// Default: `↑`
    pub ascending_glyph: String,

    /// Glyph of the descending control.
    ///
    /// Default: `↓`
    pub descending_glyph: String,

    /// Placeholder `href` of the controls.
    ///
    /// Default: `#`
    pub control_href: String,

    /// Whether decorating an already decorated table appends another set of
    /// controls. When false, a second decoration is a no-op.
    ///
    /// Default: false
    pub allow_redecoration: bool,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            marker_class: "sortable".to_string(),
            numeric_key: "num".to_string(),
            separator: " ".to_string(),
            ascending_glyph: "\u{2191}".to_string(),
            descending_glyph: "\u{2193}".to_string(),
            control_href: "#".to_string(),
            allow_redecoration: false,
        }
    }
}

impl SortableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker class.
    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    /// Sets the numeric override key.
    pub fn with_numeric_key(mut self, key: impl Into<String>) -> Self {
        self.numeric_key = key.into();
        self
    }

    /// Sets the separator text.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets both control glyphs.
    pub fn with_glyphs(mut self, ascending: impl Into<String>, descending: impl Into<String>) -> Self {
        self.ascending_glyph = ascending.into();
        self.descending_glyph = descending.into();
        self
    }

    /// Sets the placeholder `href` of the controls.
    pub fn with_control_href(mut self, href: impl Into<String>) -> Self {
        self.control_href = href.into();
        self
    }

    /// Allows repeated decoration to append duplicate controls.
    pub fn with_redecoration(mut self, allow: bool) -> Self {
        self.allow_redecoration = allow;
        self
    }
}
