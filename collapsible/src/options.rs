//! Widget configuration.
//!
//! Options resolve in three layers, later layers winning: built-in
//! defaults, `data-*` attributes on the bound element (only when it carries
//! the [`CONFIG_MARKER`] attribute), and options passed by the caller.

use collapsible_dom::ElementId;
use serde::Deserialize;
use thiserror::Error;

use crate::host::Host;
use crate::PLUGIN_NAME;

/// Attribute that opts an element into `data-*` configuration.
pub const CONFIG_MARKER: &str = "data-config";

/// Every recognised option, by its camelCase name.
pub const OPTION_NAMES: [&str; 8] = [
    "pluginClass",
    "collapsedClass",
    "expandedClass",
    "headerClass",
    "contentClass",
    "enhancedClass",
    "instructions",
    "collapsed",
];

/// Errors from building options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown option: {0}")]
    Unknown(String),
}

/// Fully resolved configuration of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Base class applied to the root element.
    pub plugin_class: String,
    /// Present on the root while collapsed.
    pub collapsed_class: String,
    /// Present on the root while expanded. A styling hook only; content
    /// visibility should key off the collapsed class.
    pub expanded_class: String,
    /// Identifies the header among the root's children.
    pub header_class: String,
    /// Identifies the content among the root's children.
    pub content_class: String,
    /// Marker added once the element is enhanced.
    pub enhanced_class: String,
    /// Header `aria-label`; skipped when empty.
    pub instructions: String,
    /// Initial state.
    pub collapsed: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            plugin_class: PLUGIN_NAME.to_string(),
            collapsed_class: format!("{PLUGIN_NAME}-collapsed"),
            expanded_class: format!("{PLUGIN_NAME}-expanded"),
            header_class: format!("{PLUGIN_NAME}-header"),
            content_class: format!("{PLUGIN_NAME}-content"),
            enhanced_class: format!("{PLUGIN_NAME}-enhanced"),
            instructions: "Use space or enter key to expand menu content.".to_string(),
            collapsed: false,
        }
    }
}

impl Options {
    /// Layer `patches` over the defaults, in order.
    pub fn resolve<'a>(patches: impl IntoIterator<Item = &'a PartialOptions>) -> Self {
        let mut options = Self::default();
        for patch in patches {
            options.apply(patch);
        }
        options
    }

    pub fn apply(&mut self, patch: &PartialOptions) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        set(&mut self.plugin_class, &patch.plugin_class);
        set(&mut self.collapsed_class, &patch.collapsed_class);
        set(&mut self.expanded_class, &patch.expanded_class);
        set(&mut self.header_class, &patch.header_class);
        set(&mut self.content_class, &patch.content_class);
        set(&mut self.enhanced_class, &patch.enhanced_class);
        set(&mut self.instructions, &patch.instructions);
        set(&mut self.collapsed, &patch.collapsed);
    }
}

/// A sparse set of options, as supplied by a caller or read from markup.
///
/// Deserializes from JSON objects using the camelCase option names, e.g.
/// `{"collapsed": true, "headerClass": "title"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialOptions {
    pub plugin_class: Option<String>,
    pub collapsed_class: Option<String>,
    pub expanded_class: Option<String>,
    pub header_class: Option<String>,
    pub content_class: Option<String>,
    pub enhanced_class: Option<String>,
    pub instructions: Option<String>,
    pub collapsed: Option<bool>,
}

impl PartialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `data-*` attributes from `element`.
    ///
    /// Returns an empty set unless the element carries [`CONFIG_MARKER`].
    /// Unknown option names are logged and skipped.
    pub fn from_data_attributes<H: Host + ?Sized>(host: &H, element: ElementId) -> Self {
        let mut options = Self::default();
        if !host.has_attr(element, CONFIG_MARKER) {
            return options;
        }

        for name in OPTION_NAMES {
            let attribute = data_attribute_name(name);
            let Some(raw) = host.attr(element, &attribute) else {
                continue;
            };
            if let Err(err) = options.set(name, OptionValue::parse(&raw)) {
                log::warn!("[collapsible] Ignoring {attribute} on {element}: {err}");
            }
        }

        log::trace!("[collapsible] Data options for {element}: {options:?}");
        options
    }

    /// Set one option by its camelCase name.
    ///
    /// Values are read by truthiness: any non-empty text turns
    /// `collapsed` on, and `false` given to a class or text option leaves
    /// it empty, which disables it.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), OptionsError> {
        let slot = match name {
            "pluginClass" => &mut self.plugin_class,
            "collapsedClass" => &mut self.collapsed_class,
            "expandedClass" => &mut self.expanded_class,
            "headerClass" => &mut self.header_class,
            "contentClass" => &mut self.content_class,
            "enhancedClass" => &mut self.enhanced_class,
            "instructions" => &mut self.instructions,
            "collapsed" => {
                self.collapsed = Some(value.is_truthy());
                return Ok(());
            }
            _ => return Err(OptionsError::Unknown(name.to_string())),
        };

        *slot = Some(match value {
            OptionValue::Bool(false) => String::new(),
            OptionValue::Bool(true) => "true".to_string(),
            OptionValue::Str(value) => value,
        });
        Ok(())
    }

    pub fn plugin_class(mut self, class: impl Into<String>) -> Self {
        self.plugin_class = Some(class.into());
        self
    }

    pub fn collapsed_class(mut self, class: impl Into<String>) -> Self {
        self.collapsed_class = Some(class.into());
        self
    }

    pub fn expanded_class(mut self, class: impl Into<String>) -> Self {
        self.expanded_class = Some(class.into());
        self
    }

    pub fn header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = Some(class.into());
        self
    }

    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = Some(class.into());
        self
    }

    pub fn enhanced_class(mut self, class: impl Into<String>) -> Self {
        self.enhanced_class = Some(class.into());
        self
    }

    pub fn instructions(mut self, text: impl Into<String>) -> Self {
        self.instructions = Some(text.into());
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }
}

/// A value read from markup: `"true"` and `"false"` become booleans,
/// everything else stays text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => Self::Str(other.to_string()),
        }
    }

    /// `false` and the empty string are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Str(text) => !text.is_empty(),
        }
    }
}

/// `collapsedClass` -> `data-collapsed-class`.
pub fn data_attribute_name(option: &str) -> String {
    let mut name = String::with_capacity(option.len() + 8);
    name.push_str("data-");
    for c in option.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}
