//! Unit page configuration.

use pagedom::Selector;

use crate::error::SetupError;

/// Selector strings for every element the unit page script touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub expandable_table: String,
    pub expand_all_directories: String,
    pub copy_to_clipboard: String,
    pub readme: String,
    pub readme_content: String,
    pub readme_outline: String,
    pub readme_expand: String,
    pub readme_collapse: String,
    pub readme_option: String,
    pub unit_directories: String,
    pub directories_option: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            expandable_table: ".js-expandableTable".into(),
            expand_all_directories: ".js-expandAllDirectories".into(),
            copy_to_clipboard: ".js-copyToClipboard".into(),
            readme: ".js-readme".into(),
            readme_content: ".js-readmeContent".into(),
            readme_outline: ".js-readmeOutline".into(),
            readme_expand: ".js-readmeExpand".into(),
            readme_collapse: ".js-readmeCollapse".into(),
            readme_option: ".js-readmeOption".into(),
            unit_directories: ".js-unitDirectories".into(),
            directories_option: ".js-directoriesOption".into(),
        }
    }
}

impl Selectors {
    /// Parse every selector, naming the first field that fails.
    pub fn compile(&self) -> Result<CompiledSelectors, SetupError> {
        let parse = |field: &'static str, value: &str| {
            Selector::parse(value).map_err(|source| SetupError::selector(field, source))
        };

        Ok(CompiledSelectors {
            expandable_table: parse("expandable_table", &self.expandable_table)?,
            expand_all_directories: parse("expand_all_directories", &self.expand_all_directories)?,
            copy_to_clipboard: parse("copy_to_clipboard", &self.copy_to_clipboard)?,
            readme: parse("readme", &self.readme)?,
            readme_content: parse("readme_content", &self.readme_content)?,
            readme_outline: parse("readme_outline", &self.readme_outline)?,
            readme_expand: parse("readme_expand", &self.readme_expand)?,
            readme_collapse: parse("readme_collapse", &self.readme_collapse)?,
            readme_option: parse("readme_option", &self.readme_option)?,
            unit_directories: parse("unit_directories", &self.unit_directories)?,
            directories_option: parse("directories_option", &self.directories_option)?,
        })
    }
}

/// Parsed form of [`Selectors`].
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub expandable_table: Selector,
    pub expand_all_directories: Selector,
    pub copy_to_clipboard: Selector,
    pub readme: Selector,
    pub readme_content: Selector,
    pub readme_outline: Selector,
    pub readme_expand: Selector,
    pub readme_collapse: Selector,
    pub readme_option: Selector,
    pub unit_directories: Selector,
    pub directories_option: Selector,
}

/// Page-wide configuration for [`crate::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPageConfig {
    pub selectors: Selectors,

    /// Class toggled on the readme panel while it is expanded.
    pub expanded_class: String,

    /// The panel starts expanded when the URL fragment contains this.
    pub hash_marker: String,

    /// Key that, with Ctrl or Command held, expands the readme.
    pub find_key: char,
}

impl Default for UnitPageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            expanded_class: "UnitReadme--expanded".into(),
            hash_marker: "readme".into(),
            find_key: 'f',
        }
    }
}

impl UnitPageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn expanded_class(mut self, class: impl Into<String>) -> Self {
        self.expanded_class = class.into();
        self
    }

    pub fn hash_marker(mut self, marker: impl Into<String>) -> Self {
        self.hash_marker = marker.into();
        self
    }

    pub fn find_key(mut self, key: char) -> Self {
        self.find_key = key;
        self
    }
}
