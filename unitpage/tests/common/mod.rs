#![allow(dead_code)]

use pagedom::{Document, Element, Location, Page};
use unitpage::{init, UnitPage, UnitPageConfig};

pub const EXPANDED: &str = "UnitReadme--expanded";

/// Builds unit pages with optional sections switched on and off.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    pub hash: String,
    pub readme: bool,
    pub content: bool,
    pub outline: bool,
    pub collapse: bool,
    pub expand_controls: usize,
    pub rendered_expanded: bool,
    pub readme_option: bool,
    pub directories: bool,
    pub expand_all: bool,
    pub directories_option: bool,
    pub copy_controls: usize,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self {
            hash: String::new(),
            readme: true,
            content: true,
            outline: true,
            collapse: true,
            expand_controls: 2,
            rendered_expanded: false,
            readme_option: true,
            directories: true,
            expand_all: true,
            directories_option: true,
            copy_controls: 1,
        }
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(mut self, hash: &str) -> Self {
        self.hash = hash.to_string();
        self
    }

    pub fn without_readme(mut self) -> Self {
        self.readme = false;
        self
    }

    pub fn without_directories(mut self) -> Self {
        self.directories = false;
        self
    }

    pub fn expand_controls(mut self, count: usize) -> Self {
        self.expand_controls = count;
        self
    }

    pub fn copy_controls(mut self, count: usize) -> Self {
        self.copy_controls = count;
        self
    }

    pub fn build(&self) -> Page {
        let mut header = Element::div().id("header").child(
            Element::nav().id("views").children(
                [
                    self.readme_option.then(|| {
                        Element::option("readme")
                            .id("readme-option")
                            .class("js-readmeOption")
                    }),
                    self.directories_option.then(|| {
                        Element::option("directories")
                            .id("directories-option")
                            .class("js-directoriesOption")
                    }),
                ]
                .into_iter()
                .flatten(),
            ),
        );

        // The first expand control is the summary link above the panel.
        if self.expand_controls > 0 {
            header = header.child(
                Element::link("#section-readme")
                    .id("readme-expand-0")
                    .class("js-readmeExpand"),
            );
        }

        for i in 0..self.copy_controls {
            header = header.child(
                Element::button()
                    .id(format!("copy-{i}"))
                    .class("js-copyToClipboard")
                    .attr("data-to-copy", format!("example.com/mod/v{i}")),
            );
        }

        let mut root = Element::div().id("unit").child(header);

        if self.readme {
            let mut panel = Element::section().id("readme").class("UnitReadme").class("js-readme");
            if self.rendered_expanded {
                panel = panel.class(EXPANDED);
            }
            if self.content {
                panel = panel.child(
                    Element::div()
                        .id("readme-content")
                        .class("js-readmeContent")
                        .child(Element::text("Overview").id("readme-heading"))
                        .child(Element::link("https://example.com").id("readme-link")),
                );
            }
            for i in 1..self.expand_controls {
                panel = panel.child(
                    Element::button()
                        .id(format!("readme-expand-{i}"))
                        .class("js-readmeExpand"),
                );
            }
            if self.collapse {
                panel = panel.child(
                    Element::button()
                        .id("readme-collapse")
                        .class("js-readmeCollapse"),
                );
            }
            root = root.child(panel);
        }

        if self.outline {
            root = root.child(
                Element::nav()
                    .id("readme-outline")
                    .class("js-readmeOutline")
                    .child(Element::link("#readme-install").id("outline-link")),
            );
        }

        if self.directories {
            let mut section = Element::section().id("directories").class("js-unitDirectories");
            if self.expand_all {
                section = section.child(
                    Element::button()
                        .id("expand-all")
                        .class("js-expandAllDirectories"),
                );
            }
            section = section.child(Element::table().id("dir-table").class("js-expandableTable"));
            root = root.child(section);
        }

        let document = Document::new(root).expect("fixture ids are unique");
        Page::new(document.with_location(Location::with_hash(self.hash.as_str())))
    }
}

pub fn no_clipboard() -> impl FnMut(&mut Page, &str) {
    |_, _| {}
}

pub fn no_tables() -> impl FnMut(&mut Page, &str, Option<&str>) {
    |_, _, _| {}
}

/// Build and initialize a page with default config and inert collaborators.
pub fn setup(builder: &PageBuilder) -> (Page, UnitPage) {
    let mut page = builder.build();
    let unit = init(
        &mut page,
        &UnitPageConfig::default(),
        &mut no_clipboard(),
        &mut no_tables(),
    )
    .unwrap();
    (page, unit)
}

pub fn is_expanded(page: &Page) -> bool {
    page.document().has_class("readme", EXPANDED)
}
