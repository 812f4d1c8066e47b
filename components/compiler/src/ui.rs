//! UI element schema: the closed registry of placeable element kinds
//!
//! Each entry describes the HTML tag an element kind constructs and which
//! property names are legal, with the DOM mutation each property performs.

/// A legal property of a UI element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiProperty {
    /// Property name as written in source
    pub name: &'static str,
    /// JavaScript property path assigned on the constructed node
    pub js_path: &'static str,
}

/// A placeable UI element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiElement {
    /// Element kind name as written in source
    pub name: &'static str,
    /// HTML tag of the constructed DOM node
    pub tag: &'static str,
    /// Legal properties of this kind
    pub properties: &'static [UiProperty],
}

impl UiElement {
    /// Look up a property of this element kind by its source name.
    pub fn property(&self, name: &str) -> Option<&UiProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Emit the statements that create the DOM node of this kind's tag and
    /// append it as a child of `container`, in that order.
    pub fn construct(&self, container: &str, var: &str) -> String {
        format!(
            "const {var} = document.createElement('{tag}');\n{container}.appendChild({var});",
            tag = self.tag
        )
    }
}

/// Look up an element kind by name. `None` means the kind is unknown.
pub fn lookup_element(name: &str) -> Option<&'static UiElement> {
    UI_ELEMENTS.iter().find(|e| e.name == name)
}

static UI_ELEMENTS: &[UiElement] = &[
    UiElement {
        name: "Label",
        tag: "div",
        properties: &[
            UiProperty {
                name: "text",
                js_path: "innerHTML",
            },
            UiProperty {
                name: "background",
                js_path: "style.background",
            },
            UiProperty {
                name: "padding",
                js_path: "style.padding",
            },
        ],
    },
    UiElement {
        name: "Input",
        tag: "input",
        properties: &[
            UiProperty {
                name: "text",
                js_path: "value",
            },
            UiProperty {
                name: "hint",
                js_path: "placeholder",
            },
            UiProperty {
                name: "background",
                js_path: "style.background",
            },
            UiProperty {
                name: "padding",
                js_path: "style.padding",
            },
        ],
    },
    UiElement {
        name: "Tombol",
        tag: "button",
        properties: &[
            UiProperty {
                name: "text",
                js_path: "textContent",
            },
            UiProperty {
                name: "aksi",
                js_path: "onclick",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_are_registered() {
        assert_eq!(lookup_element("Label").unwrap().tag, "div");
        assert_eq!(lookup_element("Input").unwrap().tag, "input");
        assert_eq!(lookup_element("Tombol").unwrap().tag, "button");
    }

    #[test]
    fn test_unknown_kind() {
        assert!(lookup_element("Foo").is_none());
        assert!(lookup_element("label").is_none());
    }

    #[test]
    fn test_property_mappings() {
        let label = lookup_element("Label").unwrap();
        assert_eq!(label.property("text").unwrap().js_path, "innerHTML");
        assert_eq!(
            label.property("background").unwrap().js_path,
            "style.background"
        );
        assert!(label.property("aksi").is_none());

        let input = lookup_element("Input").unwrap();
        assert_eq!(input.property("text").unwrap().js_path, "value");
        assert_eq!(input.property("hint").unwrap().js_path, "placeholder");

        let button = lookup_element("Tombol").unwrap();
        assert_eq!(button.property("text").unwrap().js_path, "textContent");
        assert_eq!(button.property("aksi").unwrap().js_path, "onclick");
        assert!(button.property("hint").is_none());
    }

    #[test]
    fn test_construct_creates_then_appends() {
        let button = lookup_element("Tombol").unwrap();
        let emitted = button.construct("container", "_v0");
        let create = emitted.find("document.createElement('button')").unwrap();
        let append = emitted.find("container.appendChild(_v0)").unwrap();
        assert!(create < append);
    }
}
