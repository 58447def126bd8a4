// Content model for the chart container

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A chart canvas with the renderer's configuration object.
    Chart {
        canvas_id: String,
        config: serde_json::Value,
    },
    /// The user-visible failure notice.
    ErrorMessage { text: String },
}

/// The page element the widget draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: String,
    pub content: Vec<Element>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Vec::new(),
        }
    }

    /// Replaces whatever the container held with a single element.
    pub fn replace_content(&mut self, element: Element) {
        self.content.clear();
        self.content.push(element);
    }

    pub fn has_chart(&self) -> bool {
        self.content
            .iter()
            .any(|e| matches!(e, Element::Chart { .. }))
    }

    pub fn error_messages(&self) -> usize {
        self.content
            .iter()
            .filter(|e| matches!(e, Element::ErrorMessage { .. }))
            .count()
    }
}
