// HTML page hosting the chart container
use crate::application::chart_renderer::HostPage;
use crate::domain::page::{Container, Element};

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Precipitation</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
<script src="https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns@3/dist/chartjs-adapter-date-fns.bundle.min.js"></script>
</head>
<body>
<div id="precipitation-chart"></div>
</body>
</html>
"#;

/// One rendering of the page template. Containers are the empty
/// `<div id="..."></div>` placeholders present in the template.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    template: String,
    containers: Vec<Container>,
}

impl HtmlPage {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            containers: Vec::new(),
        }
    }

    pub fn into_html(self) -> String {
        let mut html = self.template;
        for container in &self.containers {
            let filled = format!(
                "<div id=\"{}\">{}</div>",
                container.id,
                render_elements(&container.content)
            );
            html = html.replacen(&placeholder(&container.id), &filled, 1);
        }
        html
    }
}

impl HostPage for HtmlPage {
    fn container(&mut self, id: &str) -> Option<&mut Container> {
        if let Some(pos) = self.containers.iter().position(|c| c.id == id) {
            return self.containers.get_mut(pos);
        }
        if !self.template.contains(&placeholder(id)) {
            return None;
        }
        self.containers.push(Container::new(id));
        self.containers.last_mut()
    }
}

fn placeholder(id: &str) -> String {
    format!("<div id=\"{}\"></div>", id)
}

fn render_elements(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|element| match element {
            Element::Chart { canvas_id, config } => format!(
                "<canvas id=\"{id}\"></canvas><script>new Chart(document.getElementById(\"{id}\"), {config});</script>",
                id = escape_html(canvas_id),
                config = config.to_string().replace("</", "<\\/"),
            ),
            Element::ErrorMessage { text } => format!(
                "<p class=\"chart-error\" style=\"color: red; text-align: center;\">{}</p>",
                escape_html(text)
            ),
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
