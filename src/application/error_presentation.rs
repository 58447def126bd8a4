// Error presentation - Inline failure notice in place of the chart
use crate::domain::error::{error_chain, ChartError};
use crate::domain::page::{Container, Element};

pub const ERROR_MESSAGE: &str = "Unable to load precipitation data.";

/// Log the cause and show the generic notice. The cause never reaches the page.
pub fn report_error(container: &mut Container, error: &ChartError) {
    tracing::error!(
        container = %container.id,
        "Chart could not be rendered: {}",
        error_chain(error)
    );
    container.replace_content(Element::ErrorMessage {
        text: ERROR_MESSAGE.to_string(),
    });
}
