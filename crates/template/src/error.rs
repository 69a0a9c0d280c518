use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template '{name}' has invalid syntax: {source}")]
    Syntax {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Template '{name}' failed to render: {source}")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}
