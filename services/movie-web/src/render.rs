use chrono::{DateTime, NaiveDate};
use handlebars::{handlebars_helper, Handlebars, JsonValue};
use serde_json::Value;
use thiserror::Error;

use moviedata::{has_metascore, is_blank_metascore};

const LAYOUT: &str = "layouts/main";

// Compiled into the binary so the service renders the same pages from any cwd.
const TEMPLATES: &[(&str, &str)] = &[
    (LAYOUT, include_str!("../templates/layouts/main.hbs")),
    ("home", include_str!("../templates/home.hbs")),
    ("data", include_str!("../templates/data.hbs")),
    ("movie", include_str!("../templates/movie.hbs")),
    ("searchById", include_str!("../templates/searchById.hbs")),
    ("searchByTitle", include_str!("../templates/searchByTitle.hbs")),
    ("searchResults", include_str!("../templates/searchResults.hbs")),
    ("allData", include_str!("../templates/allData.hbs")),
    ("filteredData", include_str!("../templates/filteredData.hbs")),
    ("highlightedData", include_str!("../templates/highlightedData.hbs")),
    ("pg13", include_str!("../templates/pg13.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub struct Renderer {
    hb: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut hb = Handlebars::new();
        for (name, source) in TEMPLATES {
            hb.register_template_string(name, source)?;
        }

        handlebars_helper!(highlight_blank_metascore: |metascore: str| is_blank_metascore(metascore));
        handlebars_helper!(has_metascore_helper: |metascore: str| has_metascore(metascore));
        handlebars_helper!(json: |value: JsonValue| serde_json::to_string_pretty(&value).unwrap_or_default());
        handlebars_helper!(format_date: |date: str| format_long_date(date));

        hb.register_helper("highlightBlankMetascore", Box::new(highlight_blank_metascore));
        hb.register_helper("hasMetascore", Box::new(has_metascore_helper));
        hb.register_helper("json", Box::new(json));
        hb.register_helper("formatDate", Box::new(format_date));

        Ok(Self { hb })
    }

    /// Renders `view` with `context`, then wraps it in the main layout.
    /// `title` is visible to both.
    pub fn render_page(&self, view: &str, title: &str, context: Value) -> Result<String, RenderError> {
        let mut data = match context {
            Value::Object(map) => map,
            Value::Null => serde_json::Map::new(),
            other => {
                let mut map = serde_json::Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        data.insert("title".to_string(), Value::String(title.to_string()));

        let body = self.hb.render(view, &data)?;
        data.insert("body".to_string(), Value::String(body));
        Ok(self.hb.render(LAYOUT, &data)?)
    }

    #[cfg(test)]
    pub fn has_view(&self, view: &str) -> bool {
        self.hb.has_template(view)
    }
}

/// "16 Jul 2010" -> "July 16, 2010". Text that is not a recognised date
/// comes back unchanged.
pub fn format_long_date(raw: &str) -> String {
    let s = raw.trim();
    let parsed = ["%d %b %Y", "%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
