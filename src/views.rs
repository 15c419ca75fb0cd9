use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// Values rendered into the form page
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage<'a> {
    pub original: &'a str,
    pub translation: &'a str,
    pub evaluation: &'a str,
    pub language: &'a str,
    pub languages: &'a [String],
}

/// HTML templates, compiled once at startup
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // `.html` names are autoescaped
        tera.add_raw_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render_index(&self, page: &IndexPage<'_>) -> Result<String> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render("index.html", &context)?)
    }
}
