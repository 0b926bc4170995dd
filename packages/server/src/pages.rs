use std::path::{Path, PathBuf};

use axum::body::Bytes;
use thiserror::Error;

use crate::models::pokemon::PokemonRecord;
use crate::utils::html::escape_html;

pub const SEARCH_PAGE: &str = "search.html";
pub const ERROR_PAGE: &str = "error.html";
pub const UNAVAILABLE_PAGE: &str = "unavailable.html";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read page {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Static pages served byte-for-byte.
#[derive(Debug, Clone)]
pub struct PageAssets {
    pub search: Bytes,
    pub error: Bytes,
    pub unavailable: Bytes,
}

impl PageAssets {
    pub async fn load(dir: &Path) -> Result<Self, AssetError> {
        Ok(Self {
            search: read_page(dir, SEARCH_PAGE).await?,
            error: read_page(dir, ERROR_PAGE).await?,
            unavailable: read_page(dir, UNAVAILABLE_PAGE).await?,
        })
    }
}

async fn read_page(dir: &Path, name: &str) -> Result<Bytes, AssetError> {
    let path = dir.join(name);
    match tokio::fs::read(&path).await {
        Ok(content) => Ok(Bytes::from(content)),
        Err(source) => Err(AssetError::Read { path, source }),
    }
}

const RESULT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Pokemon Info</title>
    <style>
        body { font-family: "Helvetica Neue", sans-serif; font-size: 16px; color: #333; }
        h1 { font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif; font-size: 28px; color: #000; }
        h2 { font-family: Arial, sans-serif; font-size: 20px; color: #555; }
        button { font-family: Arial, sans-serif; font-size: 16px; }
    </style>
</head>
<body>
    <button type="button" onclick="window.location.href='/pokemon'"
            style="padding: 10px 20px; font-size: 16px; font-family: Arial, sans-serif;
                   background-color: #4CAF50; color: white; border: none; border-radius: 5px;
                   cursor: pointer;">
        Back to Search
    </button>
"#;

const RESULT_TAIL: &str = "</body>\n</html>\n";

/// Builds the result page. An empty slice yields the page chrome with no
/// record blocks.
pub fn render_results(records: &[PokemonRecord]) -> String {
    let mut html = String::from(RESULT_HEAD);
    for record in records {
        write_record(&mut html, record);
    }
    html.push_str(RESULT_TAIL);
    html
}

fn write_record(html: &mut String, record: &PokemonRecord) {
    let name = escape_html(&record.display_name());

    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{name} image\" style=\"max-width:300px;\"/>\n",
        escape_html(&record.image)
    ));
    html.push_str("<div style=\"border: 1px solid #ccc; padding: 10px; margin-bottom: 10px;\">\n");
    html.push_str(&format!("<h2>ID: {}</h2>\n", escape_html(&record.id)));
    html.push_str(&format!("<h2>Type(s): {}</h2>\n", escape_html(&record.types)));
    for src in record.type_images() {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"Type Image\" style=\"max-width:50px;\" />\n",
            escape_html(&src)
        ));
    }
    html.push_str("</div>\n");
}
