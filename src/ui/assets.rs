//! Templates and static files compiled into the binary

use minijinja::Environment;
use rust_embed::RustEmbed;

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct Templates;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Build a template environment holding every embedded template
pub fn template_environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();

    for name in Templates::iter() {
        let Some(file) = Templates::get(&name) else {
            continue;
        };
        let source = String::from_utf8(file.data.into_owned())
            .map_err(|e| Error::Config(format!("Template '{}' is not UTF-8: {}", name, e)))?;
        env.add_template_owned(name.into_owned(), source)?;
    }

    Ok(env)
}

/// Content type for a static file, by extension
pub fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}
