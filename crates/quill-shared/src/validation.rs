//! Create-payload validation.
//!
//! Fields are checked in schema order (title, category, description,
//! coverImage, content) and the first failure is reported. Unknown keys,
//! including caller-supplied `id` and `date`, are ignored.

use serde_json::{Map, Value};
use url::Url;

use quill_core::{NewBlogPost, ValidationError};

/// Validate a candidate create payload and normalize it into a [`NewBlogPost`].
pub fn validate_payload(payload: &Value) -> Result<NewBlogPost, ValidationError> {
    let fields = payload
        .as_object()
        .ok_or_else(|| ValidationError::body("request body must be a JSON object"))?;

    let title = non_empty_text(fields, "title")?;
    let category = categories(fields)?;
    let description = non_empty_text(fields, "description")?;
    let cover_image = cover_image(fields)?;
    let content = content(fields)?;

    Ok(NewBlogPost {
        title,
        category,
        description,
        cover_image,
        content,
    })
}

/// Split free-text categories on commas, trimming and dropping empty entries.
pub fn normalize_categories(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value, ValidationError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(ValidationError::field(name, format!("{name} is required"))),
        Some(value) => Ok(value),
    }
}

fn text<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a str, ValidationError> {
    required(fields, name)?
        .as_str()
        .ok_or_else(|| ValidationError::field(name, format!("{name} must be a string")))
}

fn non_empty_text(fields: &Map<String, Value>, name: &str) -> Result<String, ValidationError> {
    let value = text(fields, name)?.trim();
    if value.is_empty() {
        return Err(ValidationError::field(name, format!("{name} must not be empty")));
    }
    Ok(value.to_string())
}

fn categories(fields: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
    let invalid = || {
        ValidationError::field(
            "category",
            "category must be a string or a list of strings",
        )
    };

    match required(fields, "category")? {
        Value::String(text) => Ok(normalize_categories(text)),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let name = item.as_str().ok_or_else(invalid)?.trim();
                if !name.is_empty() {
                    out.push(name.to_string());
                }
            }
            Ok(out)
        }
        _ => Err(invalid()),
    }
}

fn cover_image(fields: &Map<String, Value>) -> Result<String, ValidationError> {
    let raw = text(fields, "coverImage")?.trim();
    if raw.is_empty() {
        return Err(ValidationError::field("coverImage", "coverImage is required"));
    }
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(raw.to_string())
        }
        _ => Err(ValidationError::field(
            "coverImage",
            "coverImage must be a valid URL",
        )),
    }
}

fn content(fields: &Map<String, Value>) -> Result<String, ValidationError> {
    Ok(text(fields, "content")?.replace("\r\n", "\n"))
}
