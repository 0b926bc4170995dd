use sea_orm::FromQueryResult;

/// One row of the `pokemon` table. Regional forms share an `id`, so a
/// single lookup key may yield several records.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct PokemonRecord {
    /// Canonical key, e.g. `#0026`.
    pub id: String,
    pub name: String,
    /// Comma-and-space separated type labels, e.g. `Fire, Flying`.
    pub types: String,
    /// Regional or variant qualifier such as `Alolan`.
    pub form: Option<String>,
    /// Path or URL of the primary artwork.
    pub image: String,
}

const TYPE_SEPARATOR: &str = ", ";

impl PokemonRecord {
    /// Name shown on the result page, `Raichu (Alolan)` for variant forms.
    /// A non-blank form is appended exactly as stored.
    pub fn display_name(&self) -> String {
        match self.form.as_deref() {
            Some(form) if !form.trim().is_empty() => format!("{} ({})", self.name, form),
            _ => self.name.clone(),
        }
    }

    pub fn type_tags(&self) -> impl Iterator<Item = &str> {
        self.types
            .split(TYPE_SEPARATOR)
            .filter(|tag| !tag.trim().is_empty())
    }

    /// Badge image for each type, in the order the types are listed.
    /// Unknown types still get a path; the image server decides whether it exists.
    pub fn type_images(&self) -> Vec<String> {
        self.type_tags().map(type_image_path).collect()
    }
}

pub fn type_image_path(tag: &str) -> String {
    format!("/images/types/{tag}.png")
}
