//! Share links: `{origin}/?surah=S&verse=V&lang=CODE`.

use api::{Edition, Position, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareLink {
    pub position: Position,
    pub edition: Edition,
}

impl ShareLink {
    pub fn new(position: Position, edition: Edition) -> Self {
        Self { position, edition }
    }

    pub fn to_url(self, origin: &str) -> Result<Url, String> {
        let mut url =
            Url::parse(origin).map_err(|err| format!("Invalid share origin {origin}: {err}"))?;
        if url.cannot_be_a_base() {
            return Err(format!("Invalid share origin {origin}"));
        }
        url.set_path("/");
        url.set_fragment(None);
        url.query_pairs_mut()
            .clear()
            .append_pair("surah", &self.position.surah().to_string())
            .append_pair("verse", &self.position.verse().to_string())
            .append_pair("lang", self.edition.code());
        Ok(url)
    }

    /// Parse a page query (`?surah=2&verse=255&lang=ur`). `surah` and `verse` are required;
    /// a missing or unknown `lang` falls back to `default_edition`.
    pub fn from_query(query: &str, default_edition: Edition) -> Option<Self> {
        let query = query.trim().trim_start_matches('?');
        if query.is_empty() {
            return None;
        }
        let url = Url::parse(&format!("http://localhost/?{query}")).ok()?;

        let mut surah = None;
        let mut verse = None;
        let mut edition = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "surah" => surah = Position::parse_number(&value).ok(),
                "verse" => verse = Position::parse_number(&value).ok(),
                "lang" => edition = Edition::from_code(&value),
                _ => {}
            }
        }

        let position = Position::new(surah?, verse?).ok()?;
        Some(Self::new(position, edition.unwrap_or(default_edition)))
    }
}
