use axum::response::Redirect;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    #[default]
    Success,
    Error,
}

impl FlashLevel {
    /// Unknown levels fall back to the default instead of failing the request
    fn lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            _ => Self::Success,
        })
    }
}

/// One-shot user message carried across a redirect in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub flash: Option<String>,
    #[serde(default, deserialize_with = "FlashLevel::lenient")]
    pub level: FlashLevel,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            flash: Some(message.into()),
            level: FlashLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            flash: Some(message.into()),
            level: FlashLevel::Error,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.flash.as_deref().filter(|message| !message.is_empty())
    }

    /// Location of `path` with this message attached
    pub fn location(&self, path: &str) -> String {
        if self.message().is_none() {
            return path.to_string();
        }
        match serde_urlencoded::to_string(self) {
            Ok(query) => format!("{path}?{query}"),
            Err(e) => {
                warn!(error = %e, "dropping flash message that could not be encoded");
                path.to_string()
            }
        }
    }

    /// `303 See Other` to `path`, so a refreshed page never resubmits the form
    pub fn redirect_to(&self, path: &str) -> Redirect {
        Redirect::to(&self.location(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_encodes_message() {
        let flash = Flash::success("Venue The Musical Hop & Co was successfully listed!");
        assert_eq!(
            flash.location("/"),
            "/?flash=Venue+The+Musical+Hop+%26+Co+was+successfully+listed%21&level=success"
        );
    }

    #[test]
    fn test_location_without_message() {
        assert_eq!(Flash::default().location("/venues/3"), "/venues/3");
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        let decoded: Flash = serde_urlencoded::from_str("flash=x&level=warning").expect("decodes");
        assert_eq!(decoded, Flash::success("x"));

        let decoded: Flash = serde_urlencoded::from_str("level=info").expect("decodes");
        assert_eq!(decoded, Flash::default());

        let decoded: Flash = serde_urlencoded::from_str("flash=x&level=ERROR").expect("decodes");
        assert_eq!(decoded.level, FlashLevel::Error);
    }

    #[test]
    fn test_query_round_trip() {
        let flash = Flash::error("Venue not found.");
        let query = flash.location("/");
        let decoded: Flash =
            serde_urlencoded::from_str(query.trim_start_matches("/?")).expect("decodes");
        assert_eq!(decoded, flash);
    }
}
