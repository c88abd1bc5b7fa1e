#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" | "list" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown format '{s}'. Use 'text' or 'json'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_text() {
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("list"), Some(OutputFormat::Text));
    }

    #[test]
    fn test_from_name_json() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(OutputFormat::from_name("dot"), None);
    }

    #[test]
    fn test_from_str_error_message() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format 'xml'"));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(OutputFormat::Text.as_str(), "text");
        assert_eq!(OutputFormat::Json.as_str(), "json");
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
