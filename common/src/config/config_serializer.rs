use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML with an optional `#` comment block written above the document.
#[derive(Default)]
pub struct YamlConfigSerializer {
    header: Option<&'static str>,
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self { header: None }
    }

    pub fn with_header(header: &'static str) -> Self {
        Self {
            header: Some(header),
        }
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        let body = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        let Some(header) = self.header else {
            return Ok(body);
        };

        let mut content: String = header.lines().map(|line| format!("# {}\n", line)).collect();
        content.push_str(&body);
        Ok(content)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }
}
