use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LICENSE: &str = "MIT";
pub const DEFAULT_TEMPLATE: &str = "Standard";

/// An environment variable row shown in the configuration tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvVar {
    pub name: String,
    pub desc: String,
    pub value: String,
}

impl EnvVar {
    /// Builds a record from user input. Name and description are required;
    /// the value may be empty.
    pub fn new(name: &str, desc: &str, value: &str) -> Option<Self> {
        let name = name.trim();
        let desc = desc.trim();
        if name.is_empty() || desc.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            desc: desc.to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// 所有專案欄位。JSON 鍵名由 [`Field::as_str`] 決定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    pub project_name: String,
    pub username: String,
    pub concisedesc: String,
    pub overview: String,
    pub logo: String,
    pub demo_gif: String,
    pub license: String,
    pub contact: String,
    pub file_structure: String,
    pub usage_code: String,
    pub template: String,
    pub features: Vec<String>,
    pub prerequisites: Vec<String>,
    pub tech: Vec<String>,
    pub screenshots: Vec<String>,
    pub envvars: Vec<EnvVar>,
}

impl Default for ProjectDocument {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            username: String::new(),
            concisedesc: String::new(),
            overview: String::new(),
            logo: String::new(),
            demo_gif: String::new(),
            license: DEFAULT_LICENSE.to_string(),
            contact: String::new(),
            file_structure: String::new(),
            usage_code: String::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            features: Vec::new(),
            prerequisites: Vec::new(),
            tech: Vec::new(),
            screenshots: Vec::new(),
            envvars: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    List,
    EnvVars,
}

/// Name table for the document fields, used by the string-keyed accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProjectName,
    Username,
    ConciseDesc,
    Overview,
    Logo,
    DemoGif,
    License,
    Contact,
    FileStructure,
    UsageCode,
    Template,
    Features,
    Prerequisites,
    Tech,
    Screenshots,
    EnvVars,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::ProjectName,
        Field::Username,
        Field::ConciseDesc,
        Field::Overview,
        Field::Logo,
        Field::DemoGif,
        Field::License,
        Field::Contact,
        Field::FileStructure,
        Field::UsageCode,
        Field::Template,
        Field::Features,
        Field::Prerequisites,
        Field::Tech,
        Field::Screenshots,
        Field::EnvVars,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ProjectName => "project_name",
            Field::Username => "username",
            Field::ConciseDesc => "concisedesc",
            Field::Overview => "overview",
            Field::Logo => "logo",
            Field::DemoGif => "DemoGif",
            Field::License => "license",
            Field::Contact => "contact",
            Field::FileStructure => "file_structure",
            Field::UsageCode => "usage_code",
            Field::Template => "template",
            Field::Features => "features",
            Field::Prerequisites => "Prerequisites",
            Field::Tech => "tech",
            Field::Screenshots => "screenshots",
            Field::EnvVars => "envvars",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Features | Field::Prerequisites | Field::Tech | Field::Screenshots => {
                FieldKind::List
            }
            Field::EnvVars => FieldKind::EnvVars,
            _ => FieldKind::Text,
        }
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value read from or written to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    EnvVars(Vec<EnvVar>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::List(_) => FieldKind::List,
            FieldValue::EnvVars(_) => FieldKind::EnvVars,
        }
    }

    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::List => FieldValue::List(Vec::new()),
            FieldKind::EnvVars => FieldValue::EnvVars(Vec::new()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            FieldValue::EnvVars(vars) => json!(vars),
        }
    }

    /// Reads a JSON value of the given shape. Returns `None` when the value
    /// does not have that shape.
    pub fn from_json(kind: FieldKind, value: &Value) -> Option<Self> {
        match kind {
            FieldKind::Text => value.as_str().map(|s| FieldValue::Text(s.to_string())),
            FieldKind::List => {
                let items = value.as_array()?;
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .map(FieldValue::List)
            }
            FieldKind::EnvVars => {
                let items = value.as_array()?;
                items
                    .iter()
                    .map(|item| {
                        if !item.is_object() {
                            return None;
                        }
                        serde_json::from_value::<EnvVar>(item.clone()).ok()
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(FieldValue::EnvVars)
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_env_vars(&self) -> Option<&[EnvVar]> {
        match self {
            FieldValue::EnvVars(vars) => Some(vars),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<EnvVar>> for FieldValue {
    fn from(value: Vec<EnvVar>) -> Self {
        FieldValue::EnvVars(value)
    }
}

impl ProjectDocument {
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::ProjectName => FieldValue::Text(self.project_name.clone()),
            Field::Username => FieldValue::Text(self.username.clone()),
            Field::ConciseDesc => FieldValue::Text(self.concisedesc.clone()),
            Field::Overview => FieldValue::Text(self.overview.clone()),
            Field::Logo => FieldValue::Text(self.logo.clone()),
            Field::DemoGif => FieldValue::Text(self.demo_gif.clone()),
            Field::License => FieldValue::Text(self.license.clone()),
            Field::Contact => FieldValue::Text(self.contact.clone()),
            Field::FileStructure => FieldValue::Text(self.file_structure.clone()),
            Field::UsageCode => FieldValue::Text(self.usage_code.clone()),
            Field::Template => FieldValue::Text(self.template.clone()),
            Field::Features => FieldValue::List(self.features.clone()),
            Field::Prerequisites => FieldValue::List(self.prerequisites.clone()),
            Field::Tech => FieldValue::List(self.tech.clone()),
            Field::Screenshots => FieldValue::List(self.screenshots.clone()),
            Field::EnvVars => FieldValue::EnvVars(self.envvars.clone()),
        }
    }

    /// Stores `value` into `field`. Returns `false` without touching the
    /// document when the value has the wrong shape for the field.
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::ProjectName, FieldValue::Text(v)) => self.project_name = v,
            (Field::Username, FieldValue::Text(v)) => self.username = v,
            (Field::ConciseDesc, FieldValue::Text(v)) => self.concisedesc = v,
            (Field::Overview, FieldValue::Text(v)) => self.overview = v,
            (Field::Logo, FieldValue::Text(v)) => self.logo = v,
            (Field::DemoGif, FieldValue::Text(v)) => self.demo_gif = v,
            (Field::License, FieldValue::Text(v)) => self.license = v,
            (Field::Contact, FieldValue::Text(v)) => self.contact = v,
            (Field::FileStructure, FieldValue::Text(v)) => self.file_structure = v,
            (Field::UsageCode, FieldValue::Text(v)) => self.usage_code = v,
            (Field::Template, FieldValue::Text(v)) => self.template = v,
            (Field::Features, FieldValue::List(v)) => self.features = v,
            (Field::Prerequisites, FieldValue::List(v)) => self.prerequisites = v,
            (Field::Tech, FieldValue::List(v)) => self.tech = v,
            (Field::Screenshots, FieldValue::List(v)) => self.screenshots = v,
            (Field::EnvVars, FieldValue::EnvVars(v)) => self.envvars = v,
            _ => return false,
        }
        true
    }

    pub fn to_map(&self) -> Map<String, Value> {
        Field::ALL
            .iter()
            .map(|field| (field.as_str().to_string(), self.get(*field).to_json()))
            .collect()
    }

    pub fn template_kind(&self) -> TemplateKind {
        self.template.parse().unwrap_or_default()
    }
}

/// The closed set of presentation templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    #[default]
    Standard,
    Minimalist,
    Detailed,
    Modern,
    Corporate,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Standard,
        TemplateKind::Minimalist,
        TemplateKind::Detailed,
        TemplateKind::Modern,
        TemplateKind::Corporate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Standard => "Standard",
            TemplateKind::Minimalist => "Minimalist",
            TemplateKind::Detailed => "Detailed",
            TemplateKind::Modern => "Modern",
            TemplateKind::Corporate => "Corporate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::Standard => "Badges, navigation links and example content for every section",
            TemplateKind::Minimalist => "Only the sections you filled in, no badges",
            TemplateKind::Detailed => "Table of contents and filler text for every section",
            TemplateKind::Modern => "Centered header with emoji section markers",
            TemplateKind::Corporate => "Business-toned headings for product documentation",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TemplateKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or(())
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
