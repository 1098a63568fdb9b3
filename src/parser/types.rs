use serde::Deserialize;
use serde_json::Value;

// Parsed component metadata, in the shape the component parser emits it.

/// A `@keyword` entry such as `author` or `license`
#[derive(Debug, Clone, Deserialize)]
pub struct Keyword {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Constructor named by a prop's `type` option
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PropType {
    Array,
    Boolean,
    String,
    Number,
    Object,
    Function,
    Date,
    Symbol,
    #[default]
    Any,
    Custom(String),
}

impl From<String> for PropType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Array" => PropType::Array,
            "Boolean" => PropType::Boolean,
            "String" => PropType::String,
            "Number" => PropType::Number,
            "Object" => PropType::Object,
            "Function" => PropType::Function,
            "Date" => PropType::Date,
            "Symbol" => PropType::Symbol,
            "" | "Any" | "any" => PropType::Any,
            _ => PropType::Custom(name),
        }
    }
}

impl std::fmt::Display for PropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropType::Array => write!(f, "Array"),
            PropType::Boolean => write!(f, "Boolean"),
            PropType::String => write!(f, "String"),
            PropType::Number => write!(f, "Number"),
            PropType::Object => write!(f, "Object"),
            PropType::Function => write!(f, "Function"),
            PropType::Date => write!(f, "Date"),
            PropType::Symbol => write!(f, "Symbol"),
            PropType::Any => write!(f, "Any"),
            PropType::Custom(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub prop_type: PropType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<Value>,
    /// Set when the prop is bound through `v-model`
    #[serde(default, alias = "twoWay")]
    pub describe_model: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEntry {
    pub name: String,
    #[serde(default, alias = "value")]
    pub initial_value: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComputedEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A method parameter, given either as a bare name or as `{ "name": .. }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MethodParam {
    Name(String),
    Detailed { name: String },
}

impl MethodParam {
    pub fn name(&self) -> &str {
        match self {
            MethodParam::Name(name) => name,
            MethodParam::Detailed { name } => name,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub params: Vec<MethodParam>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Everything known about a single component, in declaration order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentDoc {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub props: Vec<PropEntry>,
    #[serde(default)]
    pub data: Vec<DataEntry>,
    #[serde(default)]
    pub computed: Vec<ComputedEntry>,
    #[serde(default)]
    pub slots: Vec<SlotEntry>,
    #[serde(default)]
    pub events: Vec<EventEntry>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}
