//! Tool framework: typed tool declarations and their type-erased form.
//!
//! A [`KitTool`] declares a name, a description and an `Input` type. The
//! input type is the single source of truth for the argument schema: its
//! JSON Schema is generated with `schemars`, compiled once with `jsonschema`,
//! and every invocation is validated against it before deserialization.
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Deserialize, JsonSchema)]
//! struct GetTagInput {
//!     /// The tag ID
//!     tag_id: String,
//! }
//!
//! struct GetTag;
//!
//! #[async_trait]
//! impl KitTool for GetTag {
//!     type Input = GetTagInput;
//!     fn name(&self) -> &'static str { "kit_get_tag" }
//!     fn description(&self) -> &'static str { "Get a specific tag by ID" }
//!
//!     async fn call(&self, client: &KitClient, input: GetTagInput) -> kit_client::Result<Value> {
//!         client.tags().get(&input.tag_id).await
//!     }
//! }
//! ```

use async_trait::async_trait;
use kit_client::KitClient;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ToolError;
use crate::protocol::ToolInfo;

/// A tool backed by exactly one Kit API operation.
#[async_trait]
pub trait KitTool: Send + Sync + 'static {
    /// Validated, typed arguments.
    type Input: DeserializeOwned + JsonSchema + Send;

    /// Tool name (unique identifier).
    fn name(&self) -> &'static str;

    /// Human-readable description shown to the host.
    fn description(&self) -> &'static str;

    /// Run the operation.
    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value>;
}

/// Type-erased tool as stored in the registry.
#[async_trait]
pub trait DynTool: Send + Sync {
    /// Tool name.
    fn name(&self) -> &str;

    /// Listing entry for tools/list.
    fn info(&self) -> ToolInfo;

    /// Validate raw arguments and run the tool.
    async fn invoke(&self, client: &KitClient, arguments: Value) -> Result<Value, ToolError>;
}

/// A [`KitTool`] paired with its generated schema and compiled validator.
pub struct SchemaTool<T: KitTool> {
    tool: T,
    schema: Value,
    validator: jsonschema::Validator,
}

impl<T: KitTool> SchemaTool<T> {
    /// Generate and compile the input schema for `tool`.
    pub fn new(tool: T) -> Result<Self, ToolError> {
        let schema = input_schema::<T::Input>()?;
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(&schema)
            .map_err(|e| ToolError::Schema {
                tool: tool.name().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            tool,
            schema,
            validator,
        })
    }

    /// Check `arguments` against the schema and deserialize them.
    pub fn parse(&self, arguments: Value) -> Result<T::Input, ToolError> {
        // Hosts may omit arguments entirely for tools without parameters
        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        let problems: Vec<String> = self
            .validator
            .iter_errors(&arguments)
            .map(|e| e.to_string())
            .collect();
        if !problems.is_empty() {
            return Err(ToolError::validation(problems.join("; ")));
        }

        serde_json::from_value(arguments).map_err(|e| ToolError::validation(e.to_string()))
    }
}

#[async_trait]
impl<T: KitTool> DynTool for SchemaTool<T> {
    fn name(&self) -> &str {
        self.tool.name()
    }

    fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.tool.name().to_string(),
            description: self.tool.description().to_string(),
            input_schema: self.schema.clone(),
        }
    }

    async fn invoke(&self, client: &KitClient, arguments: Value) -> Result<Value, ToolError> {
        let input = self.parse(arguments)?;
        Ok(self.tool.call(client, input).await?)
    }
}

/// JSON Schema of an input type, as advertised to hosts.
pub fn input_schema<I: JsonSchema>() -> Result<Value, ToolError> {
    let mut schema = serde_json::to_value(schemars::schema_for!(I))?;
    if let Value::Object(map) = &mut schema {
        // Hosts key tools by name; the Rust type name is noise
        map.remove("title");
    }
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct EchoInput {
        /// Where to send it
        #[schemars(email)]
        email: String,
        /// How many times
        #[serde(default)]
        times: Option<u32>,
    }

    struct Echo;

    #[async_trait]
    impl KitTool for Echo {
        type Input = EchoInput;

        fn name(&self) -> &'static str {
            "echo"
        }

        fn description(&self) -> &'static str {
            "Echo the email back"
        }

        async fn call(&self, _client: &KitClient, input: EchoInput) -> kit_client::Result<Value> {
            Ok(json!({"email": input.email, "times": input.times}))
        }
    }

    fn client() -> KitClient {
        KitClient::new("test-key").unwrap()
    }

    #[test]
    fn test_schema_is_object_with_required_fields() {
        let tool = SchemaTool::new(Echo).unwrap();
        let info = tool.info();
        assert_eq!(info.name, "echo");
        assert_eq!(info.input_schema["type"], "object");
        assert_eq!(info.input_schema["required"], json!(["email"]));
        assert_eq!(
            info.input_schema["properties"]["email"]["format"],
            "email"
        );
        assert!(info.input_schema.get("title").is_none());
    }

    #[test]
    fn test_parse_accepts_valid_arguments() {
        let tool = SchemaTool::new(Echo).unwrap();
        let input = tool.parse(json!({"email": "a@b.com", "times": 2})).unwrap();
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.times, Some(2));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let tool = SchemaTool::new(Echo).unwrap();
        let input = tool.parse(json!({"email": "a@b.com", "extra": true})).unwrap();
        assert_eq!(input.times, None);
    }

    #[test]
    fn test_parse_rejects_bad_email() {
        let tool = SchemaTool::new(Echo).unwrap();
        let err = tool.parse(json!({"email": "not-an-email"})).unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[test]
    fn test_parse_rejects_missing_and_mistyped() {
        let tool = SchemaTool::new(Echo).unwrap();
        assert!(matches!(
            tool.parse(Value::Null).unwrap_err(),
            ToolError::Validation(_)
        ));
        assert!(matches!(
            tool.parse(json!({"email": "a@b.com", "times": "two"})).unwrap_err(),
            ToolError::Validation(_)
        ));
        assert!(matches!(
            tool.parse(json!(["a@b.com"])).unwrap_err(),
            ToolError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_invoke_validates_before_calling() {
        let tool = SchemaTool::new(Echo).unwrap();
        let value = tool
            .invoke(&client(), json!({"email": "a@b.com"}))
            .await
            .unwrap();
        assert_eq!(value, json!({"email": "a@b.com", "times": null}));

        let err = tool.invoke(&client(), json!({})).await.unwrap_err();
        assert!(err.to_string().starts_with("invalid arguments:"));
    }
}
