use rmcp::handler::server::tool::{ToolCallContext, ToolRouter};
use rmcp::model::{CallToolResult, Content, ErrorCode, JsonObject, Tool};
use rmcp::ErrorData;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::schemas::ListFeaturesRequest;
use super::QuickbaseService;
use crate::error::ToolError;

const RMCP_DECODE_PREFIX: &str = "failed to deserialize parameters: ";

/// Wraps the generated router so argument decode failures come back as an in-band error result
/// (`Invalid parameters: ...`) instead of a JSON-RPC error.
#[derive(Clone)]
pub(super) struct ToolRouterWithDecodeErrors<S> {
    inner: ToolRouter<S>,
}

impl<S> ToolRouterWithDecodeErrors<S>
where
    S: Send + Sync + 'static,
{
    pub(super) fn new(inner: ToolRouter<S>) -> Self {
        Self { inner }
    }

    pub(super) fn list_all(&self) -> Vec<Tool> {
        self.inner.list_all()
    }
}

impl ToolRouterWithDecodeErrors<QuickbaseService> {
    pub(super) async fn call(
        &self,
        mut context: ToolCallContext<'_, QuickbaseService>,
    ) -> Result<CallToolResult, ErrorData> {
        let tool_name = context.name.to_string();

        // list_features never rejects its arguments; anything undecodable means "all".
        if tool_name == "list_features"
            && !decodes_as::<ListFeaturesRequest>(context.arguments.as_ref())
        {
            log::debug!("list_features: ignoring undecodable arguments");
            context.arguments = None;
        }

        match self.inner.call(context).await {
            Ok(result) => Ok(result),
            Err(err)
                if err.code == ErrorCode::INVALID_PARAMS
                    && self.inner.map.contains_key(tool_name.as_str()) =>
            {
                let message = self.invalid_parameters(&tool_name, &err).to_string();
                log::debug!("{tool_name}: {message}");
                Ok(CallToolResult::error(vec![Content::text(message)]))
            }
            Err(err) => Err(err),
        }
    }

    fn invalid_parameters(&self, tool_name: &str, err: &ErrorData) -> ToolError {
        let message: &str = &err.message;
        let detail = message
            .strip_prefix(RMCP_DECODE_PREFIX)
            .unwrap_or(message);

        let mut detail = detail.to_string();
        if detail.contains("missing field `") {
            let required = self.required_fields(tool_name);
            if !required.is_empty() {
                detail.push_str(&format!(" (required: {})", required.join(", ")));
            }
        }
        ToolError::InvalidParameters(detail)
    }

    fn required_fields(&self, tool_name: &str) -> Vec<String> {
        self.inner
            .map
            .get(tool_name)
            .and_then(|route| route.attr.input_schema.get("required"))
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn decodes_as<T: DeserializeOwned>(args: Option<&JsonObject>) -> bool {
    let value = Value::Object(args.cloned().unwrap_or_default());
    serde_json::from_value::<T>(value).is_ok()
}
