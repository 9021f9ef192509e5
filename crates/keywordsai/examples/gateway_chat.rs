use keywordsai::{
    ExecutionSettings, KeywordsAiNode,
    api::KeywordsAiAdapterBuilder,
    parameters::NodeParameters,
};
use tracing_subscriber::EnvFilter;

/// # Gateway calls – running a batch of items
///
/// This example feeds two items through the node, exactly like a workflow
/// host would:
///
/// 1. a **direct gateway call** with an explicit model and conversation,
/// 2. a **managed-prompt call** whose parameter bag arrives as host JSON.
///
/// The second item references a prompt id that most accounts do not have,
/// so with `continue_on_fail` it shows up as an `{"error": …}` record
/// instead of aborting the batch.
///
/// ```bash
/// export KEYWORDSAI_API_KEY=…        # mandatory
/// RUST_LOG=keywordsai_api=debug cargo run -p keywordsai --example gateway_chat
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = KeywordsAiAdapterBuilder::new_from_env().build()?;
    backend.verify_credentials().await?;

    let node = KeywordsAiNode::new(backend)
        .with_settings(ExecutionSettings::default().with_continue_on_fail(true));

    let direct: NodeParameters = serde_json::from_value(serde_json::json!({
        "resource": "gateway",
        "model": "gpt-4o-mini",
        "systemMessage": "You are a concise, witty assistant.",
        "messages": {"messageValues": [
            {"role": "user", "content": "Why is the Rust borrow checker important?"}
        ]},
        "additionalFields": {"customIdentifier": "example-run", "requestBreakdown": true}
    }))?;

    let managed: NodeParameters = serde_json::from_value(serde_json::json!({
        "resource": "gatewayPrompt",
        "promptId": "does-not-exist",
        "version": "latest",
        "variables": {"variableValues": [{"name": "topic", "value": "ownership"}]}
    }))?;

    let outputs = node.execute(&[direct, managed]).await?;
    for (index, output) in outputs.iter().enumerate() {
        println!("item {index}: {}", serde_json::to_string_pretty(output)?);
    }

    Ok(())
}
