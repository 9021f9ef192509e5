use keywordsai::{
    KeywordsAiNode,
    api::KeywordsAiAdapterBuilder,
    options::LoadOptionsMethod,
    parameters::{NodeParameters, VersionSelector},
};

/// # Option loaders – what the editor dropdowns show
///
/// Walks the three dependent dropdowns of a managed-prompt item: prompts,
/// then the versions of the first prompt, then the variables of its
/// `latest` version.
///
/// ```bash
/// export KEYWORDSAI_API_KEY=…
/// cargo run -p keywordsai --example load_options
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let node = KeywordsAiNode::new(KeywordsAiAdapterBuilder::new_from_env().build()?);

    let mut current = NodeParameters::default();
    let prompts = node
        .load_options(LoadOptionsMethod::GetPrompts, &current)
        .await?;
    for prompt in &prompts {
        println!("prompt  {:<40} {}", prompt.name, prompt.value);
    }

    let Some(first) = prompts.first() else {
        println!("no prompts on this account");
        return Ok(());
    };
    current.prompt_id = first.value.to_string();

    for version in node
        .load_options(LoadOptionsMethod::GetVersions, &current)
        .await?
    {
        println!("version {:<40} {}", version.name, version.value);
    }

    current.version = Some(VersionSelector::latest());
    for variable in node
        .load_options(LoadOptionsMethod::GetVariables, &current)
        .await?
    {
        println!("variable {}", variable.name);
    }

    Ok(())
}
