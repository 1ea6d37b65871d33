fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let repo: model_registry_client::Repo = args
        .next()
        .unwrap_or_else(|| "localhost:5000/andreas/hello-world".into())
        .parse()?;
    let id = args.next().unwrap_or_else(|| "latest".into());

    let model = model_registry_client::fetch_model(&repo, &id)?;
    eprintln!("OK: {} from {}", model.id, repo);
    eprintln!(
        "Model has {} artifacts and {} inputs",
        model.artifacts.len(),
        model.run_arguments.len()
    );

    Ok(())
}
