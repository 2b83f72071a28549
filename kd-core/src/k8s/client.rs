use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};

// Build a kube client honoring the --kubeconfig and --context flags; with
// neither set this falls back to the standard inference chain (in-cluster
// config or the default kubeconfig location).
pub async fn new_client(kubeconfig: Option<&str>, context: Option<&str>) -> anyhow::Result<kube::Client> {
    let opts = KubeConfigOptions {
        context: context.map(String::from),
        ..Default::default()
    };
    let config = match kubeconfig {
        Some(path) => kube::Config::from_custom_kubeconfig(Kubeconfig::read_from(path)?, &opts).await?,
        None if context.is_some() => kube::Config::from_kubeconfig(&opts).await?,
        None => kube::Config::infer().await?,
    };
    Ok(kube::Client::try_from(config)?)
}
