use kd_core::prelude::*;
use kd_dup::{
    DeploymentDuplicator,
    DuplicateRegistry,
};

use crate::util::{
    run_duplicate,
    OverrideFlags,
};

#[derive(clap::Args)]
pub struct Args {
    #[arg(help = "name of the Deployment to duplicate; prompts for a selection when omitted")]
    pub name: Option<String>,

    #[command(flatten)]
    pub overrides: OverrideFlags,
}

pub async fn cmd(args: &Args, client: kube::Client, namespace: &str) -> EmptyResult {
    let duplicator = DeploymentDuplicator::new(client.clone());
    let mut registry = DuplicateRegistry::new(client);
    run_duplicate(
        &duplicator,
        &mut registry,
        &DEPL_GVK,
        "Deployment",
        args.name.as_deref(),
        namespace,
        &args.overrides.to_opts(),
    )
    .await
}
