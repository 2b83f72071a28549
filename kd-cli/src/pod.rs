use kd_core::prelude::*;
use kd_dup::{
    DuplicateRegistry,
    PodDuplicator,
};

use crate::util::{
    run_duplicate,
    OverrideFlags,
};

#[derive(clap::Args)]
pub struct Args {
    #[arg(help = "name of the Pod to duplicate; prompts for a selection when omitted")]
    pub name: Option<String>,

    #[command(flatten)]
    pub overrides: OverrideFlags,
}

pub async fn cmd(args: &Args, client: kube::Client, namespace: &str) -> EmptyResult {
    let duplicator = PodDuplicator::new(client.clone());
    let mut registry = DuplicateRegistry::new(client);
    run_duplicate(
        &duplicator,
        &mut registry,
        &POD_GVK,
        "Pod",
        args.name.as_deref(),
        namespace,
        &args.overrides.to_opts(),
    )
    .await
}
