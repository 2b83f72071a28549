use kd_core::prelude::*;
use kd_dup::{
    DuplicateRegistry,
    StatefulSetDuplicator,
};

use crate::util::{
    run_duplicate,
    OverrideFlags,
};

#[derive(clap::Args)]
pub struct Args {
    #[arg(help = "name of the StatefulSet to duplicate; prompts for a selection when omitted")]
    pub name: Option<String>,

    #[command(flatten)]
    pub overrides: OverrideFlags,
}

pub async fn cmd(args: &Args, client: kube::Client, namespace: &str) -> EmptyResult {
    let duplicator = StatefulSetDuplicator::new(client.clone());
    let mut registry = DuplicateRegistry::new(client);
    run_duplicate(
        &duplicator,
        &mut registry,
        &STS_GVK,
        "StatefulSet",
        args.name.as_deref(),
        namespace,
        &args.overrides.to_opts(),
    )
    .await
}
