#![cfg_attr(coverage, feature(coverage_attribute))]
mod cleanup;
mod deploy;
mod list;
mod pod;
mod statefulset;
mod util;

use clap::{
    crate_version,
    Parser,
    Subcommand,
};
use kd_core::k8s::new_client;
use kd_core::logging;
use kd_core::prelude::*;

#[derive(Parser)]
#[command(
    name = "kubectl-duplicate",
    bin_name = "kubectl duplicate",
    about = "duplicate Kubernetes workloads for live debugging",
    version,
    propagate_version = true
)]
struct KdCommandRoot {
    #[command(subcommand)]
    subcommand: KdSubcommand,

    #[arg(long, global = true, help = "path to the kubeconfig file to use")]
    kubeconfig: Option<String>,

    #[arg(long, global = true, help = "name of the kubeconfig context to use")]
    context: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        default_value = "default",
        help = "namespace of the resources to operate on"
    )]
    namespace: String,

    #[arg(long, global = true, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum KdSubcommand {
    #[command(about = "duplicate a Pod", visible_alias = "pods")]
    Pod(pod::Args),

    #[command(about = "duplicate a Deployment", visible_alias = "deployment")]
    Deploy(deploy::Args),

    #[command(about = "duplicate a StatefulSet", visible_alias = "statefulsets")]
    Statefulset(statefulset::Args),

    #[command(about = "show duplicated resources", visible_alias = "ls")]
    List,

    #[command(about = "clean up duplicated resources")]
    Cleanup,

    #[command(about = "kubectl-duplicate version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = KdCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    // Every subcommand except version talks to the cluster, so the client is
    // built up front from the shared flags and handed down.
    match &args.subcommand {
        KdSubcommand::Pod(pod_args) => {
            let client = new_client(args.kubeconfig.as_deref(), args.context.as_deref()).await?;
            pod::cmd(pod_args, client, &args.namespace).await
        },
        KdSubcommand::Deploy(deploy_args) => {
            let client = new_client(args.kubeconfig.as_deref(), args.context.as_deref()).await?;
            deploy::cmd(deploy_args, client, &args.namespace).await
        },
        KdSubcommand::Statefulset(sts_args) => {
            let client = new_client(args.kubeconfig.as_deref(), args.context.as_deref()).await?;
            statefulset::cmd(sts_args, client, &args.namespace).await
        },
        KdSubcommand::List => {
            let client = new_client(args.kubeconfig.as_deref(), args.context.as_deref()).await?;
            list::cmd(client, &args.namespace).await
        },
        KdSubcommand::Cleanup => {
            let client = new_client(args.kubeconfig.as_deref(), args.context.as_deref()).await?;
            cleanup::cmd(client, &args.namespace).await
        },
        KdSubcommand::Version => {
            println!("kubectl-duplicate {}", crate_version!());
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests;
