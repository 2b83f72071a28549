use std::io::{
    self,
    BufRead,
    Write,
};

use async_trait::async_trait;
use futures::{
    StreamExt,
    TryStreamExt,
};
use kd_core::errors::*;
use kd_core::prelude::*;
use kube::runtime::WatchStreamExt;
use kube::runtime::watcher::{
    Config,
    watcher,
};
use tokio::process::Command;
use tokio::time::{
    Duration,
    timeout,
};

use crate::objects::{
    DuplicateHandle,
    DuplicationError,
};

// Attaching the interactive shell is delegated to an external process so all
// the terminal handling stays with kubectl.
#[async_trait]
pub trait ShellRunner {
    async fn run_shell(&self, namespace: &str, pod_name: &str) -> EmptyResult;
}

pub struct KubectlShellRunner;

#[async_trait]
impl ShellRunner for KubectlShellRunner {
    async fn run_shell(&self, namespace: &str, pod_name: &str) -> EmptyResult {
        let status = Command::new("kubectl")
            .args(["exec", "-it", pod_name, "-n", namespace, "--", DEFAULT_SHELL])
            .status()
            .await?;
        if !status.success() {
            bail!("shell exited with {status}");
        }
        Ok(())
    }
}

pub trait Confirmer {
    fn confirm(&self, prompt: &str, default_yes: bool) -> anyhow::Result<bool>;
}

pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str, default_yes: bool) -> anyhow::Result<bool> {
        let choices = if default_yes { "[Y/n]" } else { "[y/N]" };
        print!("{prompt} {choices} ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(match answer.trim().to_lowercase().as_str() {
            "" => default_yes,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

// Drives a freshly created duplicate from creation through an interactive
// shell and, once the shell exits cleanly, an optional deletion.
pub struct ShellSession {
    client: kube::Client,
    runner: Box<dyn ShellRunner + Send + Sync>,
    confirmer: Box<dyn Confirmer + Send + Sync>,
}

impl ShellSession {
    pub fn new(client: kube::Client) -> ShellSession {
        ShellSession::with_parts(client, Box::new(KubectlShellRunner), Box::new(StdinConfirmer))
    }

    pub fn with_parts(
        client: kube::Client,
        runner: Box<dyn ShellRunner + Send + Sync>,
        confirmer: Box<dyn Confirmer + Send + Sync>,
    ) -> ShellSession {
        ShellSession { client, runner, confirmer }
    }

    pub async fn run(&self, pod: &corev1::Pod, handle: &DuplicateHandle) -> EmptyResult {
        let namespace = pod.namespace().unwrap_or_else(|| handle.namespace.clone());
        let pod_name = pod.name_any();

        println!("waiting for the duplicated pod {pod_name:?} to be ready...");
        wait_for_pod_ready(
            self.client.clone(),
            &namespace,
            &pod_name,
            Duration::from_secs(POD_READY_TIMEOUT_SECONDS),
        )
        .await?;

        println!("Pod is ready, launching shell...");
        self.runner
            .run_shell(&namespace, &pod_name)
            .await
            .map_err(|err| err.context("error during shell session"))?;

        if self.confirmer.confirm("Do you want to delete the duplicated resource?", true)? {
            handle.delete(self.client.clone()).await?;
            println!("duplicated resource deleted.");
        } else {
            println!("duplicated resource retained.");
        }

        Ok(())
    }
}

// Watch the pod by name until its Ready condition goes true; the timeout
// bounds the whole wait, and hitting it leaves the clone in place.
pub async fn wait_for_pod_ready(
    client: kube::Client,
    namespace: &str,
    name: &str,
    max_wait: Duration,
) -> EmptyResult {
    let pod_api: kube::Api<corev1::Pod> = kube::Api::namespaced(client, namespace);
    let watch_config = Config::default().fields(&format!("metadata.name={name}"));
    let mut stream = watcher(pod_api, watch_config).applied_objects().boxed();

    timeout(max_wait, async {
        while let Some(pod) = stream.try_next().await? {
            if pod.is_ready() {
                return Ok(());
            }
        }
        bail!("pod watch stream for {name} ended unexpectedly");
    })
    .await
    .unwrap_or_else(|_| Err(DuplicationError::pod_not_ready(name)))
}
