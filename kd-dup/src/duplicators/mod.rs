pub(crate) mod deployment;
pub(crate) mod pod;
pub(crate) mod statefulset;

pub use deployment::DeploymentDuplicator;
pub use pod::PodDuplicator;
pub use statefulset::StatefulSetDuplicator;

use async_trait::async_trait;
use kd_core::errors::*;
use kd_core::k8s::{
    build_duplicate_meta,
    duplicate_name,
    format_label_selector,
};
use kd_core::prelude::*;
use kube::api::ListParams;

use crate::objects::*;
use crate::overrides::SpecOverrider;
use crate::session::ShellSession;

// The one capability the command layer needs from each kind-specific
// duplicator: turn a reference to a live object into a labeled, standalone
// clone.
#[async_trait]
pub trait Duplicator {
    async fn duplicate(&self, obj: &DuplicableObject, opts: &DuplicateOpts) -> EmptyResult;
}

// After creating a Deployment or StatefulSet clone, find a pod it owns by
// matching its selector. This takes the first result, which can race with
// stale or terminating pods left over from a previous attempt.
pub(crate) async fn get_owned_pod(
    client: kube::Client,
    namespace: &str,
    selector: &metav1::LabelSelector,
) -> anyhow::Result<corev1::Pod> {
    let selector_str = format_label_selector(selector);
    let pod_api: kube::Api<corev1::Pod> = kube::Api::namespaced(client, namespace);
    let pods = pod_api.list(&ListParams::default().labels(&selector_str)).await?;

    pods.items
        .into_iter()
        .next()
        .ok_or_else(|| DuplicationError::no_owned_pods(&selector_str))
}
