use std::fmt;

use kd_core::errors::*;
use kd_core::k8s::GVK;
use kd_core::prelude::*;
use tracing::debug;

err_impl! {DuplicationError,
    #[error("{0} is already duplicated")]
    AlreadyDuplicated(String),

    #[error("no pods found with selector {0}")]
    NoOwnedPods(String),

    #[error("pod {0} not ready within timeout")]
    PodNotReady(String),

    #[error("unsupported duplicated object kind: {0}")]
    UnsupportedKind(String),
}

// A resource eligible for duplication, picked from a list response or named
// directly on the command line; the kind is implied by the API it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicableObject {
    pub name: String,
    pub namespace: String,
}

impl DuplicableObject {
    pub fn new(name: &str, namespace: &str) -> DuplicableObject {
        DuplicableObject { name: name.into(), namespace: namespace.into() }
    }
}

// A clone discovered in-cluster via the marker label; there is no local
// store, so one of these is always derived from a live API read.
#[derive(Clone, Debug)]
pub struct DuplicatedObject {
    pub name: String,
    pub namespace: String,
    pub gvk: GVK,
    pub creation_timestamp: Option<metav1::Time>,
}

// Container and probe overrides applied to every container of a clone. When
// `command` is set the replacement is wholesale: an unset args/probe field
// clears the corresponding container field rather than leaving it alone.
#[derive(Clone, Debug, Default)]
pub struct DuplicateOpts {
    pub command: Option<Vec<String>>,
    pub args: Option<Vec<String>>,
    pub readiness_probe: Option<corev1::Probe>,
    pub liveness_probe: Option<corev1::Probe>,
    pub startup_probe: Option<corev1::Probe>,
    pub start_interactive_shell: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DuplicateKind {
    Pod,
    Deployment,
    StatefulSet,
}

impl DuplicateKind {
    pub fn try_from_kind(kind: &str) -> anyhow::Result<DuplicateKind> {
        match kind {
            POD_KIND => Ok(DuplicateKind::Pod),
            DEPLOYMENT_KIND => Ok(DuplicateKind::Deployment),
            STATEFULSET_KIND => Ok(DuplicateKind::StatefulSet),
            other => bail!(DuplicationError::unsupported_kind(other)),
        }
    }
}

impl fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DuplicateKind::Pod => f.write_str(POD_KIND),
            DuplicateKind::Deployment => f.write_str(DEPLOYMENT_KIND),
            DuplicateKind::StatefulSet => f.write_str(STATEFULSET_KIND),
        }
    }
}

// Identity of a freshly created clone, tagged with its kind so the session
// controller can dispatch the right typed delete call without inspecting the
// runtime type of anything.
#[derive(Clone, Debug)]
pub struct DuplicateHandle {
    pub kind: DuplicateKind,
    pub namespace: String,
    pub name: String,
}

impl DuplicateHandle {
    pub fn new(kind: DuplicateKind, namespace: &str, name: &str) -> DuplicateHandle {
        DuplicateHandle {
            kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub async fn delete(&self, client: kube::Client) -> EmptyResult {
        debug!("deleting {} {}/{}", self.kind, self.namespace, self.name);
        match self.kind {
            DuplicateKind::Pod => {
                let api: kube::Api<corev1::Pod> = kube::Api::namespaced(client, &self.namespace);
                api.delete(&self.name, &Default::default()).await?;
            },
            DuplicateKind::Deployment => {
                let api: kube::Api<appsv1::Deployment> = kube::Api::namespaced(client, &self.namespace);
                api.delete(&self.name, &Default::default()).await?;
            },
            DuplicateKind::StatefulSet => {
                let api: kube::Api<appsv1::StatefulSet> = kube::Api::namespaced(client, &self.namespace);
                api.delete(&self.name, &Default::default()).await?;
            },
        }
        Ok(())
    }
}
