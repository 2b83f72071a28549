use kd_core::prelude::*;

use crate::objects::DuplicateOpts;

// Access modes with exclusive-writer semantics; a volume bound this way can
// only be mounted on the node (or pod) it is already attached to.
const MOUNT_ONCE_ACCESS_MODES: &[&str] = &["ReadWriteOnce", "ReadWriteOncePod"];

// Applies the configured container overrides to a pod spec and relaxes its
// scheduling constraints so the clone can run standalone.
pub struct SpecOverrider {
    client: kube::Client,
    opts: DuplicateOpts,
}

impl SpecOverrider {
    pub fn new(client: kube::Client, opts: DuplicateOpts) -> SpecOverrider {
        SpecOverrider { client, opts }
    }

    // Mutates the spec in place; the only failure mode is looking up a
    // referenced PersistentVolumeClaim.
    pub async fn override_spec(&self, namespace: &str, spec: &mut corev1::PodSpec) -> EmptyResult {
        if let Some(command) = self.opts.command.as_ref().filter(|c| !c.is_empty()) {
            for container in &mut spec.containers {
                container.command = Some(command.clone());
                container.args = self.opts.args.clone();
                container.readiness_probe = self.opts.readiness_probe.clone();
                container.liveness_probe = self.opts.liveness_probe.clone();
                container.startup_probe = self.opts.startup_probe.clone();
            }
        }

        // A clone whose volume can only be mounted once has to stay on the
        // original node; otherwise the scheduler is free to place it anywhere
        if !self.has_mount_once_pvc(namespace, spec).await? {
            spec.node_name = None;
        }

        Ok(())
    }

    // Only the first PVC-backed volume is consulted
    async fn has_mount_once_pvc(&self, namespace: &str, spec: &corev1::PodSpec) -> anyhow::Result<bool> {
        let maybe_claim = spec
            .volumes
            .iter()
            .flatten()
            .find_map(|v| v.persistent_volume_claim.as_ref());
        let Some(claim) = maybe_claim else {
            return Ok(false);
        };

        let pvc_api: kube::Api<corev1::PersistentVolumeClaim> =
            kube::Api::namespaced(self.client.clone(), namespace);
        let pvc = pvc_api.get(&claim.claim_name).await?;

        Ok(pvc
            .spec
            .and_then(|s| s.access_modes)
            .unwrap_or_default()
            .iter()
            .any(|mode| MOUNT_ONCE_ACCESS_MODES.contains(&mode.as_str())))
    }
}
