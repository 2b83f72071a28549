use lazy_static::lazy_static;

use crate::k8s::GVK;

// Marker label attached to every clone; the only durable record that an
// object is a duplicate.
pub const DUPLICATED_LABEL_KEY: &str = "kubedup.io/duplicated";
pub const DUPLICATED_LABEL_VALUE: &str = "true";

// Clone naming
pub const DUPLICATE_NAME_SUFFIX: &str = "-kubedup";

// Defaults for the container override, in comma-separated CLI flag form; the
// trap loop keeps the clone alive until somebody attaches a shell to it.
pub const DEFAULT_COMMAND_OVERRIDE: &str = "/bin/sh";
pub const DEFAULT_ARGS_OVERRIDE: &str = "-c,trap 'exit 0' INT TERM KILL; while true; do sleep 1; done";
pub const DEFAULT_SHELL: &str = "/bin/sh";

// Timing
pub const POD_READY_TIMEOUT_SECONDS: u64 = 60;

// Kinds
pub const POD_KIND: &str = "Pod";
pub const DEPLOYMENT_KIND: &str = "Deployment";
pub const STATEFULSET_KIND: &str = "StatefulSet";

// TODO lift this restriction once duplication works for arbitrary workload kinds
pub const DUPLICABLE_KINDS: &[&str] = &[POD_KIND, DEPLOYMENT_KIND, STATEFULSET_KIND];

// Built-in GVKs
lazy_static! {
    pub static ref POD_GVK: GVK = GVK::new("", "v1", POD_KIND);
    pub static ref DEPL_GVK: GVK = GVK::new("apps", "v1", DEPLOYMENT_KIND);
    pub static ref STS_GVK: GVK = GVK::new("apps", "v1", STATEFULSET_KIND);
}
