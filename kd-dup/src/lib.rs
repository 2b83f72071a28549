#![cfg_attr(coverage, feature(coverage_attribute))]
mod duplicators;
mod objects;
mod overrides;
mod registry;
mod session;

pub use crate::duplicators::{
    DeploymentDuplicator,
    Duplicator,
    PodDuplicator,
    StatefulSetDuplicator,
};
pub use crate::objects::{
    DuplicableObject,
    DuplicateHandle,
    DuplicateKind,
    DuplicateOpts,
    DuplicatedObject,
};
pub use crate::overrides::SpecOverrider;
pub use crate::registry::DuplicateRegistry;
pub use crate::session::{
    Confirmer,
    KubectlShellRunner,
    ShellRunner,
    ShellSession,
    StdinConfirmer,
    wait_for_pod_ready,
};

#[cfg(test)]
mod tests;
