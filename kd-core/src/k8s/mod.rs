mod apiset;
mod client;
mod gvk;
mod pod_ext;
mod selectors;
mod util;

pub use apiset::*;
pub use client::*;
pub use gvk::*;
pub use selectors::*;
pub use util::*;

use crate::errors::*;
use crate::prelude::*;

err_impl! {KubernetesError,
    #[error("field not found in struct: {0}")]
    FieldNotFound(String),
}

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
    fn is_duplicated(&self) -> bool;
}

pub trait PodExt {
    fn spec(&self) -> anyhow::Result<&corev1::PodSpec>;
    fn status(&self) -> anyhow::Result<&corev1::PodStatus>;
    fn is_ready(&self) -> bool;
}

#[cfg(test)]
pub mod tests;
