use super::*;
use crate::errors::*;
use crate::prelude::*;

const POD_READY_CONDITION: &str = "Ready";
const CONDITION_TRUE: &str = "True";

// Helper functions to get references to a pod's spec and status objects,
// plus the readiness predicate the shell session waits on
impl PodExt for corev1::Pod {
    fn spec(&self) -> anyhow::Result<&corev1::PodSpec> {
        match self.spec.as_ref() {
            None => bail!(KubernetesError::field_not_found("pod spec")),
            Some(ps) => Ok(ps),
        }
    }

    fn status(&self) -> anyhow::Result<&corev1::PodStatus> {
        match self.status.as_ref() {
            None => bail!(KubernetesError::field_not_found("pod status")),
            Some(ps) => Ok(ps),
        }
    }

    fn is_ready(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.conditions.as_ref())
            .is_some_and(|conds| {
                conds
                    .iter()
                    .any(|cond| cond.type_ == POD_READY_CONDITION && cond.status == CONDITION_TRUE)
            })
    }
}
