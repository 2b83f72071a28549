use kube::Resource;

use super::*;
use crate::macros::*;
use crate::prelude::*;

pub fn duplicate_name(source_name: &str) -> String {
    format!("{source_name}{DUPLICATE_NAME_SUFFIX}")
}

// The clone gets a fresh metadata block: only name, namespace, and the marker
// label survive, so the apiserver treats it as a brand-new standalone object
// (no owner refs, no resource version, no scheduling history).
pub fn build_duplicate_meta(namespace: &str, name: &str) -> metav1::ObjectMeta {
    metav1::ObjectMeta {
        name: Some(name.into()),
        namespace: Some(namespace.into()),
        labels: klabel!(DUPLICATED_LABEL_KEY => DUPLICATED_LABEL_VALUE),
        ..Default::default()
    }
}

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any().clone(),
        }
    }

    fn is_duplicated(&self) -> bool {
        self.labels()
            .get(DUPLICATED_LABEL_KEY)
            .is_some_and(|v| v == DUPLICATED_LABEL_VALUE)
    }
}
