use either::Either;
use kd_core::errors::*;
use kd_core::k8s::{
    DynamicApiSet,
    GVK,
    duplicable_list_params,
    duplicated_list_params,
};
use kd_core::prelude::*;
use kube::api::DynamicObject;
use kube::discovery::{
    Scope,
    verbs,
};
use tracing::*;

use crate::objects::{
    DuplicableObject,
    DuplicatedObject,
};

// Finds and deletes the objects kubedup created; the marker label on the
// cluster objects is the only record there is.
pub struct DuplicateRegistry {
    client: kube::Client,
    apiset: DynamicApiSet,
}

impl DuplicateRegistry {
    pub fn new(client: kube::Client) -> DuplicateRegistry {
        let apiset = DynamicApiSet::new(client.clone());
        DuplicateRegistry { client, apiset }
    }

    // Scan every API resource the cluster knows about for objects carrying
    // the marker label. Resources that aren't namespaced or can't be listed
    // are skipped; so is everything except the supported workload kinds.
    // Output order follows whatever discovery and the list calls return.
    pub async fn list_duplicated(&self, namespace: &str) -> anyhow::Result<Vec<DuplicatedObject>> {
        let discovery = kube::Discovery::new(self.client.clone()).run().await?;

        let mut objs = vec![];
        for group in discovery.groups() {
            for version in group.versions() {
                for (ar, caps) in group.versioned_resources(version) {
                    if caps.scope != Scope::Namespaced {
                        continue;
                    }
                    if !caps.supports_operation(verbs::LIST) {
                        continue;
                    }
                    if !DUPLICABLE_KINDS.contains(&ar.kind.as_str()) {
                        continue;
                    }

                    debug!("listing duplicated {} objects in {namespace}", ar.kind);
                    let api = kube::Api::<DynamicObject>::namespaced_with(self.client.clone(), namespace, &ar);
                    for obj in api.list(&duplicated_list_params()).await?.items {
                        objs.push(DuplicatedObject {
                            name: obj.name_any(),
                            namespace: obj.namespace().unwrap_or_else(|| namespace.into()),
                            gvk: GVK::new(&ar.group, &ar.version, &ar.kind),
                            creation_timestamp: obj.metadata.creation_timestamp.clone(),
                        });
                    }
                }
            }
        }
        Ok(objs)
    }

    // The inverse query: objects of the given kind that don't carry the
    // marker label and are therefore candidates for duplication.
    pub async fn list_duplicable(&mut self, gvk: &GVK, namespace: &str) -> anyhow::Result<Vec<DuplicableObject>> {
        let api = self.apiset.namespaced_api_for(gvk, namespace.into()).await?;
        let objs = api.list(&duplicable_list_params()).await?;
        Ok(objs
            .items
            .into_iter()
            .map(|obj| DuplicableObject::new(&obj.name_any(), namespace))
            .collect())
    }

    pub async fn delete(&mut self, obj: &DuplicatedObject) -> EmptyResult {
        // An unresolvable mapping is fatal to the call; we never guess at an
        // endpoint.
        let api = self
            .apiset
            .namespaced_api_for(&obj.gvk, obj.namespace.clone())
            .await
            .map_err(|err| err.context(format!("could not resolve API mapping for {}", obj.gvk)))?;

        match api.delete(&obj.name, &Default::default()).await? {
            Either::Left(_) => debug!("{} {}/{} deletion started", obj.gvk.kind, obj.namespace, obj.name),
            Either::Right(status) => debug!("{} {}/{} deleted: {status:?}", obj.gvk.kind, obj.namespace, obj.name),
        }
        Ok(())
    }
}
