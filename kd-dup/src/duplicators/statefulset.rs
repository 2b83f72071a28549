use super::*;

// Duplicates a StatefulSet; structurally the same flow as the Deployment
// duplicator, just against the statefulsets endpoint.
pub struct StatefulSetDuplicator {
    client: kube::Client,
    session: ShellSession,
}

impl StatefulSetDuplicator {
    pub fn new(client: kube::Client) -> StatefulSetDuplicator {
        let session = ShellSession::new(client.clone());
        StatefulSetDuplicator { client, session }
    }

    pub fn with_session(client: kube::Client, session: ShellSession) -> StatefulSetDuplicator {
        StatefulSetDuplicator { client, session }
    }
}

pub(crate) fn build_duplicate_statefulset(
    source: &appsv1::StatefulSet,
    namespace: &str,
    new_name: &str,
) -> appsv1::StatefulSet {
    appsv1::StatefulSet {
        metadata: build_duplicate_meta(namespace, new_name),
        spec: source.spec.clone(),
        ..Default::default()
    }
}

#[async_trait]
impl Duplicator for StatefulSetDuplicator {
    async fn duplicate(&self, obj: &DuplicableObject, opts: &DuplicateOpts) -> EmptyResult {
        println!("duplicating statefulset {}", obj.name);

        let sts_api: kube::Api<appsv1::StatefulSet> =
            kube::Api::namespaced(self.client.clone(), &obj.namespace);
        let sts = sts_api.get(&obj.name).await?;
        if sts.is_duplicated() {
            bail!(DuplicationError::already_duplicated(&sts.namespaced_name()));
        }

        let new_name = duplicate_name(&obj.name);
        let mut new_sts = build_duplicate_statefulset(&sts, &obj.namespace, &new_name);

        let overrider = SpecOverrider::new(self.client.clone(), opts.clone());
        if let Some(spec) = new_sts.spec.as_mut().and_then(|s| s.template.spec.as_mut()) {
            overrider.override_spec(&obj.namespace, spec).await?;
        }

        let created = sts_api.create(&Default::default(), &new_sts).await?;
        println!("statefulset {:?} duplicated in {:?}", obj.name, new_name);

        if opts.start_interactive_shell {
            let selector = created.spec.as_ref().map(|s| s.selector.clone()).unwrap_or_default();
            let pod = get_owned_pod(self.client.clone(), &obj.namespace, &selector).await?;
            let handle = DuplicateHandle::new(DuplicateKind::StatefulSet, &obj.namespace, &new_name);
            return self.session.run(&pod, &handle).await;
        }

        Ok(())
    }
}
