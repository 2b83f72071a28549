use super::*;

// Duplicates a bare Pod; the clone itself is the shell target.
pub struct PodDuplicator {
    client: kube::Client,
    session: ShellSession,
}

impl PodDuplicator {
    pub fn new(client: kube::Client) -> PodDuplicator {
        let session = ShellSession::new(client.clone());
        PodDuplicator { client, session }
    }

    pub fn with_session(client: kube::Client, session: ShellSession) -> PodDuplicator {
        PodDuplicator { client, session }
    }
}

pub(crate) fn build_duplicate_pod(source: &corev1::Pod, namespace: &str, new_name: &str) -> corev1::Pod {
    corev1::Pod {
        metadata: build_duplicate_meta(namespace, new_name),
        spec: source.spec.clone(),
        ..Default::default()
    }
}

#[async_trait]
impl Duplicator for PodDuplicator {
    async fn duplicate(&self, obj: &DuplicableObject, opts: &DuplicateOpts) -> EmptyResult {
        println!("duplicating pod {}", obj.name);

        let pod_api: kube::Api<corev1::Pod> = kube::Api::namespaced(self.client.clone(), &obj.namespace);
        let pod = pod_api.get(&obj.name).await?;
        if pod.is_duplicated() {
            bail!(DuplicationError::already_duplicated(&pod.namespaced_name()));
        }

        let new_name = duplicate_name(&obj.name);
        let mut new_pod = build_duplicate_pod(&pod, &obj.namespace, &new_name);

        let overrider = SpecOverrider::new(self.client.clone(), opts.clone());
        if let Some(spec) = new_pod.spec.as_mut() {
            overrider.override_spec(&obj.namespace, spec).await?;
        }

        let created = pod_api.create(&Default::default(), &new_pod).await?;
        println!("pod {:?} duplicated in {:?}", obj.name, new_name);

        if opts.start_interactive_shell {
            let handle = DuplicateHandle::new(DuplicateKind::Pod, &obj.namespace, &new_name);
            return self.session.run(&created, &handle).await;
        }

        Ok(())
    }
}
