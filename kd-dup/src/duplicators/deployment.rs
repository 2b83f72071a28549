use super::*;

// Duplicates a Deployment; the clone's pod template gets the overrides, and
// the shell target is one of the pods the clone spins up.
pub struct DeploymentDuplicator {
    client: kube::Client,
    session: ShellSession,
}

impl DeploymentDuplicator {
    pub fn new(client: kube::Client) -> DeploymentDuplicator {
        let session = ShellSession::new(client.clone());
        DeploymentDuplicator { client, session }
    }

    pub fn with_session(client: kube::Client, session: ShellSession) -> DeploymentDuplicator {
        DeploymentDuplicator { client, session }
    }
}

pub(crate) fn build_duplicate_deployment(
    source: &appsv1::Deployment,
    namespace: &str,
    new_name: &str,
) -> appsv1::Deployment {
    appsv1::Deployment {
        metadata: build_duplicate_meta(namespace, new_name),
        spec: source.spec.clone(),
        ..Default::default()
    }
}

#[async_trait]
impl Duplicator for DeploymentDuplicator {
    async fn duplicate(&self, obj: &DuplicableObject, opts: &DuplicateOpts) -> EmptyResult {
        println!("duplicating deployment {}", obj.name);

        let deploy_api: kube::Api<appsv1::Deployment> =
            kube::Api::namespaced(self.client.clone(), &obj.namespace);
        let deploy = deploy_api.get(&obj.name).await?;
        if deploy.is_duplicated() {
            bail!(DuplicationError::already_duplicated(&deploy.namespaced_name()));
        }

        let new_name = duplicate_name(&obj.name);
        let mut new_deploy = build_duplicate_deployment(&deploy, &obj.namespace, &new_name);

        let overrider = SpecOverrider::new(self.client.clone(), opts.clone());
        if let Some(spec) = new_deploy.spec.as_mut().and_then(|s| s.template.spec.as_mut()) {
            overrider.override_spec(&obj.namespace, spec).await?;
        }

        let created = deploy_api.create(&Default::default(), &new_deploy).await?;
        println!("deployment {:?} duplicated in {:?}", obj.name, new_name);

        if opts.start_interactive_shell {
            let selector = created.spec.as_ref().map(|s| s.selector.clone()).unwrap_or_default();
            let pod = get_owned_pod(self.client.clone(), &obj.namespace, &selector).await?;
            let handle = DuplicateHandle::new(DuplicateKind::Deployment, &obj.namespace, &new_name);
            return self.session.run(&pod, &handle).await;
        }

        Ok(())
    }
}
