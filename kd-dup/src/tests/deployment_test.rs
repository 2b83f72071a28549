use super::*;

fn deploy_path(name: &str) -> String {
    format!("/apis/apps/v1/namespaces/{TEST_NAMESPACE}/deployments/{name}")
}

#[rstest]
fn test_build_duplicate_deployment(test_deployment: appsv1::Deployment) {
    let new_deploy = build_duplicate_deployment(&test_deployment, TEST_NAMESPACE, "the-deployment-kubedup");

    assert_eq!(new_deploy.name_any(), "the-deployment-kubedup");
    assert!(new_deploy.is_duplicated());
    assert_eq!(new_deploy.spec, test_deployment.spec);
    assert_eq!(new_deploy.metadata.owner_references, None);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_duplicate_deployment(test_deployment: appsv1::Deployment) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let new_name = duplicate_name(TEST_DEPLOYMENT);
    let created = build_duplicate_deployment(&test_deployment, TEST_NAMESPACE, &new_name);
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(deploy_path(TEST_DEPLOYMENT));
            then.json_body_obj(&test_deployment);
        })
        .handle(move |when, then| {
            when.method(POST)
                .path(format!("/apis/apps/v1/namespaces/{TEST_NAMESPACE}/deployments"));
            then.status(201).json_body_obj(&created);
        })
        .build();

    let duplicator = DeploymentDuplicator::new(client);
    duplicator
        .duplicate(&DuplicableObject::new(TEST_DEPLOYMENT, TEST_NAMESPACE), &Default::default())
        .await
        .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_duplicate_deployment_already_duplicated(test_deployment: appsv1::Deployment) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let mut deploy = test_deployment;
    deploy
        .metadata
        .labels
        .get_or_insert_default()
        .insert(DUPLICATED_LABEL_KEY.into(), DUPLICATED_LABEL_VALUE.into());
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(deploy_path(TEST_DEPLOYMENT));
            then.json_body_obj(&deploy);
        })
        .build();

    let duplicator = DeploymentDuplicator::new(client);
    let err = duplicator
        .duplicate(&DuplicableObject::new(TEST_DEPLOYMENT, TEST_NAMESPACE), &Default::default())
        .await
        .unwrap_err()
        .downcast::<DuplicationError>()
        .unwrap();

    fake_apiserver.assert();
    assert!(matches!(err, DuplicationError::AlreadyDuplicated(..)));
}

// End-to-end interactive flow: create the clone, find its pod, run the
// (fake) shell, confirm, and delete the clone
#[rstest]
#[traced_test]
#[tokio::test]
async fn test_duplicate_deployment_interactive(
    test_deployment: appsv1::Deployment,
    test_ready_pod: corev1::Pod,
) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let new_name = duplicate_name(TEST_DEPLOYMENT);
    let created = build_duplicate_deployment(&test_deployment, TEST_NAMESPACE, &new_name);
    let owned_pods = list_body("PodList", vec![serde_json::to_value(&test_ready_pod).unwrap()]);
    let watched_pods = owned_pods.clone();
    let delete_path = deploy_path(&new_name);
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(deploy_path(TEST_DEPLOYMENT));
            then.json_body_obj(&test_deployment);
        })
        .handle(move |when, then| {
            when.method(POST)
                .path(format!("/apis/apps/v1/namespaces/{TEST_NAMESPACE}/deployments"));
            then.status(201).json_body_obj(&created);
        })
        .handle(move |when, then| {
            when.method(GET)
                .path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"))
                .query_param("labelSelector", "app=nginx");
            then.json_body(owned_pods.clone());
        })
        .handle(move |when, then| {
            when.method(GET)
                .path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"))
                .query_param_exists("fieldSelector");
            then.json_body(watched_pods.clone());
        })
        .handle(move |when, then| {
            when.method(DELETE).path(&delete_path);
            then.json_body(status_ok());
        })
        .build();

    let session = ShellSession::with_parts(
        client.clone(),
        Box::new(FakeShellRunner { fail: false }),
        Box::new(FakeConfirmer { answer: true }),
    );
    let duplicator = DeploymentDuplicator::with_session(client, session);
    let opts = DuplicateOpts {
        start_interactive_shell: true,
        ..Default::default()
    };
    duplicator
        .duplicate(&DuplicableObject::new(TEST_DEPLOYMENT, TEST_NAMESPACE), &opts)
        .await
        .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_duplicate_deployment_no_owned_pods(test_deployment: appsv1::Deployment) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let new_name = duplicate_name(TEST_DEPLOYMENT);
    let created = build_duplicate_deployment(&test_deployment, TEST_NAMESPACE, &new_name);
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(deploy_path(TEST_DEPLOYMENT));
            then.json_body_obj(&test_deployment);
        })
        .handle(move |when, then| {
            when.method(POST)
                .path(format!("/apis/apps/v1/namespaces/{TEST_NAMESPACE}/deployments"));
            then.status(201).json_body_obj(&created);
        })
        .handle(move |when, then| {
            when.method(GET)
                .path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"))
                .query_param("labelSelector", "app=nginx");
            then.json_body(list_body("PodList", vec![]));
        })
        .build();

    let duplicator = DeploymentDuplicator::new(client);
    let opts = DuplicateOpts {
        start_interactive_shell: true,
        ..Default::default()
    };
    let err = duplicator
        .duplicate(&DuplicableObject::new(TEST_DEPLOYMENT, TEST_NAMESPACE), &opts)
        .await
        .unwrap_err()
        .downcast::<DuplicationError>()
        .unwrap();

    fake_apiserver.assert();
    assert!(matches!(err, DuplicationError::NoOwnedPods(..)));
}
