use tokio::time::Duration;

use super::*;

fn pods_path() -> String {
    format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods")
}

fn handle_pod_watch<'a>(fake_apiserver: &'a mut MockServerBuilder, pod: &corev1::Pod) -> &'a mut MockServerBuilder {
    let body = list_body("PodList", vec![serde_json::to_value(pod).unwrap()]);
    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(pods_path()).query_param_exists("fieldSelector");
        then.json_body(body.clone());
    })
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_pod_ready(test_ready_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_pod_watch(&mut fake_apiserver, &test_ready_pod).build();

    wait_for_pod_ready(client, TEST_NAMESPACE, TEST_POD, Duration::from_secs(5))
        .await
        .unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_wait_for_pod_ready_timeout(test_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_pod_watch(&mut fake_apiserver, &test_pod).build();

    let err = wait_for_pod_ready(client, TEST_NAMESPACE, TEST_POD, Duration::from_millis(300))
        .await
        .unwrap_err()
        .downcast::<DuplicationError>()
        .unwrap();
    assert!(matches!(err, DuplicationError::PodNotReady(..)));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_session_deletes_on_confirm(test_ready_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_pod_watch(&mut fake_apiserver, &test_ready_pod)
        .handle(|when, then| {
            when.method(DELETE).path(format!("{}/{TEST_POD}", pods_path()));
            then.json_body(status_ok());
        })
        .build();

    let session = ShellSession::with_parts(
        client,
        Box::new(FakeShellRunner { fail: false }),
        Box::new(FakeConfirmer { answer: true }),
    );
    let handle = DuplicateHandle::new(DuplicateKind::Pod, TEST_NAMESPACE, TEST_POD);
    session.run(&test_ready_pod, &handle).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_session_retains_on_decline(test_ready_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_pod_watch(&mut fake_apiserver, &test_ready_pod).build();

    let session = ShellSession::with_parts(
        client,
        Box::new(FakeShellRunner { fail: false }),
        Box::new(FakeConfirmer { answer: false }),
    );
    let handle = DuplicateHandle::new(DuplicateKind::Pod, TEST_NAMESPACE, TEST_POD);
    session.run(&test_ready_pod, &handle).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_session_shell_failure_skips_prompt(test_ready_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_pod_watch(&mut fake_apiserver, &test_ready_pod).build();

    let session = ShellSession::with_parts(
        client,
        Box::new(FakeShellRunner { fail: true }),
        Box::new(PanicConfirmer),
    );
    let handle = DuplicateHandle::new(DuplicateKind::Pod, TEST_NAMESPACE, TEST_POD);
    let err = session.run(&test_ready_pod, &handle).await.unwrap_err();
    assert!(err.to_string().contains("error during shell session"));
}

#[rstest]
#[case::pod(DuplicateKind::Pod, "pods")]
#[case::deployment(DuplicateKind::Deployment, "deployments")]
#[case::statefulset(DuplicateKind::StatefulSet, "statefulsets")]
#[traced_test]
#[tokio::test]
async fn test_handle_delete_dispatch(#[case] kind: DuplicateKind, #[case] resource: &str) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let prefix = if resource == "pods" { "/api/v1" } else { "/apis/apps/v1" };
    let path = format!("{prefix}/namespaces/{TEST_NAMESPACE}/{resource}/dup");
    fake_apiserver
        .handle(move |when, then| {
            when.method(DELETE).path(&path);
            then.json_body(status_ok());
        })
        .build();

    let handle = DuplicateHandle::new(kind, TEST_NAMESPACE, "dup");
    handle.delete(client).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]
fn test_kind_lookup() {
    assert_eq!(DuplicateKind::try_from_kind("Pod").unwrap(), DuplicateKind::Pod);
    assert_eq!(DuplicateKind::try_from_kind("Deployment").unwrap(), DuplicateKind::Deployment);
    assert_eq!(DuplicateKind::try_from_kind("StatefulSet").unwrap(), DuplicateKind::StatefulSet);

    let err = DuplicateKind::try_from_kind("DaemonSet")
        .unwrap_err()
        .downcast::<DuplicationError>()
        .unwrap();
    assert!(matches!(err, DuplicationError::UnsupportedKind(..)));
}
