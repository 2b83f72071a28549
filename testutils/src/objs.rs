use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kd_core::macros::*;
use kd_core::prelude::*;
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

#[fixture]
pub fn test_pod_spec() -> corev1::PodSpec {
    corev1::PodSpec {
        containers: vec![corev1::Container {
            name: "nginx".into(),
            image: Some("nginx:1.27".into()),
            command: Some(vec!["nginx".into()]),
            args: Some(vec!["-g".into(), "daemon off;".into()]),
            readiness_probe: Some(test_probe()),
            liveness_probe: Some(test_probe()),
            ..Default::default()
        }],
        node_name: Some(TEST_NODE.into()),
        ..Default::default()
    }
}

pub fn test_probe() -> corev1::Probe {
    corev1::Probe {
        tcp_socket: Some(corev1::TCPSocketAction {
            port: IntOrString::Int(80),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn pvc_volume(claim_name: &str) -> corev1::Volume {
    corev1::Volume {
        name: "data".into(),
        persistent_volume_claim: Some(corev1::PersistentVolumeClaimVolumeSource {
            claim_name: claim_name.into(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[fixture]
pub fn test_pod(#[default(TEST_POD)] name: &str) -> corev1::Pod {
    corev1::Pod {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            namespace: Some(TEST_NAMESPACE.into()),
            labels: klabel!("app" => "nginx"),
            ..Default::default()
        },
        spec: Some(test_pod_spec()),
        ..Default::default()
    }
}

#[fixture]
pub fn test_ready_pod(test_pod: corev1::Pod) -> corev1::Pod {
    let mut pod = test_pod;
    pod.status = Some(corev1::PodStatus {
        conditions: Some(vec![corev1::PodCondition {
            type_: "Ready".into(),
            status: "True".into(),
            ..Default::default()
        }]),
        ..Default::default()
    });
    pod
}

#[fixture]
pub fn test_pvc(#[default("ReadWriteOnce")] access_mode: &str) -> corev1::PersistentVolumeClaim {
    corev1::PersistentVolumeClaim {
        metadata: metav1::ObjectMeta {
            name: Some(TEST_PVC.into()),
            namespace: Some(TEST_NAMESPACE.into()),
            ..Default::default()
        },
        spec: Some(corev1::PersistentVolumeClaimSpec {
            access_modes: Some(vec![access_mode.into()]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[fixture]
pub fn test_deployment(#[default(TEST_DEPLOYMENT)] name: &str) -> appsv1::Deployment {
    appsv1::Deployment {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            namespace: Some(TEST_NAMESPACE.into()),
            ..Default::default()
        },
        spec: Some(appsv1::DeploymentSpec {
            replicas: Some(1),
            selector: metav1::LabelSelector {
                match_labels: klabel!("app" => "nginx"),
                ..Default::default()
            },
            template: corev1::PodTemplateSpec {
                metadata: Some(metav1::ObjectMeta {
                    labels: klabel!("app" => "nginx"),
                    ..Default::default()
                }),
                spec: Some(test_pod_spec()),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[fixture]
pub fn test_statefulset(#[default(TEST_STATEFULSET)] name: &str) -> appsv1::StatefulSet {
    appsv1::StatefulSet {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            namespace: Some(TEST_NAMESPACE.into()),
            ..Default::default()
        },
        spec: Some(appsv1::StatefulSetSpec {
            replicas: Some(1),
            selector: metav1::LabelSelector {
                match_labels: klabel!("app" => "nginx"),
                ..Default::default()
            },
            service_name: Some("nginx".into()),
            template: corev1::PodTemplateSpec {
                metadata: Some(metav1::ObjectMeta {
                    labels: klabel!("app" => "nginx"),
                    ..Default::default()
                }),
                spec: Some(test_pod_spec()),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

// Wrap serialized objects in the list envelope the apiserver returns
pub fn list_body(kind: &str, items: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "kind": kind,
        "apiVersion": "v1",
        "metadata": {"resourceVersion": "1"},
        "items": items,
    })
}
